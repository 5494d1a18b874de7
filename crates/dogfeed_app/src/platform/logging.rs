//! Platform logging initialization for dogfeed_app.
//!
//! Failed fetches only surface here, so the log is the developer's view of
//! what the feed is doing.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{CombinedLogger, Config, ConfigBuilder, SharedLogger, WriteLogger};

/// Initialize the global logger, writing to `log_path`.
///
/// The TUI owns the terminal, so the file is the only sink. A log file that
/// cannot be created is reported on stderr and skipped; the app keeps
/// running without it.
pub fn initialize(level: LevelFilter, log_path: &Path) {
    if let Some(file_logger) = create_file_logger(level, build_config(), log_path) {
        let loggers: Vec<Box<dyn SharedLogger>> = vec![file_logger];
        let _ = CombinedLogger::init(loggers);
    }
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .add_filter_allow_str(dogfeed_logging::LOG_TARGET)
        .build()
}

fn create_file_logger(
    level: LevelFilter,
    config: Config,
    log_path: &Path,
) -> Option<Box<WriteLogger<File>>> {
    match File::create(log_path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", log_path, err);
            None
        }
    }
}
