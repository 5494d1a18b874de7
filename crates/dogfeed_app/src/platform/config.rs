use std::path::PathBuf;
use std::time::Duration;

use dogfeed_engine::FetchSettings;
use log::LevelFilter;

/// Compiled-in settings for one app session.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub fetch: FetchSettings,
    pub log_level: LevelFilter,
    pub log_path: PathBuf,
    /// Input poll interval; also paces the loading spinner.
    pub tick_interval: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fetch: FetchSettings::default(),
            log_level: LevelFilter::Info,
            log_path: PathBuf::from("./dogfeed.log"),
            tick_interval: Duration::from_millis(75),
        }
    }
}
