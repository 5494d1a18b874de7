use std::io::{self, IsTerminal, Stdout};
use std::sync::mpsc;
use std::time::Duration;

use anyhow::Context;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use dogfeed_core::{update, FeedState, FeedViewModel, Msg};
use dogfeed_logging::{feed_info, feed_warn};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::input::{self, Action};
use super::logging;
use super::ui::{self, Screen};

type Term = Terminal<CrosstermBackend<Stdout>>;

pub fn run_app() -> anyhow::Result<()> {
    require_terminal(io::stdout().is_terminal())?;

    let config = AppConfig::default();
    logging::initialize(config.log_level, &config.log_path);
    feed_info!("Starting dogfeed (endpoint {})", config.fetch.endpoint);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let effects = EffectRunner::new(config.fetch.clone(), msg_tx.clone())
        .context("failed to start the fetch engine")?;

    let mut terminal = setup_terminal().context("failed to prepare the terminal")?;
    let result = FeedApp::new(effects, msg_tx, msg_rx).run(&mut terminal, config.tick_interval);
    let restored = restore_terminal(&mut terminal).context("failed to restore the terminal");

    feed_info!("Stopping dogfeed");
    result.and(restored)
}

fn require_terminal(is_terminal: bool) -> anyhow::Result<()> {
    if !is_terminal {
        anyhow::bail!("dogfeed needs an interactive terminal");
    }
    Ok(())
}

fn setup_terminal() -> io::Result<Term> {
    enable_raw_mode()?;
    rollback_on_error(enter_alternate_screen(), || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })
}

fn enter_alternate_screen() -> io::Result<Term> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;
    Ok(terminal)
}

/// Runs `rollback` when `result` is an error, then passes `result` through.
fn rollback_on_error<T>(result: io::Result<T>, rollback: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        rollback();
    }
    result
}

fn restore_terminal(terminal: &mut Term) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

/// Owns the feed state and drives it from keys and engine completions.
struct FeedApp {
    state: FeedState,
    view: FeedViewModel,
    screen: Screen,
    effects: EffectRunner,
    msg_tx: mpsc::Sender<Msg>,
    msg_rx: mpsc::Receiver<Msg>,
    needs_redraw: bool,
    should_quit: bool,
}

impl FeedApp {
    fn new(effects: EffectRunner, msg_tx: mpsc::Sender<Msg>, msg_rx: mpsc::Receiver<Msg>) -> Self {
        let state = FeedState::new();
        let view = state.view();
        Self {
            state,
            view,
            screen: Screen::default(),
            effects,
            msg_tx,
            msg_rx,
            needs_redraw: true,
            should_quit: false,
        }
    }

    fn run(mut self, terminal: &mut Term, tick_interval: Duration) -> anyhow::Result<()> {
        while !self.should_quit {
            if self.needs_redraw {
                terminal
                    .draw(|frame| ui::render::render(frame, &self.view, &mut self.screen))
                    .context("failed to draw the feed")?;
                self.needs_redraw = false;
            }

            if event::poll(tick_interval).context("failed to poll terminal events")? {
                match event::read().context("failed to read terminal event")? {
                    Event::Key(key) => {
                        let action = input::map_key(key, self.screen.prompt_open());
                        self.handle_action(action);
                    }
                    Event::Resize(_, _) => self.needs_redraw = true,
                    _ => {}
                }
            } else {
                let _ = self.msg_tx.send(Msg::Tick);
            }

            self.process_pending_messages();
        }
        Ok(())
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Dispatch(msg) => {
                if matches!(msg, Msg::ClearAnswered(_)) {
                    self.screen.close_prompt();
                }
                self.needs_redraw = true;
                self.dispatch_msg(msg);
            }
            Action::ScrollUp => self.scroll(|screen| screen.list.scroll_up()),
            Action::ScrollDown => self.scroll(|screen| screen.list.scroll_down()),
            Action::ScrollTop => self.scroll(|screen| screen.list.scroll_top()),
            Action::ScrollBottom => {
                let len = self.view.entries.len();
                self.scroll(|screen| screen.list.scroll_to_end(len));
            }
            Action::Quit => self.should_quit = true,
            Action::None => {}
        }
    }

    fn scroll(&mut self, apply: impl FnOnce(&mut Screen)) {
        apply(&mut self.screen);
        self.needs_redraw = true;
    }

    fn process_pending_messages(&mut self) {
        let inbox: Vec<Msg> = self.msg_rx.try_iter().collect();
        for msg in inbox {
            if msg == Msg::Tick && self.view.busy {
                self.screen.advance_spinner();
                self.needs_redraw = true;
            }
            self.dispatch_msg(msg);
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.view = state.view();
            self.screen.list.sync_len(self.view.entries.len());
            self.needs_redraw = true;
        }
        self.state = state;

        for ui_effect in self.effects.run(effects) {
            self.screen.apply(ui_effect);
            self.needs_redraw = true;
        }
    }
}

impl Drop for FeedApp {
    fn drop(&mut self) {
        if self.state.busy() {
            feed_warn!(
                "Exiting with {} fetch(es) still outstanding",
                self.state.outstanding()
            );
        }
    }
}
