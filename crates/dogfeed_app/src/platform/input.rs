use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use dogfeed_core::{ConfirmChoice, Msg};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Dispatch(Msg),
    ScrollUp,
    ScrollDown,
    ScrollTop,
    ScrollBottom,
    Quit,
    None,
}

/// Maps a key press to an action. While the confirm prompt is open only its
/// two answers (and Ctrl-C) are accepted.
pub fn map_key(key: KeyEvent, prompt_open: bool) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    if prompt_open {
        return match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                Action::Dispatch(Msg::ClearAnswered(ConfirmChoice::Destructive))
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                Action::Dispatch(Msg::ClearAnswered(ConfirmChoice::Cancel))
            }
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Char('f') | KeyCode::Char('F') | KeyCode::Enter => {
            Action::Dispatch(Msg::FetchClicked)
        }
        KeyCode::Char('c') | KeyCode::Char('C') => Action::Dispatch(Msg::ClearClicked),
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Up | KeyCode::Char('k') => Action::ScrollUp,
        KeyCode::Down | KeyCode::Char('j') => Action::ScrollDown,
        KeyCode::Home | KeyCode::Char('g') => Action::ScrollTop,
        KeyCode::End | KeyCode::Char('G') => Action::ScrollBottom,
        _ => Action::None,
    }
}
