pub mod constants;
pub mod layout;
pub mod list;
pub mod render;

use dogfeed_core::ConfirmPrompt;

use super::effects::UiEffect;
use list::ListView;

/// Presentation-only state: scroll position, open prompt, spinner phase.
#[derive(Debug, Default)]
pub struct Screen {
    pub list: ListView,
    pub prompt: Option<ConfirmPrompt>,
    pub spinner_frame: usize,
}

impl Screen {
    pub fn apply(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::ShowConfirm(prompt) => self.prompt = Some(prompt),
            UiEffect::ScrollToEnd { len } => self.list.scroll_to_end(len),
        }
    }

    pub fn prompt_open(&self) -> bool {
        self.prompt.is_some()
    }

    pub fn close_prompt(&mut self) {
        self.prompt = None;
    }

    pub fn advance_spinner(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % constants::SPINNER_FRAMES.len();
    }
}
