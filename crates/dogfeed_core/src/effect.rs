#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue one GET against the random-image endpoint.
    FetchDogImage { request_id: crate::RequestId },
    /// Ask the user before clearing the feed.
    ConfirmClear(ConfirmPrompt),
    /// The list grew; bring its newest row into view.
    ScrollToEnd { len: usize },
}

/// Two-choice confirmation shown before a destructive action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub message: String,
    pub cancel_label: String,
    pub confirm_label: String,
}

impl ConfirmPrompt {
    pub fn clear_feed() -> Self {
        Self {
            title: "Clear Dogs".to_string(),
            message: "Are you sure you want to clear all dogs?".to_string(),
            cancel_label: "Cancel".to_string(),
            confirm_label: "OK".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmChoice {
    Cancel,
    Destructive,
}
