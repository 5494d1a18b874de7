use thiserror::Error;

pub type RequestId = u64;

/// A remotely hosted image, as returned by the random-image endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DogImage {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    FetchCompleted {
        request_id: RequestId,
        result: Result<DogImage, FetchFailure>,
    },
}

/// The single failure kind of a fetch. Network, status and parse errors are
/// not told apart; the message is for the log only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("fetch failed: {message}")]
pub struct FetchFailure {
    pub message: String,
}

impl FetchFailure {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
