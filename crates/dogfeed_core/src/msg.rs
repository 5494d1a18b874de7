#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User pressed "Get Dog".
    FetchClicked,
    /// Engine returned an image reference for a fetch.
    FetchSucceeded {
        request_id: crate::RequestId,
        url: String,
    },
    /// Engine gave up on a fetch (network, status or parse failure).
    FetchFailed {
        request_id: crate::RequestId,
        reason: String,
    },
    /// User pressed "Clear".
    ClearClicked,
    /// User answered the clear confirmation.
    ClearAnswered(crate::ConfirmChoice),
    /// UI/render tick to coalesce rendering.
    Tick,
}
