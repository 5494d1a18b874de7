//! DogFeed core: pure feed state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{ConfirmChoice, ConfirmPrompt, Effect};
pub use msg::Msg;
pub use state::{DogImageEntry, EntryId, FeedState, RequestId};
pub use update::update;
pub use view_model::{EntryRowView, FeedViewModel};
