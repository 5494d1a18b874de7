use dogfeed_logging::{feed_debug, feed_info};

use crate::{ConfirmChoice, ConfirmPrompt, Effect, FeedState, Msg};

/// Pure update function: applies a message to state and returns any effects.
///
/// The only impurity is UUID generation for new entries.
pub fn update(mut state: FeedState, msg: Msg) -> (FeedState, Vec<Effect>) {
    let effects = match msg {
        Msg::FetchClicked => {
            // Overlapping fetches are allowed; each one is tracked until it settles.
            let request_id = state.begin_fetch();
            feed_debug!(
                "Fetch {} started ({} outstanding)",
                request_id,
                state.outstanding()
            );
            vec![Effect::FetchDogImage { request_id }]
        }
        Msg::FetchSucceeded { request_id, url } => {
            state.settle_fetch(request_id);
            let len = state.append(url);
            feed_info!("Fetch {} appended entry #{}", request_id, len);
            vec![Effect::ScrollToEnd { len }]
        }
        Msg::FetchFailed { request_id, reason } => {
            state.settle_fetch(request_id);
            feed_debug!("Fetch {} settled without an entry: {}", request_id, reason);
            Vec::new()
        }
        Msg::ClearClicked => vec![Effect::ConfirmClear(ConfirmPrompt::clear_feed())],
        Msg::ClearAnswered(ConfirmChoice::Destructive) => {
            let removed = state.clear();
            feed_info!("Cleared {} entries", removed);
            Vec::new()
        }
        Msg::ClearAnswered(ConfirmChoice::Cancel) => {
            feed_debug!("Clear cancelled");
            Vec::new()
        }
        Msg::Tick => Vec::new(),
    };

    (state, effects)
}
