use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use dogfeed_core::{ConfirmPrompt, Effect, Msg};
use dogfeed_engine::{EngineEvent, EngineHandle, FetchSettings};
use dogfeed_logging::{feed_debug, feed_error};

/// Effects that only the presentation layer can carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    ShowConfirm(ConfirmPrompt),
    ScrollToEnd { len: usize },
}

pub struct EffectRunner {
    engine: Arc<EngineHandle>,
}

impl EffectRunner {
    pub fn new(settings: FetchSettings, msg_tx: mpsc::Sender<Msg>) -> io::Result<Self> {
        Self::with_engine(EngineHandle::new(settings)?, msg_tx)
    }

    pub fn with_engine(engine: EngineHandle, msg_tx: mpsc::Sender<Msg>) -> io::Result<Self> {
        let runner = Self {
            engine: Arc::new(engine),
        };
        runner.spawn_event_loop(msg_tx)?;
        Ok(runner)
    }

    /// Starts IO effects and hands the rest back to the UI.
    pub fn run(&self, effects: Vec<Effect>) -> Vec<UiEffect> {
        let mut ui_effects = Vec::new();
        for effect in effects {
            match effect {
                Effect::FetchDogImage { request_id } => {
                    feed_debug!("FetchDogImage request_id={}", request_id);
                    self.engine.enqueue(request_id);
                }
                Effect::ConfirmClear(prompt) => ui_effects.push(UiEffect::ShowConfirm(prompt)),
                Effect::ScrollToEnd { len } => ui_effects.push(UiEffect::ScrollToEnd { len }),
            }
        }
        ui_effects
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) -> io::Result<()> {
        let engine = self.engine.clone();
        thread::Builder::new()
            .name("dogfeed-events".to_string())
            .spawn(move || loop {
                if let Some(event) = engine.recv_timeout(Duration::from_millis(50)) {
                    if msg_tx.send(event_to_msg(event)).is_err() {
                        break;
                    }
                }
            })?;
        Ok(())
    }
}

fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::FetchCompleted { request_id, result } => match result {
            Ok(image) => Msg::FetchSucceeded {
                request_id,
                url: image.url,
            },
            Err(failure) => {
                feed_error!("Fetch {} failed: {}", request_id, failure);
                Msg::FetchFailed {
                    request_id,
                    reason: failure.message,
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dogfeed_engine::{DogImage, FetchFailure, Fetcher, RequestId};

    struct FixedFetcher;

    #[async_trait::async_trait]
    impl Fetcher for FixedFetcher {
        async fn fetch_random_image(
            &self,
            request_id: RequestId,
        ) -> Result<DogImage, FetchFailure> {
            Ok(DogImage {
                url: format!("https://example.com/dog{request_id}.jpg"),
            })
        }
    }

    #[test]
    fn fetch_effect_comes_back_as_success_msg() {
        dogfeed_logging::initialize_for_tests();
        let (msg_tx, msg_rx) = mpsc::channel();
        let engine = EngineHandle::with_fetcher(Arc::new(FixedFetcher)).unwrap();
        let runner = EffectRunner::with_engine(engine, msg_tx).unwrap();

        let ui_effects = runner.run(vec![Effect::FetchDogImage { request_id: 4 }]);

        assert!(ui_effects.is_empty());
        let msg = msg_rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(
            msg,
            Msg::FetchSucceeded {
                request_id: 4,
                url: "https://example.com/dog4.jpg".to_string(),
            }
        );
    }

    #[test]
    fn ui_effects_are_passed_through_in_order() {
        let (msg_tx, _msg_rx) = mpsc::channel();
        let engine = EngineHandle::with_fetcher(Arc::new(FixedFetcher)).unwrap();
        let runner = EffectRunner::with_engine(engine, msg_tx).unwrap();

        let ui_effects = runner.run(vec![
            Effect::ScrollToEnd { len: 2 },
            Effect::ConfirmClear(ConfirmPrompt::clear_feed()),
        ]);

        assert_eq!(
            ui_effects,
            vec![
                UiEffect::ScrollToEnd { len: 2 },
                UiEffect::ShowConfirm(ConfirmPrompt::clear_feed()),
            ]
        );
    }

    #[test]
    fn failed_event_becomes_failure_msg() {
        dogfeed_logging::initialize_for_tests();
        let msg = event_to_msg(EngineEvent::FetchCompleted {
            request_id: 9,
            result: Err(FetchFailure {
                message: "http status 500 Internal Server Error".to_string(),
            }),
        });

        assert_eq!(
            msg,
            Msg::FetchFailed {
                request_id: 9,
                reason: "http status 500 Internal Server Error".to_string(),
            }
        );
    }
}
