//! DogFeed engine: HTTP fetches and background effect execution.
mod engine;
mod fetch;
mod types;

pub use engine::EngineHandle;
pub use fetch::{parse_image_response, FetchSettings, Fetcher, ReqwestFetcher, DOG_API_URL};
pub use types::{DogImage, EngineEvent, FetchFailure, RequestId};
