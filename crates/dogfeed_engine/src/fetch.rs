use dogfeed_logging::{feed_debug, feed_trace};
use futures_util::StreamExt;
use serde::Deserialize;

use crate::{DogImage, FetchFailure, RequestId};

pub const DOG_API_URL: &str = "https://dog.ceo/api/breeds/image/random";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub endpoint: String,
    pub redirect_limit: usize,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            endpoint: DOG_API_URL.to_string(),
            redirect_limit: 5,
            max_bytes: 64 * 1024,
        }
    }
}

#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch_random_image(&self, request_id: RequestId) -> Result<DogImage, FetchFailure>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchFailure> {
        reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(self.settings.redirect_limit))
            .build()
            .map_err(|err| FetchFailure::new(err.to_string()))
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch_random_image(&self, request_id: RequestId) -> Result<DogImage, FetchFailure> {
        let endpoint = reqwest::Url::parse(&self.settings.endpoint)
            .map_err(|err| FetchFailure::new(format!("invalid endpoint: {err}")))?;
        let client = self.build_client()?;

        feed_debug!("Fetch {} GET {}", request_id, endpoint);
        let response = client
            .get(endpoint)
            .send()
            .await
            .map_err(|err| FetchFailure::new(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchFailure::new(format!("http status {status}")));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(too_large(self.settings.max_bytes, content_len));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|err| FetchFailure::new(err.to_string()))?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(too_large(self.settings.max_bytes, next_len));
            }
            body.extend_from_slice(&chunk);
        }
        feed_trace!("Fetch {} read {} bytes", request_id, body.len());

        parse_image_response(&body)
    }
}

#[derive(Debug, Deserialize)]
struct RandomImageBody {
    message: String,
    #[serde(default)]
    status: Option<String>,
}

/// Decodes a random-image response body into the image it references.
///
/// The body must be a JSON object with a string `message`, which is kept
/// exactly as sent. A `status` field, when present, must be `"success"`.
pub fn parse_image_response(body: &[u8]) -> Result<DogImage, FetchFailure> {
    let parsed: RandomImageBody = serde_json::from_slice(body)
        .map_err(|err| FetchFailure::new(format!("malformed response: {err}")))?;

    if let Some(status) = parsed.status.as_deref() {
        if status != "success" {
            return Err(FetchFailure::new(format!("api status {status}")));
        }
    }

    Ok(DogImage {
        url: parsed.message,
    })
}

fn too_large(max_bytes: u64, actual: u64) -> FetchFailure {
    FetchFailure::new(format!("response too large (max {max_bytes}, actual {actual})"))
}
