use std::time::Duration;

use dogfeed_engine::{parse_image_response, DogImage, FetchSettings, Fetcher, ReqwestFetcher};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher_for(server: &MockServer, route: &str) -> ReqwestFetcher {
    dogfeed_logging::initialize_for_tests();
    ReqwestFetcher::new(FetchSettings {
        endpoint: format!("{}{}", server.uri(), route),
        ..FetchSettings::default()
    })
}

#[tokio::test]
async fn fetcher_returns_image_reference() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/breeds/image/random"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"message":"https://example.com/dog1.jpg","status":"success"}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = fetcher_for(&server, "/api/breeds/image/random");
    let image = fetcher.fetch_random_image(1).await.expect("fetch ok");

    assert_eq!(
        image,
        DogImage {
            url: "https://example.com/dog1.jpg".to_string()
        }
    );
}

#[tokio::test]
async fn slow_response_is_waited_for() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(300))
                .set_body_raw(r#"{"message":"https://example.com/slow.jpg"}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let fetcher = fetcher_for(&server, "/slow");
    let image = fetcher.fetch_random_image(5).await.expect("slow fetch still succeeds");

    assert_eq!(image.url, "https://example.com/slow.jpg");
}

#[tokio::test]
async fn fetcher_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = fetcher_for(&server, "/missing");
    let err = fetcher.fetch_random_image(7).await.unwrap_err();

    assert!(err.message.contains("404"), "unexpected message: {}", err.message);
}

#[tokio::test]
async fn fetcher_fails_on_malformed_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html>nope</html>", "text/html"))
        .mount(&server)
        .await;

    let fetcher = fetcher_for(&server, "/broken");
    let err = fetcher.fetch_random_image(2).await.unwrap_err();

    assert!(err.message.starts_with("malformed response"));
}

#[tokio::test]
async fn fetcher_rejects_too_large_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/large"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"message":"https://example.com/dog.jpg"}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings {
        endpoint: format!("{}/large", server.uri()),
        max_bytes: 10,
        ..FetchSettings::default()
    });
    let err = fetcher.fetch_random_image(3).await.unwrap_err();

    assert!(err.message.starts_with("response too large"));
}

#[tokio::test]
async fn fetcher_fails_when_server_is_unreachable() {
    let server = MockServer::start().await;
    let endpoint = format!("{}/gone", server.uri());
    drop(server);

    let fetcher = ReqwestFetcher::new(FetchSettings {
        endpoint,
        ..FetchSettings::default()
    });

    assert!(fetcher.fetch_random_image(4).await.is_err());
}

#[test]
fn parse_accepts_body_without_status() {
    let image = parse_image_response(br#"{"message":"https://example.com/a.jpg"}"#).unwrap();
    assert_eq!(image.url, "https://example.com/a.jpg");
}

#[test]
fn parse_rejects_missing_or_non_string_message() {
    assert!(parse_image_response(br#"{"status":"success"}"#).is_err());
    assert!(parse_image_response(br#"{"message":42,"status":"success"}"#).is_err());
    assert!(parse_image_response(br#"["https://example.com/a.jpg"]"#).is_err());
}

#[test]
fn parse_rejects_error_status() {
    let err = parse_image_response(br#"{"message":"Breed not found","status":"error"}"#)
        .unwrap_err();
    assert_eq!(err.message, "api status error");
    assert_eq!(err.to_string(), "fetch failed: api status error");
}

#[test]
fn parse_keeps_image_reference_verbatim() {
    let image =
        parse_image_response(br#"{"message":" https://example.com/a.jpg\n","status":"success"}"#)
            .unwrap();
    assert_eq!(image.url, " https://example.com/a.jpg\n");

    let image = parse_image_response(br#"{"message":"","status":"success"}"#).unwrap();
    assert_eq!(image.url, "");
}
