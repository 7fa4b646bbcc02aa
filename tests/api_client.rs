//! HTTP client tests against a local mock of the jokes API.

use std::time::Duration;

use dadjokes::domain::{ApiError, JokesPort, NewJoke};
use dadjokes::infrastructure::DadJokesClient;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client(server: &MockServer) -> DadJokesClient {
    DadJokesClient::new(format!("{}/api/", server.uri())).unwrap()
}

fn joke_json(id: u64, text: &str, contributor: &str) -> serde_json::Value {
    json!({
        "id": id,
        "text": text,
        "contributor": contributor,
        "created_at": "2025-11-14T10:00:00Z",
    })
}

#[tokio::test]
async fn test_random_joke() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/random"))
        .respond_with(ResponseTemplate::new(200).set_body_json(joke_json(3, "Hi hungry", "dad")))
        .expect(1)
        .mount(&server)
        .await;

    let joke = client(&server).await.random_joke().await.unwrap().unwrap();

    assert_eq!(joke.id().as_u64(), 3);
    assert_eq!(joke.text(), "Hi hungry");
    assert_eq!(joke.attribution(), "- dad");
    assert_eq!(joke.created_at(), "2025-11-14T10:00:00Z");
}

#[tokio::test]
async fn test_random_picture() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/random_picture"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 8,
            "image_url": "https://example.com/cat.jpg",
            "contributor": "mom",
            "created_at": "2025-11-14T10:00:00Z",
        })))
        .mount(&server)
        .await;

    let picture = client(&server).await.random_picture().await.unwrap().unwrap();

    assert_eq!(picture.image_url(), "https://example.com/cat.jpg");
    assert_eq!(picture.attribution(), "Picture by: mom");
}

#[tokio::test]
async fn test_empty_object_means_none_available() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/random"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/random_picture"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = client(&server).await;
    assert!(client.random_joke().await.unwrap().is_none());
    assert!(client.random_picture().await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_wrapped_in_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jokes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [joke_json(1, "first", "a"), joke_json(2, "second", "b")],
        })))
        .mount(&server)
        .await;

    let jokes = client(&server).await.list_jokes().await.unwrap();

    let texts: Vec<_> = jokes.iter().map(|j| j.text()).collect();
    assert_eq!(texts, ["first", "second"]);
}

#[tokio::test]
async fn test_list_bare_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jokes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([joke_json(1, "only", "a")])))
        .mount(&server)
        .await;

    let jokes = client(&server).await.list_jokes().await.unwrap();
    assert_eq!(jokes.len(), 1);
    assert_eq!(jokes[0].text(), "only");
}

#[tokio::test]
async fn test_list_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jokes"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client(&server).await.list_jokes().await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 500 }));
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/random"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client(&server).await.random_joke().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }));
    assert!(!err.is_status());
}

#[tokio::test]
async fn test_create_posts_values_as_entered() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/jokes"))
        .and(body_json(json!({ "text": "Why? ", "contributor": " Ann" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(joke_json(12, "Why? ", " Ann")))
        .expect(1)
        .mount(&server)
        .await;

    let new_joke = NewJoke::new(" Ann", "Why? ").unwrap();
    let created = client(&server).await.create_joke(&new_joke).await.unwrap();

    assert_eq!(created.id().as_u64(), 12);
    assert_eq!(created.contributor(), " Ann");
}

#[tokio::test]
async fn test_create_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/jokes"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"text": ["required"]})))
        .mount(&server)
        .await;

    let new_joke = NewJoke::new("Ann", "pun").unwrap();
    let err = client(&server).await.create_joke(&new_joke).await.unwrap_err();

    assert!(err.is_status());
    assert!(matches!(err, ApiError::Status { status: 400 }));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let client =
        DadJokesClient::with_timeout("http://127.0.0.1:1/api", Some(Duration::from_secs(2)))
            .unwrap();
    let err = client.list_jokes().await.unwrap_err();

    assert!(err.is_network_error());
}

#[tokio::test]
async fn test_timeout_is_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jokes"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let base_url = format!("{}/api", server.uri());
    let client =
        DadJokesClient::with_timeout(base_url, Some(Duration::from_millis(200))).unwrap();
    let err = client.list_jokes().await.unwrap_err();

    assert!(err.is_network_error());
}
