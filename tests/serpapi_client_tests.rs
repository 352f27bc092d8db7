//! SerpApi client tests against a wiremock server.

mod common;

use common::{author_json, client_for, client_with_timeout, SEARCH_PATH};
use rustscholar::ScholarError;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// =============================================================================
// Success paths
// =============================================================================

#[tokio::test]
async fn test_fetch_author_articles_sends_encoded_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("engine", "google_scholar_author"))
        .and(query_param("author_id", "ABC 123"))
        .and(query_param("num", "3"))
        .and(query_param("hl", "en"))
        .and(query_param("api_key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(author_json("Kaiming He", 3)))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .fetch_author_articles("ABC 123", 3)
        .await
        .expect("fetch succeeds");

    assert_eq!(result.researcher_name, "Kaiming He");
    assert_eq!(result.articles.len(), 3);
    assert_eq!(result.articles[0].keywords, "deep,residual,learning,image,recognition");
    assert_eq!(result.articles[0].publication_date.as_deref(), Some("2016-01-01"));
    assert_eq!(result.articles[0].cited_by, Some(1000));
}

#[tokio::test]
async fn test_article_count_is_min_of_max_and_available() {
    let server = MockServer::start().await;

    // SerpApi may ignore `num` and return more articles than asked for.
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(author_json("A", 7)))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let capped = client.fetch_author_articles("ABC123", 2).await.expect("fetch");
    assert_eq!(capped.articles.len(), 2);

    let available = client.fetch_author_articles("ABC123", 20).await.expect("fetch");
    assert_eq!(available.articles.len(), 7);
}

#[tokio::test]
async fn test_fetch_author_profile_caps_at_five() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("author_id", "ABC123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(author_json("Kaiming He", 7)))
        .mount(&server)
        .await;

    let profile = client_for(&server)
        .fetch_author_profile("ABC123")
        .await
        .expect("profile fetch");

    assert_eq!(profile.name.as_deref(), Some("Kaiming He"));
    assert_eq!(profile.affiliation.as_deref(), Some("Example University"));
    assert_eq!(profile.metrics.citations, Some(250000));
    assert_eq!(profile.metrics.h_index, Some(70));
    assert_eq!(profile.metrics.i10_index, Some(150));
    assert_eq!(profile.top_articles.len(), 5);
    assert_eq!(profile.top_articles[0].year, Some(2016));
}

#[tokio::test]
async fn test_sparse_response_maps_to_defaults() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "search_metadata": { "status": "success" },
            "articles": [ { "title": "Only A Title" } ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let fetched = client.fetch_author_articles("ABC123", 3).await.expect("fetch");
    assert_eq!(fetched.researcher_name, "");
    assert_eq!(fetched.articles.len(), 1);
    assert_eq!(fetched.articles[0].cited_by, None);

    let profile = client.fetch_author_profile("ABC123").await.expect("profile");
    assert_eq!(profile.name, None);
    assert_eq!(profile.metrics.citations, None);
}

// =============================================================================
// Error kinds
// =============================================================================

#[tokio::test]
async fn test_429_is_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_author_articles("ABC123", 3)
        .await
        .expect_err("429 must fail");

    assert!(err.is_rate_limited());
    match err {
        ScholarError::RateLimited { body } => assert_eq!(body, "slow down"),
        other => panic!("unexpected: {:?}", other),
    }
}

#[tokio::test]
async fn test_500_is_upstream_http() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_author_profile("ABC123")
        .await
        .expect_err("500 must fail");

    assert!(!err.is_rate_limited());
    match err {
        ScholarError::UpstreamHttp { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "internal");
        }
        other => panic!("unexpected: {:?}", other),
    }
}

#[tokio::test]
async fn test_401_is_upstream_http() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string("{\"error\":\"Invalid API key\"}"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_author_articles("ABC123", 3)
        .await
        .expect_err("401 must fail");
    assert!(matches!(err, ScholarError::UpstreamHttp { status: 401, .. }));
}

#[tokio::test]
async fn test_200_with_error_status_is_upstream_api() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "search_metadata": { "status": "Error" },
            "error": "Google hasn't returned any results for this query."
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_author_articles("ABC123", 3)
        .await
        .expect_err("API failure must fail");

    match err {
        ScholarError::UpstreamApi { status, message } => {
            assert_eq!(status, "Error");
            assert!(message.contains("any results"));
        }
        other => panic!("unexpected: {:?}", other),
    }
}

#[tokio::test]
async fn test_non_json_body_is_json_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_author_articles("ABC123", 3)
        .await
        .expect_err("HTML must fail");
    assert!(matches!(err, ScholarError::Json(_)));
}

#[tokio::test]
async fn test_slow_response_is_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(author_json("A", 1))
                .set_delay(Duration::from_millis(800)),
        )
        .mount(&server)
        .await;

    let err = client_with_timeout(&server, Duration::from_millis(100))
        .fetch_author_articles("ABC123", 3)
        .await
        .expect_err("slow response must time out");
    assert!(matches!(err, ScholarError::Timeout(_)));
}

#[tokio::test]
async fn test_search_by_name_sends_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .search_authors_by_name("Kaiming He")
        .await
        .expect_err("discontinued engine");
    assert!(matches!(err, ScholarError::Unsupported(_)));
}
