use anyhow::Result;
use api_stress::runner::{Execute, RequestExecutor};
use reqwest::Method;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_success_status_is_success() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let executor = RequestExecutor::new(&server.uri(), Duration::from_secs(5))?;
    executor.execute("/health", &Method::GET, None).await?;
    Ok(())
}

#[tokio::test]
async fn test_non_success_status_is_failure() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let executor = RequestExecutor::new(&server.uri(), Duration::from_secs(5))?;
    let err = executor
        .execute("/broken", &Method::POST, Some("abc"))
        .await
        .unwrap_err();
    assert!(err.url.ends_with("/broken"));
    assert!(executor.execute("/missing", &Method::POST, None).await.is_err());
    Ok(())
}

#[tokio::test]
async fn test_payload_is_wrapped_in_json_body() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/items"))
        .and(body_json(json!({ "payload": "AbC123" })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let executor = RequestExecutor::new(&server.uri(), Duration::from_secs(5))?;
    executor
        .execute("/api/items", &Method::POST, Some("AbC123"))
        .await?;
    Ok(())
}

#[tokio::test]
async fn test_absent_payload_sends_no_body() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let executor = RequestExecutor::new(&server.uri(), Duration::from_secs(5))?;
    executor.execute("/empty", &Method::POST, None).await?;
    executor.execute("/blank", &Method::POST, Some("")).await?;
    executor.execute("/full", &Method::POST, Some("xyz")).await?;

    let requests = server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 3);
    for request in &requests {
        match request.url.path() {
            "/empty" | "/blank" => assert!(request.body.is_empty()),
            "/full" => {
                let body: Value = serde_json::from_slice(&request.body)?;
                assert_eq!(body, json!({ "payload": "xyz" }));
            }
            other => panic!("unexpected path {}", other),
        }
    }
    Ok(())
}

#[tokio::test]
async fn test_transport_timeout_is_failure() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&server)
        .await;

    let executor = RequestExecutor::new(&server.uri(), Duration::from_millis(100))?;
    assert!(executor.execute("/slow", &Method::GET, None).await.is_err());
    Ok(())
}

#[tokio::test]
async fn test_connection_refused_is_failure() -> Result<()> {
    let executor = RequestExecutor::new("http://127.0.0.1:1", Duration::from_secs(2))?;
    let err = executor
        .execute("/anything", &Method::POST, Some("data"))
        .await
        .unwrap_err();
    assert_eq!(err.url, "http://127.0.0.1:1/anything");
    Ok(())
}
