use std::time::Duration;

use homework_client::{ClientError, PracticumClient, http_client};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> PracticumClient {
    let http = http_client(Duration::from_secs(2)).expect("http client");
    PracticumClient::with_client(format!("{}/homework_statuses/", server.uri()), "secret", http)
}

#[tokio::test]
async fn fetch_sends_oauth_header_and_from_date() {
    let server = MockServer::start().await;
    let payload = json!({
        "homeworks": [{"homework_name": "hw1", "status": "reviewing"}],
        "current_date": 1700000600,
    });
    Mock::given(method("GET"))
        .and(path("/homework_statuses/"))
        .and(header("Authorization", "OAuth secret"))
        .and(query_param("from_date", "1700000000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .homework_statuses(1_700_000_000)
        .await
        .expect("fetch ok");

    assert_eq!(response, payload);
}

#[tokio::test]
async fn fetch_fails_on_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .homework_statuses(1_700_000_000)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::NoResponse { status: 500 }));
}

#[tokio::test]
async fn fetch_fails_on_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"code": "not_authenticated"})))
        .mount(&server)
        .await;

    let err = client_for(&server).homework_statuses(1).await.unwrap_err();

    assert!(matches!(err, ClientError::NoResponse { status: 401 }));
}

#[tokio::test]
async fn fetch_does_not_follow_redirects() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/homework_statuses/"))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", "/elsewhere"))
        .mount(&server)
        .await;

    let err = client_for(&server).homework_statuses(1).await.unwrap_err();

    assert!(matches!(err, ClientError::NoResponse { status: 302 }));
}

#[tokio::test]
async fn fetch_fails_on_invalid_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).homework_statuses(1).await.unwrap_err();

    assert!(matches!(err, ClientError::ParseError(_)));
}

#[tokio::test]
async fn fetch_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"homeworks": []}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let http = http_client(Duration::from_millis(100)).expect("http client");
    let client = PracticumClient::with_client(server.uri(), "secret", http);

    let err = client.homework_statuses(1).await.unwrap_err();

    assert!(matches!(err, ClientError::RequestFailed(ref e) if e.is_timeout()));
}
