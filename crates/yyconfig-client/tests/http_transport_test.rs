//! HttpTransport tests against a local mock portal.

use std::time::Duration;

use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path, query_param},
};
use yyconfig_client::{HttpClientConfig, HttpTransport, Transport, TransportError};

fn transport_for(server: &MockServer) -> HttpTransport {
    HttpTransport::new(HttpClientConfig::new(&server.uri())).unwrap()
}

#[tokio::test]
async fn test_get_with_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/apps/search"))
        .and(query_param("name", "demo"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "data": [{"id": 1, "name": "demo"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let transport = transport_for(&server);
    let resp = transport
        .get("/apps/search", Some(json!({"name": "demo", "page": 1})))
        .await
        .unwrap();

    assert_eq!(resp["data"][0]["name"], "demo");
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/apps"))
        .and(body_json(json!({"name": "demo"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 7})))
        .expect(1)
        .mount(&server)
        .await;

    let transport = transport_for(&server);
    let resp = transport
        .post("/apps", Some(json!({"name": "demo"})))
        .await
        .unwrap();

    assert_eq!(resp, json!({"id": 7}));
}

#[tokio::test]
async fn test_put_and_delete() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/releases/7/rollback"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/apps/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(true)))
        .expect(1)
        .mount(&server)
        .await;

    let transport = transport_for(&server);
    let resp = transport.put("/releases/7/rollback", None).await.unwrap();
    assert_eq!(resp["code"], 0);

    let resp = transport.delete("/apps/7", None).await.unwrap();
    assert_eq!(resp, Value::Bool(true));
}

#[tokio::test]
async fn test_credential_and_extra_headers_attached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/apps"))
        .and(header("X-Token", "secret"))
        .and(header("X-Env", "dev"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let config = HttpClientConfig::new(&server.uri())
        .with_auth_token("X-Token", "secret")
        .with_header("X-Env", "dev");
    let transport = HttpTransport::new(config).unwrap();

    let resp = transport.get("/apps", None).await.unwrap();
    assert_eq!(resp, json!([]));
}

#[tokio::test]
async fn test_context_path_prefixed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/portal/apps/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 42})))
        .expect(1)
        .mount(&server)
        .await;

    let config = HttpClientConfig::new(&server.uri()).with_context_path("/portal");
    let transport = HttpTransport::new(config).unwrap();

    let resp = transport.get("/apps/42", None).await.unwrap();
    assert_eq!(resp["id"], 42);
}

#[tokio::test]
async fn test_non_success_status_becomes_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/apps/404"))
        .respond_with(ResponseTemplate::new(404).set_body_string("app not found"))
        .expect(1)
        .mount(&server)
        .await;

    let transport = transport_for(&server);
    let err = transport.get("/apps/404", None).await.unwrap_err();

    match &err {
        TransportError::Status {
            status,
            message,
            body,
        } => {
            assert_eq!(*status, 404);
            assert_eq!(message, "Not Found");
            assert_eq!(body.as_deref(), Some("app not found"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/createRelease"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let config = HttpClientConfig::with_servers(vec![server.uri(), server.uri()]);
    let transport = HttpTransport::new(config).unwrap();

    let err = transport
        .post("/createRelease", Some(json!({"namespaceId": 3})))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(500));
    assert_eq!(err.body(), None);
}

#[tokio::test]
async fn test_empty_body_resolves_to_null() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/apps/1/envs/dev/clusters/blue"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let transport = transport_for(&server);
    let resp = transport
        .post("/apps/1/envs/dev/clusters/blue", None)
        .await
        .unwrap();
    assert_eq!(resp, Value::Null);
}

#[tokio::test]
async fn test_invalid_json_body_is_serialization_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/apps"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let transport = transport_for(&server);
    let err = transport.get("/apps", None).await.unwrap_err();
    assert!(matches!(err, TransportError::Serialization(_)));
}

#[tokio::test]
async fn test_failover_on_connection_refused() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/apps"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}])))
        .expect(2)
        .mount(&server)
        .await;

    // Port 1 is never listening locally, so the first attempt fails to connect.
    let config = HttpClientConfig::with_servers(vec![
        "http://127.0.0.1:1".to_string(),
        server.uri(),
    ])
    .with_timeouts(1000, 5000);
    let transport = HttpTransport::new(config).unwrap();

    let resp = transport.get("/apps", None).await.unwrap();
    assert_eq!(resp[0]["id"], 1);

    // The healthy server stays selected.
    let resp = transport.get("/apps", None).await.unwrap();
    assert_eq!(resp[0]["id"], 1);
}

#[tokio::test]
async fn test_concurrent_failover_reaches_live_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/apps"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}])))
        .expect(40)
        .mount(&server)
        .await;

    for _ in 0..20 {
        let config = HttpClientConfig::with_servers(vec![
            "http://127.0.0.1:1".to_string(),
            server.uri(),
        ])
        .with_timeouts(1000, 5000);
        let transport = HttpTransport::new(config).unwrap();

        let (first, second) =
            tokio::join!(transport.get("/apps", None), transport.get("/apps", None));
        assert_eq!(first.unwrap()[0]["id"], 1);
        assert_eq!(second.unwrap()[0]["id"], 1);
    }
}

#[tokio::test]
async fn test_all_servers_unreachable() {
    let config = HttpClientConfig::with_servers(vec![
        "http://127.0.0.1:1".to_string(),
        "http://127.0.0.1:1".to_string(),
    ])
    .with_timeouts(1000, 2000);
    let transport = HttpTransport::new(config).unwrap();

    let err = transport.get("/apps", None).await.unwrap_err();
    assert!(matches!(err, TransportError::Http(_)));
    assert_eq!(err.status_code(), None);
}

#[tokio::test]
async fn test_read_timeout_surfaces_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/commit/find"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(2)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = HttpClientConfig::new(&server.uri()).with_timeouts(1000, 200);
    let transport = HttpTransport::new(config).unwrap();

    let err = transport.get("/commit/find", None).await.unwrap_err();
    match err {
        TransportError::Http(e) => assert!(e.is_timeout()),
        other => panic!("unexpected error: {other:?}"),
    }
}
