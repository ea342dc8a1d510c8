use anyhow::Result;
use httpmock::prelude::*;
use sandbox_helpers::config::registry::ServiceRegistry;
use sandbox_helpers::core::client::ServiceClient;
use sandbox_helpers::domain::model::{FeedRecord, ServiceAddress};
use sandbox_helpers::services::paypal::PaypalHelper;
use sandbox_helpers::services::slack::{SlackHelper, DEFAULT_SLACK_BASE_URL};

fn client_for(server: &MockServer) -> ServiceClient {
    ServiceClient::from_address(ServiceAddress::new("127.0.0.1", server.port()))
}

/// 登入成功拿到 token
#[tokio::test]
async fn test_login_success_returns_token() {
    let server = MockServer::start();

    let login_mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/auth/login");
        then.status(200)
            .json_body(serde_json::json!({"access_token": "tok_abc"}));
    });

    let helper = SlackHelper::with_client(client_for(&server));
    let token = helper.login("tester@example.com", "secret123").await;

    login_mock.assert();
    assert_eq!(token, "tok_abc");
}

/// 登入被拒時拿到空字串而不是錯誤
#[tokio::test]
async fn test_login_rejected_returns_empty_string() {
    let server = MockServer::start();

    let login_mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/auth/login");
        then.status(401)
            .json_body(serde_json::json!({"detail": "invalid credentials"}));
    });

    let helper = SlackHelper::with_client(client_for(&server));
    let token = helper.login("tester@example.com", "wrong").await;

    login_mock.assert();
    assert_eq!(token, "");
}

/// feed 回傳的陣列原樣到手
#[tokio::test]
async fn test_feed_fetch_returns_messages_verbatim() {
    let server = MockServer::start();

    let feed_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/channels.history")
            .query_param("token", "tok_abc")
            .query_param("channel", "general")
            .query_param("workspace_id", "ws_1")
            .query_param("limit", "50");
        then.status(200)
            .json_body(serde_json::json!([{"id": 1, "text": "hi"}]));
    });

    let helper = SlackHelper::with_client(client_for(&server));
    let records = helper
        .channel_history("tok_abc", "ws_1", "general", 50)
        .await;

    feed_mock.assert();

    let expected: FeedRecord =
        serde_json::from_value(serde_json::json!({"id": 1, "text": "hi"})).unwrap();
    assert_eq!(records, vec![expected]);
}

/// 完整流程：登入後用 token 讀 DM feed
#[tokio::test]
async fn test_login_then_feed_flow() {
    let server = MockServer::start();

    let login_mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/auth/login");
        then.status(200)
            .json_body(serde_json::json!({"access_token": "tok_flow_1"}));
    });

    let feed_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/dm_feed")
            .query_param("token", "tok_flow_1")
            .query_param("workspace_id", "ws_1")
            .query_param("limit", "10");
        then.status(200).json_body(serde_json::json!([
            {"id": 1, "from": "alice", "text": "ping"},
            {"id": 2, "from": "bob", "text": "pong"}
        ]));
    });

    let helper = SlackHelper::with_client(client_for(&server));

    let token = helper.login("tester@example.com", "secret123").await;
    assert!(!token.is_empty());

    let records = helper.dm_feed(&token, "ws_1", 10).await;

    login_mock.assert();
    feed_mock.assert();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].data.get("from").unwrap(), "alice");
}

/// Registry 指到 mock server，整條解析 + 呼叫鏈走通
#[tokio::test]
async fn test_registry_resolution_feeds_the_client() -> Result<()> {
    let server = MockServer::start();

    let login_mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/auth/login");
        then.status(200)
            .json_body(serde_json::json!({"access_token": "tok_reg"}));
    });

    let registry = ServiceRegistry::from_toml_str(&format!(
        r#"
[services.slack]
api_base_url = "http://127.0.0.1:{}"
"#,
        server.port()
    ));

    let client = ServiceClient::with_locator(&registry, "slack", DEFAULT_SLACK_BASE_URL);
    assert_eq!(client.address().port, server.port());

    let token = client.login("tester@example.com", "secret123").await;

    login_mock.assert();
    assert_eq!(token, "tok_reg");

    Ok(())
}

#[tokio::test]
async fn test_paypal_transaction_feed() {
    let server = MockServer::start();

    let feed_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/transactions")
            .query_param("token", "tok_pp")
            .query_param("limit", "25");
        then.status(200).json_body(serde_json::json!([
            {"id": "txn_1", "amount": "12.50", "currency": "USD"}
        ]));
    });

    let helper = PaypalHelper::with_client(client_for(&server));
    let records = helper.transaction_feed("tok_pp", 25).await;

    feed_mock.assert();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].data.get("currency").unwrap(), "USD");
}

/// 連不上後端（connection refused）時，回報方式跟 HTTP 失敗一致：
/// login 給空字串、fetch 給空陣列，不往外丟錯誤。
#[tokio::test]
async fn test_transport_failure_normalizes_to_sentinels() -> Result<()> {
    // 先綁一個 port 再放掉，拿到幾乎必定拒連的位址
    let refused_port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
        listener.local_addr()?.port()
    };

    let client = ServiceClient::from_address(ServiceAddress::new("127.0.0.1", refused_port));

    let token = client.login("tester@example.com", "secret123").await;
    assert_eq!(token, "");

    let records = client
        .fetch_feed("/api/v1/dm_feed", "tok_abc", &Default::default())
        .await;
    assert!(records.is_empty());

    Ok(())
}
