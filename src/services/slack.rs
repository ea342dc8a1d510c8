use crate::core::client::ServiceClient;
use crate::domain::model::{AuthToken, FeedRecord};
use crate::domain::ports::BackendClient;
use std::collections::HashMap;

pub const SERVICE_NAME: &str = "slack";
pub const DEFAULT_SLACK_BASE_URL: &str = "http://127.0.0.1:8034";
pub const CHANNEL_HISTORY_PATH: &str = "/api/v1/channels.history";
pub const DM_FEED_PATH: &str = "/api/v1/dm_feed";

/// Slack 模擬後端的 helper，測試碼透過它登入並讀取訊息。
pub struct SlackHelper<C: BackendClient = ServiceClient> {
    client: C,
}

impl SlackHelper<ServiceClient> {
    /// 從共享 registry 解析 slack 服務位址，查不到就用預設位址。
    pub fn connect() -> Self {
        Self {
            client: ServiceClient::connect(SERVICE_NAME, DEFAULT_SLACK_BASE_URL),
        }
    }
}

impl<C: BackendClient> SlackHelper<C> {
    pub fn with_client(client: C) -> Self {
        Self { client }
    }

    pub async fn login(&self, email: &str, password: &str) -> AuthToken {
        self.client.login(email, password).await
    }

    pub async fn channel_history(
        &self,
        token: &str,
        workspace_id: &str,
        channel: &str,
        limit: usize,
    ) -> Vec<FeedRecord> {
        let mut params = HashMap::new();
        params.insert("channel".to_string(), channel.to_string());
        params.insert("workspace_id".to_string(), workspace_id.to_string());
        params.insert("limit".to_string(), limit.to_string());

        self.client
            .fetch_feed(CHANNEL_HISTORY_PATH, token, &params)
            .await
    }

    pub async fn dm_feed(&self, token: &str, workspace_id: &str, limit: usize) -> Vec<FeedRecord> {
        let mut params = HashMap::new();
        params.insert("workspace_id".to_string(), workspace_id.to_string());
        params.insert("limit".to_string(), limit.to_string());

        self.client.fetch_feed(DM_FEED_PATH, token, &params).await
    }
}
