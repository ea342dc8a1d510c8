use crate::domain::model::{AuthToken, FeedRecord};
use async_trait::async_trait;
use std::collections::HashMap;

/// 服務名稱到 base URL 的查找介面，由 registry 實作。
pub trait ServiceLocator {
    fn base_url_for(&self, service_name: &str) -> Option<&str>;
}

#[async_trait]
pub trait BackendClient: Send + Sync {
    /// Empty string means "not authenticated"; callers branch on that, not on errors.
    async fn login(&self, email: &str, password: &str) -> AuthToken;

    /// Empty vector means "no data or fetch failed"; callers branch on that, not on errors.
    async fn fetch_feed(
        &self,
        path: &str,
        token: &str,
        params: &HashMap<String, String>,
    ) -> Vec<FeedRecord>;
}
