use crate::config::registry::ServiceRegistry;
use crate::core::address::resolve_address;
use crate::domain::model::{AuthToken, FeedRecord, ServiceAddress};
use crate::domain::ports::{BackendClient, ServiceLocator};
use crate::utils::error::{HelperError, Result};
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;

pub const LOGIN_PATH: &str = "/api/v1/auth/login";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// 針對單一沙箱服務的 HTTP client。
///
/// 每次呼叫各自發一個請求，沒有重試、沒有連線池共享狀態。
/// 失敗一律以 sentinel 回報：login 回空字串、fetch_feed 回空 Vec。
pub struct ServiceClient {
    address: ServiceAddress,
    client: Client,
}

impl ServiceClient {
    /// 重新讀取共享 registry 並解析服務位址。
    pub fn connect(service_name: &str, default_base_url: &str) -> Self {
        let registry = ServiceRegistry::load();
        Self::with_locator(&registry, service_name, default_base_url)
    }

    pub fn with_locator<L: ServiceLocator>(
        locator: &L,
        service_name: &str,
        default_base_url: &str,
    ) -> Self {
        let address = resolve_address(locator, service_name, default_base_url);
        Self::from_address(address)
    }

    pub fn from_address(address: ServiceAddress) -> Self {
        Self::with_timeout(address, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(address: ServiceAddress, timeout: Duration) -> Self {
        let client = Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self { address, client }
    }

    pub fn address(&self) -> &ServiceAddress {
        &self.address
    }

    /// 對登入端點發一次 form-encoded POST，取回 access_token。
    ///
    /// 任何失敗（非 2xx、body 壞掉、連不上）都回空字串並記 log。
    pub async fn login(&self, email: &str, password: &str) -> AuthToken {
        match self.try_login(email, password).await {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!("Login against {} failed: {}", self.address.base_url(), e);
                String::new()
            }
        }
    }

    async fn try_login(&self, email: &str, password: &str) -> Result<AuthToken> {
        let url = format!("{}{}", self.address.base_url(), LOGIN_PATH);

        tracing::debug!("Posting login to: {}", url);
        let response = self
            .client
            .post(&url)
            .form(&[("username", email), ("password", password)])
            .send()
            .await?;

        tracing::debug!("Login response status: {}", response.status());
        if !response.status().is_success() {
            return Err(HelperError::BackendStatus {
                status: response.status().as_u16(),
                path: LOGIN_PATH.to_string(),
            });
        }

        let body: serde_json::Value = response.json().await?;
        let token = body
            .get("access_token")
            .and_then(|v| v.as_str())
            .ok_or_else(|| HelperError::MissingField {
                field: "access_token".to_string(),
            })?;

        Ok(token.to_string())
    }

    /// 對 feed 端點發一次帶 token 的 GET，回傳後端給的陣列原樣。
    ///
    /// 任何失敗（非 2xx、JSON 壞掉、連不上）都回空 Vec 並記 log。
    pub async fn fetch_feed(
        &self,
        path: &str,
        token: &str,
        params: &HashMap<String, String>,
    ) -> Vec<FeedRecord> {
        match self.try_fetch_feed(path, token, params).await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(
                    "Feed fetch {}{} failed: {}",
                    self.address.base_url(),
                    path,
                    e
                );
                Vec::new()
            }
        }
    }

    async fn try_fetch_feed(
        &self,
        path: &str,
        token: &str,
        params: &HashMap<String, String>,
    ) -> Result<Vec<FeedRecord>> {
        let url = format!("{}{}", self.address.base_url(), path);

        let mut request = self.client.get(&url).query(&[("token", token)]);
        for (key, value) in params {
            request = request.query(&[(key, value)]);
        }

        tracing::debug!("Fetching feed from: {}", url);
        let response = request.send().await?;

        tracing::debug!("Feed response status: {}", response.status());
        if !response.status().is_success() {
            return Err(HelperError::BackendStatus {
                status: response.status().as_u16(),
                path: path.to_string(),
            });
        }

        let records: Vec<FeedRecord> = response.json().await?;
        Ok(records)
    }
}

#[async_trait::async_trait]
impl BackendClient for ServiceClient {
    async fn login(&self, email: &str, password: &str) -> AuthToken {
        ServiceClient::login(self, email, password).await
    }

    async fn fetch_feed(
        &self,
        path: &str,
        token: &str,
        params: &HashMap<String, String>,
    ) -> Vec<FeedRecord> {
        ServiceClient::fetch_feed(self, path, token, params).await
    }
}
