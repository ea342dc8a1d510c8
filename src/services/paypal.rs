use crate::core::client::ServiceClient;
use crate::domain::model::{AuthToken, FeedRecord};
use crate::domain::ports::BackendClient;
use std::collections::HashMap;

pub const SERVICE_NAME: &str = "paypal";
pub const DEFAULT_PAYPAL_BASE_URL: &str = "http://127.0.0.1:8035";
pub const TRANSACTION_FEED_PATH: &str = "/api/v1/transactions";

/// PayPal 模擬後端的 helper，形狀與 SlackHelper 相同，只有預設值不同。
pub struct PaypalHelper<C: BackendClient = ServiceClient> {
    client: C,
}

impl PaypalHelper<ServiceClient> {
    pub fn connect() -> Self {
        Self {
            client: ServiceClient::connect(SERVICE_NAME, DEFAULT_PAYPAL_BASE_URL),
        }
    }
}

impl<C: BackendClient> PaypalHelper<C> {
    pub fn with_client(client: C) -> Self {
        Self { client }
    }

    pub async fn login(&self, email: &str, password: &str) -> AuthToken {
        self.client.login(email, password).await
    }

    pub async fn transaction_feed(&self, token: &str, limit: usize) -> Vec<FeedRecord> {
        let mut params = HashMap::new();
        params.insert("limit".to_string(), limit.to_string());

        self.client
            .fetch_feed(TRANSACTION_FEED_PATH, token, &params)
            .await
    }
}
