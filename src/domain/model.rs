use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 不透明的授權 token。空字串代表「未取得 token」。
pub type AuthToken = String;

/// 已解析的服務位址。連線一律走明文 HTTP。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceAddress {
    pub host: String,
    pub port: u16,
}

impl ServiceAddress {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// Feed 端點回傳的單筆訊息/事件，欄位形狀由後端決定。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedRecord {
    pub data: HashMap<String, serde_json::Value>,
}
