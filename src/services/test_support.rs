use crate::domain::model::{AuthToken, FeedRecord};
use crate::domain::ports::BackendClient;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub struct FeedCall {
    pub path: String,
    pub token: String,
    pub params: HashMap<String, String>,
}

/// 記錄呼叫內容的 BackendClient 替身，回傳預先設定的結果。
#[derive(Clone)]
pub struct RecordingClient {
    token: AuthToken,
    records: Vec<FeedRecord>,
    calls: Arc<Mutex<Vec<FeedCall>>>,
    logins: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingClient {
    fn new(token: AuthToken, records: Vec<FeedRecord>) -> Self {
        Self {
            token,
            records,
            calls: Arc::new(Mutex::new(Vec::new())),
            logins: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_records(values: Vec<serde_json::Value>) -> Self {
        let records = values
            .into_iter()
            .map(|v| serde_json::from_value(v).unwrap())
            .collect();
        Self::new(String::new(), records)
    }

    pub fn with_token(token: &str) -> Self {
        Self::new(token.to_string(), Vec::new())
    }

    pub fn last_call(&self) -> Option<FeedCall> {
        self.calls.lock().unwrap().last().cloned()
    }

    pub fn last_login(&self) -> Option<(String, String)> {
        self.logins.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl BackendClient for RecordingClient {
    async fn login(&self, email: &str, password: &str) -> AuthToken {
        self.logins
            .lock()
            .unwrap()
            .push((email.to_string(), password.to_string()));
        self.token.clone()
    }

    async fn fetch_feed(
        &self,
        path: &str,
        token: &str,
        params: &HashMap<String, String>,
    ) -> Vec<FeedRecord> {
        self.calls.lock().unwrap().push(FeedCall {
            path: path.to_string(),
            token: token.to_string(),
            params: params.clone(),
        });
        self.records.clone()
    }
}
