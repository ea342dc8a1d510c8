use crate::domain::ports::ServiceLocator;
use crate::utils::validation::validate_base_url;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Registry 檔案的固定相對路徑，從工作目錄往上層尋找。
pub const REGISTRY_RELATIVE_PATH: &str = "config/services.toml";

/// 共享的沙箱服務 registry：服務名稱 -> descriptor。
///
/// 載入失敗一律退回空 registry，呼叫端永遠拿得到可用的值。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceRegistry {
    #[serde(default)]
    pub services: HashMap<String, ServiceDescriptor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    pub api_base_url: String,
}

impl ServiceRegistry {
    /// 從固定路徑載入 registry。每次呼叫都重新讀檔，不做快取。
    pub fn load() -> Self {
        Self::load_from_path(default_registry_path())
    }

    /// 從指定路徑載入。檔案不存在或讀取失敗時回傳空 registry。
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        match std::fs::read_to_string(&path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(e) => {
                tracing::debug!(
                    "Service registry not readable at {}: {}",
                    path.as_ref().display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// 從 TOML 字串解析。解析失敗時回傳空 registry。
    pub fn from_toml_str(content: &str) -> Self {
        let processed = substitute_env_vars(content);

        let registry: Self = match toml::from_str(&processed) {
            Ok(registry) => registry,
            Err(e) => {
                tracing::warn!("Malformed service registry, falling back to empty: {}", e);
                return Self::default();
            }
        };

        for (name, descriptor) in &registry.services {
            if let Err(e) = validate_base_url(name, &descriptor.api_base_url) {
                tracing::warn!("Registry entry kept but looks unusable: {}", e);
            }
        }

        registry
    }

    pub fn descriptor(&self, service_name: &str) -> Option<&ServiceDescriptor> {
        self.services.get(service_name)
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl ServiceLocator for ServiceRegistry {
    fn base_url_for(&self, service_name: &str) -> Option<&str> {
        self.services
            .get(service_name)
            .map(|d| d.api_base_url.as_str())
    }
}

/// 固定子路徑從工作目錄逐層往上找，找不到就落在工作目錄。
pub fn default_registry_path() -> PathBuf {
    let base = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    for dir in base.ancestors() {
        let candidate = dir.join(REGISTRY_RELATIVE_PATH);
        if candidate.is_file() {
            return candidate;
        }
    }
    base.join(REGISTRY_RELATIVE_PATH)
}

/// 替換環境變數 (例如 ${MOCK_HOST})，未定義的變數原樣保留。
fn substitute_env_vars(content: &str) -> String {
    use regex::Regex;
    let re = match Regex::new(r"\$\{([^}]+)\}") {
        Ok(re) => re,
        Err(_) => return content.to_string(),
    };

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .to_string()
}
