use crate::domain::model::ServiceAddress;
use crate::domain::ports::ServiceLocator;
use url::Url;

const FALLBACK_HOST: &str = "127.0.0.1";
const FALLBACK_PORT: u16 = 80;

/// 把服務名稱解析成可連線的位址。
///
/// Registry 查不到就用呼叫端給的預設 base URL；URL 壞掉也退回預設。
/// 這個函式沒有失敗路徑，一定回傳可用的位址。
pub fn resolve_address<L: ServiceLocator>(
    locator: &L,
    service_name: &str,
    default_base_url: &str,
) -> ServiceAddress {
    let base_url = match locator.base_url_for(service_name) {
        Some(url) => url,
        None => {
            tracing::debug!(
                "Service {} not in registry, using default base URL {}",
                service_name,
                default_base_url
            );
            default_base_url
        }
    };

    if let Some(address) = parse_base_url(base_url) {
        return address;
    }

    tracing::warn!(
        "Unusable base URL {} for service {}, falling back to default",
        base_url,
        service_name
    );

    parse_base_url(default_base_url)
        .unwrap_or_else(|| ServiceAddress::new(FALLBACK_HOST, FALLBACK_PORT))
}

fn parse_base_url(base_url: &str) -> Option<ServiceAddress> {
    let url = Url::parse(base_url).ok()?;

    let host = url
        .host_str()
        .filter(|h| !h.is_empty())
        .unwrap_or(FALLBACK_HOST)
        .to_string();

    // 明確給的 port 優先；沒給就依 scheme 補 443/80
    let port = url
        .port()
        .unwrap_or(if url.scheme() == "https" { 443 } else { 80 });

    Some(ServiceAddress { host, port })
}
