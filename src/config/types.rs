use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

/// Settings for the catalog API client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the catalog service (scheme + host, no trailing slash).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u32,
}

/// Settings for the terminal interface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event-loop tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Products fetched per catalog page (default: 20).
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,
}

/// Expiry windows for cached API responses.
///
/// Mirrors the catalog service's revalidation intervals: short for
/// list endpoints, longer for single products.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// TTL in seconds for product-list and category responses (default: 60).
    #[serde(default = "default_list_ttl")]
    pub list_ttl_seconds: u64,
    /// TTL in seconds for single-product responses (default: 300).
    #[serde(default = "default_item_ttl")]
    pub item_ttl_seconds: u64,
}

fn default_base_url() -> String {
    "https://fluxmarket.vercel.app".to_string()
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_request_timeout() -> u32 {
    30
}

fn default_tick_ms() -> u64 {
    250
}

fn default_page_limit() -> u32 {
    20
}

fn default_list_ttl() -> u64 {
    60
}

fn default_item_ttl() -> u64 {
    300
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_seconds: default_connect_timeout(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            page_limit: default_page_limit(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            list_ttl_seconds: default_list_ttl(),
            item_ttl_seconds: default_item_ttl(),
        }
    }
}
