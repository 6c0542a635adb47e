// Configuration for PortalClient

use tracing::{info, warn};
use yyconfig_client::HttpClientConfig;

/// Environment variable holding the portal address list (comma separated)
pub const PORTAL_ADDR_ENV: &str = "YYCONFIG_PORTAL";
/// Environment variable holding the pre-issued credential
pub const PORTAL_TOKEN_ENV: &str = "YYCONFIG_TOKEN";
/// Environment variable holding the portal context path
pub const PORTAL_CONTEXT_PATH_ENV: &str = "YYCONFIG_CONTEXT_PATH";

/// Configuration for the portal API client
#[derive(Clone, Debug)]
pub struct PortalClientConfig {
    /// Portal addresses (e.g. ["http://127.0.0.1:8070"])
    pub server_addrs: Vec<String>,
    /// Header the credential is sent under (default: "Authorization")
    pub auth_header: String,
    /// Pre-issued credential, if the portal requires one
    pub auth_token: Option<String>,
    /// Connection timeout in milliseconds (default: 5000)
    pub connect_timeout_ms: u64,
    /// Read timeout in milliseconds (default: 30000)
    pub read_timeout_ms: u64,
    /// Context path (default: empty)
    pub context_path: String,
}

impl Default for PortalClientConfig {
    fn default() -> Self {
        Self {
            server_addrs: vec!["http://127.0.0.1:8070".to_string()],
            auth_header: "Authorization".to_string(),
            auth_token: None,
            connect_timeout_ms: 5000,
            read_timeout_ms: 30000,
            context_path: String::new(),
        }
    }
}

impl PortalClientConfig {
    /// Resolve the configuration from `YYCONFIG_PORTAL`, `YYCONFIG_TOKEN` and
    /// `YYCONFIG_CONTEXT_PATH`, falling back to defaults for anything unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let addrs: Vec<String> = lookup(PORTAL_ADDR_ENV)
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|addr| !addr.is_empty())
            .map(str::to_string)
            .collect();

        if addrs.is_empty() {
            warn!(
                "Could not find portal address in env variable '{}', using {:?}",
                PORTAL_ADDR_ENV, config.server_addrs
            );
        } else {
            info!("Located portal from {}: {:?}", PORTAL_ADDR_ENV, addrs);
            config.server_addrs = addrs;
        }

        if let Some(token) = lookup(PORTAL_TOKEN_ENV).filter(|t| !t.trim().is_empty()) {
            config.auth_token = Some(token.trim().to_string());
        }
        if let Some(path) = lookup(PORTAL_CONTEXT_PATH_ENV) {
            config.context_path = path.trim().to_string();
        }

        config
    }

    pub(crate) fn to_http_config(&self) -> HttpClientConfig {
        let mut http_config = HttpClientConfig::with_servers(self.server_addrs.clone())
            .with_timeouts(self.connect_timeout_ms, self.read_timeout_ms)
            .with_context_path(&self.context_path);

        if let Some(token) = &self.auth_token {
            http_config = http_config.with_auth_token(&self.auth_header, token);
        }
        http_config
    }
}
