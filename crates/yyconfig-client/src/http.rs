//! reqwest-backed transport with credential headers and server failover
//!
//! This module provides the default [`Transport`] used to talk to a yyconfig portal.

use std::{sync::RwLock, time::Duration};

use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::{
    error::{Result, TransportError},
    transport::{Method, Transport},
};

/// Configuration for the HTTP transport
#[derive(Clone, Debug)]
pub struct HttpClientConfig {
    /// Portal addresses, tried in order on connection failure
    pub server_addrs: Vec<String>,
    /// Header carrying the credential (default: "Authorization")
    pub auth_header: String,
    /// Pre-issued credential attached to every request
    pub auth_token: Option<String>,
    /// Connection timeout in milliseconds
    pub connect_timeout_ms: u64,
    /// Read timeout in milliseconds
    pub read_timeout_ms: u64,
    /// Context path (e.g., "/portal")
    pub context_path: String,
    /// Extra headers attached to every request
    pub headers: Vec<(String, String)>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            server_addrs: vec!["http://127.0.0.1:8070".to_string()],
            auth_header: "Authorization".to_string(),
            auth_token: None,
            connect_timeout_ms: 5000,
            read_timeout_ms: 30000,
            context_path: String::new(),
            headers: Vec::new(),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config with a single server address
    pub fn new(server_addr: &str) -> Self {
        Self {
            server_addrs: vec![server_addr.to_string()],
            ..Default::default()
        }
    }

    /// Create a config with multiple server addresses
    pub fn with_servers(server_addrs: Vec<String>) -> Self {
        Self {
            server_addrs,
            ..Default::default()
        }
    }

    /// Attach `token` under `header` on every request
    pub fn with_auth_token(mut self, header: &str, token: &str) -> Self {
        self.auth_header = header.to_string();
        self.auth_token = Some(token.to_string());
        self
    }

    /// Set timeouts
    pub fn with_timeouts(mut self, connect_ms: u64, read_ms: u64) -> Self {
        self.connect_timeout_ms = connect_ms;
        self.read_timeout_ms = read_ms;
        self
    }

    /// Set context path
    pub fn with_context_path(mut self, path: &str) -> Self {
        self.context_path = path.to_string();
        self
    }

    /// Add an extra header
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

/// HTTP transport with failover across portal addresses
pub struct HttpTransport {
    client: Client,
    config: HttpClientConfig,
    current_server_index: RwLock<usize>,
}

impl HttpTransport {
    /// Create a new HTTP transport
    pub fn new(config: HttpClientConfig) -> anyhow::Result<Self> {
        if config.server_addrs.is_empty() {
            return Err(TransportError::NoServers.into());
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.read_timeout_ms))
            .build()?;

        Ok(Self {
            client,
            config,
            current_server_index: RwLock::new(0),
        })
    }

    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Index of the server new requests start from
    fn current_index(&self) -> usize {
        *self
            .current_server_index
            .read()
            .unwrap_or_else(|e| e.into_inner())
    }

    /// Remember the server that last accepted a connection
    fn set_current_index(&self, index: usize) {
        let mut current = self
            .current_server_index
            .write()
            .unwrap_or_else(|e| e.into_inner());
        if *current != index {
            *current = index;
            debug!("Switched to server index: {}", index);
        }
    }

    /// Build full URL with context path
    fn build_url(&self, server_addr: &str, path: &str) -> String {
        let base_url = server_addr.trim_end_matches('/');
        let context_path = self.config.context_path.trim_matches('/');

        if context_path.is_empty() {
            format!("{}{}", base_url, path)
        } else {
            format!("{}/{}{}", base_url, context_path, path)
        }
    }

    fn build_request(
        &self,
        method: Method,
        url: &str,
        payload: Option<&Value>,
    ) -> Result<RequestBuilder> {
        let mut builder = match method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Put => self.client.put(url),
            Method::Delete => self.client.delete(url),
        };

        if let Some(token) = &self.config.auth_token {
            builder = builder.header(self.config.auth_header.as_str(), token.as_str());
        }
        for (name, value) in &self.config.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        match (method, payload) {
            (_, None) => {}
            (Method::Get, Some(query)) => builder = builder.query(&query_pairs(query)?),
            (_, Some(body)) => builder = builder.json(body),
        }

        Ok(builder)
    }

    /// Handle response and parse JSON
    async fn handle_response(&self, response: Response) -> Result<Value> {
        let status = response.status();

        if status.is_success() {
            let bytes = response.bytes().await?;
            if bytes.iter().all(u8::is_ascii_whitespace) {
                return Ok(Value::Null);
            }
            Ok(serde_json::from_slice(&bytes)?)
        } else {
            let body = response.text().await.unwrap_or_default();
            error!("Request failed with status {}: {}", status, body);
            Err(TransportError::Status {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").to_string(),
                body: (!body.is_empty()).then_some(body),
            })
        }
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn request(&self, method: Method, path: &str, payload: Option<Value>) -> Result<Value> {
        let servers = &self.config.server_addrs;
        // Walk from a snapshot; concurrent failovers never skip a server.
        let start = self.current_index();
        let mut last_error = None;

        for attempt in 0..servers.len() {
            let index = (start + attempt) % servers.len();
            let url = self.build_url(&servers[index], path);
            debug!("{} {}", method, url);

            let request = self.build_request(method, &url, payload.as_ref())?;
            match request.send().await {
                Ok(response) => {
                    self.set_current_index(index);
                    return self.handle_response(response).await;
                }
                // Only an unestablished connection is safe to replay elsewhere.
                Err(e) if e.is_connect() => {
                    warn!("Connection to {} failed: {}, trying next server", url, e);
                    last_error = Some(e.into());
                }
                Err(e) => {
                    warn!("Request {} {} failed: {}", method, url, e);
                    self.set_current_index(index);
                    return Err(e.into());
                }
            }
        }

        Err(last_error.unwrap_or(TransportError::NoServers))
    }
}

/// Flatten a JSON object into query pairs.
///
/// Nulls are skipped, arrays become repeated keys and nested objects are sent
/// as their JSON text.
fn query_pairs(query: &Value) -> Result<Vec<(String, String)>> {
    let map = match query {
        Value::Null => return Ok(Vec::new()),
        Value::Object(map) => map,
        other => {
            return Err(<serde_json::Error as serde::ser::Error>::custom(format!(
                "query must be a JSON object, got {}",
                other
            ))
            .into());
        }
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                for item in items.iter().filter(|v| !v.is_null()) {
                    pairs.push((key.clone(), scalar_to_string(item)));
                }
            }
            other => pairs.push((key.clone(), scalar_to_string(other))),
        }
    }
    Ok(pairs)
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
