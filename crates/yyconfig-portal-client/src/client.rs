// PortalClient - facade over the portal API groupings

use std::sync::Arc;

use tracing::debug;
use yyconfig_client::{HttpTransport, Transport};

use crate::{
    api::{ClusterApi, InstancesApi, ProjectApi},
    config::PortalClientConfig,
};

/// Typed client for the yyconfig portal console API
#[derive(Clone)]
pub struct PortalClient {
    transport: Arc<dyn Transport>,
}

impl PortalClient {
    /// Create a new PortalClient backed by [`HttpTransport`]
    pub fn new(config: PortalClientConfig) -> anyhow::Result<Self> {
        debug!("Creating portal client for {:?}", config.server_addrs);
        let transport = HttpTransport::new(config.to_http_config())?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Create a PortalClient from the `YYCONFIG_*` environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        Self::new(PortalClientConfig::from_env())
    }

    /// Create a new PortalClient from a single portal address
    pub fn from_server_addr(addr: &str) -> anyhow::Result<Self> {
        let config = PortalClientConfig {
            server_addrs: vec![addr.to_string()],
            ..Default::default()
        };
        Self::new(config)
    }

    /// Create a PortalClient over any transport
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    pub fn project(&self) -> ProjectApi<'_> {
        ProjectApi::new(self.transport.as_ref())
    }

    pub fn cluster(&self) -> ClusterApi<'_> {
        ClusterApi::new(self.transport.as_ref())
    }

    pub fn instances(&self) -> InstancesApi<'_> {
        InstancesApi::new(self.transport.as_ref())
    }
}
