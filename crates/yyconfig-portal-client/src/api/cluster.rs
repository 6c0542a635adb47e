// Cluster endpoints

use serde_json::Value;
use yyconfig_client::{Result, Transport};

use crate::constants::portal_api_path;

/// Cluster operations of the portal API
#[derive(Clone, Copy)]
pub struct ClusterApi<'a> {
    transport: &'a dyn Transport,
}

impl<'a> ClusterApi<'a> {
    pub(crate) fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    /// Create cluster `cluster_name` under the app's `env`
    pub async fn cluster_add(&self, app_id: i64, env: &str, cluster_name: &str) -> Result<Value> {
        self.transport
            .post(&portal_api_path::cluster(app_id, env, cluster_name), None)
            .await
    }
}
