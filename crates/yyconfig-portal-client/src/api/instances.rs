// Instance endpoints

use serde::Serialize;
use serde_json::Value;
use yyconfig_client::{Result, Transport};

use super::payload;
use crate::constants::portal_api_path;

/// Operations over the instances consuming a namespace's releases
#[derive(Clone, Copy)]
pub struct InstancesApi<'a> {
    transport: &'a dyn Transport,
}

impl<'a> InstancesApi<'a> {
    pub(crate) fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    /// Instances running the namespace's active release
    pub async fn get_by_release<B: Serialize + ?Sized>(&self, body: &B) -> Result<Value> {
        self.transport
            .post(portal_api_path::INSTANCES_BY_RELEASE, payload(body)?)
            .await
    }

    /// Instances of a namespace running none of `release_ids`
    pub async fn get_by_release_not_in<Q: Serialize + ?Sized>(
        &self,
        namespace_id: i64,
        release_ids: &[i64],
        query: &Q,
    ) -> Result<Value> {
        self.transport
            .get(
                &portal_api_path::instances_not_in_releases(namespace_id, release_ids),
                payload(query)?,
            )
            .await
    }

    /// Every instance of a namespace, whatever release it runs
    pub async fn get_all_release<B: Serialize + ?Sized>(&self, body: &B) -> Result<Value> {
        self.transport
            .post(portal_api_path::INSTANCES_BY_NAMESPACE, payload(body)?)
            .await
    }

    /// Active release of a namespace.
    ///
    /// Same endpoint as [`ProjectApi::releases_active`](super::ProjectApi::releases_active).
    pub async fn active_release(&self, namespace_id: i64) -> Result<Value> {
        self.transport
            .get(&portal_api_path::active_release(namespace_id), None)
            .await
    }
}
