// Project endpoints: apps, namespaces, items, releases and sync

use serde::Serialize;
use serde_json::Value;
use yyconfig_client::{Result, Transport};

use super::payload;
use crate::{
    constants::portal_api_path,
    model::{AppRef, NamespaceVisibility},
};

/// App, namespace, item and release operations of the portal API.
///
/// Every call is one request; nothing is retried or cached, and the payload
/// the transport decodes is returned as is. Query and body arguments accept
/// any serializable value, typically one of the [`model`](crate::model) types.
#[derive(Clone, Copy)]
pub struct ProjectApi<'a> {
    transport: &'a dyn Transport,
}

impl<'a> ProjectApi<'a> {
    pub(crate) fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    // ============================================================================
    // App APIs
    // ============================================================================

    /// Search apps by filter criteria
    pub async fn get_project<Q: Serialize + ?Sized>(&self, query: &Q) -> Result<Value> {
        self.transport
            .get(portal_api_path::APP_SEARCH, payload(query)?)
            .await
    }

    pub async fn get_project_all<Q: Serialize + ?Sized>(&self, query: &Q) -> Result<Value> {
        self.transport
            .get(portal_api_path::APPS, payload(query)?)
            .await
    }

    pub async fn project_add<B: Serialize + ?Sized>(&self, body: &B) -> Result<Value> {
        self.transport
            .post(portal_api_path::APPS, payload(body)?)
            .await
    }

    pub async fn project_edit<B: Serialize + ?Sized>(
        &self,
        app_id: i64,
        body: &B,
    ) -> Result<Value> {
        self.transport
            .put(&portal_api_path::app(app_id), payload(body)?)
            .await
    }

    pub async fn project_detail(&self, app_id: i64) -> Result<Value> {
        self.transport.get(&portal_api_path::app(app_id), None).await
    }

    /// Navigation tree of environments, clusters and namespaces
    pub async fn env_list(&self, app_id: i64) -> Result<Value> {
        self.transport
            .get(&portal_api_path::app_nav_tree(app_id), None)
            .await
    }

    // ============================================================================
    // Namespace APIs
    // ============================================================================

    /// Public namespaces plus the protected ones `app_code` is authorized for
    pub async fn public_namespace_list<Q: Serialize + ?Sized>(
        &self,
        app_code: &str,
        query: &Q,
    ) -> Result<Value> {
        self.transport
            .get(
                &portal_api_path::public_and_protect_namespaces(app_code),
                payload(query)?,
            )
            .await
    }

    pub async fn public_namespaces_all(&self) -> Result<Value> {
        self.transport
            .get(portal_api_path::PUBLIC_APP_NAMESPACES, None)
            .await
    }

    pub async fn protect_namespaces_authorized(&self, app_code: &str) -> Result<Value> {
        self.transport
            .get(
                &portal_api_path::authorized_protect_namespaces(app_code),
                None,
            )
            .await
    }

    /// Namespaces of one app/env/cluster scope
    pub async fn namespace_list(
        &self,
        app_code: &str,
        env: &str,
        cluster_name: &str,
    ) -> Result<Value> {
        self.transport
            .get(
                &portal_api_path::cluster_namespaces(app_code, env, cluster_name),
                None,
            )
            .await
    }

    /// Associate shared namespace `namespace_id` into the given app/env/cluster scopes
    pub async fn public_namespace_relation<B: Serialize + ?Sized>(
        &self,
        app_id: i64,
        namespace_id: i64,
        app_env_cluster_ids: &[i64],
        body: &B,
    ) -> Result<Value> {
        self.transport
            .post(
                &portal_api_path::associate_namespace(app_id, namespace_id, app_env_cluster_ids),
                payload(body)?,
            )
            .await
    }

    pub async fn namespace_add<B: Serialize + ?Sized>(
        &self,
        app_id: i64,
        visibility: NamespaceVisibility,
        body: &B,
    ) -> Result<Value> {
        self.transport
            .post(
                &portal_api_path::create_namespace(app_id, visibility.path_segment()),
                payload(body)?,
            )
            .await
    }

    pub async fn namespace_private_add<B: Serialize + ?Sized>(
        &self,
        app_id: i64,
        body: &B,
    ) -> Result<Value> {
        self.namespace_add(app_id, NamespaceVisibility::Private, body)
            .await
    }

    pub async fn namespace_protect_add<B: Serialize + ?Sized>(
        &self,
        app_id: i64,
        body: &B,
    ) -> Result<Value> {
        self.namespace_add(app_id, NamespaceVisibility::Protected, body)
            .await
    }

    pub async fn namespace_public_add<B: Serialize + ?Sized>(
        &self,
        app_id: i64,
        body: &B,
    ) -> Result<Value> {
        self.namespace_add(app_id, NamespaceVisibility::Public, body)
            .await
    }

    /// Environment-grouped bindings of a namespace; sent as a body because of its size
    pub async fn namespace_list_with_app<B: Serialize + ?Sized>(
        &self,
        body: &B,
    ) -> Result<Value> {
        self.transport
            .post(portal_api_path::NAMESPACE_LIST_WITH_APP, payload(body)?)
            .await
    }

    /// Shared namespace a private namespace is linked to, if any
    pub async fn associated_public_namespace<Q: Serialize + ?Sized>(
        &self,
        env: &str,
        app_code: &str,
        cluster_name: &str,
        namespace_name: &str,
        query: &Q,
    ) -> Result<Value> {
        self.transport
            .get(
                &portal_api_path::associated_public_namespace(
                    env,
                    app_code,
                    cluster_name,
                    namespace_name,
                ),
                payload(query)?,
            )
            .await
    }

    /// Protected namespace detail, including the authorized-app list
    pub async fn app_protect_namespace(&self, app_id: i64, namespace: &str) -> Result<Value> {
        self.transport
            .get(&portal_api_path::app_namespace(app_id, namespace), None)
            .await
    }

    /// Replace the authorized-app list of a protected namespace
    pub async fn authorize_protect_app(
        &self,
        app_id: i64,
        namespace: &str,
        apps: &[AppRef],
    ) -> Result<Value> {
        self.transport
            .post(
                &portal_api_path::authorize_namespace(app_id, namespace),
                payload(apps)?,
            )
            .await
    }

    // ============================================================================
    // Item APIs (all POST, whatever the operation)
    // ============================================================================

    pub async fn config_add<B: Serialize + ?Sized>(&self, body: &B) -> Result<Value> {
        self.transport
            .post(portal_api_path::ITEM_CREATE, payload(body)?)
            .await
    }

    pub async fn config_update<B: Serialize + ?Sized>(&self, body: &B) -> Result<Value> {
        self.transport
            .post(portal_api_path::ITEM_UPDATE, payload(body)?)
            .await
    }

    pub async fn config_delete<B: Serialize + ?Sized>(&self, body: &B) -> Result<Value> {
        self.transport
            .post(portal_api_path::ITEM_DELETE, payload(body)?)
            .await
    }

    /// Replace the item set of a namespace from a text blob
    pub async fn modify_items_by_texts<B: Serialize + ?Sized>(&self, body: &B) -> Result<Value> {
        self.transport
            .post(portal_api_path::ITEM_MODIFY_BY_TEXTS, payload(body)?)
            .await
    }

    /// Change-history commits matching the filter
    pub async fn commit_find<Q: Serialize + ?Sized>(&self, query: &Q) -> Result<Value> {
        self.transport
            .get(portal_api_path::COMMIT_FIND, payload(query)?)
            .await
    }

    /// Dry run of [`sync_config`](Self::sync_config) against the target namespaces
    pub async fn sync_config_diff<B: Serialize + ?Sized>(&self, body: &B) -> Result<Value> {
        self.transport
            .post(portal_api_path::ITEM_SYNC_DIFF, payload(body)?)
            .await
    }

    pub async fn sync_config<B: Serialize + ?Sized>(&self, body: &B) -> Result<Value> {
        self.transport
            .post(portal_api_path::ITEM_SYNC, payload(body)?)
            .await
    }

    // ============================================================================
    // Release APIs
    // ============================================================================

    /// Publish the namespace's current items as a new release
    pub async fn create_release<B: Serialize + ?Sized>(&self, body: &B) -> Result<Value> {
        self.transport
            .post(portal_api_path::RELEASE_CREATE, payload(body)?)
            .await
    }

    pub async fn releases_active(&self, namespace_id: i64) -> Result<Value> {
        self.transport
            .get(&portal_api_path::active_release(namespace_id), None)
            .await
    }

    pub async fn releases_compare<Q: Serialize + ?Sized>(&self, query: &Q) -> Result<Value> {
        self.transport
            .get(portal_api_path::RELEASE_COMPARE, payload(query)?)
            .await
    }

    /// Move the active release pointer back from `release_id`
    pub async fn roll_back(&self, release_id: i64) -> Result<Value> {
        self.transport
            .put(&portal_api_path::release_rollback(release_id), None)
            .await
    }
}
