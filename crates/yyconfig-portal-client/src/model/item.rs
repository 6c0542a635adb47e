// Configuration item and sync model types

use serde::{Deserialize, Serialize};

/// A single configuration key-value item of a namespace
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_env_cluster_namespace_id: Option<i64>,
    pub key: String,
    #[serde(default)]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_num: Option<i32>,
}

impl Item {
    pub fn new(namespace_id: i64, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            app_env_cluster_namespace_id: Some(namespace_id),
            key: key.into(),
            value: value.into(),
            ..Default::default()
        }
    }
}

/// Batch of item changes to a namespace
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemChangeSet {
    pub create_items: Vec<Item>,
    pub update_items: Vec<Item>,
    pub delete_items: Vec<Item>,
}

impl ItemChangeSet {
    pub fn is_empty(&self) -> bool {
        self.create_items.is_empty() && self.update_items.is_empty() && self.delete_items.is_empty()
    }
}

/// Body of the text-mode edit: the whole item set of a namespace as one blob
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyItemsByTextsReq {
    pub app_env_cluster_namespace_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    pub config_text: String,
}

/// Fully qualified namespace: app, environment, cluster and name
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceIdentifier {
    pub app_code: String,
    pub env: String,
    pub cluster_name: String,
    pub namespace_name: String,
}

/// Body of the sync and sync-diff endpoints
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceSyncModel {
    pub sync_to_namespaces: Vec<NamespaceIdentifier>,
    pub sync_items: Vec<Item>,
}

impl NamespaceSyncModel {
    pub fn is_empty(&self) -> bool {
        self.sync_to_namespaces.is_empty() || self.sync_items.is_empty()
    }
}

/// Filter for the change-history endpoint
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitFindQuery {
    pub app_env_cluster_namespace_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}
