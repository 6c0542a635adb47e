// Instance model types

use serde::{Deserialize, Serialize};

/// A running process that fetched configuration from the config service
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Instance {
    pub id: i64,
    pub ip: String,
    pub data_center: Option<String>,
    pub configs: Vec<InstanceConfig>,
}

/// The release an instance last fetched for one namespace
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstanceConfig {
    pub id: i64,
    pub release_key: String,
    pub release_delivery_time: Option<String>,
}

/// Body of the instance lookups
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceReleaseQuery {
    pub namespace_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}
