// App (project) model types

use serde::{Deserialize, Serialize};

/// Department an app belongs to; its code prefixes shared namespace names
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Department {
    pub id: Option<i64>,
    pub name: String,
    pub code: String,
}

/// App record as returned by the portal
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct App {
    pub id: Option<i64>,
    pub app_code: String,
    pub name: String,
    pub department: Option<Department>,
    pub app_owner_id: Option<i64>,
    pub app_admin_ids: Vec<i64>,
    pub app_test_ids: Vec<i64>,
    pub org_id: Option<i64>,
}

/// Reference to an app by id, as used in authorization lists
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppRef {
    pub id: i64,
}

impl From<i64> for AppRef {
    fn from(id: i64) -> Self {
        Self { id }
    }
}

/// Filter for the app search endpoint
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSearchQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}
