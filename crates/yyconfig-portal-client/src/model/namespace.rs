// Namespace model types

use serde::{Deserialize, Serialize};

use super::app::AppRef;

/// Visibility kind of an app namespace
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamespaceVisibility {
    Private,
    #[serde(rename = "protect")]
    Protected,
    Public,
}

impl NamespaceVisibility {
    /// Path segment of the creation endpoint
    pub fn path_segment(&self) -> &'static str {
        match self {
            NamespaceVisibility::Private => "private",
            NamespaceVisibility::Protected => "protect",
            NamespaceVisibility::Public => "public",
        }
    }
}

impl std::fmt::Display for NamespaceVisibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path_segment())
    }
}

/// Body of the namespace creation endpoints.
///
/// `authorized_app` is only honoured for protected namespaces and
/// `open_namespace_type_id` only for shared (protected or public) ones.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppNamespaceModel {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authorized_app: Vec<AppRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_namespace_type_id: Option<i64>,
}

impl AppNamespaceModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// Body of the namespace binding lookup
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceListReq {
    pub app_code: String,
    pub namespace: String,
}

/// One app/env/cluster binding of a namespace
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NamespaceListResp {
    pub id: i64,
    pub env: String,
    pub name: String,
}

/// Namespace bindings grouped by environment
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NamespaceEnvTree {
    pub env: String,
    pub namespace_list_resps: Vec<NamespaceListResp>,
}
