// Release model types

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Body of the release publication endpoint
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReleaseReq {
    pub app_env_cluster_namespace_id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default)]
    pub is_emergency_publish: bool,
}

/// A published snapshot of a namespace's items.
///
/// `abandoned` is set once the release has been rolled back; a release that
/// is not abandoned may still have been superseded by a newer one.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Release {
    pub id: i64,
    pub release_key: String,
    pub name: String,
    pub comment: Option<String>,
    pub configurations: HashMap<String, String>,
    pub abandoned: bool,
}

/// Query of the release diff endpoint
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseCompareQuery {
    pub base_release_id: i64,
    pub to_compare_release_id: i64,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_release_deserialization() {
        let release: Release = serde_json::from_value(json!({
            "id": 7,
            "releaseKey": "20200101-demo-default-application",
            "name": "v7",
            "configurations": {"timeout": "30"},
            "abandoned": false
        }))
        .unwrap();

        assert_eq!(release.id, 7);
        assert!(!release.abandoned);
        assert_eq!(release.configurations["timeout"], "30");
    }

    #[test]
    fn test_rolled_back_release() {
        let release: Release =
            serde_json::from_value(json!({"id": 6, "abandoned": true})).unwrap();
        assert!(release.abandoned);
        assert!(release.configurations.is_empty());
    }

    #[test]
    fn test_compare_query_serialization() {
        let query = ReleaseCompareQuery {
            base_release_id: 5,
            to_compare_release_id: 6,
        };
        assert_eq!(
            serde_json::to_value(query).unwrap(),
            json!({"baseReleaseId": 5, "toCompareReleaseId": 6})
        );
    }

    #[test]
    fn test_create_release_serialization() {
        let req = CreateReleaseReq {
            app_env_cluster_namespace_id: 11,
            name: "v8".to_string(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"appEnvClusterNamespaceId": 11, "name": "v8", "isEmergencyPublish": false})
        );
    }
}
