// Portal API path constants and templates

pub mod portal_api_path {
    use std::borrow::Cow;

    // App
    pub const APP_SEARCH: &str = "/apps/search";
    pub const APPS: &str = "/apps";

    pub fn app(app_id: i64) -> String {
        format!("/apps/{}", app_id)
    }

    pub fn app_nav_tree(app_id: i64) -> String {
        format!("/apps/{}/navtree", app_id)
    }

    // Cluster
    pub fn cluster(app_id: i64, env: &str, cluster_name: &str) -> String {
        format!(
            "/apps/{}/envs/{}/clusters/{}",
            app_id,
            segment(env),
            segment(cluster_name)
        )
    }

    // App namespace
    pub const PUBLIC_APP_NAMESPACES: &str = "/app/namespaces/public";
    pub const NAMESPACE_LIST_WITH_APP: &str = "/namespaceList";

    pub fn public_and_protect_namespaces(app_code: &str) -> String {
        format!("/app/{}/namespaces/publicAndProtect", segment(app_code))
    }

    pub fn authorized_protect_namespaces(app_code: &str) -> String {
        format!("/app/{}/namespaces/protect/authorized", segment(app_code))
    }

    pub fn cluster_namespaces(app_code: &str, env: &str, cluster_name: &str) -> String {
        format!(
            "/apps/{}/envs/{}/clusters/{}/namespaces",
            segment(app_code),
            segment(env),
            segment(cluster_name)
        )
    }

    pub fn associate_namespace(
        app_id: i64,
        namespace_id: i64,
        app_env_cluster_ids: &[i64],
    ) -> String {
        format!(
            "/apps/{}/namespaces/{}/associate/{}",
            app_id,
            namespace_id,
            join_ids(app_env_cluster_ids)
        )
    }

    pub fn create_namespace(app_id: i64, visibility_segment: &str) -> String {
        format!("/apps/{}/namespaces/{}", app_id, segment(visibility_segment))
    }

    pub fn app_namespace(app_id: i64, namespace: &str) -> String {
        format!("/apps/{}/namespaces/{}", app_id, segment(namespace))
    }

    pub fn authorize_namespace(app_id: i64, namespace: &str) -> String {
        format!("/apps/{}/namespaces/{}/authorize", app_id, segment(namespace))
    }

    pub fn associated_public_namespace(
        env: &str,
        app_code: &str,
        cluster_name: &str,
        namespace_name: &str,
    ) -> String {
        format!(
            "/envs/{}/apps/{}/clusters/{}/namespaces/{}/associated-public-namespace",
            segment(env),
            segment(app_code),
            segment(cluster_name),
            segment(namespace_name)
        )
    }

    // Item
    pub const ITEM_CREATE: &str = "/item/createItem";
    pub const ITEM_UPDATE: &str = "/item/updateItem";
    pub const ITEM_DELETE: &str = "/item/deleteItem";
    pub const ITEM_MODIFY_BY_TEXTS: &str = "/item/modifyItemsByTexts";
    pub const ITEM_SYNC_DIFF: &str = "/item/diff";
    pub const ITEM_SYNC: &str = "/item/updateEnv";

    // Release
    pub const RELEASE_CREATE: &str = "/createRelease";
    pub const RELEASE_COMPARE: &str = "/releases/compare";

    pub fn active_release(namespace_id: i64) -> String {
        format!("/namespaceId/{}/releases/active", namespace_id)
    }

    pub fn release_rollback(release_id: i64) -> String {
        format!("/releases/{}/rollback", release_id)
    }

    // Commit
    pub const COMMIT_FIND: &str = "/commit/find";

    // Instance
    pub const INSTANCES_BY_RELEASE: &str = "/instances/by-release";
    pub const INSTANCES_BY_NAMESPACE: &str = "/instances/by-namespace";

    pub fn instances_not_in_releases(namespace_id: i64, release_ids: &[i64]) -> String {
        format!(
            "/instances/namespaceId/{}/releaseIds/{}/by-namespace-and-releases-not-in",
            namespace_id,
            join_ids(release_ids)
        )
    }

    /// Percent-encode a textual path parameter so it stays one segment
    fn segment(value: &str) -> Cow<'_, str> {
        urlencoding::encode(value)
    }

    fn join_ids(ids: &[i64]) -> String {
        ids.iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }

}
