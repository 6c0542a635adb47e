//! Transport abstraction consumed by the portal API groupings
//!
//! A transport performs exactly one HTTP round trip per call and resolves with
//! the decoded JSON body. Base-URL resolution and credential headers are the
//! transport's business; callers only supply the request path.

use serde_json::Value;

use crate::error::Result;

/// HTTP verbs understood by the portal API
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared HTTP capability behind every portal endpoint
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Dispatch one request. `payload` is sent as the query string for GET
    /// and as a JSON body for every other verb.
    async fn request(&self, method: Method, path: &str, payload: Option<Value>) -> Result<Value>;

    async fn get(&self, path: &str, query: Option<Value>) -> Result<Value> {
        self.request(Method::Get, path, query).await
    }

    async fn post(&self, path: &str, body: Option<Value>) -> Result<Value> {
        self.request(Method::Post, path, body).await
    }

    async fn put(&self, path: &str, body: Option<Value>) -> Result<Value> {
        self.request(Method::Put, path, body).await
    }

    async fn delete(&self, path: &str, body: Option<Value>) -> Result<Value> {
        self.request(Method::Delete, path, body).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Transport that echoes the request back as JSON
    #[derive(Default)]
    struct EchoTransport {
        calls: Mutex<Vec<Method>>,
    }

    #[async_trait::async_trait]
    impl Transport for EchoTransport {
        async fn request(
            &self,
            method: Method,
            path: &str,
            payload: Option<Value>,
        ) -> Result<Value> {
            self.calls
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .push(method);
            Ok(serde_json::json!({
                "method": method.as_str(),
                "path": path,
                "payload": payload,
            }))
        }
    }

    #[test]
    fn test_method_display() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Post.as_str(), "POST");
        assert_eq!(Method::Put.as_str(), "PUT");
        assert_eq!(Method::Delete.to_string(), "DELETE");
    }

    #[tokio::test]
    async fn test_provided_methods_map_to_verbs() {
        let transport = EchoTransport::default();

        let resp = transport.get("/apps", None).await.unwrap();
        assert_eq!(resp["method"], "GET");
        assert_eq!(resp["path"], "/apps");
        assert!(resp["payload"].is_null());

        let resp = transport
            .post("/apps", Some(serde_json::json!({"name": "demo"})))
            .await
            .unwrap();
        assert_eq!(resp["method"], "POST");
        assert_eq!(resp["payload"]["name"], "demo");

        transport.put("/apps/1", None).await.unwrap();
        transport.delete("/apps/1", None).await.unwrap();

        let calls = transport.calls.lock().unwrap().clone();
        assert_eq!(
            calls,
            vec![Method::Get, Method::Post, Method::Put, Method::Delete]
        );
    }
}
