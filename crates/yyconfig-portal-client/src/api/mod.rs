// Endpoint groupings of the portal API

pub mod cluster;
pub mod instances;
pub mod project;

use serde::Serialize;
use serde_json::Value;
use yyconfig_client::Result;

pub use cluster::ClusterApi;
pub use instances::InstancesApi;
pub use project::ProjectApi;

/// Encode a query or body before dispatch; nothing is sent if this fails.
///
/// A value encoding to `null` means no payload at all.
fn payload<T: Serialize + ?Sized>(value: &T) -> Result<Option<Value>> {
    match serde_json::to_value(value)? {
        Value::Null => Ok(None),
        value => Ok(Some(value)),
    }
}
