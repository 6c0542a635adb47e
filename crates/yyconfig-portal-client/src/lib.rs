// yyconfig-portal-client: typed API bindings for the yyconfig portal console

pub mod api;
pub mod client;
pub mod config;
pub mod constants;
pub mod model;

pub use api::{ClusterApi, InstancesApi, ProjectApi};
pub use client::PortalClient;
pub use config::PortalClientConfig;
pub use yyconfig_client::{Method, Result, Transport, TransportError};
