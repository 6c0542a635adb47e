//! yyconfig client - HTTP transport for the yyconfig portal
//!
//! This crate provides:
//! - The [`Transport`] trait every portal endpoint is dispatched through
//! - [`HttpTransport`], a reqwest implementation with credential headers and failover
//! - [`TransportError`], the single error type surfaced to callers

pub mod error;
pub mod http;
pub mod transport;

pub use error::{Result, TransportError};
pub use http::{HttpClientConfig, HttpTransport};
pub use transport::{Method, Transport};
