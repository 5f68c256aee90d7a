//! Seam to the HTTP layer.
//!
//! The request core never opens connections itself; it hands every
//! [`RequestOptions`] to a [`Transport`] and wraps whatever comes back.
use std::sync::Arc;

use agr_model::{RequestError, RequestOptions};
use async_trait::async_trait;
use serde_json::Value;

/// Performs one HTTP call and returns the parsed JSON body.
///
/// Implementations must report every failure (network, non-2xx status,
/// portal error body) as a [`RequestError`] instead of panicking. Timeouts, if
/// any, are the implementation's concern.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `options` to `url`.
    async fn request(&self, url: &str, options: &RequestOptions) -> Result<Value, RequestError>;
}

/// Shared handle to a transport.
pub type TransportHandle = Arc<dyn Transport>;
