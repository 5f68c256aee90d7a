use std::fmt;

use agr_model::{BatchSize, RequestOptions, SafeResponse};
use serde::de::DeserializeOwned;

use crate::{
    batch::dispatch,
    metrics::{MetricsHandle, noop_metrics},
    safe::execute,
    transport::TransportHandle,
};

/// Entry point for endpoint wrappers.
///
/// Bundles the transport, the default batch size and the metrics backend, so
/// callers only supply a URL, options and (for batches) items plus a factory.
#[derive(Clone)]
pub struct PortalClient {
    transport: TransportHandle,
    metrics: MetricsHandle,
    batch_size: BatchSize,
}

impl PortalClient {
    /// Create a client with the default batch size and no-op metrics.
    pub fn new(transport: TransportHandle) -> Self {
        Self {
            transport,
            metrics: noop_metrics(),
            batch_size: BatchSize::default(),
        }
    }

    /// Replace the default batch size and return updated client.
    pub fn with_batch_size(mut self, batch_size: BatchSize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Replace the metrics backend and return updated client.
    pub fn with_metrics(mut self, metrics: MetricsHandle) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn batch_size(&self) -> BatchSize {
        self.batch_size
    }

    pub fn transport(&self) -> &TransportHandle {
        &self.transport
    }

    pub fn metrics(&self) -> &MetricsHandle {
        &self.metrics
    }

    /// See [`crate::send_safe_request`].
    pub async fn send_safe<T>(&self, url: &str, options: &RequestOptions) -> SafeResponse<T>
    where
        T: DeserializeOwned,
    {
        execute(self.transport.as_ref(), self.metrics.as_ref(), url, options).await
    }

    /// See [`crate::send_batch_requests`]; `size` falls back to the client's batch size.
    pub async fn send_batch<I, T, F, E>(
        &self,
        url: &str,
        items: &[I],
        factory: F,
        size: Option<BatchSize>,
    ) -> Result<Vec<SafeResponse<T>>, E>
    where
        F: FnMut(&[I]) -> Result<RequestOptions, E>,
        T: DeserializeOwned,
    {
        dispatch(
            self.transport.as_ref(),
            self.metrics.as_ref(),
            url,
            items,
            factory,
            size.unwrap_or(self.batch_size),
        )
        .await
    }
}

impl fmt::Debug for PortalClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PortalClient")
            .field("batch_size", &self.batch_size)
            .field("transport", &"<handle>")
            .field("metrics", &"<handle>")
            .finish()
    }
}
