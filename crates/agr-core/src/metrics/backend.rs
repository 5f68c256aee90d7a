use std::sync::Arc;

/// Request outcome for metrics classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// Call returned a usable response.
    Success,
    /// Call failed; the failure was turned into data.
    Failure,
}

impl RequestOutcome {
    /// Return label value for metrics.
    #[inline]
    pub fn as_label(&self) -> &'static str {
        match self {
            RequestOutcome::Success => "success",
            RequestOutcome::Failure => "failure",
        }
    }
}

/// Backend metrics collection interface.
///
/// `operation` is always a low-cardinality label such as `invite`
/// (see [`crate::metrics::operation_label`]).
pub trait MetricsBackend: Send + Sync + 'static {
    /// Record that a single request was handed to the transport.
    fn record_request_started(&self, operation: &str);
    /// Record request completion with outcome and duration.
    fn record_request_completed(&self, operation: &str, outcome: RequestOutcome, duration_ms: u64);
    /// Record a batch dispatch and the number of chunks it was split into.
    fn record_batch_dispatched(&self, operation: &str, chunks: usize);
}

/// Shared handle to metrics backend.
pub type MetricsHandle = Arc<dyn MetricsBackend>;
