//! Metrics collection abstraction for the request layer.
//!
//! Backends (prometheus, statsd, etc) implement [`MetricsBackend`] and are injected via
//! [`crate::PortalClient::with_metrics`]. Free functions in this crate use [`NoOpMetrics`].
mod backend;
pub use backend::{MetricsBackend, MetricsHandle, RequestOutcome};

mod noop;
pub use noop::NoOpMetrics;

use std::sync::Arc;

/// Create a no-op metrics handle.
#[inline]
pub fn noop_metrics() -> MetricsHandle {
    Arc::new(NoOpMetrics)
}

/// Derive a bounded metrics label from a request URL: its last path segment.
///
/// `https://host/sharing/rest/community/groups/abc/invite?f=json` -> `invite`.
pub fn operation_label(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.trim_end_matches('/')
        .rsplit('/')
        .find(|s| !s.is_empty())
        .unwrap_or("unknown")
}

#[cfg(test)]
mod tests {
    use super::operation_label;

    #[test]
    fn label_is_last_path_segment() {
        assert_eq!(
            operation_label("https://www.arcgis.com/sharing/rest/community/groups/g1/invite"),
            "invite"
        );
        assert_eq!(operation_label("https://host/a/b/?f=json"), "b");
        assert_eq!(operation_label("fake-url"), "fake-url");
        assert_eq!(operation_label(""), "unknown");
    }
}
