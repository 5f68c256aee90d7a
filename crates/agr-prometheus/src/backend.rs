use std::sync::Arc;

use prometheus::{CounterVec, HistogramOpts, HistogramVec, Opts, Registry, proto::MetricFamily};

use agr_core::{MetricsBackend, RequestOutcome};

/// Prometheus metrics backend for the portal request layer.
///
/// ## Metrics
/// - `agr_requests_started_total{operation}`
/// - `agr_requests_completed_total{operation, outcome}`
/// - `agr_request_duration_seconds{operation}`
/// - `agr_batches_total{operation}`
/// - `agr_batch_chunks_total{operation}` - chunks dispatched across all batches
///
/// `operation` is the last path segment of the request URL (`invite`, ...), `outcome`
/// is `success` or `failure`.
#[derive(Clone)]
pub struct PrometheusMetrics {
    requests_started: CounterVec,
    requests_completed: CounterVec,
    request_duration: HistogramVec,
    batches: CounterVec,
    batch_chunks: CounterVec,
    registry: Arc<Registry>,
}

impl PrometheusMetrics {
    /// Create a backend registering its metrics in `registry`.
    pub fn new_with_registry(registry: Arc<Registry>) -> Result<Self, prometheus::Error> {
        let requests_started = CounterVec::new(
            Opts::new("requests_started_total", "Requests handed to the transport").namespace("agr"),
            &["operation"],
        )?;
        registry.register(Box::new(requests_started.clone()))?;

        let requests_completed = CounterVec::new(
            Opts::new("requests_completed_total", "Requests completed, by outcome")
                .namespace("agr"),
            &["operation", "outcome"],
        )?;
        registry.register(Box::new(requests_completed.clone()))?;

        let request_duration = HistogramVec::new(
            HistogramOpts::new("request_duration_seconds", "Request duration in seconds")
                .namespace("agr")
                .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
            &["operation"],
        )?;
        registry.register(Box::new(request_duration.clone()))?;

        let batches = CounterVec::new(
            Opts::new("batches_total", "Batch dispatches").namespace("agr"),
            &["operation"],
        )?;
        registry.register(Box::new(batches.clone()))?;

        let batch_chunks = CounterVec::new(
            Opts::new("batch_chunks_total", "Chunks dispatched by batches").namespace("agr"),
            &["operation"],
        )?;
        registry.register(Box::new(batch_chunks.clone()))?;

        Ok(Self {
            requests_started,
            requests_completed,
            request_duration,
            batches,
            batch_chunks,
            registry,
        })
    }

    /// Create a backend with its own registry.
    pub fn new() -> Result<Self, prometheus::Error> {
        Self::new_with_registry(Arc::new(Registry::new()))
    }

    /// Gather all metrics for exposition.
    pub fn gather(&self) -> Vec<MetricFamily> {
        self.registry.gather()
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }
}

impl MetricsBackend for PrometheusMetrics {
    fn record_request_started(&self, operation: &str) {
        self.requests_started.with_label_values(&[operation]).inc();
    }

    fn record_request_completed(&self, operation: &str, outcome: RequestOutcome, duration_ms: u64) {
        self.requests_completed
            .with_label_values(&[operation, outcome.as_label()])
            .inc();
        self.request_duration
            .with_label_values(&[operation])
            .observe(duration_ms as f64 / 1000.0);
    }

    fn record_batch_dispatched(&self, operation: &str, chunks: usize) {
        self.batches.with_label_values(&[operation]).inc();
        self.batch_chunks
            .with_label_values(&[operation])
            .inc_by(chunks as f64);
    }
}
