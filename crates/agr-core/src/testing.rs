//! In-memory transport and metrics used by unit tests.
use std::{
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use agr_model::{RequestError, RequestOptions};
use async_trait::async_trait;
use serde_json::Value;

use crate::{MetricsBackend, RequestOutcome, Transport};

type Responder = dyn Fn(&RequestOptions) -> Result<Value, RequestError> + Send + Sync;

/// Transport answering every call through a closure and recording what it received.
pub struct FakeTransport {
    responder: Box<Responder>,
    delay: Option<Box<dyn Fn(&RequestOptions) -> Duration + Send + Sync>>,
    calls: Mutex<Vec<(String, RequestOptions)>>,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl FakeTransport {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&RequestOptions) -> Result<Value, RequestError> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            delay: None,
            calls: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        }
    }

    /// Always answer with `body`.
    pub fn ok(body: Value) -> Self {
        Self::new(move |_| Ok(body.clone()))
    }

    /// Always fail with a copy of `error`.
    pub fn err(error: RequestError) -> Self {
        Self::new(move |_| Err(error.clone()))
    }

    /// Sleep before answering, per call.
    pub fn with_delay<D>(mut self, delay: D) -> Self
    where
        D: Fn(&RequestOptions) -> Duration + Send + Sync + 'static,
    {
        self.delay = Some(Box::new(delay));
        self
    }

    pub fn calls(&self) -> Vec<(String, RequestOptions)> {
        self.calls.lock().unwrap().clone()
    }

    /// Highest number of calls that were pending at the same time.
    pub fn peak_in_flight(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn request(&self, url: &str, options: &RequestOptions) -> Result<Value, RequestError> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), options.clone()));
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        if let Some(delay) = &self.delay {
            tokio::time::sleep(delay(options)).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        (self.responder)(options)
    }
}

/// Metrics backend counting what it is told.
#[derive(Default)]
pub struct RecordingMetrics {
    pub started: Mutex<Vec<String>>,
    pub completed: Mutex<Vec<(String, RequestOutcome)>>,
    pub batches: Mutex<Vec<(String, usize)>>,
}

impl RecordingMetrics {
    pub fn handle() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

impl MetricsBackend for RecordingMetrics {
    fn record_request_started(&self, operation: &str) {
        self.started.lock().unwrap().push(operation.to_string());
    }

    fn record_request_completed(&self, operation: &str, outcome: RequestOutcome, _: u64) {
        self.completed
            .lock()
            .unwrap()
            .push((operation.to_string(), outcome));
    }

    fn record_batch_dispatched(&self, operation: &str, chunks: usize) {
        self.batches
            .lock()
            .unwrap()
            .push((operation.to_string(), chunks));
    }
}
