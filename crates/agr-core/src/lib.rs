pub mod batch;
pub mod chunk;
pub mod client;
pub mod combine;
pub mod error;
pub mod metrics;
pub mod safe;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use batch::{base_options_factory, send_batch_requests};
pub use chunk::chunk;
pub use client::PortalClient;
pub use combine::combine_safe_responses;
pub use error::CoreError;
pub use metrics::{MetricsBackend, MetricsHandle, NoOpMetrics, RequestOutcome, noop_metrics};
pub use safe::send_safe_request;
pub use transport::{Transport, TransportHandle};

pub mod prelude {
    pub use crate::client::PortalClient;
    pub use crate::error::CoreError;
    pub use crate::transport::{Transport, TransportHandle};
    pub use agr_model::{
        AggregateResponse, BatchSize, RequestError, RequestOptions, SafeResponse,
    };
}
