//! Batch dispatcher: one request per chunk of items, all in flight at once.
//!
//! Descriptors for every chunk are built up front; the requests are then polled
//! together on the caller's task and the results come back in chunk order.
use agr_model::{BatchSize, RequestOptions, SafeResponse};
use futures::future::join_all;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument};

use crate::{
    chunk::chunk,
    error::CoreError,
    metrics::{MetricsBackend, NoOpMetrics, operation_label},
    safe::execute,
    transport::Transport,
};

/// Send `items` to `url` in chunks of `size` (default 25), one request per chunk.
///
/// `factory` is called exactly once per chunk, in order, before any request is sent;
/// if it fails, nothing is sent and its error is returned. Remote failures never fail
/// this function: they are reported in the corresponding [`SafeResponse`].
///
/// The returned vector has one entry per chunk, in chunk order.
pub async fn send_batch_requests<I, T, F, E>(
    transport: &dyn Transport,
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
        transport,
        &NoOpMetrics,
        url,
        items,
        factory,
        size.unwrap_or_default(),
    )
    .await
}

#[instrument(level = "debug", skip(transport, metrics, items, factory), fields(items = items.len()))]
pub(crate) async fn dispatch<I, T, F, E>(
    transport: &dyn Transport,
    metrics: &dyn MetricsBackend,
    url: &str,
    items: &[I],
    mut factory: F,
    size: BatchSize,
) -> Result<Vec<SafeResponse<T>>, E>
where
    F: FnMut(&[I]) -> Result<RequestOptions, E>,
    T: DeserializeOwned,
{
    let descriptors = chunk(items, size)
        .map(|c| factory(c))
        .collect::<Result<Vec<_>, E>>()?;

    debug!(chunks = descriptors.len(), "dispatching batch");
    metrics.record_batch_dispatched(operation_label(url), descriptors.len());

    let requests = descriptors
        .iter()
        .map(|options| execute::<T>(transport, metrics, url, options));
    Ok(join_all(requests).await)
}

/// Build a descriptor factory from a base template.
///
/// Every call clones `base` (including a fresh params map) and writes the chunk,
/// serialized as a JSON array, under `key`. Descriptors never share state with each
/// other or with `base`.
pub fn base_options_factory<I>(
    base: RequestOptions,
    key: impl Into<String>,
) -> impl Fn(&[I]) -> Result<RequestOptions, CoreError>
where
    I: Serialize,
{
    let key = key.into();
    move |items: &[I]| {
        let value = serde_json::to_value(items).map_err(|e| CoreError::Factory(e.to_string()))?;
        let mut options = base.clone();
        options.params.insert(key.clone(), value);
        Ok(options)
    }
}
