//! Single request that never fails.
use std::time::Instant;

use agr_model::{ErrorList, RequestError, RequestOptions, SafeResponse, decode_body};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::{
    metrics::{MetricsBackend, NoOpMetrics, RequestOutcome, operation_label},
    transport::Transport,
};

/// Send one request and fold any failure into a [`SafeResponse::Failure`].
///
/// - transport error `e` -> `Failure([e])`;
/// - body with a non-empty `errors` array -> `Failure` holding those errors;
/// - body with `"success": false` -> `Failure` with code [`RequestError::CODE_UNSUCCESSFUL`];
/// - body not decodable into `T` -> `Failure` with code [`RequestError::CODE_DECODE`];
/// - otherwise `Success(T)` carrying every response field except the `success`/`errors` envelope.
pub async fn send_safe_request<T>(
    transport: &dyn Transport,
    url: &str,
    options: &RequestOptions,
) -> SafeResponse<T>
where
    T: DeserializeOwned,
{
    execute(transport, &NoOpMetrics, url, options).await
}

pub(crate) async fn execute<T>(
    transport: &dyn Transport,
    metrics: &dyn MetricsBackend,
    url: &str,
    options: &RequestOptions,
) -> SafeResponse<T>
where
    T: DeserializeOwned,
{
    let operation = operation_label(url);
    trace!(url, params = ?options.params, "sending request");
    metrics.record_request_started(operation);

    let started = Instant::now();
    let res = match transport.request(url, options).await {
        Ok(body) => wrap_body(url, body),
        Err(e) => SafeResponse::failed(e),
    };
    let elapsed_ms = started.elapsed().as_millis() as u64;

    match &res {
        SafeResponse::Success(_) => {
            debug!(url, elapsed_ms, "request succeeded");
            metrics.record_request_completed(operation, RequestOutcome::Success, elapsed_ms);
        }
        SafeResponse::Failure(errors) => {
            warn!(url, elapsed_ms, error = %errors.first(), "request failed");
            metrics.record_request_completed(operation, RequestOutcome::Failure, elapsed_ms);
        }
    }
    res
}

fn wrap_body<T: DeserializeOwned>(url: &str, body: Value) -> SafeResponse<T> {
    if let Some(Value::Array(reported)) = body.get("errors") {
        if !reported.is_empty() {
            return SafeResponse::Failure(reported_errors(url, reported));
        }
    }
    if body.get("success") == Some(&Value::Bool(false)) {
        return SafeResponse::failed(
            RequestError::new("request reported success=false")
                .with_code(RequestError::CODE_UNSUCCESSFUL)
                .with_url(url),
        );
    }
    match decode_body(body) {
        Ok(decoded) => SafeResponse::Success(decoded),
        Err(e) => SafeResponse::failed(
            RequestError::new(format!("unexpected response shape: {e}"))
                .with_code(RequestError::CODE_DECODE)
                .with_url(url),
        ),
    }
}

/// Errors listed in the body itself; entries that are not request errors are kept as text.
fn reported_errors(url: &str, reported: &[Value]) -> ErrorList {
    let errors = reported
        .iter()
        .map(|v| {
            serde_json::from_value::<RequestError>(v.clone()).unwrap_or_else(|_| {
                let message = match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                RequestError::new(message)
                    .with_code(RequestError::CODE_UNSUCCESSFUL)
                    .with_url(url)
            })
        })
        .collect();
    ErrorList::new(errors).unwrap_or_else(|_| {
        ErrorList::one(
            RequestError::new("request reported errors")
                .with_code(RequestError::CODE_UNSUCCESSFUL)
                .with_url(url),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeTransport, RecordingMetrics};
    use serde::Deserialize;
    use serde_json::{Map, json};

    #[tokio::test]
    async fn delegates_url_and_options_to_transport() {
        let transport = FakeTransport::ok(json!({}));
        let opts = RequestOptions::new().with_param("key", "value");

        let _: SafeResponse = send_safe_request(&transport, "fake-url", &opts).await;

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "fake-url");
        assert_eq!(calls[0].1, opts);
    }

    #[tokio::test]
    async fn success_keeps_all_response_fields() {
        let transport = FakeTransport::ok(json!({"success": true, "name": "Mickey Mouse", "age": 95}));

        let res: SafeResponse<Map<String, Value>> =
            send_safe_request(&transport, "fake-url", &RequestOptions::new()).await;

        let body = res.body().expect("expected success");
        assert_eq!(body.get("name"), Some(&json!("Mickey Mouse")));
        assert_eq!(body.get("age"), Some(&json!(95)));
        assert_eq!(
            serde_json::to_value(&res).unwrap(),
            json!({"success": true, "name": "Mickey Mouse", "age": 95})
        );
    }

    #[tokio::test]
    async fn success_decodes_typed_body() {
        #[derive(Debug, Deserialize, PartialEq)]
        #[serde(rename_all = "camelCase")]
        struct Added {
            num_added: u32,
        }

        let transport = FakeTransport::ok(json!({"numAdded": 2}));
        let res: SafeResponse<Added> =
            send_safe_request(&transport, "fake-url", &RequestOptions::new()).await;

        assert_eq!(res, SafeResponse::Success(Added { num_added: 2 }));
    }

    #[tokio::test]
    async fn transport_error_becomes_single_error_failure() {
        let error = RequestError::new("This is not a drill").with_code("500");
        let transport = FakeTransport::err(error.clone());

        let res: SafeResponse = send_safe_request(&transport, "fake-url", &RequestOptions::new()).await;

        assert!(!res.is_success());
        assert_eq!(res.errors(), &[error]);
    }

    #[tokio::test]
    async fn in_band_unsuccessful_body_is_a_failure() {
        let transport = FakeTransport::ok(json!({"success": false}));

        let res: SafeResponse<()> = send_safe_request(&transport, "fake-url", &RequestOptions::new()).await;

        assert_eq!(res.errors().len(), 1);
        assert_eq!(res.errors()[0].code(), Some(RequestError::CODE_UNSUCCESSFUL));
    }

    #[tokio::test]
    async fn undecodable_body_is_a_failure() {
        #[derive(Debug, Deserialize)]
        #[allow(dead_code)]
        struct Strict {
            required: String,
        }

        let transport = FakeTransport::ok(json!({"other": 1}));
        let res: SafeResponse<Strict> =
            send_safe_request(&transport, "https://h/x", &RequestOptions::new()).await;

        let err = &res.errors()[0];
        assert_eq!(err.code(), Some(RequestError::CODE_DECODE));
        assert_eq!(err.url.as_deref(), Some("https://h/x"));
    }

    #[tokio::test]
    async fn body_with_reported_errors_is_a_failure_that_survives_serde() {
        let transport = FakeTransport::ok(json!({"errors": [{"message": "partial"}, "plain"]}));

        let res: SafeResponse = send_safe_request(&transport, "https://h/x", &RequestOptions::new()).await;

        assert!(!res.is_success());
        assert_eq!(res.errors()[0], RequestError::new("partial"));
        assert_eq!(res.errors()[1].message, "plain");
        assert_eq!(res.errors()[1].code(), Some(RequestError::CODE_UNSUCCESSFUL));

        let wire = serde_json::to_value(&res).unwrap();
        assert_eq!(wire["success"], json!(false));
        let back: SafeResponse = serde_json::from_value(wire).unwrap();
        assert_eq!(back, res);
    }

    #[tokio::test]
    async fn empty_errors_envelope_is_dropped_from_success() {
        let transport = FakeTransport::ok(json!({"success": true, "errors": [], "id": "g1"}));

        let res: SafeResponse = send_safe_request(&transport, "fake-url", &RequestOptions::new()).await;

        let wire = serde_json::to_value(&res).unwrap();
        assert_eq!(wire, json!({"success": true, "id": "g1"}));
        let back: SafeResponse = serde_json::from_value(wire).unwrap();
        assert_eq!(back, res);
    }

    #[tokio::test]
    async fn records_metrics_per_outcome() {
        let metrics = RecordingMetrics::default();
        let ok = FakeTransport::ok(json!({}));
        let bad = FakeTransport::err(RequestError::new("x"));

        let _: SafeResponse = execute(&ok, &metrics, "https://h/a/invite", &RequestOptions::new()).await;
        let _: SafeResponse = execute(&bad, &metrics, "https://h/a/invite", &RequestOptions::new()).await;

        assert_eq!(*metrics.started.lock().unwrap(), ["invite", "invite"]);
        assert_eq!(
            *metrics.completed.lock().unwrap(),
            [
                ("invite".to_string(), RequestOutcome::Success),
                ("invite".to_string(), RequestOutcome::Failure)
            ]
        );
    }
}
