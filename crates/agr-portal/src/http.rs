//! `reqwest`-backed [`Transport`].
//!
//! Sends parameters the way the sharing REST API expects them: `f=json` plus the
//! token, GET as query string, POST as an url-encoded form. Portal error bodies
//! (`{"error": {...}}` with a 200 status) are reported as failures.
use std::{sync::Arc, time::Duration};

use agr_core::{PortalClient, Transport};
use agr_model::{HttpMethod, RequestError, RequestOptions};
use async_trait::async_trait;
use serde_json::Value;
use tracing::trace;

use crate::{ClientConfig, PortalError};

/// HTTP transport over a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport with timeout and user agent taken from `cfg`.
    ///
    /// Fails with [`PortalError::InvalidConfig`] when `cfg` does not validate.
    pub fn new(cfg: &ClientConfig) -> Result<Self, PortalError> {
        cfg.validate()?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(cfg.timeout_ms))
            .user_agent(cfg.user_agent.as_str())
            .build()
            .map_err(|e| PortalError::HttpClient(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap an existing client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

/// Build a [`PortalClient`] over HTTP from configuration.
pub fn connect(cfg: &ClientConfig) -> Result<PortalClient, PortalError> {
    let transport = ReqwestTransport::new(cfg)?;
    Ok(PortalClient::new(Arc::new(transport)).with_batch_size(cfg.batch_size))
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn request(&self, url: &str, options: &RequestOptions) -> Result<Value, RequestError> {
        let params = encode_params(options);
        trace!(url, method = %options.http_method, params = params.len(), "http request");

        let req = match options.http_method {
            HttpMethod::Get => self.client.get(url).query(&params),
            HttpMethod::Post => self.client.post(url).form(&params),
        };
        let resp = req.send().await.map_err(|e| {
            RequestError::new(format!("request failed: {e}"))
                .with_code(RequestError::CODE_NETWORK)
                .with_url(url)
        })?;

        let status = resp.status();
        if !status.is_success() {
            let code = status.as_u16();
            return Err(RequestError::new(format!(
                "HTTP {code}: {}",
                status.canonical_reason().unwrap_or("request failed")
            ))
            .with_code(format!("HTTP_{code}"))
            .with_status(code)
            .with_url(url));
        }

        let body: Value = resp.json().await.map_err(|e| {
            RequestError::new(format!("invalid JSON response: {e}"))
                .with_code(RequestError::CODE_DECODE)
                .with_status(status.as_u16())
                .with_url(url)
        })?;

        match body.get("error") {
            Some(err) => Err(portal_error(url, err)),
            None => Ok(body),
        }
    }
}

/// Flatten options into wire parameters.
///
/// `f=json` is added unless already set. `options.token`, when present, replaces any
/// `token` parameter. Null values are dropped.
pub fn encode_params(options: &RequestOptions) -> Vec<(String, String)> {
    let mut out = Vec::with_capacity(options.params.len() + 2);
    if options.params.get("f").is_none() {
        out.push(("f".to_string(), "json".to_string()));
    }
    if let Some(token) = &options.token {
        out.push(("token".to_string(), token.clone()));
    }
    for (key, value) in options.params.iter() {
        if options.token.is_some() && key == "token" {
            continue;
        }
        if let Some(encoded) = encode_value(value) {
            out.push((key.to_string(), encoded));
        }
    }
    out
}

fn encode_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(_) | Value::Number(_) => Some(value.to_string()),
        Value::Array(items) if items.iter().all(is_scalar) => Some(
            items
                .iter()
                .filter_map(encode_value)
                .collect::<Vec<_>>()
                .join(","),
        ),
        other => Some(other.to_string()),
    }
}

fn is_scalar(v: &Value) -> bool {
    matches!(v, Value::String(_) | Value::Number(_) | Value::Bool(_))
}

/// Convert a portal `error` object into a [`RequestError`] with `"{code}: {message}"`.
fn portal_error(url: &str, err: &Value) -> RequestError {
    let message = err
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("Unknown error");
    let code = match err.get("code") {
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::String(s)) => Some(s.clone()),
        _ => None,
    };
    let details = err
        .get("details")
        .and_then(Value::as_array)
        .map(|d| d.iter().filter_map(Value::as_str).map(str::to_string).collect())
        .unwrap_or_default();

    let error = match &code {
        Some(code) => RequestError::new(format!("{code}: {message}")).with_code(code.as_str()),
        None => RequestError::new(message),
    };
    error.with_details(details).with_url(url)
}
