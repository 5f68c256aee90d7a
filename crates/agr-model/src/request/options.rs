use serde::{Deserialize, Serialize};
use serde_json::Value;

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::{HttpMethod, KeyValue, Params};

/// Description of one outbound call.
///
/// Cloning produces a deep copy, including a fresh [`Params`] container.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct RequestOptions {
    /// Parameters sent with the request.
    pub params: Params,
    /// HTTP verb.
    pub http_method: HttpMethod,
    /// Sharing REST root, e.g. `https://org.maps.arcgis.com/sharing/rest`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portal: Option<String>,
    /// Opaque access token appended to the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl RequestOptions {
    /// Create options with empty params and the default method.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the portal root and return updated options.
    pub fn with_portal(mut self, portal: impl Into<String>) -> Self {
        self.portal = Some(portal.into());
        self
    }

    /// Set the access token and return updated options.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the HTTP method and return updated options.
    pub fn with_method(mut self, method: HttpMethod) -> Self {
        self.http_method = method;
        self
    }

    /// Set a single parameter and return updated options.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key, value);
        self
    }

    /// Return a copy of these options with `parameters` written into the copied params.
    ///
    /// `self` is left untouched.
    pub fn with_params(&self, parameters: &[KeyValue]) -> Self {
        let mut out = self.clone();
        out.params.extend_pairs(parameters);
        out
    }
}
