use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ModelError;

/// Failure reported for one remote call.
///
/// Produced by transports for network failures, non-2xx statuses and portal
/// error bodies, and by the request layer for responses it cannot decode.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct RequestError {
    /// Human-readable message.
    pub message: String,
    /// Machine-readable code, e.g. `"498"` or `"HTTP_500"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// HTTP status, when the failure came from a response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Target URL of the failed call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Additional detail lines returned by the portal.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl RequestError {
    /// Response body could not be decoded into the expected shape.
    pub const CODE_DECODE: &'static str = "DECODE";
    /// Request never produced a response (connect, TLS, timeout).
    pub const CODE_NETWORK: &'static str = "NETWORK";
    /// Response reported `"success": false` without a portal error object.
    pub const CODE_UNSUCCESSFUL: &'static str = "UNSUCCESSFUL";

    /// Create an error carrying only a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            status: None,
            url: None,
            details: Vec::new(),
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }

    /// Get the code, if any.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}

/// Ordered, non-empty list of request errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RequestError>", into = "Vec<RequestError>")]
pub struct ErrorList(Vec<RequestError>);

impl ErrorList {
    /// Create a list holding exactly one error.
    pub fn one(error: RequestError) -> Self {
        Self(vec![error])
    }

    /// Create a list from a vector, rejecting an empty one.
    pub fn new(errors: Vec<RequestError>) -> Result<Self, ModelError> {
        if errors.is_empty() {
            return Err(ModelError::EmptyErrorList);
        }
        Ok(Self(errors))
    }

    /// Borrow the errors in order.
    pub fn as_slice(&self) -> &[RequestError] {
        &self.0
    }

    /// First error of the list.
    pub fn first(&self) -> &RequestError {
        &self.0[0]
    }

    /// Iterate over the errors in order.
    pub fn iter(&self) -> std::slice::Iter<'_, RequestError> {
        self.0.iter()
    }

    /// Append all errors of `other`, keeping order.
    pub fn append(&mut self, other: ErrorList) {
        self.0.extend(other.0);
    }

    pub fn into_vec(self) -> Vec<RequestError> {
        self.0
    }
}

impl From<RequestError> for ErrorList {
    fn from(error: RequestError) -> Self {
        Self::one(error)
    }
}

impl TryFrom<Vec<RequestError>> for ErrorList {
    type Error = ModelError;
    fn try_from(errors: Vec<RequestError>) -> Result<Self, Self::Error> {
        Self::new(errors)
    }
}

impl From<ErrorList> for Vec<RequestError> {
    fn from(list: ErrorList) -> Self {
        list.0
    }
}

impl IntoIterator for ErrorList {
    type Item = RequestError;
    type IntoIter = std::vec::IntoIter<RequestError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_is_message() {
        let e = RequestError::new("498: Invalid token.").with_code("498");
        assert_eq!(e.to_string(), "498: Invalid token.");
        assert_eq!(e.code(), Some("498"));
    }

    #[test]
    fn serde_skips_empty_fields() {
        let e = RequestError::new("boom");
        assert_eq!(serde_json::to_value(&e).unwrap(), json!({"message": "boom"}));

        let e = RequestError::new("boom").with_status(500).with_code("HTTP_500");
        assert_eq!(
            serde_json::to_value(&e).unwrap(),
            json!({"message": "boom", "code": "HTTP_500", "status": 500})
        );
    }

    #[test]
    fn error_list_rejects_empty() {
        assert!(matches!(ErrorList::new(vec![]), Err(ModelError::EmptyErrorList)));
        assert!(serde_json::from_str::<ErrorList>("[]").is_err());
    }

    #[test]
    fn append_keeps_order() {
        let mut list = ErrorList::one(RequestError::new("e1"));
        list.append(ErrorList::one(RequestError::new("e2")));

        let messages: Vec<_> = list.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, ["e1", "e2"]);
        assert_eq!(list.first().message, "e1");
    }
}
