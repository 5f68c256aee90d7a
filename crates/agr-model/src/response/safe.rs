use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{DeserializeOwned, Error as _},
    ser::Error as _,
};
use serde_json::{Map, Value};

use crate::{ErrorList, RequestError};

/// Outcome of one remote call that never raises.
///
/// On the wire this is `{"success": true, ...fields of T}` or
/// `{"success": false, "errors": [...]}`. A failure always carries at least one
/// error and a success never carries any.
#[derive(Debug, Clone, PartialEq)]
pub enum SafeResponse<T = Map<String, Value>> {
    /// Call succeeded; `T` holds the remaining response fields.
    Success(T),
    /// Call failed with one or more errors.
    Failure(ErrorList),
}

/// Fold of several [`SafeResponse`] values: just the verdict and the errors.
pub type AggregateResponse = SafeResponse<()>;

impl<T> SafeResponse<T> {
    /// Failure holding exactly one error.
    pub fn failed(error: RequestError) -> Self {
        Self::Failure(ErrorList::one(error))
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Errors of a failure; empty for a success.
    pub fn errors(&self) -> &[RequestError] {
        match self {
            Self::Success(_) => &[],
            Self::Failure(errors) => errors.as_slice(),
        }
    }

    /// Response fields of a success.
    pub fn body(&self) -> Option<&T> {
        match self {
            Self::Success(body) => Some(body),
            Self::Failure(_) => None,
        }
    }

    pub fn into_result(self) -> Result<T, ErrorList> {
        match self {
            Self::Success(body) => Ok(body),
            Self::Failure(errors) => Err(errors),
        }
    }

    /// Map the success body, keeping failures as they are.
    pub fn map<U, F>(self, f: F) -> SafeResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(body) => SafeResponse::Success(f(body)),
            Self::Failure(errors) => SafeResponse::Failure(errors),
        }
    }
}

impl<T> From<Result<T, RequestError>> for SafeResponse<T> {
    fn from(res: Result<T, RequestError>) -> Self {
        match res {
            Ok(body) => Self::Success(body),
            Err(e) => Self::failed(e),
        }
    }
}

/// Decode a response body into `T`, dropping the `success` and `errors` envelope keys.
///
/// Callers decide what a non-empty `errors` array means before decoding. A body
/// that is empty after removing the envelope is first offered to `T` as `null`,
/// so unit-like bodies (`()`, `Option<_>`) decode from `{"success": true}`.
pub fn decode_body<T: DeserializeOwned>(body: Value) -> Result<T, serde_json::Error> {
    let value = match body {
        Value::Object(mut map) => {
            map.remove("success");
            map.remove("errors");
            if map.is_empty() {
                if let Ok(v) = serde_json::from_value(Value::Null) {
                    return Ok(v);
                }
            }
            Value::Object(map)
        }
        other => other,
    };
    serde_json::from_value(value)
}

impl<T: Serialize> Serialize for SafeResponse<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = match self {
            Self::Success(body) => match serde_json::to_value(body).map_err(S::Error::custom)? {
                Value::Object(mut m) => {
                    m.remove("errors");
                    m
                }
                Value::Null => Map::new(),
                other => {
                    return Err(S::Error::custom(format!(
                        "success body must serialize to an object, got {other}"
                    )));
                }
            },
            Self::Failure(errors) => {
                let mut m = Map::new();
                m.insert(
                    "errors".to_string(),
                    serde_json::to_value(errors).map_err(S::Error::custom)?,
                );
                m
            }
        };
        map.insert("success".to_string(), Value::Bool(self.is_success()));
        map.serialize(serializer)
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for SafeResponse<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut map = Map::<String, Value>::deserialize(deserializer)?;
        let success = match map.remove("success") {
            Some(Value::Bool(b)) => b,
            Some(other) => {
                return Err(D::Error::custom(format!(
                    "`success` must be a boolean, got {other}"
                )));
            }
            None => return Err(D::Error::missing_field("success")),
        };

        if !success {
            let errors = map
                .remove("errors")
                .ok_or_else(|| D::Error::missing_field("errors"))?;
            let errors: ErrorList = serde_json::from_value(errors).map_err(D::Error::custom)?;
            return Ok(Self::Failure(errors));
        }

        match map.remove("errors") {
            None | Some(Value::Null) => {}
            Some(Value::Array(a)) if a.is_empty() => {}
            Some(_) => return Err(D::Error::custom("successful response must not carry errors")),
        }
        decode_body(Value::Object(map))
            .map(Self::Success)
            .map_err(D::Error::custom)
    }
}
