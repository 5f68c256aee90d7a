mod error;
pub use error::{ErrorList, RequestError};

mod safe;
pub use safe::{AggregateResponse, SafeResponse, decode_body};
