mod domain;
pub use domain::{BatchSize, KeyValue, Params};
pub use domain::{DEFAULT_BATCH_SIZE, DEFAULT_PORTAL_URL};

mod error;
pub use error::ModelError;

mod request;
pub use request::{HttpMethod, RequestOptions};

mod response;
pub use response::{AggregateResponse, ErrorList, RequestError, SafeResponse, decode_body};
