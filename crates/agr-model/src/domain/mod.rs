mod kv;
pub use kv::KeyValue;

mod params;
pub use params::Params;

mod batch_size;
pub use batch_size::BatchSize;

mod constants;
pub use constants::{DEFAULT_BATCH_SIZE, DEFAULT_PORTAL_URL};
