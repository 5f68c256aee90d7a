mod format;
pub use format::LogFormat;

mod level;
pub use level::LogLevel;

mod rfc3339;
pub(crate) use rfc3339::Rfc3339Timer;

mod timezone;
pub use timezone::{LogTimeZone, init_local_offset};
