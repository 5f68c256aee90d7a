//! Logging setup shared by the `agr` binaries.
mod config;
mod error;
mod install;
mod object;

pub use config::{LOG_ENV, LogConfig};
pub use error::{LogError, LogResult};
pub use object::{LogFormat, LogLevel, LogTimeZone, init_local_offset};

/// Install the global tracing subscriber described by `cfg`.
///
/// Every `tracing` macro in the workspace (`debug!` per chunk, `warn!` per failed
/// request, ...) goes through this subscriber afterwards. Calling it twice fails with
/// [`LogError::AlreadyInitialized`].
///
/// For [`LogTimeZone::Local`] call [`init_local_offset`] at the top of `main()`,
/// before the async runtime starts threads.
///
/// ```rust
/// use agr_observe::{LogConfig, init_logging};
///
/// init_logging(&LogConfig::default()).expect("logger");
/// tracing::info!("ready");
/// ```
pub fn init_logging(cfg: &LogConfig) -> LogResult<()> {
    match cfg.format {
        LogFormat::Text => install::text(cfg),
        LogFormat::Json => install::json(cfg),
        LogFormat::Journald => install::journald(cfg),
    }
}
