use agr_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortalError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("http client error: {0}")]
    HttpClient(String),

    #[error("unknown invite role: {0} (expected: group_member|group_admin)")]
    UnknownRole(String),

    #[error("core error: {0}")]
    Core(#[from] CoreError),
}
