use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid batch size: {0} (must be at least 1)")]
    InvalidBatchSize(usize),

    #[error("unknown http method: {0}")]
    UnknownHttpMethod(String),

    #[error("error list must contain at least one error")]
    EmptyErrorList,
}
