use agr_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("request options factory failed: {0}")]
    Factory(String),

    #[error("model error: {0}")]
    Model(#[from] ModelError),
}
