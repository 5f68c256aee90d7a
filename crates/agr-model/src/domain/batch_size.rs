use std::{fmt, num::NonZeroUsize};

use serde::{Deserialize, Serialize};

use crate::{DEFAULT_BATCH_SIZE, ModelError};

/// Number of items sent per request.
///
/// Always at least 1; a zero size is rejected at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct BatchSize(NonZeroUsize);

impl BatchSize {
    /// Create a batch size, rejecting zero.
    pub fn new(size: usize) -> Result<Self, ModelError> {
        NonZeroUsize::new(size)
            .map(Self)
            .ok_or(ModelError::InvalidBatchSize(size))
    }

    /// Get the raw size.
    #[inline]
    pub const fn get(&self) -> usize {
        self.0.get()
    }
}

impl Default for BatchSize {
    fn default() -> Self {
        Self(NonZeroUsize::new(DEFAULT_BATCH_SIZE).expect("default batch size is non-zero"))
    }
}

impl TryFrom<usize> for BatchSize {
    type Error = ModelError;
    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<NonZeroUsize> for BatchSize {
    fn from(n: NonZeroUsize) -> Self {
        Self(n)
    }
}

impl From<BatchSize> for usize {
    fn from(b: BatchSize) -> Self {
        b.get()
    }
}

impl fmt::Display for BatchSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
