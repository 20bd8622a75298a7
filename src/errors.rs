use rand::rand_core::OsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RandomError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("entropy source failure: {0}")]
    EntropySourceFailure(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(String),
}

impl RandomError {
    pub fn invalid_input(message: &str) -> Self {
        Self::InvalidInput(message.to_string())
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

impl From<OsError> for RandomError {
    fn from(e: OsError) -> Self {
        RandomError::EntropySourceFailure(e.to_string())
    }
}
