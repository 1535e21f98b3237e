use std::error::Error;
use std::fmt::{Display, Formatter};

/// Invalid table model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Two columns use the same key.
    DuplicateKey(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::DuplicateKey(key) => write!(f, "duplicate column key: {}", key),
        }
    }
}

impl Error for ModelError {}
