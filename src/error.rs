use std::fmt;

#[derive(Debug)]
pub enum EncryptError {
    UnsupportedAlgorithm(String),
    InvalidParameter(String),
}

impl fmt::Display for EncryptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncryptError::UnsupportedAlgorithm(a) => write!(f, "algorithm '{a}' is not supported"),
            EncryptError::InvalidParameter(msg) => write!(f, "invalid parameter: {msg}"),
        }
    }
}

impl std::error::Error for EncryptError {}
