//! Error handling module

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WpsError {
    #[error("Invalid MAC address: {0}")]
    InvalidAddress(String),

    #[error("Unknown WPS pin algorithm: {0}")]
    UnknownAlgorithm(String),
}

pub type Result<T> = std::result::Result<T, WpsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            WpsError::InvalidAddress("ZZ:00".to_string()).to_string(),
            "Invalid MAC address: ZZ:00"
        );
        assert_eq!(
            WpsError::UnknownAlgorithm("pinFoo".to_string()).to_string(),
            "Unknown WPS pin algorithm: pinFoo"
        );
    }
}
