use thiserror::Error;

/// Errors that can occur in the checksum and shift routines
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetsumError {
    /// Buffer is not the size the routine requires
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Raw checksum input must be padded to whole 16-bit words
    #[error("Odd-length checksum input: {0} bytes")]
    OddLength(usize),

    /// Shift direction other than left/right
    #[error("Direction must be 'left' or 'right', got '{0}'")]
    InvalidDirection(String),

    /// Left shift result too large to allocate
    #[error("Shift by {0} bits is too large")]
    ShiftTooLarge(usize),

    /// Input is not a hexadecimal encoding
    #[error("Invalid hex input: {0}")]
    InvalidHex(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias using NetsumError
pub type Result<T> = std::result::Result<T, NetsumError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NetsumError::InvalidLength { expected: 20, actual: 19 };
        assert_eq!(err.to_string(), "Invalid length: expected 20 bytes, got 19");

        let err = NetsumError::InvalidDirection("up".to_string());
        assert_eq!(err.to_string(), "Direction must be 'left' or 'right', got 'up'");

        let err = NetsumError::ShiftTooLarge(64);
        assert_eq!(err.to_string(), "Shift by 64 bits is too large");
    }

    #[test]
    fn test_anyhow_conversion() {
        let err: anyhow::Error = NetsumError::OddLength(3).into();
        assert!(err.downcast_ref::<NetsumError>().is_some());
    }
}
