//! Error types for the spectrum pipeline

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpectrumError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Failed to allocate {len} samples for {what}")]
    AllocationFailure { what: &'static str, len: usize },

    #[error("Coefficient length mismatch: real has {real} values, imag has {imag}")]
    LengthMismatch { real: usize, imag: usize },

    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SpectrumError>;

/// Allocate a zero-filled buffer of exactly `len` values
///
/// Reservation failure is reported instead of aborting the process.
pub(crate) fn zeroed_buffer(what: &'static str, len: usize) -> Result<Vec<f64>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| SpectrumError::AllocationFailure { what, len })?;
    buffer.resize(len, 0.0);
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed_buffer() {
        let buffer = zeroed_buffer("test", 16).unwrap();
        assert_eq!(buffer.len(), 16);
        assert!(buffer.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_zeroed_buffer_too_large() {
        let err = zeroed_buffer("huge", usize::MAX).unwrap_err();
        assert!(matches!(
            err,
            SpectrumError::AllocationFailure { what: "huge", len: usize::MAX }
        ));
    }
}
