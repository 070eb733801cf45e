// core/src/error/binary_error.rs
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BinaryError {
    #[error("Invalid binary string: unexpected '{digit}' at position {position}")]
    InvalidDigit { digit: char, position: usize },

    #[error("binary number does not fit in 64 bits ({digits} digits)")]
    Overflow { digits: usize },
}
