//! Crate-level error type and `Result` alias for stable, structured error handling.
//! A reduction either fully succeeds or fails whole; there are no partial results.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("harmonic mean requires at least one data point")]
    EmptyInput,

    #[error("division by zero: input value at index {index} is zero")]
    DivisionByZero { index: usize },
}
