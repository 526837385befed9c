//! Errors raised while building an IFS's transducer.

/// Errors from map construction and transducer exploration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum IfsError {
    #[error(transparent)]
    Core(#[from] padic_core::CoreError),
    #[error("transducer exploration did not terminate within {0} states")]
    Unbounded(usize),
    #[error("map shift count k must be at least 1, got {0}")]
    InvalidShift(usize),
}
