/// Errors raised by the arithmetic layers (rational utilities, p-adics,
/// complex p-adics, polynomials, algebraic extensions).
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("prime must be greater than 1, got {0}")]
    InvalidPrime(u64),
    #[error("division by zero")]
    DivisionByZero,
    #[error("incompatible prime: expected {expected}, got {actual}")]
    IncompatiblePrime { expected: u64, actual: u64 },
    #[error("index {0} is out of bounds (fractional part has length {1})")]
    OutOfBounds(i64, usize),
    #[error("pseudo-division exceeded its iteration bound of {0}")]
    PseudoDivOverflow(usize),
}
