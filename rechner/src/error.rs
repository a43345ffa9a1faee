use err_derive::Error;

/// An error of the `rechner` crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The divisor of a division was zero.
    #[error(display = "Cannot divide by zero")]
    DivisionByZero,

    /// The given text does not name an operator.
    #[error(display = "unknown operator: {:?}", 0)]
    UnknownOperator(String),
}
