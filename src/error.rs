use rust_decimal::Decimal;

use crate::models::ExpenseId;

/// Errors returned by [`crate::ExpenseStore`] operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The input was rejected before it reached the store.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record with this ID exists. The store was left unchanged.
    #[error("no expense with ID {0}")]
    NotFound(ExpenseId),
}

/// Reasons an [`crate::ExpenseInput`] can be rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum ValidationError {
    #[error("description cannot be empty")]
    EmptyDescription,

    #[error("amount must be greater than zero, got {0}")]
    NonPositiveAmount(Decimal),

    #[error("amount cannot exceed {max}, got {0}", max = crate::models::MAX_AMOUNT)]
    AmountTooLarge(Decimal),

    /// The text did not name one of the eight categories.
    #[error("unknown category \"{0}\"")]
    UnknownCategory(String),

    /// Dates are expected as `YYYY-MM-DD`.
    #[error("invalid date \"{0}\", expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid amount \"{0}\"")]
    InvalidAmount(String),
}

pub type Result<T> = std::result::Result<T, Error>;
