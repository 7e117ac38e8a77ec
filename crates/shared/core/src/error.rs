//! Error types for the domain kernel

use thiserror::Error;

/// Failures from `Price` construction, arithmetic, and ordering
///
/// Arithmetic across currencies and ordering across currencies are kept as
/// separate variants: arithmetic is a value problem (the operands exist but
/// the operation is undefined between them), ordering means the operands are
/// not comparable at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    #[error("cannot {operation} prices with different currencies: {left} and {right}")]
    CurrencyMismatch {
        operation: &'static str,
        left: String,
        right: String,
    },

    #[error("prices in {left} and {right} have no defined ordering")]
    Incomparable { left: String, right: String },

    #[error("invalid price amount: {0}")]
    InvalidAmount(String),
}
