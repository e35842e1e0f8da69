//! Errors raised by the conversion layer.
//!
//! Validation predicates never produce these; they answer `false`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitsError {
    /// Input is not a well-formed non-negative numeral, or carries more
    /// fractional digits than the target unit can hold.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Scaled value does not fit in 256 bits.
    #[error("Amount exceeds the 256-bit integer range")]
    Overflow,

    /// 10^decimals does not fit in 256 bits.
    #[error("Unsupported decimals: {0} (maximum is 77)")]
    UnsupportedDecimals(u8),

    #[error("Cannot combine amounts with different decimals: {0} != {1}")]
    DecimalMismatch(u8, u8),
}

impl UnitsError {
    pub(crate) fn invalid(amount: &str, reason: &str) -> Self {
        UnitsError::InvalidAmount(format!("{:?} ({})", amount, reason))
    }
}
