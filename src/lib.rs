//! Wallet Wrapped - numeric & address conversion library
//!
//! Pure functions backing the portfolio dashboard:
//! - wei / gwei / ether conversion over `U256` (no floating point)
//! - amount, address, slippage and deadline validation
//! - number, currency, percent and address display formatting
//!
//! Nothing here holds state between calls; every function is safe to
//! call from any thread.

pub mod config;
pub mod error;
pub mod format;
pub mod gas;
pub mod tokens;
pub mod units;
pub mod validation;

pub use error::UnitsError;
pub use format::{
    format_currency, format_currency_with, format_number, format_percent, shorten_address,
    shorten_address_default, truncate_middle,
};
pub use gas::GasPrice;
pub use tokens::{Token, TokenAmount};
pub use units::{
    convert, format_units, from_wei, gwei_to_wei, parse_units, to_wei, wei_to_gwei, Denomination,
};
pub use validation::{
    checksum_address, is_valid_amount, is_valid_token_address, validate_deadline,
    validate_slippage,
};
