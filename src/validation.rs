//! Input guards for amounts, addresses and swap settings.
//!
//! Every check here is a plain predicate: bad input answers `false`,
//! nothing panics and nothing returns an error.

use alloy_primitives::Address;
use std::str::FromStr;

// ============================================
// SWAP SETTING BOUNDS
// ============================================

/// Slippage tolerance bounds, in percent
pub const MIN_SLIPPAGE_PCT: f64 = 0.1;
pub const MAX_SLIPPAGE_PCT: f64 = 50.0;

/// Transaction deadline bounds, in minutes
pub const MIN_DEADLINE_MINUTES: f64 = 1.0;
pub const MAX_DEADLINE_MINUTES: f64 = 60.0;

/// Length of a `0x`-prefixed 20-byte address
const ADDRESS_LEN: usize = 42;

// ============================================
// PREDICATES
// ============================================

/// True iff `value` is a finite number strictly greater than zero.
///
/// Exponent notation (`"1e3"`) is accepted; `"inf"`, `"NaN"`, negatives
/// and zero are not.
pub fn is_valid_amount(value: &str) -> bool {
    match value.trim().parse::<f64>() {
        Ok(n) => n.is_finite() && n > 0.0,
        Err(_) => false,
    }
}

/// True iff `address` is exactly `0x` followed by 40 hex characters.
///
/// Case-insensitive; checksum casing is not enforced.
pub fn is_valid_token_address(address: &str) -> bool {
    if address.len() != ADDRESS_LEN {
        return false;
    }
    match address.strip_prefix("0x") {
        Some(body) => hex::decode(body).is_ok(),
        None => false,
    }
}

pub fn validate_slippage(pct: f64) -> bool {
    (MIN_SLIPPAGE_PCT..=MAX_SLIPPAGE_PCT).contains(&pct)
}

pub fn validate_deadline(minutes: f64) -> bool {
    (MIN_DEADLINE_MINUTES..=MAX_DEADLINE_MINUTES).contains(&minutes)
}

// ============================================
// CHECKSUM
// ============================================

/// EIP-55 mixed-case rendering of a valid address, `None` otherwise
pub fn checksum_address(address: &str) -> Option<String> {
    if !is_valid_token_address(address) {
        return None;
    }
    Address::from_str(address)
        .ok()
        .map(|addr| addr.to_checksum(None))
}

// ============================================
// TESTS
// ============================================
