//! Denomination Conversion
//!
//! Scales decimal strings between wei, gwei and ether (or any token's
//! decimals) over `U256`. Nothing on this path touches floating point:
//! an f64 cannot hold 18 decimals of precision above 2^53 wei.
//!
//! Down-scaling never rounds. An amount with more fractional digits than
//! the target unit holds is rejected with `InvalidAmount`.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

use crate::error::UnitsError;

// ============================================
// CONSTANTS
// ============================================

pub const WEI_DECIMALS: u8 = 0;
pub const GWEI_DECIMALS: u8 = 9;
pub const ETHER_DECIMALS: u8 = 18;

/// 10^77 is the largest power of ten below 2^256
pub const MAX_DECIMALS: u8 = 77;

// ============================================
// DENOMINATION
// ============================================

/// Named units of ether
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Denomination {
    Wei,
    Gwei,
    Ether,
}

impl Denomination {
    /// Decimal exponent relative to wei
    pub fn decimals(self) -> u8 {
        match self {
            Denomination::Wei => WEI_DECIMALS,
            Denomination::Gwei => GWEI_DECIMALS,
            Denomination::Ether => ETHER_DECIMALS,
        }
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Denomination::Wei => write!(f, "wei"),
            Denomination::Gwei => write!(f, "gwei"),
            Denomination::Ether => write!(f, "ether"),
        }
    }
}

impl FromStr for Denomination {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wei" => Ok(Denomination::Wei),
            "gwei" => Ok(Denomination::Gwei),
            "ether" | "eth" => Ok(Denomination::Ether),
            other => Err(format!("unknown denomination: {}", other)),
        }
    }
}

// ============================================
// SCALING PRIMITIVES
// ============================================

/// 10^exp, for exp up to `MAX_DECIMALS`
pub fn pow10(exp: u8) -> Result<U256, UnitsError> {
    if exp > MAX_DECIMALS {
        return Err(UnitsError::UnsupportedDecimals(exp));
    }
    Ok(U256::from(10u64).pow(U256::from(exp)))
}

/// Split a numeral into its integer and fractional digit runs.
///
/// Accepts `123`, `123.45`, `0.5`. Rejects signs, exponents, whitespace,
/// separators, and a `.` without digits on both sides.
fn split_numeral(amount: &str) -> Result<(&str, &str), UnitsError> {
    if amount.is_empty() {
        return Err(UnitsError::invalid(amount, "empty"));
    }

    let (integer, fraction) = match amount.split_once('.') {
        Some((_, "")) => {
            return Err(UnitsError::invalid(amount, "no digits after decimal point"));
        }
        Some((integer, fraction)) => (integer, fraction),
        None => (amount, ""),
    };

    if integer.is_empty() {
        return Err(UnitsError::invalid(amount, "no digits before decimal point"));
    }
    if !is_digits(integer) || !is_digits(fraction) {
        return Err(UnitsError::invalid(amount, "not a non-negative base-10 numeral"));
    }

    Ok((integer, fraction))
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Append ASCII digits to `acc`, failing on 256-bit overflow
fn push_digits(mut acc: U256, digits: &str) -> Result<U256, UnitsError> {
    let ten = U256::from(10u64);
    for b in digits.bytes() {
        let digit = U256::from(b - b'0');
        acc = acc
            .checked_mul(ten)
            .and_then(|v| v.checked_add(digit))
            .ok_or(UnitsError::Overflow)?;
    }
    Ok(acc)
}

/// Decimal string (e.g. `"1.5"`) -> raw integer units at `decimals`.
pub fn parse_units(amount: &str, decimals: u8) -> Result<U256, UnitsError> {
    if decimals > MAX_DECIMALS {
        return Err(UnitsError::UnsupportedDecimals(decimals));
    }

    let (integer, fraction) = split_numeral(amount)?;
    if fraction.len() > decimals as usize {
        return Err(UnitsError::invalid(
            amount,
            &format!(
                "{} fractional digits, at most {} allowed",
                fraction.len(),
                decimals
            ),
        ));
    }

    // Digits of both parts, then pad the fraction out to `decimals`
    let digits = push_digits(U256::ZERO, integer)?;
    let digits = push_digits(digits, fraction)?;
    let padding = pow10(decimals - fraction.len() as u8)?;

    digits.checked_mul(padding).ok_or(UnitsError::Overflow)
}

/// Raw integer units -> minimal decimal string.
///
/// Trailing fractional zeros are stripped; a zero fraction drops the
/// decimal point entirely.
pub fn format_units(raw: U256, decimals: u8) -> Result<String, UnitsError> {
    let divisor = pow10(decimals)?;
    let integer = raw / divisor;
    let fraction = raw % divisor;

    if fraction.is_zero() {
        return Ok(integer.to_string());
    }

    let padded = format!("{:0>width$}", fraction.to_string(), width = decimals as usize);
    Ok(format!("{}.{}", integer, padded.trim_end_matches('0')))
}

// ============================================
// DENOMINATION CONVERSION
// ============================================

/// Convert a decimal amount from one denomination to another
pub fn convert(amount: &str, from: Denomination, to: Denomination) -> Result<String, UnitsError> {
    let raw = parse_units(amount, from.decimals())?;
    let converted = format_units(raw, to.decimals())?;
    trace!("{} {} -> {} {}", amount, from, converted, to);
    Ok(converted)
}

/// Integer wei -> ether. `"500000000000000000"` -> `"0.5"`
pub fn from_wei(wei: &str) -> Result<String, UnitsError> {
    convert(wei, Denomination::Wei, Denomination::Ether)
}

/// Ether -> integer wei. `"0.5"` -> `"500000000000000000"`
pub fn to_wei(ether: &str) -> Result<String, UnitsError> {
    convert(ether, Denomination::Ether, Denomination::Wei)
}

/// Gwei -> integer wei. Sub-gwei prices (up to 9 fractional digits) are accepted.
pub fn gwei_to_wei(gwei: &str) -> Result<String, UnitsError> {
    convert(gwei, Denomination::Gwei, Denomination::Wei)
}

/// Integer wei -> gwei
pub fn wei_to_gwei(wei: &str) -> Result<String, UnitsError> {
    convert(wei, Denomination::Wei, Denomination::Gwei)
}

// ============================================
// TESTS
// ============================================
