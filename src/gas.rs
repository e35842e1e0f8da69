//! Gas price and fee estimation
//!
//! Prices are held in wei so fee math stays on integers:
//! fee = gas units x price per gas.

use alloy_primitives::U256;
use std::fmt;
use tracing::debug;

use crate::error::UnitsError;
use crate::units::{format_units, parse_units, ETHER_DECIMALS, GWEI_DECIMALS};

/// Gas used by a plain ether transfer
pub const TRANSFER_GAS: u64 = 21_000;

/// Price per unit of gas
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GasPrice {
    wei: U256,
}

impl GasPrice {
    pub fn from_wei(wei: U256) -> Self {
        Self { wei }
    }

    /// `"20"` or sub-gwei `"0.5"`
    pub fn from_gwei(gwei: &str) -> Result<Self, UnitsError> {
        Ok(Self {
            wei: parse_units(gwei, GWEI_DECIMALS)?,
        })
    }

    pub fn wei(&self) -> U256 {
        self.wei
    }

    pub fn gwei(&self) -> String {
        // gwei decimals are always in range
        format_units(self.wei, GWEI_DECIMALS).unwrap_or_else(|_| self.wei.to_string())
    }

    /// Price raised by `pct` percent (rounded down), for faster inclusion
    pub fn with_buffer_pct(&self, pct: u64) -> Result<Self, UnitsError> {
        let scaled = self
            .wei
            .checked_mul(U256::from(100u64) + U256::from(pct))
            .ok_or(UnitsError::Overflow)?;
        Ok(Self {
            wei: scaled / U256::from(100u64),
        })
    }

    /// Total fee in wei for `gas_units`
    pub fn fee_wei(&self, gas_units: u64) -> Result<U256, UnitsError> {
        self.wei
            .checked_mul(U256::from(gas_units))
            .ok_or(UnitsError::Overflow)
    }

    /// Total fee as an ether decimal string
    pub fn fee_ether(&self, gas_units: u64) -> Result<String, UnitsError> {
        let fee = self.fee_wei(gas_units)?;
        let ether = format_units(fee, ETHER_DECIMALS)?;
        debug!("{} gas @ {} gwei = {} ETH", gas_units, self.gwei(), ether);
        Ok(ether)
    }
}

impl fmt::Display for GasPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} gwei", self.gwei())
    }
}

// ============================================
// TESTS
// ============================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_fee() {
        // 21,000 gas at 20 gwei = 0.00042 ETH
        let price = GasPrice::from_gwei("20").unwrap();
        assert_eq!(price.fee_wei(TRANSFER_GAS).unwrap(), U256::from(420_000_000_000_000u64));
        assert_eq!(price.fee_ether(TRANSFER_GAS).unwrap(), "0.00042");
    }

    #[test]
    fn test_sub_gwei_price() {
        let price = GasPrice::from_gwei("0.5").unwrap();
        assert_eq!(price.wei(), U256::from(500_000_000u64));
        assert_eq!(price.to_string(), "0.5 gwei");
    }

    #[test]
    fn test_buffer() {
        let price = GasPrice::from_gwei("24").unwrap();
        assert_eq!(price.with_buffer_pct(10).unwrap().gwei(), "26.4");
        assert_eq!(price.with_buffer_pct(0).unwrap(), price);
    }

    #[test]
    fn test_invalid_price() {
        assert!(matches!(GasPrice::from_gwei("-1"), Err(UnitsError::InvalidAmount(_))));
        assert!(matches!(GasPrice::from_gwei("0.0000000001"), Err(UnitsError::InvalidAmount(_))));
    }

    #[test]
    fn test_fee_overflow() {
        let price = GasPrice::from_wei(U256::MAX);
        assert_eq!(price.fee_wei(2), Err(UnitsError::Overflow));
    }
}
