//! Token descriptors and token-denominated amounts.
//!
//! A token's `decimals` fixes the exponent between its raw on-chain
//! integer and the human-readable amount the dashboard shows.

use alloy_primitives::{address, Address, U256};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::UnitsError;
use crate::units::{format_units, parse_units};

/// Represents a token held in a wallet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub address: Address,
    pub symbol: String,
    pub decimals: u8,
}

impl Token {
    pub fn new(address: Address, symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            address,
            symbol: symbol.into(),
            decimals,
        }
    }

    /// Human amount (e.g. `"1.5"`) -> raw units
    pub fn parse_amount(&self, amount: &str) -> Result<U256, UnitsError> {
        parse_units(amount, self.decimals)
    }

    /// Raw units -> human amount, without symbol
    pub fn format_amount(&self, raw: U256) -> Result<String, UnitsError> {
        format_units(raw, self.decimals)
    }

    /// Raw units -> `"1.5 USDC"`
    pub fn display_amount(&self, raw: U256) -> Result<String, UnitsError> {
        Ok(format!("{} {}", self.format_amount(raw)?, self.symbol))
    }

    pub fn amount(&self, raw: U256) -> TokenAmount {
        TokenAmount::new(raw, self.decimals, Some(self.symbol.clone()))
    }
}

// ============================================
// TOKEN AMOUNT
// ============================================

/// Raw amount tagged with its decimals (and optionally its symbol)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenAmount {
    pub raw: U256,
    pub decimals: u8,
    pub symbol: Option<String>,
}

impl TokenAmount {
    pub fn new(raw: U256, decimals: u8, symbol: Option<String>) -> Self {
        Self { raw, decimals, symbol }
    }

    /// Decimal string (e.g. `"1.5"`) -> raw units.
    pub fn from_human(amount: &str, decimals: u8, symbol: Option<String>) -> Result<Self, UnitsError> {
        let raw = parse_units(amount, decimals)?;
        Ok(Self { raw, decimals, symbol })
    }

    /// Raw -> decimal string (no floats).
    pub fn human(&self) -> Result<String, UnitsError> {
        format_units(self.raw, self.decimals)
    }

    pub fn checked_add(&self, other: &Self) -> Result<Self, UnitsError> {
        if self.decimals != other.decimals {
            return Err(UnitsError::DecimalMismatch(self.decimals, other.decimals));
        }
        let raw = self.raw.checked_add(other.raw).ok_or(UnitsError::Overflow)?;
        let symbol = self.symbol.clone().or_else(|| other.symbol.clone());

        Ok(Self {
            raw,
            decimals: self.decimals,
            symbol,
        })
    }

    pub fn checked_mul(&self, factor: u64) -> Result<Self, UnitsError> {
        let raw = self
            .raw
            .checked_mul(U256::from(factor))
            .ok_or(UnitsError::Overflow)?;

        Ok(Self {
            raw,
            decimals: self.decimals,
            symbol: self.symbol.clone(),
        })
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Decimals above 77 cannot be scaled; show the raw integer instead
        let human = self.human().unwrap_or_else(|_| self.raw.to_string());
        match &self.symbol {
            Some(symbol) => write!(f, "{} {}", human, symbol),
            None => write!(f, "{}", human),
        }
    }
}

// ============================================
// WELL-KNOWN TOKENS (Ethereum mainnet)
// ============================================

pub fn base_tokens() -> Vec<Token> {
    vec![
        Token::new(address!("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"), "WETH", 18),
        Token::new(address!("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"), "USDC", 6),
        Token::new(address!("0xdAC17F958D2ee523a2206206994597C13D831ec7"), "USDT", 6),
        Token::new(address!("0x6B175474E89094C44Da98b954EedcdeCB5BE3830"), "DAI", 18),
        Token::new(address!("0x2260FAC5E5542a773Aa44fBCfeDf7C193bc2C599"), "WBTC", 8),
    ]
}

/// Case-insensitive symbol lookup
pub fn find_by_symbol(symbol: &str) -> Option<Token> {
    base_tokens()
        .into_iter()
        .find(|t| t.symbol.eq_ignore_ascii_case(symbol))
}

pub fn find_by_address(address: &Address) -> Option<Token> {
    base_tokens().into_iter().find(|t| t.address == *address)
}

// ============================================
// TESTS
// ============================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_from_human_usdc() {
        let amount = TokenAmount::from_human("1.5", 6, Some("USDC".to_string())).unwrap();
        assert_eq!(amount.raw, U256::from(1_500_000u64));
        assert_eq!(amount.human().unwrap(), "1.5");
        assert_eq!(amount.to_string(), "1.5 USDC");
    }

    #[test]
    fn test_from_human_too_precise() {
        let result = TokenAmount::from_human("1.0000001", 6, None);
        assert!(matches!(result, Err(UnitsError::InvalidAmount(_))));
    }

    #[test]
    fn test_checked_add() {
        let a = TokenAmount::from_human("1.25", 18, Some("WETH".to_string())).unwrap();
        let b = TokenAmount::from_human("0.75", 18, None).unwrap();
        let sum = a.checked_add(&b).unwrap();
        assert_eq!(sum.to_string(), "2 WETH");

        let usdc = TokenAmount::from_human("1", 6, None).unwrap();
        assert_eq!(a.checked_add(&usdc), Err(UnitsError::DecimalMismatch(18, 6)));

        let max = TokenAmount::new(U256::MAX, 18, None);
        assert_eq!(max.checked_add(&b), Err(UnitsError::Overflow));
    }

    #[test]
    fn test_checked_mul() {
        let a = TokenAmount::from_human("0.5", 8, Some("WBTC".to_string())).unwrap();
        assert_eq!(a.checked_mul(3).unwrap().to_string(), "1.5 WBTC");
        assert_eq!(TokenAmount::new(U256::MAX, 0, None).checked_mul(2), Err(UnitsError::Overflow));
    }

    #[test]
    fn test_token_display() {
        let usdc = find_by_symbol("usdc").unwrap();
        assert_eq!(usdc.decimals, 6);
        assert_eq!(usdc.display_amount(U256::from(2_500_000u64)).unwrap(), "2.5 USDC");
        assert_eq!(usdc.parse_amount("2.5").unwrap(), U256::from(2_500_000u64));
        assert_eq!(usdc.amount(U256::from(1u64)).to_string(), "0.000001 USDC");
    }

    #[test]
    fn test_registry_lookup() {
        let weth = Address::from_str("0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2").unwrap();
        assert_eq!(find_by_address(&weth).map(|t| t.symbol), Some("WETH".to_string()));
        assert!(find_by_symbol("PEPE").is_none());
        assert_eq!(base_tokens().len(), 5);
    }
}
