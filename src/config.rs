//! Display and swap defaults for Wallet Wrapped
//!
//! Loaded from environment variables (with `.env` support) or a TOML
//! file. The conversion functions never read this themselves: callers
//! pass the values they need.

use eyre::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::format::{DEFAULT_END_CHARS, DEFAULT_START_CHARS};
use crate::gas::GasPrice;
use crate::validation::{
    validate_deadline, validate_slippage, MAX_DEADLINE_MINUTES, MAX_SLIPPAGE_PCT,
    MIN_DEADLINE_MINUTES, MIN_SLIPPAGE_PCT,
};

// ============================================
// MAIN CONFIGURATION
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // ========== Display ==========
    /// Prefix used by currency formatting
    pub currency_symbol: String,

    /// Characters kept at the front of a shortened address (including `0x`)
    pub address_start_chars: usize,

    /// Characters kept at the end of a shortened address
    pub address_end_chars: usize,

    // ========== Swap Settings ==========
    /// Slippage tolerance in percent (0.1 - 50)
    pub default_slippage_pct: f64,

    /// Transaction deadline in minutes (1 - 60)
    pub default_deadline_minutes: f64,

    /// Gas price used for fee estimates, in gwei
    pub default_gas_gwei: String,
}

impl Config {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(Self::from_lookup(|key| env::var(key).ok()))
    }

    /// Build from any key lookup; missing or unparsable values fall back
    /// to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            currency_symbol: lookup("CURRENCY_SYMBOL").unwrap_or(defaults.currency_symbol),
            address_start_chars: parse_or(&lookup, "ADDRESS_START_CHARS", defaults.address_start_chars),
            address_end_chars: parse_or(&lookup, "ADDRESS_END_CHARS", defaults.address_end_chars),
            default_slippage_pct: parse_or(&lookup, "DEFAULT_SLIPPAGE_PCT", defaults.default_slippage_pct),
            default_deadline_minutes: parse_or(
                &lookup,
                "DEFAULT_DEADLINE_MINUTES",
                defaults.default_deadline_minutes,
            ),
            default_gas_gwei: lookup("DEFAULT_GAS_GWEI").unwrap_or(defaults.default_gas_gwei),
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        debug!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Check the swap defaults against the accepted ranges
    pub fn validate(&self) -> Result<()> {
        if !validate_slippage(self.default_slippage_pct) {
            return Err(eyre::eyre!(
                "DEFAULT_SLIPPAGE_PCT must be between {}% and {}% (currently {}%)",
                MIN_SLIPPAGE_PCT,
                MAX_SLIPPAGE_PCT,
                self.default_slippage_pct
            ));
        }
        if !validate_deadline(self.default_deadline_minutes) {
            return Err(eyre::eyre!(
                "DEFAULT_DEADLINE_MINUTES must be between {} and {} (currently {})",
                MIN_DEADLINE_MINUTES,
                MAX_DEADLINE_MINUTES,
                self.default_deadline_minutes
            ));
        }
        if let Err(e) = GasPrice::from_gwei(&self.default_gas_gwei) {
            return Err(eyre::eyre!("DEFAULT_GAS_GWEI is not a valid gwei amount: {}", e));
        }

        Ok(())
    }

    pub fn gas_price(&self) -> Result<GasPrice> {
        Ok(GasPrice::from_gwei(&self.default_gas_gwei)?)
    }

    /// Print configuration summary
    pub fn print_summary(&self) {
        println!("╔════════════════════════════════════════════════════════════╗");
        println!("║              WALLET WRAPPED - CONFIGURATION                ║");
        println!("╠════════════════════════════════════════════════════════════╣");
        println!("║ DISPLAY                                                    ║");
        println!("║ • Currency Symbol: {:^40} ║", self.currency_symbol);
        println!("║ • Address Head:    {:^40} ║", self.address_start_chars);
        println!("║ • Address Tail:    {:^40} ║", self.address_end_chars);
        println!("╠════════════════════════════════════════════════════════════╣");
        println!("║ SWAP DEFAULTS                                              ║");
        println!("║ • Slippage:        {:>39.2}% ║", self.default_slippage_pct);
        println!("║ • Deadline:        {:>35} min ║", self.default_deadline_minutes);
        println!("║ • Gas Price:       {:>34} gwei ║", self.default_gas_gwei);
        println!("╚════════════════════════════════════════════════════════════╝");
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            address_start_chars: DEFAULT_START_CHARS,
            address_end_chars: DEFAULT_END_CHARS,
            default_slippage_pct: 0.5,
            default_deadline_minutes: 20.0,
            default_gas_gwei: "20".to_string(),
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring unparsable {}={:?}, using default", key, raw);
            default
        }),
        None => default,
    }
}

// ============================================
// TESTS
// ============================================
