//! Wallet Wrapped - conversion & formatting CLI
//!
//! Run with: cargo run -- to-wei 1.5
//!
//! Every library operation is exposed as a subcommand so amounts and
//! addresses can be checked from scripts. Pass `--json` for machine
//! readable output.

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{eyre, Result};
use console::style;
use serde::Serialize;
use serde_json::{json, Value};
use std::path::PathBuf;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wallet_wrapped::config::Config;
use wallet_wrapped::gas::GasPrice;
use wallet_wrapped::tokens;
use wallet_wrapped::units::{self, Denomination};
use wallet_wrapped::{format, validation};

#[derive(Parser, Debug)]
#[command(name = "wrapped", version, about = "Wallet Wrapped unit conversion and formatting")]
struct Cli {
    /// TOML config file (defaults to environment variables / .env)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert an amount between wei, gwei and ether
    Convert {
        amount: String,
        #[arg(long)]
        from: Denomination,
        #[arg(long)]
        to: Denomination,
    },
    /// Integer wei -> ether
    FromWei { wei: String },
    /// Ether -> integer wei
    ToWei { ether: String },
    /// Gwei -> integer wei
    GweiToWei { gwei: String },
    /// Integer wei -> gwei
    WeiToGwei { wei: String },
    /// Is this a positive, finite amount?
    CheckAmount { value: String },
    /// Is this a 0x-prefixed 40-hex-character address?
    CheckAddress { address: String },
    /// Check slippage / deadline settings (configured defaults when omitted)
    CheckSwap {
        #[arg(long)]
        slippage: Option<f64>,
        #[arg(long)]
        deadline: Option<f64>,
    },
    /// Render a number for display
    Format {
        #[arg(value_enum)]
        kind: FormatKind,
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Abbreviate an address or long string
    Shorten {
        text: String,
        #[arg(long)]
        start: Option<usize>,
        #[arg(long)]
        end: Option<usize>,
        #[arg(long, default_value = "...")]
        separator: String,
    },
    /// Render a raw on-chain amount of a well-known token
    Token { symbol: String, raw: String },
    /// Estimate the ether fee for an amount of gas
    GasFee {
        gas_units: u64,
        /// Gas price in gwei (configured default when omitted)
        #[arg(long)]
        gwei: Option<String>,
    },
    /// Print the active configuration
    #[command(name = "config")]
    ShowConfig,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum FormatKind {
    Number,
    Currency,
    Percent,
}

/// One command's result, printed as text or JSON
#[derive(Debug, Serialize)]
struct Outcome {
    command: &'static str,
    input: String,
    result: Value,
}

impl Outcome {
    fn new(command: &'static str, input: impl Into<String>, result: Value) -> Self {
        Self {
            command,
            input: input.into(),
            result,
        }
    }

    fn print(&self, as_json: bool) -> Result<()> {
        if as_json {
            println!("{}", serde_json::to_string(self)?);
            return Ok(());
        }

        let rendered = match &self.result {
            Value::String(s) => s.clone(),
            Value::Bool(true) => style("✓ valid").green().to_string(),
            Value::Bool(false) => style("✗ invalid").red().to_string(),
            other => serde_json::to_string_pretty(other)?,
        };
        println!("{} {} → {}", style(self.command).cyan().bold(), self.input, rendered);
        Ok(())
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        return Err(e);
    }
    debug!("Using config: {:?}", config);
    Ok(config)
}

fn run(command: Command, config: &Config) -> Result<Outcome> {
    let outcome = match command {
        Command::Convert { amount, from, to } => {
            let converted = units::convert(&amount, from, to)?;
            Outcome::new("convert", format!("{} {}", amount, from), json!(format!("{} {}", converted, to)))
        }
        Command::FromWei { wei } => {
            let ether = units::from_wei(&wei)?;
            Outcome::new("from-wei", wei, json!(ether))
        }
        Command::ToWei { ether } => {
            let wei = units::to_wei(&ether)?;
            Outcome::new("to-wei", ether, json!(wei))
        }
        Command::GweiToWei { gwei } => {
            let wei = units::gwei_to_wei(&gwei)?;
            Outcome::new("gwei-to-wei", gwei, json!(wei))
        }
        Command::WeiToGwei { wei } => {
            let gwei = units::wei_to_gwei(&wei)?;
            Outcome::new("wei-to-gwei", wei, json!(gwei))
        }
        Command::CheckAmount { value } => {
            let valid = validation::is_valid_amount(&value);
            Outcome::new("check-amount", value, json!(valid))
        }
        Command::CheckAddress { address } => {
            let result = json!({
                "valid": validation::is_valid_token_address(&address),
                "checksum": validation::checksum_address(&address),
            });
            Outcome::new("check-address", address, result)
        }
        Command::CheckSwap { slippage, deadline } => {
            let slippage = slippage.unwrap_or(config.default_slippage_pct);
            let deadline = deadline.unwrap_or(config.default_deadline_minutes);
            let result = json!({
                "slippage_ok": validation::validate_slippage(slippage),
                "deadline_ok": validation::validate_deadline(deadline),
            });
            Outcome::new("check-swap", format!("{}% / {} min", slippage, deadline), result)
        }
        Command::Format { kind, value } => {
            let rendered = match kind {
                FormatKind::Number => format::format_number(value),
                FormatKind::Currency => format::format_currency_with(value, &config.currency_symbol),
                FormatKind::Percent => format::format_percent(value),
            };
            Outcome::new("format", value.to_string(), json!(rendered))
        }
        Command::Shorten {
            text,
            start,
            end,
            separator,
        } => {
            let start = start.unwrap_or(config.address_start_chars);
            let end = end.unwrap_or(config.address_end_chars);
            let short = format::truncate_middle(&text, start, end, &separator);
            Outcome::new("shorten", text, json!(short))
        }
        Command::Token { symbol, raw } => {
            let token = tokens::find_by_symbol(&symbol)
                .ok_or_else(|| eyre!("Unknown token symbol: {}", symbol))?;
            let raw_units = units::parse_units(&raw, 0)?;
            let display = token.display_amount(raw_units)?;
            Outcome::new("token", format!("{} raw {}", raw, token.symbol), json!(display))
        }
        Command::GasFee { gas_units, gwei } => {
            let price = match gwei {
                Some(gwei) => GasPrice::from_gwei(&gwei)?,
                None => config.gas_price()?,
            };
            let fee = price.fee_ether(gas_units)?;
            Outcome::new("gas-fee", format!("{} gas @ {}", gas_units, price), json!(format!("{} ETH", fee)))
        }
        Command::ShowConfig => Outcome::new("config", "active", serde_json::to_value(config)?),
    };

    Ok(outcome)
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wallet_wrapped=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    if matches!(cli.command, Command::ShowConfig) && !cli.json {
        config.print_summary();
        return Ok(());
    }

    let outcome = run(cli.command, &config)?;
    outcome.print(cli.json)
}

// ============================================
// TESTS
// ============================================

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> Result<Outcome> {
        let cli = Cli::try_parse_from(std::iter::once("wrapped").chain(args.iter().copied()))?;
        run(cli.command, &Config::default())
    }

    #[test]
    fn test_cli_to_wei() {
        let outcome = run_args(&["to-wei", "0.5"]).unwrap();
        assert_eq!(outcome.result, json!("500000000000000000"));
    }

    #[test]
    fn test_cli_convert() {
        let outcome = run_args(&["convert", "2", "--from", "gwei", "--to", "wei"]).unwrap();
        assert_eq!(outcome.result, json!("2000000000 wei"));
    }

    #[test]
    fn test_cli_conversion_error() {
        assert!(run_args(&["from-wei", "-1"]).is_err());
    }

    #[test]
    fn test_cli_format_negative_currency() {
        let outcome = run_args(&["format", "currency", "-1000"]).unwrap();
        assert_eq!(outcome.result, json!("-$1,000.00"));
    }

    #[test]
    fn test_cli_token() {
        let outcome = run_args(&["token", "USDC", "1500000"]).unwrap();
        assert_eq!(outcome.result, json!("1.5 USDC"));
        assert!(run_args(&["token", "NOPE", "1"]).is_err());
    }

    #[test]
    fn test_cli_check_swap_defaults() {
        let outcome = run_args(&["check-swap"]).unwrap();
        assert_eq!(outcome.result, json!({"slippage_ok": true, "deadline_ok": true}));
    }

    #[test]
    fn test_cli_gas_fee() {
        let outcome = run_args(&["gas-fee", "21000"]).unwrap();
        assert_eq!(outcome.result, json!("0.00042 ETH"));
    }
}
