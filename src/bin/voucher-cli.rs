//! Command-line companion for voucher-redeemer.
//!
//! Runs the same extraction and redemption logic as the HTTP service without
//! starting a server.
//!
//! # Usage
//!
//! ```bash
//! # Show the campaign code a link resolves to
//! cargo run --bin voucher-cli -- extract "https://gift.truemoney.com/campaign/?v=CODE"
//!
//! # Redeem a voucher (asks for confirmation)
//! cargo run --bin voucher-cli -- redeem 0812345678 "https://gift.truemoney.com/campaign/?v=CODE"
//!
//! # Print the effective configuration
//! cargo run --bin voucher-cli -- config
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `VOUCHER_BASE_URL`, `REQUEST_TIMEOUT_MS`, `RUST_LOG`, `LOG_FORMAT`.

use voucher_redeemer::config::Config;
use voucher_redeemer::domain::RedeemError;
use voucher_redeemer::domain::entities::mask_mobile;
use voucher_redeemer::prelude::{HttpVoucherGateway, RedemptionService};
use voucher_redeemer::telemetry;
use voucher_redeemer::utils::code_extractor::extract_with_strategy;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::process::ExitCode;
use std::sync::Arc;

/// CLI tool for voucher-redeemer.
#[derive(Parser)]
#[command(name = "voucher-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the campaign code from a link (no network call)
    Extract {
        /// Campaign link in any supported format
        link: String,
    },

    /// Redeem a voucher for a mobile number
    Redeem {
        /// Mobile number receiving the voucher value
        mobile: String,

        /// Campaign link in any supported format
        link: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Validate and print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env();
    telemetry::init_tracing(&config.log_level, &config.log_format);

    if cli.command.needs_config() {
        config.validate()?;
    }

    match cli.command {
        Commands::Extract { link } => Ok(handle_extract(&link)),
        Commands::Redeem { mobile, link, yes } => handle_redeem(&config, &mobile, &link, yes).await,
        Commands::Config => {
            print_config(&config);
            Ok(ExitCode::SUCCESS)
        }
    }
}

impl Commands {
    /// Extraction is offline, so a broken upstream or log setting must not block it.
    fn needs_config(&self) -> bool {
        !matches!(self, Commands::Extract { .. })
    }
}

fn handle_extract(link: &str) -> ExitCode {
    match extract_with_strategy(link) {
        Some((code, strategy)) => {
            println!("{}", "Campaign code found".green().bold());
            println!("  Code:     {}", code.as_str().bright_yellow().bold());
            println!("  Strategy: {}", strategy.as_str().cyan());
            ExitCode::SUCCESS
        }
        None => {
            println!("{}", RedeemError::Extraction.to_string().red().bold());
            ExitCode::FAILURE
        }
    }
}

/// Redeems once against the configured upstream and prints the outcome.
async fn handle_redeem(config: &Config, mobile: &str, link: &str, yes: bool) -> Result<ExitCode> {
    let gateway = HttpVoucherGateway::from_config(config).context("Failed to create gateway")?;
    let service = RedemptionService::new(Arc::new(gateway));

    println!("{}", "Redeem voucher".bright_blue().bold());
    println!("  Mobile:   {}", mask_mobile(mobile).cyan());
    println!("  Upstream: {}", config.voucher_base_url.cyan());
    println!();

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Redeem this voucher?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(ExitCode::FAILURE);
        }
    }

    match service.redeem(mobile, link).await {
        Ok(data) => {
            println!("{}", "Redeemed".green().bold());
            println!("{}", serde_json::to_string_pretty(&data)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            println!(
                "{} {}",
                format!("[{}]", err.kind()).red().bold(),
                err.user_message().red()
            );
            if let RedeemError::Upstream { body, .. } = &err {
                println!("{}", serde_json::to_string_pretty(body)?.dimmed());
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_config(config: &Config) {
    println!("{}", "Configuration".bright_white().bold());
    println!("  Listen address:  {}", config.listen_addr().cyan());
    println!("  Voucher service: {}", config.voucher_base_url.cyan());
    println!("  Request timeout: {}ms", config.request_timeout_ms);
    println!("  Log level:       {}", config.log_level);
    println!("  Log format:      {}", config.log_format);
}
