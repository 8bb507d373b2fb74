// ABOUTME: Fitplan CLI - evaluates onboarding profiles from JSON files
// ABOUTME: Prints validation results, derived metrics, or the effective engine configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Validate a plan and print findings and alternatives
//! fitplan-cli evaluate --profile profile.json --format text
//!
//! # Derived metrics only, no validation
//! fitplan-cli metrics --profile profile.json
//!
//! # Effective configuration after FITPLAN_* overrides
//! fitplan-cli config
//! ```
//!
//! `--profile -` reads the profile from stdin. `evaluate` exits with status 2
//! when the plan is blocked so scripts can branch on the outcome.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fitplan::formatters::OutputFormat;
use fitplan::logging::LoggingConfig;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "fitplan-cli",
    about = "Fitplan metabolic plan evaluator",
    long_about = "Computes metabolic metrics for an onboarding profile, validates the plan against safety rules, and proposes feasible alternatives."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging (stderr)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Validate a profile and propose alternatives when blocked
    Evaluate {
        /// Path to the profile JSON file, or `-` for stdin
        #[arg(long)]
        profile: PathBuf,

        /// Output format (json or text)
        #[arg(long, default_value = "json")]
        format: String,
    },

    /// Print derived metrics without validating the plan
    Metrics {
        /// Path to the profile JSON file, or `-` for stdin
        #[arg(long)]
        profile: PathBuf,

        /// Output format (json or text)
        #[arg(long, default_value = "json")]
        format: String,
    },

    /// Print the effective engine configuration as JSON
    Config,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;
    debug!("fitplan-cli started");

    match cli.command {
        Command::Evaluate { profile, format } => {
            commands::evaluate(&profile, OutputFormat::from_str_param(&format))
        }
        Command::Metrics { profile, format } => {
            commands::metrics(&profile, OutputFormat::from_str_param(&format))?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Config => {
            commands::print_config()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
