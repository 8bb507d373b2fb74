// ABOUTME: Command implementations for fitplan-cli
// ABOUTME: Profile loading, engine invocation, and output printing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use fitplan::engine::PlanEngine;
use fitplan::formatters::{format_json, format_metrics, format_result, OutputFormat};
use fitplan::models::Profile;
use fitplan::EngineConfig;
use tracing::info;

/// Exit status for a plan that was evaluated but blocked
const BLOCKED_EXIT_CODE: u8 = 2;

fn load_profile(path: &Path) -> Result<Profile> {
    let raw = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read profile from stdin")?;
        buffer
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("failed to read profile {}", path.display()))?
    };
    serde_json::from_str(&raw).with_context(|| format!("invalid profile JSON in {}", path.display()))
}

fn engine() -> Result<PlanEngine> {
    let config = EngineConfig::load().context("invalid engine configuration")?;
    Ok(PlanEngine::new(config))
}

/// Validate a profile and print the result
pub fn evaluate(path: &Path, format: OutputFormat) -> Result<ExitCode> {
    let profile = load_profile(path)?;
    let result = engine()?.evaluate(&profile)?;

    let output = format_result(&result, format)?;
    println!("{}", output.data);

    if result.may_proceed {
        Ok(ExitCode::SUCCESS)
    } else {
        info!(
            blocking = ?result.blocking_codes(),
            "plan blocked"
        );
        Ok(ExitCode::from(BLOCKED_EXIT_CODE))
    }
}

/// Print derived metrics for a profile
pub fn metrics(path: &Path, format: OutputFormat) -> Result<()> {
    let profile = load_profile(path)?;
    let metrics = engine()?.compute(&profile)?;

    let output = format_metrics(&metrics, format)?;
    println!("{}", output.data);
    Ok(())
}

/// Print the effective configuration
pub fn print_config() -> Result<()> {
    let config = EngineConfig::load().context("invalid engine configuration")?;
    let output = format_json(&config)?;
    println!("{}", output.data);
    Ok(())
}
