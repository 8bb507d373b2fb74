// ABOUTME: Output format abstraction for rendering engine results as JSON or plain text
// ABOUTME: JSON for machine consumers, text for terminal review of findings and alternatives
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! Engine results are plain serializable values. This module renders them
//! for the CLI and any other presentation layer.
//!
//! ## Supported Formats
//!
//! - **JSON**: Default format, the full structure including alternatives
//! - **Text**: Human-readable summary with findings in declaration order
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fitplan::formatters::{format_result, OutputFormat};
//!
//! let result = engine.evaluate(&profile)?;
//! let output = format_result(&result, OutputFormat::Text)?;
//! println!("{}", output.data);
//! ```

use std::fmt::{self, Write};

use fitplan_intelligence::validation::Finding;
use fitplan_intelligence::{CalculatedMetrics, Remediation, ValidationResult};
use serde::Serialize;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON format (default)
    #[default]
    Json,
    /// Plain text for terminals
    Text,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Json` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Self::Text,
            _ => Self::Json,
        }
    }

    /// Get the MIME content type for this format
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Text => "text/plain",
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formatted output containing the rendered data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The rendered data as a string
    pub data: String,
    /// The format used
    pub format: OutputFormat,
    /// The MIME content type
    pub content_type: &'static str,
}

impl FormattedOutput {
    fn new(data: String, format: OutputFormat) -> Self {
        Self {
            data,
            format,
            content_type: format.content_type(),
        }
    }
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl std::error::Error for FormatError {}

impl From<fmt::Error> for FormatError {
    fn from(error: fmt::Error) -> Self {
        Self {
            message: error.to_string(),
            format: OutputFormat::Text,
        }
    }
}

/// Pretty-printed JSON for any serializable value
///
/// # Errors
///
/// Returns `FormatError` if serialization fails
pub fn format_json<T: Serialize>(data: &T) -> Result<FormattedOutput, FormatError> {
    let data = serde_json::to_string_pretty(data).map_err(|e| FormatError {
        message: e.to_string(),
        format: OutputFormat::Json,
    })?;
    Ok(FormattedOutput::new(data, OutputFormat::Json))
}

/// Render a validation result in the requested format
///
/// # Errors
///
/// Returns `FormatError` if serialization fails
pub fn format_result(
    result: &ValidationResult,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    match format {
        OutputFormat::Json => format_json(result),
        OutputFormat::Text => Ok(FormattedOutput::new(render_result_text(result)?, format)),
    }
}

/// Render calculated metrics in the requested format
///
/// # Errors
///
/// Returns `FormatError` if serialization fails
pub fn format_metrics(
    metrics: &CalculatedMetrics,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    match format {
        OutputFormat::Json => format_json(metrics),
        OutputFormat::Text => {
            let mut out = String::new();
            write_metrics(&mut out, metrics)?;
            Ok(FormattedOutput::new(out, format))
        }
    }
}

fn render_result_text(result: &ValidationResult) -> Result<String, FormatError> {
    let mut out = String::new();

    if result.may_proceed {
        writeln!(out, "Plan accepted")?;
    } else {
        writeln!(out, "Plan blocked")?;
    }
    writeln!(out)?;
    write_metrics(&mut out, &result.metrics)?;

    write_findings(&mut out, "Blocking", &result.blocking)?;
    write_findings(&mut out, "Advisory", &result.advisory)?;

    if !result.may_proceed {
        writeln!(out)?;
        if result.alternatives.is_empty() {
            writeln!(
                out,
                "No numeric alternative exists; a categorical input must change."
            )?;
        } else {
            writeln!(out, "Alternatives ({}):", result.alternatives.len())?;
            for (index, plan) in result.alternatives.iter().enumerate() {
                writeln!(out, "  {}. {}", index + 1, plan.summary)?;
                writeln!(
                    out,
                    "     target {:.0} kcal/day, {:.2} kg/week, {} weeks",
                    plan.metrics.target_calories,
                    plan.metrics.weekly_rate_kg,
                    plan.profile.timeline_weeks
                )?;
            }
        }
    }

    Ok(out)
}

fn write_metrics(out: &mut String, metrics: &CalculatedMetrics) -> fmt::Result {
    writeln!(out, "BMR:              {:.0} kcal/day", metrics.bmr)?;
    writeln!(out, "Total TDEE:       {:.0} kcal/day", metrics.total_tdee)?;
    writeln!(out, "Target calories:  {:.0} kcal/day", metrics.target_calories)?;
    writeln!(
        out,
        "Weekly rate:      {:+.2} kg/week ({:.2}% of body weight)",
        metrics.weekly_rate_kg, metrics.weekly_rate_percent
    )?;
    writeln!(
        out,
        "Macros:           {:.0} g protein, {:.0} g carbs, {:.0} g fat",
        metrics.macros.protein_g, metrics.macros.carbs_g, metrics.macros.fat_g
    )?;
    writeln!(
        out,
        "Water / fiber:    {:.0} ml, {:.0} g",
        metrics.water_ml, metrics.fiber_g
    )?;
    writeln!(
        out,
        "Body fat:         {:.1}% ({:?}, {:?} confidence)",
        metrics.body_fat.percentage, metrics.body_fat.source, metrics.body_fat.confidence
    )?;
    writeln!(
        out,
        "Diet readiness:   {:.0}/100",
        metrics.diet_readiness_score
    )?;
    if metrics.effective_timeline_weeks != 0 {
        writeln!(
            out,
            "Realistic timeline: {} weeks",
            metrics.effective_timeline_weeks
        )?;
    }
    Ok(())
}

fn write_findings(out: &mut String, heading: &str, findings: &[Finding]) -> fmt::Result {
    if findings.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "{heading} ({}):", findings.len())?;
    for finding in findings {
        writeln!(out, "  [{}] {}", finding.code, finding.message)?;
        if let Some(remediation) = &finding.remediation {
            writeln!(out, "      -> {}", describe_remediation(remediation))?;
        }
    }
    Ok(())
}

fn describe_remediation(remediation: &Remediation) -> String {
    match remediation {
        Remediation::MinimumTimelineWeeks { weeks } => {
            format!("extend the timeline to at least {weeks} weeks")
        }
        Remediation::MinimumDailyCalories { kcal } => {
            format!("keep daily intake at or above {kcal:.0} kcal")
        }
        Remediation::MaximumWeeklyMinutes { minutes } => {
            format!("keep weekly training at or below {minutes} minutes")
        }
        Remediation::RevisedTimelineWeeks { weeks } => {
            format!("expect roughly {weeks} weeks to reach the goal")
        }
        Remediation::ChangeCategoricalInput { field } => format!("change {field}"),
        Remediation::ConsultProfessional => "consult a qualified professional".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse_is_case_insensitive() {
        assert_eq!(OutputFormat::from_str_param("TEXT"), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str_param("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str_param("yaml"), OutputFormat::Json);
    }

    #[test]
    fn test_describe_remediation() {
        assert_eq!(
            describe_remediation(&Remediation::MinimumTimelineWeeks { weeks: 26 }),
            "extend the timeline to at least 26 weeks"
        );
        assert_eq!(
            describe_remediation(&Remediation::ChangeCategoricalInput {
                field: "goals".to_owned()
            }),
            "change goals"
        );
    }
}
