//! Output formatting for analyses and reports.

use hardware_fit_core::{Analysis, CheckResult, Status};

use crate::error::Result;
use crate::report::{AnalysisReport, BatchReport};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OutputFormat {
    Json,
    Yaml,
    Markdown,
    Table,
}

/// Formats an analysis in the requested output format.
pub fn format_analysis(analysis: &Analysis, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(analysis)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(analysis)?),
        OutputFormat::Markdown => Ok(analysis_to_markdown(analysis)),
        OutputFormat::Table => Ok(analysis_to_table(analysis)),
    }
}

/// Formats a per-input report in the requested output format.
pub fn format_report(report: &AnalysisReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
        OutputFormat::Markdown => Ok(report_to_markdown(report)),
        OutputFormat::Table => Ok(report_to_table(report)),
    }
}

/// Formats a batch report in the requested output format.
pub fn format_batch_report(batch: &BatchReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(batch)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(batch)?),
        OutputFormat::Markdown => Ok(batch_to_markdown(batch)),
        OutputFormat::Table => Ok(batch_to_table(batch)),
    }
}

fn status_label(status: Status) -> &'static str {
    match status {
        Status::Good => "ok",
        Status::Warning => "warn",
        Status::Bad => "bad",
    }
}

fn push_results_markdown(out: &mut String, results: &[CheckResult]) {
    out.push_str("| Attribute | Value | Status | Reason |\n");
    out.push_str("|-----------|-------|--------|--------|\n");
    for result in results {
        out.push_str(&format!(
            "| {} | {} | {} | `{}` |\n",
            result.attribute,
            result.display_value(),
            status_label(result.status),
            result.reason,
        ));
    }
}

fn push_results_table(out: &mut String, results: &[CheckResult]) {
    let name_width = results
        .iter()
        .map(|r| r.attribute.label().len())
        .max()
        .unwrap_or(9);
    let value_width = results
        .iter()
        .map(|r| r.display_value().chars().count())
        .max()
        .unwrap_or(5);

    for result in results {
        out.push_str(&format!(
            "  {:<name_width$}  {:<value_width$}  {:<4}  {}\n",
            result.attribute.label(),
            result.display_value(),
            status_label(result.status),
            result.reason,
        ));
    }
}

fn analysis_to_markdown(analysis: &Analysis) -> String {
    let mut out = String::new();

    out.push_str(&format!("# Hardware Analysis ({})\n\n", analysis.platform));
    if let Some(name) = analysis.specs.device_name() {
        out.push_str(&format!("**Device:** {name}\n\n"));
    }
    out.push_str(&format!(
        "**Score:** {} ({})\n\n",
        analysis.score,
        analysis.score.tier()
    ));
    push_results_markdown(&mut out, &analysis.results);

    out
}

fn analysis_to_table(analysis: &Analysis) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Platform: {}  Score: {} ({})",
        analysis.platform,
        analysis.score,
        analysis.score.tier()
    ));
    if let Some(name) = analysis.specs.device_name() {
        out.push_str(&format!("  Device: {name}"));
    }
    out.push('\n');
    push_results_table(&mut out, &analysis.results);

    out
}

fn report_to_markdown(report: &AnalysisReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("# Analysis Report: {}\n\n", report.source));
    out.push_str(&format!("- **Platform:** {}\n", report.platform));
    if let Some(ref name) = report.device_name {
        out.push_str(&format!("- **Device:** {name}\n"));
    }
    out.push_str(&format!("- **Score:** {}\n", report.score));
    out.push_str(&format!("- **Tier:** {}\n", report.tier));
    out.push_str(&format!(
        "- **Accepted:** {}\n",
        if report.accepted { "yes" } else { "no" }
    ));
    out.push_str(&format!(
        "- **Known Attributes:** {}/{}\n",
        report.known_attributes,
        report.known_attributes + report.unknown_attributes
    ));

    if let Some(ref code) = report.rejection_code {
        out.push_str(&format!("- **Rejection Code:** {code}\n"));
    }
    if let Some(ref detail) = report.rejection_detail {
        out.push_str(&format!("- **Rejection Detail:** {detail}\n"));
    }

    out.push_str("\n## Checks\n\n");
    push_results_markdown(&mut out, &report.results);

    if !report.warnings.is_empty() {
        out.push_str("\n## Warnings\n\n");
        for w in &report.warnings {
            out.push_str(&format!("- {w}\n"));
        }
    }

    out
}

fn report_line(report: &AnalysisReport) -> String {
    let status = if report.accepted { "OK" } else { "REJECT" };
    let mut line = format!(
        "{:<32} {:<13} {:<7} {:<8} {}",
        report.source,
        report.platform.as_str(),
        status,
        report.score.to_string(),
        report.tier.as_str(),
    );
    if let Some(ref code) = report.rejection_code {
        line.push_str(&format!("  [{code}]"));
    }
    line.push('\n');
    line
}

fn report_to_table(report: &AnalysisReport) -> String {
    let mut out = report_line(report);
    push_results_table(&mut out, &report.results);
    out
}

fn batch_to_markdown(batch: &BatchReport) -> String {
    let mut out = String::new();
    let summary = &batch.summary;

    out.push_str("# Batch Analysis Report\n\n");
    out.push_str(&format!("- **Generated:** {}\n", batch.generated_at));
    out.push_str(&format!("- **Version:** {}\n", batch.version));
    out.push_str(&format!("- **Minimum Score:** {}\n", batch.policy.min_score));
    out.push_str(&format!(
        "- **Accepted:** {}/{}\n",
        summary.accepted, summary.total
    ));
    if let Some(average) = summary.average_score {
        out.push_str(&format!("- **Average Score:** {average:.1}\n"));
    }

    out.push_str("\n| Source | Platform | Score | Tier | Accepted | Rejection |\n");
    out.push_str("|--------|----------|-------|------|----------|-----------|\n");
    for report in &batch.reports {
        let rejection = report
            .rejection_code
            .map(|code| code.to_string())
            .unwrap_or_default();
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} | {rejection} |\n",
            report.source,
            report.platform,
            report.score,
            report.tier,
            if report.accepted { "yes" } else { "no" },
        ));
    }

    if !summary.rejection_codes.is_empty() {
        out.push_str("\n## Rejections\n\n");
        for (code, count) in &summary.rejection_codes {
            out.push_str(&format!("- `{code}`: {count}\n"));
        }
    }

    out
}

fn batch_to_table(batch: &BatchReport) -> String {
    let mut out = String::new();
    for report in &batch.reports {
        out.push_str(&report_line(report));
    }
    out.push_str(&format!(
        "{} accepted, {} rejected, {} total\n",
        batch.summary.accepted, batch.summary.rejected, batch.summary.total
    ));
    out
}
