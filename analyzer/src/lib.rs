//! Hardware compatibility analysis over OCR text.
//!
//! This crate turns the OCR transcription of a system-information panel
//! into an ordered list of classified [`CheckResult`]s and a 0–100
//! [`Score`]. Two pipelines exist, selected by [`Platform`]: desktop-class
//! (processor, graphics, RAM, video memory, architecture) and Apple-silicon
//! (chip, unified memory, macOS version). Both run the same three stages:
//!
//! 1. [`extractor`]: multilingual, OCR-tolerant pattern rules fill a
//!    [`HardwareSpecs`] record.
//! 2. [`classify`]: per-attribute decision lists assign a [`Status`] and a
//!    symbolic reason code.
//! 3. [`score`]: statuses aggregate into a [`Score`], with a no-data
//!    sentinel and gating attributes that force zero.
//!
//! # Main entry points
//!
//! - [`analyze_text`]: pure analysis of one text blob.
//! - [`analyze_text_with_report`]: same, plus an [`AnalysisReport`] with the
//!   [`AcceptancePolicy`] applied.
//! - [`batch::analyze_batch`]: many inputs on a worker pool.
//!
//! # Example
//!
//! ```
//! use hardware_fit_analyzer::analyze_text;
//! use hardware_fit_core::{Attribute, Platform, Score, Status};
//!
//! let text = "\
//! Processor: AMD Ryzen 7 5800X
//! Installed RAM: 16 GB
//! Graphics card: NVIDIA GeForce RTX 3070
//! 64-bit operating system, x64-based processor
//! ";
//!
//! let analysis = analyze_text(Platform::Desktop, text);
//! assert_eq!(analysis.score, Score::Points(100));
//! assert_eq!(analysis.result(Attribute::Architecture).unwrap().status, Status::Good);
//! ```
//!
//! [`CheckResult`]: hardware_fit_core::CheckResult
//! [`Status`]: hardware_fit_core::Status
//! [`HardwareSpecs`]: hardware_fit_core::HardwareSpecs
//! [`Score`]: hardware_fit_core::Score

pub mod batch;
pub mod classify;
pub mod config;
pub mod error;
pub mod extractor;
pub mod output;
pub mod report;
pub mod score;

use hardware_fit_core::{Analysis, Platform};
use tracing::debug;

use report::{AcceptancePolicy, AnalysisReport, apply_acceptance_policy, build_report};

/// Analysis output with both the analysis and its assessed report.
#[derive(Debug, Clone)]
pub struct AnalysisRun {
    pub analysis: Analysis,
    pub report: AnalysisReport,
}

/// Extracts, classifies, and scores one OCR text blob.
///
/// Never fails: fields that cannot be extracted are reported as unknown,
/// and text with nothing recognizable scores
/// [`Score::NoData`](hardware_fit_core::Score::NoData).
pub fn analyze_text(platform: Platform, text: &str) -> Analysis {
    let specs = extractor::extract(platform, text);
    let results = classify::classify(&specs);
    let score = score::score(&results);
    debug!(%platform, %score, "Analyzed text");

    Analysis {
        platform,
        specs,
        results,
        score,
    }
}

/// Analyzes `text` and assesses the result against `policy`.
///
/// # Examples
///
/// ```
/// use hardware_fit_analyzer::{analyze_text_with_report, report::AcceptancePolicy};
/// use hardware_fit_core::Platform;
///
/// let run = analyze_text_with_report("<stdin>", Platform::Desktop, "", AcceptancePolicy::default());
/// assert!(!run.report.accepted);
/// assert_eq!(run.report.rejection_code.unwrap().to_string(), "no_data");
/// ```
pub fn analyze_text_with_report(
    source: &str,
    platform: Platform,
    text: &str,
    policy: AcceptancePolicy,
) -> AnalysisRun {
    let analysis = analyze_text(platform, text);
    let report = apply_acceptance_policy(build_report(source, &analysis), policy);
    AnalysisRun { analysis, report }
}
