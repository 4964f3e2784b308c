//! Acceptance policy and structured analysis reports.
//!
//! An [`AnalysisReport`] summarizes one [`Analysis`] for machine
//! consumption. The [`AcceptancePolicy`] then decides whether the input is
//! acceptable:
//! - a [`Score::NoData`] result is accepted only with `allow_no_data`
//! - a numeric score below `min_score` is rejected, as a gating failure when
//!   a known gating attribute is `Bad` and as a low score otherwise

use std::collections::BTreeMap;
use std::fmt;

use chrono::Utc;
use hardware_fit_core::{Analysis, CheckResult, Platform, Score, ScoreTier, Status};
use serde::{Deserialize, Serialize};

use crate::score::gating_failures;

/// Suggested minimum score for acceptance (the "Acceptable" tier).
pub const DEFAULT_MIN_SCORE: u8 = 55;

/// Policy deciding whether an analyzed input is accepted.
///
/// # Examples
///
/// ```
/// use hardware_fit_analyzer::report::AcceptancePolicy;
///
/// let policy = AcceptancePolicy::default();
/// assert_eq!(policy.min_score, 55);
/// assert!(!policy.allow_no_data);
///
/// let permissive = AcceptancePolicy::permissive();
/// assert_eq!(permissive.min_score, 0);
/// assert!(permissive.allow_no_data);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptancePolicy {
    pub min_score: u8,
    pub allow_no_data: bool,
}

impl Default for AcceptancePolicy {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            allow_no_data: false,
        }
    }
}

impl AcceptancePolicy {
    pub fn permissive() -> Self {
        Self {
            min_score: 0,
            allow_no_data: true,
        }
    }
}

/// Structured reason an input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionCode {
    /// Nothing could be extracted from the text.
    NoData,
    /// A known gating attribute (architecture, chip, OS version) is `Bad`.
    GatingFailure,
    /// Score is below the policy minimum.
    BelowMinScore,
}

impl fmt::Display for RejectionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoData => write!(f, "no_data"),
            Self::GatingFailure => write!(f, "gating_failure"),
            Self::BelowMinScore => write!(f, "below_min_score"),
        }
    }
}

/// Status counts over attributes with an extracted value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub good: usize,
    pub warning: usize,
    pub bad: usize,
}

impl StatusCounts {
    pub fn from_results(results: &[CheckResult]) -> Self {
        let mut counts = Self::default();
        for result in results.iter().filter(|r| r.is_known()) {
            match result.status {
                Status::Good => counts.good += 1,
                Status::Warning => counts.warning += 1,
                Status::Bad => counts.bad += 1,
            }
        }
        counts
    }
}

/// Per-input analysis report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Input name (file path or `<stdin>`).
    pub source: String,
    pub platform: Platform,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,
    pub score: Score,
    pub tier: ScoreTier,
    pub accepted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_code: Option<RejectionCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_detail: Option<String>,
    pub status_counts: StatusCounts,
    pub known_attributes: usize,
    pub unknown_attributes: usize,
    pub results: Vec<CheckResult>,
    pub warnings: Vec<String>,
}

/// Builds an unassessed report for `analysis`. The report starts out
/// accepted; run it through [`apply_acceptance_policy`] to decide.
pub fn build_report(source: &str, analysis: &Analysis) -> AnalysisReport {
    let known_attributes = analysis.results.iter().filter(|r| r.is_known()).count();
    let warnings = analysis
        .results
        .iter()
        .filter(|r| !r.is_known())
        .map(|r| format!("{} could not be extracted", r.attribute))
        .collect();

    AnalysisReport {
        source: source.to_string(),
        platform: analysis.platform,
        device_name: analysis.specs.device_name().map(str::to_string),
        score: analysis.score,
        tier: analysis.score.tier(),
        accepted: true,
        rejection_code: None,
        rejection_detail: None,
        status_counts: StatusCounts::from_results(&analysis.results),
        known_attributes,
        unknown_attributes: analysis.results.len() - known_attributes,
        results: analysis.results.clone(),
        warnings,
    }
}

fn assess(report: &AnalysisReport, policy: AcceptancePolicy) -> Option<(RejectionCode, String)> {
    let points = match report.score {
        Score::NoData if policy.allow_no_data => return None,
        Score::NoData => {
            return Some((
                RejectionCode::NoData,
                "no hardware attribute could be extracted".to_string(),
            ));
        }
        Score::Points(points) => points,
    };
    if points >= policy.min_score {
        return None;
    }

    let failures = gating_failures(&report.results);
    if failures.is_empty() {
        return Some((
            RejectionCode::BelowMinScore,
            format!("score {points} below minimum {}", policy.min_score),
        ));
    }
    let detail = failures
        .iter()
        .map(|r| format!("{} {} ({})", r.attribute, r.display_value(), r.reason))
        .collect::<Vec<_>>()
        .join("; ");
    Some((RejectionCode::GatingFailure, format!("unsupported {detail}")))
}

/// Applies `policy` to a report, setting acceptance and rejection fields.
pub fn apply_acceptance_policy(
    mut report: AnalysisReport,
    policy: AcceptancePolicy,
) -> AnalysisReport {
    match assess(&report, policy) {
        Some((code, detail)) => {
            let gate_warning = format!("Acceptance policy rejected input: {detail}");
            if !report.warnings.contains(&gate_warning) {
                report.warnings.push(gate_warning);
            }
            report.accepted = false;
            report.rejection_code = Some(code);
            report.rejection_detail = Some(detail);
        }
        None => {
            report.accepted = true;
            report.rejection_code = None;
            report.rejection_detail = None;
        }
    }
    report
}

/// Aggregate counts for a batch run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub accepted: usize,
    pub rejected: usize,
    /// Mean of numeric scores; `None` when every input was no-data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_score: Option<f64>,
    /// Rejection counts keyed by [`RejectionCode`].
    pub rejection_codes: BTreeMap<RejectionCode, usize>,
}

/// Batch report for a multi-input run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub generated_at: String,
    pub version: String,
    pub policy: AcceptancePolicy,
    pub reports: Vec<AnalysisReport>,
    /// Sources the policy rejected.
    pub rejected: Vec<String>,
    pub summary: BatchSummary,
}

/// Summarizes rejection code distribution across reports.
pub fn rejection_code_summary(reports: &[AnalysisReport]) -> BTreeMap<RejectionCode, usize> {
    let mut counts = BTreeMap::new();
    for code in reports.iter().filter_map(|r| r.rejection_code) {
        *counts.entry(code).or_insert(0) += 1;
    }
    counts
}

/// Builds a serializable batch report from assessed per-input reports.
pub fn build_batch_report(
    version: &str,
    policy: AcceptancePolicy,
    reports: Vec<AnalysisReport>,
) -> BatchReport {
    let rejected: Vec<String> = reports
        .iter()
        .filter(|r| !r.accepted)
        .map(|r| r.source.clone())
        .collect();
    let scores: Vec<f64> = reports
        .iter()
        .filter_map(|r| r.score.value())
        .map(f64::from)
        .collect();
    let average_score =
        (!scores.is_empty()).then(|| scores.iter().sum::<f64>() / scores.len() as f64);

    let summary = BatchSummary {
        total: reports.len(),
        accepted: reports.len() - rejected.len(),
        rejected: rejected.len(),
        average_score,
        rejection_codes: rejection_code_summary(&reports),
    };

    BatchReport {
        generated_at: Utc::now().to_rfc3339(),
        version: version.to_string(),
        policy,
        reports,
        rejected,
        summary,
    }
}
