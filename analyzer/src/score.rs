//! Aggregate scoring over classified attributes.

use hardware_fit_core::{CheckResult, Score, Status};

/// Starting score before penalties.
pub const MAX_SCORE: u32 = 100;

/// Computes the compatibility score for an ordered list of check results.
///
/// Only attributes with an extracted value count. With none at all the
/// result is [`Score::NoData`]. A known gating attribute classified `Bad`
/// forces `0`. Otherwise each known attribute subtracts its status penalty
/// from 100, floored at 0.
///
/// # Examples
///
/// ```
/// use hardware_fit_analyzer::score::score;
/// use hardware_fit_core::{Attribute, CheckResult, ReasonCode, Score, Status};
///
/// let results = vec![
///     CheckResult::new(Attribute::Ram, Some("8 GB"), Status::Warning, ReasonCode::LowRam),
///     CheckResult::new(Attribute::Processor, None, Status::Warning, ReasonCode::CpuNotFound),
/// ];
/// assert_eq!(score(&results), Score::Points(85));
/// assert_eq!(score(&[]), Score::NoData);
/// ```
pub fn score(results: &[CheckResult]) -> Score {
    if !results.iter().any(CheckResult::is_known) {
        return Score::NoData;
    }

    if results.iter().any(is_gating_failure) {
        return Score::Points(0);
    }

    let penalty: u32 = results
        .iter()
        .filter(|r| r.is_known())
        .map(|r| r.status.penalty())
        .sum();
    let points = MAX_SCORE.saturating_sub(penalty);
    Score::Points(u8::try_from(points).unwrap_or(u8::MAX))
}

/// Known gating attributes classified `Bad`.
pub fn gating_failures(results: &[CheckResult]) -> Vec<&CheckResult> {
    results.iter().filter(|r| is_gating_failure(r)).collect()
}

fn is_gating_failure(result: &CheckResult) -> bool {
    result.is_known() && result.attribute.is_gating() && result.status == Status::Bad
}
