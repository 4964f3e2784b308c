//! Multi-input analysis over OCR text files.

use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use hardware_fit_core::{Analysis, Platform};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::{AnalyzerError, Result};
use crate::report::{AcceptancePolicy, AnalysisReport};
use crate::{AnalysisRun, analyze_text_with_report};

/// One OCR transcription queued for analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchInput {
    /// Display name, usually the file path.
    pub source: String,
    pub platform: Platform,
    pub text: String,
}

impl BatchInput {
    pub fn new(source: impl Into<String>, platform: Platform, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            platform,
            text: text.into(),
        }
    }
}

/// Batch execution settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchConfig {
    pub policy: AcceptancePolicy,
    /// Worker threads (`None` = adaptive default).
    pub jobs: Option<usize>,
}

/// Aggregated output of a batch run, sorted by source name.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub analyses: Vec<Analysis>,
    pub reports: Vec<AnalysisReport>,
    /// Sources the acceptance policy rejected.
    pub rejected: Vec<String>,
}

/// Collects `.txt` paths from input files and/or directories.
///
/// Directories contribute their `.txt` entries (non-recursive); explicit
/// files are taken as given. The result is sorted and deduplicated.
pub fn collect_text_paths(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    if inputs.is_empty() {
        return Err(AnalyzerError::InvalidInput(
            "No input paths were provided".to_string(),
        ));
    }

    let mut paths = BTreeSet::new();

    for input in inputs {
        if input.is_dir() {
            for entry in fs::read_dir(input)? {
                let path = entry?.path();
                if path.is_file() && path.extension() == Some(OsStr::new("txt")) {
                    paths.insert(path);
                }
            }
            continue;
        }

        if input.is_file() {
            paths.insert(input.clone());
            continue;
        }

        return Err(AnalyzerError::InvalidInput(format!(
            "Input path '{}' does not exist",
            input.display(),
        )));
    }

    if paths.is_empty() {
        return Err(AnalyzerError::InvalidInput(
            "No .txt files found in provided paths".to_string(),
        ));
    }

    Ok(paths.into_iter().collect())
}

/// Reads every path into a [`BatchInput`] for `platform`.
pub fn load_inputs(paths: &[PathBuf], platform: Platform) -> Result<Vec<BatchInput>> {
    paths
        .iter()
        .map(|path| load_input(path, platform))
        .collect()
}

fn load_input(path: &Path, platform: Platform) -> Result<BatchInput> {
    let text = fs::read_to_string(path)?;
    Ok(BatchInput::new(path.display().to_string(), platform, text))
}

fn default_parallel_jobs(input_count: usize) -> usize {
    let cpu_count = std::thread::available_parallelism()
        .map(|parallelism| parallelism.get())
        .unwrap_or(4);
    cpu_count.max(1).min(input_count.max(1))
}

/// Analyzes every input in parallel and applies the acceptance policy.
///
/// Each analysis is independent, so inputs run on a dedicated `rayon`
/// pool without coordination.
///
/// # Errors
///
/// Returns [`ThreadPool`](AnalyzerError::ThreadPool) if the worker pool
/// cannot be created.
pub fn analyze_batch(inputs: &[BatchInput], config: &BatchConfig) -> Result<BatchOutcome> {
    let jobs = config
        .jobs
        .filter(|jobs| *jobs > 0)
        .unwrap_or_else(|| default_parallel_jobs(inputs.len()));
    debug!(jobs, inputs = inputs.len(), "Starting batch analysis");

    let pool = rayon::ThreadPoolBuilder::new().num_threads(jobs).build()?;
    let mut runs: Vec<AnalysisRun> = pool.install(|| {
        inputs
            .par_iter()
            .map(|input| {
                analyze_text_with_report(&input.source, input.platform, &input.text, config.policy)
            })
            .collect()
    });

    // Deterministic output order.
    runs.sort_by(|a, b| a.report.source.cmp(&b.report.source));

    let mut analyses = Vec::with_capacity(runs.len());
    let mut reports = Vec::with_capacity(runs.len());
    let mut rejected = Vec::new();
    for run in runs {
        if !run.report.accepted {
            rejected.push(run.report.source.clone());
        }
        analyses.push(run.analysis);
        reports.push(run.report);
    }

    info!(
        total = reports.len(),
        rejected = rejected.len(),
        "Batch analysis finished"
    );

    Ok(BatchOutcome {
        analyses,
        reports,
        rejected,
    })
}
