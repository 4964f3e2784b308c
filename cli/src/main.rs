mod telemetry;

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use hardware_fit_analyzer::batch::{BatchConfig, analyze_batch, collect_text_paths, load_inputs};
use hardware_fit_analyzer::config::AnalyzerConfig;
use hardware_fit_analyzer::output::{
    OutputFormat, format_analysis, format_batch_report, format_report,
};
use hardware_fit_analyzer::report::{AcceptancePolicy, build_batch_report};
use hardware_fit_analyzer::{analyze_text, analyze_text_with_report};
use hardware_fit_core::Platform;
use tracing::{debug, info};

use telemetry::{LogLevel, init_tracing};

const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Json,
    Yaml,
    Markdown,
    Table,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Yaml => OutputFormat::Yaml,
            CliOutputFormat::Markdown => OutputFormat::Markdown,
            CliOutputFormat::Table => OutputFormat::Table,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliPlatform {
    Desktop,
    AppleSilicon,
}

impl From<CliPlatform> for Platform {
    fn from(value: CliPlatform) -> Self {
        match value {
            CliPlatform::Desktop => Platform::Desktop,
            CliPlatform::AppleSilicon => Platform::AppleSilicon,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "hardware-fit")]
#[command(about = "Score hardware compatibility from OCR text of system information panels")]
#[command(version)]
struct Cli {
    /// Log verbosity (overridden by RUST_LOG).
    #[arg(long, global = true, value_enum, default_value = "warn")]
    log_level: LogLevel,
    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    log_json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze OCR text from a file.
    AnalyzeFile(AnalyzeFileArgs),
    /// Analyze OCR text from stdin.
    AnalyzeStdin(AnalyzeStdinArgs),
    /// Analyze many OCR text files and write a batch report.
    Batch(BatchArgs),
    /// Write a default configuration file.
    InitConfig(InitConfigArgs),
}

/// Options shared by every analysis command.
#[derive(Debug, Args)]
struct AnalysisOptions {
    /// Pipeline to run (defaults to the config value, then desktop).
    #[arg(long, value_enum)]
    platform: Option<CliPlatform>,
    /// Minimum accepted score, overriding the config file.
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    min_score: Option<u8>,
    /// Accept inputs from which nothing could be extracted.
    #[arg(long)]
    allow_no_data: bool,
    /// YAML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum, default_value = "json")]
    format: CliOutputFormat,
}

#[derive(Debug, Args)]
struct AnalyzeFileArgs {
    /// OCR text file.
    #[arg(long)]
    input: PathBuf,
    /// Include the acceptance report alongside the analysis.
    #[arg(long)]
    with_report: bool,
    #[command(flatten)]
    options: AnalysisOptions,
}

#[derive(Debug, Args)]
struct AnalyzeStdinArgs {
    /// Source name recorded in the report.
    #[arg(long, default_value = "<stdin>")]
    source: String,
    /// Include the acceptance report alongside the analysis.
    #[arg(long)]
    with_report: bool,
    #[command(flatten)]
    options: AnalysisOptions,
}

#[derive(Debug, Args)]
struct BatchArgs {
    /// Input files or directories of `.txt` files.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
    /// Write the batch report here instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
    /// Parallel worker threads.
    #[arg(long)]
    jobs: Option<usize>,
    /// Exit non-zero when any input is rejected.
    #[arg(long)]
    strict: bool,
    #[command(flatten)]
    options: AnalysisOptions,
}

#[derive(Debug, Args)]
struct InitConfigArgs {
    /// Destination path.
    #[arg(long, default_value = "hardware-fit.yml")]
    output: PathBuf,
    /// Overwrite an existing file.
    #[arg(long)]
    force: bool,
}

/// Effective settings after merging the config file with CLI flags.
#[derive(Debug, Clone, Copy)]
struct Settings {
    platform: Platform,
    policy: AcceptancePolicy,
    jobs: Option<usize>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_level, cli.log_json);

    let result = match cli.command {
        Command::AnalyzeFile(args) => run_analyze_file(args),
        Command::AnalyzeStdin(args) => run_analyze_stdin(args),
        Command::Batch(args) => run_batch(args),
        Command::InitConfig(args) => run_init_config(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn resolve_settings(options: &AnalysisOptions) -> Result<Settings, String> {
    let config = match &options.config {
        Some(path) => AnalyzerConfig::load(path)
            .map_err(|err| format!("Failed to load config '{}': {err}", path.display()))?,
        None => AnalyzerConfig::default(),
    };

    let mut policy = config.policy();
    if let Some(min_score) = options.min_score {
        policy.min_score = min_score;
    }
    if options.allow_no_data {
        policy.allow_no_data = true;
    }

    let settings = Settings {
        platform: options
            .platform
            .map(Platform::from)
            .unwrap_or(config.platform),
        policy,
        jobs: config.batch.jobs,
    };
    debug!(?settings, "Resolved settings");
    Ok(settings)
}

fn run_analyze_file(args: AnalyzeFileArgs) -> Result<(), String> {
    let text = fs::read_to_string(&args.input)
        .map_err(|err| format!("Failed to read '{}': {err}", args.input.display()))?;
    let source = args.input.display().to_string();
    run_analyze_text(&source, &text, args.with_report, &args.options)
}

fn run_analyze_stdin(args: AnalyzeStdinArgs) -> Result<(), String> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|err| format!("Failed to read stdin: {err}"))?;
    run_analyze_text(&args.source, &text, args.with_report, &args.options)
}

fn run_analyze_text(
    source: &str,
    text: &str,
    with_report: bool,
    options: &AnalysisOptions,
) -> Result<(), String> {
    let settings = resolve_settings(options)?;
    let format: OutputFormat = options.format.into();

    if !with_report {
        let analysis = analyze_text(settings.platform, text);
        let output = format_analysis(&analysis, format).map_err(|err| err.to_string())?;
        println!("{output}");
        return Ok(());
    }

    let run = analyze_text_with_report(source, settings.platform, text, settings.policy);

    #[derive(serde::Serialize)]
    struct AnalyzeOutput<'a> {
        analysis: &'a hardware_fit_core::Analysis,
        report: &'a hardware_fit_analyzer::report::AnalysisReport,
    }

    let output = AnalyzeOutput {
        analysis: &run.analysis,
        report: &run.report,
    };

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| format!("Failed to serialize output: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&output)
                .map_err(|e| format!("Failed to serialize output: {e}"))?;
            println!("{yaml}");
        }
        _ => {
            print!(
                "{}",
                format_analysis(&run.analysis, format).map_err(|err| err.to_string())?
            );
            print!(
                "{}",
                format_report(&run.report, format).map_err(|err| err.to_string())?
            );
        }
    }
    Ok(())
}

fn run_batch(args: BatchArgs) -> Result<(), String> {
    if args.jobs == Some(0) {
        return Err("--jobs must be at least 1".to_string());
    }
    let settings = resolve_settings(&args.options)?;
    let format: OutputFormat = args.options.format.into();

    let paths = collect_text_paths(&args.inputs).map_err(|e| e.to_string())?;
    let inputs = load_inputs(&paths, settings.platform).map_err(|e| e.to_string())?;
    let config = BatchConfig {
        policy: settings.policy,
        jobs: args.jobs.or(settings.jobs),
    };
    let outcome = analyze_batch(&inputs, &config).map_err(|e| e.to_string())?;
    let rejected = outcome.rejected.len();

    let batch = build_batch_report(PACKAGE_VERSION, settings.policy, outcome.reports);
    let raw = format_batch_report(&batch, format).map_err(|e| e.to_string())?;

    match &args.output {
        Some(path) => {
            write_output_file(path, &raw)?;
            println!(
                "Analyzed {} input(s): {} accepted, {} rejected. Report written to '{}'.",
                batch.summary.total,
                batch.summary.accepted,
                batch.summary.rejected,
                path.display()
            );
        }
        None => println!("{raw}"),
    }

    if rejected > 0 {
        let breakdown: Vec<String> = batch
            .summary
            .rejection_codes
            .iter()
            .map(|(code, count)| format!("{count} {code}"))
            .collect();
        eprintln!(
            "{rejected} input(s) rejected ({}): {}",
            breakdown.join(", "),
            batch.rejected.join(", ")
        );
        if args.strict {
            return Err(format!(
                "{rejected} input(s) rejected by the acceptance policy"
            ));
        }
    }

    info!(total = batch.summary.total, rejected, "Batch complete");
    Ok(())
}

fn run_init_config(args: InitConfigArgs) -> Result<(), String> {
    if args.output.exists() && !args.force {
        return Err(format!(
            "'{}' already exists (use --force to overwrite)",
            args.output.display()
        ));
    }
    create_parent_dir(&args.output)?;
    AnalyzerConfig::default()
        .save(&args.output)
        .map_err(|err| format!("Failed to write '{}': {err}", args.output.display()))?;
    println!("Wrote default configuration to '{}'.", args.output.display());
    Ok(())
}

fn write_output_file(path: &Path, raw: &str) -> Result<(), String> {
    create_parent_dir(path)?;
    fs::write(path, raw).map_err(|err| format!("Failed to write '{}': {err}", path.display()))
}

fn create_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|err| {
                format!(
                    "Failed to create output directory '{}': {err}",
                    parent.display()
                )
            })?;
        }
    }
    Ok(())
}
