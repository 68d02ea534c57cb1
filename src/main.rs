//! topsis-ranker - Rank alternatives from a problem file with TOPSIS.
//!
//! Loads configuration from the environment, reads a YAML or JSON problem
//! file, prints the ranking, and writes the results and calculation steps.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};

use topsis_ranker::adapters::{exporter_for, FileProblemSource, LocalReportStorage};
use topsis_ranker::application::{
    AnalysisError, AnalysisReport, ExportReportHandler, RunAnalysisCommand, RunAnalysisHandler,
};
use topsis_ranker::config::{AppConfig, ConfigError, LogFormat, LoggingConfig};
use topsis_ranker::domain::topsis::round_to;
use topsis_ranker::ports::{ExportError, ExportFormat, ProblemSource, ReportExporter};

#[derive(Parser)]
#[command(name = "topsis-ranker")]
#[command(about = "Rank alternatives against weighted criteria with TOPSIS")]
struct Args {
    /// Problem file (.yaml, .yml or .json)
    problem: PathBuf,

    /// Directory for the exported reports
    #[arg(long)]
    out: Option<PathBuf>,

    /// Export format (csv or json)
    #[arg(long)]
    format: Option<ExportFormat>,

    /// Run even when the weights sum to more than one
    #[arg(long)]
    allow_overweight: bool,

    /// Skip the ranking table on stdout
    #[arg(long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.logging);
    apply_overrides(&args, &mut config);

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = %e.code(), "{e}");
            eprintln!("{}", failure_line(&e));
            ExitCode::FAILURE
        }
    }
}

/// Command-line flags win over configured values.
fn apply_overrides(args: &Args, config: &mut AppConfig) {
    if let Some(out) = &args.out {
        config.output.directory = out.clone();
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }
    config.analysis.allow_overweight |= args.allow_overweight;
}

fn failure_line(e: &AnalysisError) -> String {
    format!("error [{}]: {e}", e.code())
}

fn load_config() -> Result<AppConfig, ConfigError> {
    let config = AppConfig::load()?;
    config.validate()?;
    Ok(config)
}

fn run(args: &Args, config: &AppConfig) -> Result<(), AnalysisError> {
    let source = FileProblemSource::new(&args.problem);
    info!(source = %source.describe(), "Loading decision problem");
    let problem = source.load()?;

    let report = RunAnalysisHandler::new(config.analysis.clone())
        .handle(RunAnalysisCommand::new(problem))?;

    if !args.quiet {
        render_ranking(&report, config.analysis.precision, &mut io::stdout().lock())
            .map_err(|e| ExportError::io_error(e.to_string()))?;
    }

    let exporter: Arc<dyn ReportExporter> =
        Arc::from(exporter_for(config.output.format, config.analysis.precision));
    let storage = Arc::new(LocalReportStorage::new(&config.output.directory));
    let paths = ExportReportHandler::new(exporter, storage).handle(&report)?;

    if !args.quiet {
        for path in paths {
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}

fn render_ranking(
    report: &AnalysisReport,
    precision: u32,
    out: &mut impl Write,
) -> io::Result<()> {
    let ranked = report.ranked();
    let width = ranked
        .iter()
        .map(|s| s.alternative.chars().count())
        .max()
        .unwrap_or(0)
        .max("Alternative".len());

    writeln!(out, "{:<6}{:<width$}  {}", "Rank", "Alternative", "Score")?;
    for score in ranked {
        writeln!(
            out,
            "{:<6}{:<width$}  {}",
            score.rank,
            score.alternative,
            round_to(score.score, precision)
        )?;
    }
    writeln!(out)?;

    match report.best_alternative() {
        Some(best) => writeln!(out, "Best alternative: {best}")?,
        None => writeln!(
            out,
            "Several alternatives share rank 1, there is no single best alternative"
        )?,
    }
    if !report.weight_advisory.is_balanced() {
        writeln!(out, "Note: {}", report.weight_advisory)?;
    }
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(logging.env_filter())
        .with_writer(std::io::stderr)
        .with_target(true);

    match logging.format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
