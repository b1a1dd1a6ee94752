//! sortbench-analyzer CLI
//!
//! Prints the summary report for a results table and, unless `--no-plots` is
//! given, writes the comparison figure. Load and schema failures exit with
//! status 1 before any report text is printed; a chart failure is reported
//! on stderr and does not change the exit status.

use anyhow::Context;
use clap::Parser;
use sortbench_analyzer::chart::DEFAULT_CHART_FILE;
use sortbench_analyzer::storage::DEFAULT_RESULTS_FILE;
use sortbench_analyzer::{
    Analysis, AnalysisConfig, ChartContext, ChartData, ChartRenderer, PlottersRenderer,
    RecordStore, SummaryReport,
};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Summarize string-sorting benchmark results"
)]
struct Cli {
    /// Path to the CSV (or .parquet) results file
    #[arg(long, default_value = DEFAULT_RESULTS_FILE)]
    csv: PathBuf,

    /// Do not generate the comparison chart
    #[arg(long)]
    no_plots: bool,

    /// Log verbosity (-v, -vv); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let store = RecordStore::load(&cli.csv)
        .with_context(|| format!("cannot analyze {}", cli.csv.display()))?;

    let config = AnalysisConfig::default();
    let analysis = Analysis::run(&store, &config);
    println!("{}", SummaryReport::new(&analysis, config.reference_distribution()));

    if cli.no_plots {
        return Ok(());
    }

    let ctx = ChartContext::new(DEFAULT_CHART_FILE);
    let data = ChartData::build(&store, &analysis, &config);
    match PlottersRenderer.render(&ctx, &data) {
        Ok(()) => println!("Charts saved to '{}'", ctx.output().display()),
        Err(err) => eprintln!("Chart generation failed: {err}"),
    }

    Ok(())
}
