use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use case_report::report::summary::{org_summary, region_summary};
use case_report::{AnalysisConfig, RunOptions};
use clap::Parser;
use log::{error, info};

/// Classify case records and fill the district and organization reports
#[derive(Debug, Parser)]
#[command(name = "case-report", version, about)]
struct Args {
    /// Parquet export of the case spreadsheet
    input: PathBuf,

    /// JSON configuration; the built-in configuration is used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Template of the district report
    #[arg(long)]
    region_template: Option<PathBuf>,

    /// Output of the district report
    #[arg(long, default_value = "report_districts.json")]
    region_output: PathBuf,

    /// Template of the organization report
    #[arg(long)]
    org_template: Option<PathBuf>,

    /// Output of the organization report
    #[arg(long, default_value = "report_organizations.json")]
    org_output: PathBuf,

    /// Also write the normalized records to this JSON file
    #[arg(long)]
    dump_records: Option<PathBuf>,

    /// Count records in parallel
    #[arg(long)]
    parallel: bool,

    /// Print per-bucket counts after the run
    #[arg(long)]
    summary: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => AnalysisConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => AnalysisConfig::default(),
    };
    info!("{config}");

    let options = RunOptions {
        input: args.input,
        region_template: args.region_template,
        region_output: args.region_output,
        org_template: args.org_template,
        org_output: args.org_output,
        records_dump: args.dump_records,
        parallel: args.parallel,
    };

    let start = Instant::now();
    let run_config = config.clone();
    let run_options = options.clone();
    let result = tokio::task::spawn_blocking(move || case_report::run(&run_options, &run_config))
        .await
        .context("Analysis task panicked")?;

    match result {
        Ok(summary) => {
            info!(
                "Reports saved: {} ({} rows), {} ({} rows) in {:?}",
                options.region_output.display(),
                summary.region_rows,
                options.org_output.display(),
                summary.org_rows,
                start.elapsed()
            );
            if args.summary {
                println!("{}", region_summary(&summary.regions, &config));
                println!("{}", org_summary(&summary.organizations, &config));
            }
            Ok(())
        }
        Err(e) => {
            error!("Failed to process {}: {e}", options.input.display());
            Err(e).context("Analysis failed")
        }
    }
}
