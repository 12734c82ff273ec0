//! End-to-end analysis run
//!
//! Inputs are acquired first (case file and both templates), so a missing input aborts
//! the run before anything is counted or written. Both reports are filled in memory and
//! only written once everything else has succeeded.

use std::path::PathBuf;
use std::time::Instant;

use log::info;

use crate::algorithm::{OrgAggregator, RegionAggregator};
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::loader::load_rows;
use crate::models::{OrgAggregate, RegionAggregate};
use crate::preprocess::{RecordPreprocessor, write_records_json};
use crate::report::{ReportSheet, fill_org_report, fill_region_report};

/// Input and output locations of one run
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Parquet file with the case records
    pub input: PathBuf,
    /// Template of the region report; a blank sheet when absent
    pub region_template: Option<PathBuf>,
    pub region_output: PathBuf,
    /// Template of the organization report; a blank sheet when absent
    pub org_template: Option<PathBuf>,
    pub org_output: PathBuf,
    /// Where to dump the normalized records, if anywhere
    pub records_dump: Option<PathBuf>,
    /// Count records on the rayon thread pool
    pub parallel: bool,
}

/// Outcome of a completed run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub records: usize,
    pub regions: RegionAggregate,
    pub organizations: OrgAggregate,
    pub region_rows: usize,
    pub org_rows: usize,
}

/// Run the complete analysis described by `options`
pub fn run(options: &RunOptions, config: &AnalysisConfig) -> Result<RunSummary> {
    let start = Instant::now();

    let rows = load_rows(&options.input, &config.columns)?;
    let mut region_sheet = load_template(options.region_template.as_ref())?;
    let mut org_sheet = load_template(options.org_template.as_ref())?;

    let records = RecordPreprocessor::new(config).preprocess(rows);
    if let Some(path) = &options.records_dump {
        write_records_json(&records, path)?;
    }

    let region_aggregator = RegionAggregator::new(config);
    let org_aggregator = OrgAggregator::new(config);
    let (regions, organizations) = if options.parallel {
        (
            region_aggregator.aggregate_parallel(&records),
            org_aggregator.aggregate_parallel(&records),
        )
    } else {
        (
            region_aggregator.aggregate(&records),
            org_aggregator.aggregate(&records),
        )
    };

    let region_rows = fill_region_report(&regions, config, &mut region_sheet);
    let org_rows = fill_org_report(&organizations, config, &mut org_sheet);
    region_sheet.save(&options.region_output)?;
    org_sheet.save(&options.org_output)?;

    info!(
        "Analysis of {} records completed in {:?}",
        records.len(),
        start.elapsed()
    );

    Ok(RunSummary {
        records: records.len(),
        regions,
        organizations,
        region_rows,
        org_rows,
    })
}

fn load_template(path: Option<&PathBuf>) -> Result<ReportSheet> {
    match path {
        Some(path) => ReportSheet::load(path),
        None => Ok(ReportSheet::blank()),
    }
}
