//! A Rust library for classifying disease-case records and aggregating them into
//! district and medical-organization reports.
//!
//! Records are read from a Parquet export of the case spreadsheet, normalized,
//! classified along three independent dimensions (age bracket, social group and
//! hospitalization severity) and counted per administrative unit and per medical
//! organization. The counts are written into report templates at fixed cells.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod pipeline;
pub mod preprocess;
pub mod report;
pub mod utils;

// Re-export the most common types for easier use
pub use config::AnalysisConfig;
pub use error::{AnalysisError, Result};
pub use models::{CaseCounts, OrgAggregate, Record, RegionAggregate, SeverityCounts};

// Classification and aggregation
pub use algorithm::{
    AgeClassifier, OrgAggregator, OrgClassifier, RegionAggregator, SeverityClassifier,
    SocialStatusClassifier,
};

// Running an analysis
pub use pipeline::{RunOptions, RunSummary, run};
pub use preprocess::RecordPreprocessor;
pub use report::{ReportSheet, fill_org_report, fill_region_report};
