//! Record preprocessing
//!
//! Turns the loader's textual rows into [`Record`]s: header rows are skipped, blank
//! statuses are filled from the adjacent column, dates are parsed, ages derived and
//! district names normalized. Unparseable cells are recovered as missing values.

pub mod dates;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{info, warn};
use rustc_hash::FxHashMap;

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::error::util::ensure_parent_dir;
use crate::models::record::derive_age;
use crate::models::{RawRow, Record};
use crate::utils::logging::log_output_written;
use dates::parse_date_string;

/// Counts of recovered cell problems in one preprocessing pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreprocessStats {
    pub rows: usize,
    pub skipped_rows: usize,
    pub filled_statuses: usize,
    pub unparseable_dates: usize,
    pub unknown_ages: usize,
}

/// Normalizes raw rows into records
#[derive(Debug, Clone)]
pub struct RecordPreprocessor<'a> {
    config: &'a AnalysisConfig,
    /// Lower-cased alias to canonical district name
    aliases: FxHashMap<String, &'a str>,
}

impl<'a> RecordPreprocessor<'a> {
    #[must_use]
    pub fn new(config: &'a AnalysisConfig) -> Self {
        let aliases = config
            .districts
            .aliases
            .iter()
            .map(|a| (collapse_whitespace(&a.alias).to_lowercase(), a.name.as_str()))
            .collect();
        Self { config, aliases }
    }

    /// Normalize all rows, logging a summary of recovered problems
    #[must_use]
    pub fn preprocess(&self, rows: Vec<RawRow>) -> Vec<Record> {
        let (records, stats) = self.preprocess_with_stats(rows);
        info!(
            "Preprocessed {} rows ({} header rows skipped, {} statuses filled)",
            stats.rows, stats.skipped_rows, stats.filled_statuses
        );
        if stats.unparseable_dates > 0 {
            warn!("{} date cells could not be parsed", stats.unparseable_dates);
        }
        if stats.unknown_ages > 0 {
            warn!("{} records have no computable age", stats.unknown_ages);
        }
        records
    }

    pub fn preprocess_with_stats(&self, rows: Vec<RawRow>) -> (Vec<Record>, PreprocessStats) {
        let mut stats = PreprocessStats {
            skipped_rows: rows.len().min(self.config.columns.skip_rows),
            ..PreprocessStats::default()
        };

        let records: Vec<Record> = rows
            .into_iter()
            .skip(self.config.columns.skip_rows)
            .map(|row| self.normalize(row, &mut stats))
            .collect();

        stats.rows = records.len();
        (records, stats)
    }

    /// Normalize one row
    pub fn normalize(&self, row: RawRow, stats: &mut PreprocessStats) -> Record {
        let birth_date = self.parse_date(row.birth_date.as_deref(), stats);
        let submission_date = self.parse_date(row.submission_date.as_deref(), stats);
        let hosp_date = self.parse_date(row.hosp_date.as_deref(), stats);
        let hospitalized = non_blank(row.hosp_date).is_some();
        let age = derive_age(birth_date, submission_date);
        if age.is_none() {
            stats.unknown_ages += 1;
        }

        let social_status = match non_blank(row.social_status) {
            Some(status) => Some(status),
            None => {
                let fallback = non_blank(row.social_status_fallback);
                if fallback.is_some() {
                    stats.filled_statuses += 1;
                }
                fallback
            }
        };

        Record {
            district: non_blank(row.district).map(|d| self.normalize_district(&d)),
            med_org: non_blank(row.med_org).map(|m| m.trim().to_string()),
            birth_date,
            submission_date,
            social_status,
            hosp_place: non_blank(row.hosp_place),
            hosp_date,
            hospitalized,
            age,
        }
    }

    /// Trim, collapse inner whitespace and resolve configured aliases
    #[must_use]
    pub fn normalize_district(&self, district: &str) -> String {
        let collapsed = collapse_whitespace(district);
        match self.aliases.get(&collapsed.to_lowercase()) {
            Some(name) => (*name).to_string(),
            None => collapsed,
        }
    }

    fn parse_date(
        &self,
        cell: Option<&str>,
        stats: &mut PreprocessStats,
    ) -> Option<chrono::NaiveDate> {
        let cell = cell.map(str::trim).filter(|c| !c.is_empty())?;
        let date = parse_date_string(cell, &self.config.dates);
        if date.is_none() {
            stats.unparseable_dates += 1;
        }
        date
    }
}

fn non_blank(cell: Option<String>) -> Option<String> {
    cell.filter(|c| !c.trim().is_empty())
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Write normalized records as a JSON array, for inspection of what was analysed
pub fn write_records_json(records: &[Record], path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush()?;
    log_output_written("normalized records", path, records.len(), "records");
    Ok(())
}
