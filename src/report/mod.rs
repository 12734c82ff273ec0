//! Report filling
//!
//! Aggregates are written into template sheets at fixed cells: one row per bucket,
//! one column per label as described by a [`ReportLayout`]. A bucket or label without
//! counts writes 0; a counted label without a layout column is reported and skipped.

pub mod layout;
pub mod sheet;
pub mod summary;

use log::warn;
use rustc_hash::FxHashSet;

use crate::config::AnalysisConfig;
use crate::models::{CaseCounts, OrgAggregate, RegionAggregate};
pub use layout::{ReportLayout, SeverityColumns};
pub use sheet::{CellValue, ReportSheet};

/// Write the region aggregate into `sheet`
///
/// The main city takes the first row, districts follow in display order, then districts
/// seen in the data but absent from the display order.
pub fn fill_region_report(
    aggregate: &RegionAggregate,
    config: &AnalysisConfig,
    sheet: &mut ReportSheet,
) -> usize {
    let mut rows: Vec<(&str, Option<&CaseCounts>)> =
        vec![(aggregate.main_city_name.as_str(), Some(&aggregate.main_city))];

    let listed: FxHashSet<&str> = config
        .districts
        .display_order
        .iter()
        .map(String::as_str)
        .collect();
    for district in &config.districts.display_order {
        if district.as_str() != aggregate.main_city_name {
            rows.push((district.as_str(), aggregate.districts.get(district)));
        }
    }
    for (district, counts) in &aggregate.districts {
        if !listed.contains(district.as_str()) {
            rows.push((district.as_str(), Some(counts)));
        }
    }

    write_rows(&rows, &config.region_layout, sheet);
    rows.len()
}

/// Write the organization aggregate into `sheet`
///
/// Organizations take rows in configuration order, followed by the other label.
pub fn fill_org_report(
    aggregate: &OrgAggregate,
    config: &AnalysisConfig,
    sheet: &mut ReportSheet,
) -> usize {
    let rows: Vec<(&str, Option<&CaseCounts>)> = config
        .organization_labels()
        .into_iter()
        .map(|label| (label, aggregate.bucket(label)))
        .collect();

    let known: FxHashSet<&str> = rows.iter().map(|(label, _)| *label).collect();
    for org in aggregate.buckets.keys() {
        if !known.contains(org.as_str()) {
            warn!("Organization '{org}' has counts but no report row");
        }
    }

    write_rows(&rows, &config.org_layout, sheet);
    rows.len()
}

fn write_rows(rows: &[(&str, Option<&CaseCounts>)], layout: &ReportLayout, sheet: &mut ReportSheet) {
    let empty = CaseCounts::default();
    let mut unmapped: FxHashSet<String> = FxHashSet::default();

    for (offset, &(name, counts)) in (0u32..).zip(rows) {
        let row = layout.start_row + offset;
        let counts = counts.unwrap_or(&empty);

        if let Some(column) = layout.name_column {
            sheet.set(row, column, name);
        }
        for (label, &column) in &layout.age {
            sheet.set(row, column, counts.age_count(label));
        }
        for (label, &column) in &layout.social {
            sheet.set(row, column, counts.social_count(label));
        }
        for (label, columns) in &layout.severity {
            let value = counts.severity_count(label);
            if let Some(column) = columns.total {
                sheet.set(row, column, value.total);
            }
            if let Some(column) = columns.hospitalized {
                sheet.set(row, column, value.hospitalized);
            }
        }

        collect_unmapped(counts, layout, &mut unmapped);
    }

    for label in unmapped {
        warn!("Label '{label}' has counts but no column in the report layout");
    }
}

fn collect_unmapped(counts: &CaseCounts, layout: &ReportLayout, unmapped: &mut FxHashSet<String>) {
    let age = counts
        .age
        .iter()
        .filter(|&(label, &n)| n > 0 && !layout.age.contains_key(label));
    let social = counts
        .social
        .iter()
        .filter(|&(label, &n)| n > 0 && !layout.social.contains_key(label));
    for (label, _) in age.chain(social) {
        unmapped.insert(label.clone());
    }
    for (label, value) in &counts.severity {
        if value.total > 0 && !layout.severity.contains_key(label) {
            unmapped.insert(label.clone());
        }
    }
}
