//! Console summaries of aggregation results

use crate::config::AnalysisConfig;
use crate::models::{CaseCounts, OrgAggregate, RegionAggregate};

/// Text summary of the region aggregate, one block per bucket
#[must_use]
pub fn region_summary(aggregate: &RegionAggregate, config: &AnalysisConfig) -> String {
    let mut summary = String::new();
    summary.push_str("Structure by administrative unit:\n");
    summary.push_str(&format!("  Total Records: {}\n", aggregate.record_count()));
    push_bucket(&mut summary, &aggregate.main_city_name, &aggregate.main_city, config);
    for (district, counts) in &aggregate.districts {
        push_bucket(&mut summary, district, counts, config);
    }
    summary
}

/// Text summary of the organization aggregate in configured order
#[must_use]
pub fn org_summary(aggregate: &OrgAggregate, config: &AnalysisConfig) -> String {
    let mut summary = String::new();
    summary.push_str("Structure by medical organization:\n");
    summary.push_str(&format!("  Total Records: {}\n", aggregate.record_count()));
    for label in config.organization_labels() {
        match aggregate.bucket(label) {
            Some(counts) => push_bucket(&mut summary, label, counts, config),
            None => summary.push_str(&format!("\n{label}: no data\n")),
        }
    }
    summary
}

fn push_bucket(summary: &mut String, name: &str, counts: &CaseCounts, config: &AnalysisConfig) {
    summary.push_str(&format!("\n{name} ({} records)\n", counts.record_count()));

    let age = config
        .age_labels()
        .into_iter()
        .map(|label| format!("{label}: {}", counts.age_count(label)))
        .collect::<Vec<_>>()
        .join(", ");
    summary.push_str(&format!("  Age: {age}\n"));

    let social = config
        .social_labels()
        .into_iter()
        .map(|label| format!("{label}: {}", counts.social_count(label)))
        .collect::<Vec<_>>()
        .join(", ");
    summary.push_str(&format!("  Social: {social}\n"));

    let severity = config
        .severity_labels()
        .into_iter()
        .map(|label| {
            let value = counts.severity_count(label);
            format!("{label}: {} ({} hospitalized)", value.total, value.hospitalized)
        })
        .collect::<Vec<_>>()
        .join(", ");
    summary.push_str(&format!("  Severity: {severity}\n"));
}
