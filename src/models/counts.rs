//! Per-bucket counters
//!
//! A [`CaseCounts`] is the counter set kept for one region or one organization: how many
//! records fell into each age bracket, each social group and each severity category.
//! Counters only ever grow, so merging two counter sets is a plain sum.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::AnalysisConfig;

/// Total and hospitalized counts of one severity category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeverityCounts {
    pub total: u64,
    pub hospitalized: u64,
}

impl SeverityCounts {
    pub fn add(&mut self, other: Self) {
        self.total += other.total;
        self.hospitalized += other.hospitalized;
    }
}

/// Counters of one region or organization bucket
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CaseCounts {
    pub age: BTreeMap<String, u64>,
    pub social: BTreeMap<String, u64>,
    pub severity: BTreeMap<String, SeverityCounts>,
}

impl CaseCounts {
    /// Counters with every configured label present at zero
    #[must_use]
    pub fn with_labels(config: &AnalysisConfig) -> Self {
        Self {
            age: config.age_labels().into_iter().map(|l| (l.to_string(), 0)).collect(),
            social: config
                .social_labels()
                .into_iter()
                .map(|l| (l.to_string(), 0))
                .collect(),
            severity: config
                .severity_labels()
                .into_iter()
                .map(|l| (l.to_string(), SeverityCounts::default()))
                .collect(),
        }
    }

    /// Count one classified record
    pub fn record(&mut self, age: &str, social: &str, severity: &str, hospitalized: bool) {
        increment(&mut self.age, age, 1);
        increment(&mut self.social, social, 1);
        let counts = self.severity.entry(severity.to_string()).or_default();
        counts.total += 1;
        if hospitalized {
            counts.hospitalized += 1;
        }
    }

    /// Add every counter of `other` into `self`
    pub fn merge(&mut self, other: &Self) {
        for (label, &count) in &other.age {
            increment(&mut self.age, label, count);
        }
        for (label, &count) in &other.social {
            increment(&mut self.social, label, count);
        }
        for (label, &counts) in &other.severity {
            self.severity.entry(label.clone()).or_default().add(counts);
        }
    }

    /// Number of records counted, taken from the age counters
    #[must_use]
    pub fn record_count(&self) -> u64 {
        self.age.values().sum()
    }

    #[must_use]
    pub fn age_count(&self, label: &str) -> u64 {
        self.age.get(label).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn social_count(&self, label: &str) -> u64 {
        self.social.get(label).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn severity_count(&self, label: &str) -> SeverityCounts {
        self.severity.get(label).copied().unwrap_or_default()
    }
}

fn increment(map: &mut BTreeMap<String, u64>, label: &str, by: u64) {
    if let Some(count) = map.get_mut(label) {
        *count += by;
    } else {
        map.insert(label.to_string(), by);
    }
}
