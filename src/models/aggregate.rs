//! Aggregation results
//!
//! Both result types are built fresh for every run and owned by the caller.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::models::counts::CaseCounts;

/// Counts per administrative unit: the main city plus lazily created districts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionAggregate {
    pub main_city_name: String,
    pub main_city: CaseCounts,
    pub districts: BTreeMap<String, CaseCounts>,
}

impl RegionAggregate {
    /// An aggregate holding only the (empty) main-city bucket
    #[must_use]
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            main_city_name: config.main_city.name.trim().to_string(),
            main_city: CaseCounts::with_labels(config),
            districts: BTreeMap::new(),
        }
    }

    /// Bucket for `district`, creating it on first reference
    pub fn bucket_mut(&mut self, district: &str, config: &AnalysisConfig) -> &mut CaseCounts {
        if district == self.main_city_name {
            return &mut self.main_city;
        }
        self.districts
            .entry(district.to_string())
            .or_insert_with(|| CaseCounts::with_labels(config))
    }

    /// Bucket for `district`, if any record was routed there
    #[must_use]
    pub fn bucket(&self, district: &str) -> Option<&CaseCounts> {
        if district == self.main_city_name {
            Some(&self.main_city)
        } else {
            self.districts.get(district)
        }
    }

    /// Add every bucket of `other` into `self`
    pub fn merge(&mut self, other: Self) {
        self.main_city.merge(&other.main_city);
        for (district, counts) in other.districts {
            match self.districts.get_mut(&district) {
                Some(existing) => existing.merge(&counts),
                None => {
                    self.districts.insert(district, counts);
                }
            }
        }
    }

    /// Number of records counted across all buckets
    #[must_use]
    pub fn record_count(&self) -> u64 {
        self.main_city.record_count()
            + self
                .districts
                .values()
                .map(CaseCounts::record_count)
                .sum::<u64>()
    }
}

/// Counts per classified medical organization
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrgAggregate {
    pub buckets: BTreeMap<String, CaseCounts>,
}

impl OrgAggregate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bucket for `org`, creating it on first reference
    pub fn bucket_mut(&mut self, org: &str, config: &AnalysisConfig) -> &mut CaseCounts {
        self.buckets
            .entry(org.to_string())
            .or_insert_with(|| CaseCounts::with_labels(config))
    }

    #[must_use]
    pub fn bucket(&self, org: &str) -> Option<&CaseCounts> {
        self.buckets.get(org)
    }

    /// Add every bucket of `other` into `self`
    pub fn merge(&mut self, other: Self) {
        for (org, counts) in other.buckets {
            match self.buckets.get_mut(&org) {
                Some(existing) => existing.merge(&counts),
                None => {
                    self.buckets.insert(org, counts);
                }
            }
        }
    }

    #[must_use]
    pub fn record_count(&self) -> u64 {
        self.buckets.values().map(CaseCounts::record_count).sum()
    }
}
