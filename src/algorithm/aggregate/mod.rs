//! Aggregation of classified records into region and organization buckets
//!
//! Counting is commutative: records can be processed in any order, or split into shards
//! counted in parallel and merged afterwards, with identical results.

pub mod org;
pub mod region;

pub use org::OrgAggregator;
pub use region::RegionAggregator;

use rustc_hash::FxHashSet;

use crate::config::MainCityConfig;
use crate::models::Record;

/// Decides whether a record belongs to the main city
#[derive(Debug, Clone)]
pub struct MainCityRouter<'a> {
    name: &'a str,
    org_names: FxHashSet<&'a str>,
}

impl<'a> MainCityRouter<'a> {
    #[must_use]
    pub fn new(config: &'a MainCityConfig) -> Self {
        Self {
            name: config.name.trim(),
            org_names: config.org_names.iter().map(|n| n.trim()).collect(),
        }
    }

    /// True when the record's district is the main city or its organization is located there
    #[must_use]
    pub fn is_main_city(&self, record: &Record) -> bool {
        let by_district = record
            .district
            .as_deref()
            .is_some_and(|d| d.trim() == self.name);
        let by_org = record
            .med_org
            .as_deref()
            .is_some_and(|o| self.org_names.contains(o.trim()));
        by_district || by_org
    }

    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }
}
