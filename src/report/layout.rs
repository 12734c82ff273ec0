//! Cell layout of a report template

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Columns receiving the two counters of one severity category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityColumns {
    pub total: Option<u32>,
    pub hospitalized: Option<u32>,
}

/// Where each counter goes in the template: one row per bucket starting at `start_row`,
/// one column per label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportLayout {
    pub start_row: u32,
    /// Column receiving the bucket name, if the template does not already carry it
    pub name_column: Option<u32>,
    pub age: BTreeMap<String, u32>,
    pub social: BTreeMap<String, u32>,
    pub severity: BTreeMap<String, SeverityColumns>,
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self {
            start_row: 1,
            name_column: Some(1),
            age: BTreeMap::new(),
            social: BTreeMap::new(),
            severity: BTreeMap::new(),
        }
    }
}
