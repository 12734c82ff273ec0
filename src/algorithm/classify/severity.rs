//! Severity classification by hospitalization place
//!
//! Every record adds one to the total of exactly one category, and one to that category's
//! hospitalized count when a hospitalization date is filled in.

use std::collections::BTreeMap;

use crate::config::SeverityConfig;
use crate::models::SeverityCounts;

/// The category a record falls into and whether it was hospitalized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityHit<'a> {
    pub category: &'a str,
    pub hospitalized: bool,
}

impl SeverityHit<'_> {
    /// Counter increment contributed by this hit
    #[must_use]
    pub const fn counts(&self) -> SeverityCounts {
        SeverityCounts {
            total: 1,
            hospitalized: if self.hospitalized { 1 } else { 0 },
        }
    }
}

/// Maps a hospitalization place to a severity category
#[derive(Debug, Clone)]
pub struct SeverityClassifier<'a> {
    /// Trimmed places per category, in priority order
    categories: Vec<(Vec<&'a str>, &'a str)>,
    default_category: &'a str,
}

impl<'a> SeverityClassifier<'a> {
    #[must_use]
    pub fn new(config: &'a SeverityConfig) -> Self {
        let categories = config
            .categories
            .iter()
            .map(|c| (c.places.iter().map(|p| p.trim()).collect(), c.label.as_str()))
            .collect();
        Self {
            categories,
            default_category: config.default_category.as_str(),
        }
    }

    /// Category of `place` (exact match after trimming, first listed category wins)
    #[must_use]
    pub fn category(&self, place: &str) -> &'a str {
        let place = place.trim();
        self.categories
            .iter()
            .find(|(places, _)| places.iter().any(|p| *p == place))
            .map_or(self.default_category, |&(_, label)| label)
    }

    /// `hospitalized` is whether the record has a hospitalization date at all
    #[must_use]
    pub fn classify(&self, place: &str, hospitalized: bool) -> SeverityHit<'a> {
        SeverityHit {
            category: self.category(place),
            hospitalized,
        }
    }

    /// Full counter vector for one record: every configured category present, all zero
    /// except the hit category
    #[must_use]
    pub fn classify_vector(
        &self,
        place: &str,
        hospitalized: bool,
    ) -> BTreeMap<&'a str, SeverityCounts> {
        let hit = self.classify(place, hospitalized);
        let mut vector: BTreeMap<&'a str, SeverityCounts> = self
            .categories
            .iter()
            .map(|&(_, label)| (label, SeverityCounts::default()))
            .collect();
        vector.entry(hit.category).or_default().add(hit.counts());
        vector
    }
}
