//! Record classifiers
//!
//! Four independent classifiers map a record's free-text and date fields onto the
//! configured label sets. All of them are total: malformed input lands in an "unknown",
//! "other" or default bucket instead of failing.

pub mod age;
pub mod org;
pub mod severity;
pub mod social;

pub use age::AgeClassifier;
pub use org::OrgClassifier;
pub use severity::{SeverityClassifier, SeverityHit};
pub use social::SocialStatusClassifier;

use crate::config::AnalysisConfig;
use crate::models::{CaseCounts, Record};

/// The three per-record classifiers used by both aggregations
#[derive(Debug, Clone)]
pub struct RecordClassifier<'a> {
    pub age: AgeClassifier<'a>,
    pub social: SocialStatusClassifier<'a>,
    pub severity: SeverityClassifier<'a>,
}

impl<'a> RecordClassifier<'a> {
    #[must_use]
    pub fn new(config: &'a AnalysisConfig) -> Self {
        Self {
            age: AgeClassifier::new(&config.age),
            social: SocialStatusClassifier::new(&config.social),
            severity: SeverityClassifier::new(&config.severity),
        }
    }

    /// Classify `record` and count it into `counts`
    pub fn count_into(&self, record: &Record, counts: &mut CaseCounts) {
        let age = self.age.classify(record.age);
        let social = self.social.classify(record.status_text(), record.age);
        let severity = self.severity.classify(record.place_text(), record.hospitalized);
        counts.record(age, social, severity.category, severity.hospitalized);
    }
}
