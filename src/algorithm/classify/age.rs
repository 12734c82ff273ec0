//! Age bracket classification

use crate::config::AgeConfig;

/// Maps an age in years to its configured bracket label
#[derive(Debug, Clone)]
pub struct AgeClassifier<'a> {
    config: &'a AgeConfig,
}

impl<'a> AgeClassifier<'a> {
    #[must_use]
    pub const fn new(config: &'a AgeConfig) -> Self {
        Self { config }
    }

    /// Bracket label for `age`; undefined or non-finite ages are unknown
    ///
    /// Brackets are `low <= age < high`, except the last one which is `age >= low`.
    #[must_use]
    pub fn classify(&self, age: Option<f64>) -> &'a str {
        let unknown = self.config.unknown_label.as_str();
        let Some(age) = age.filter(|a| a.is_finite()) else {
            return unknown;
        };

        let last = self.config.brackets.len().saturating_sub(1);
        self.config
            .brackets
            .iter()
            .enumerate()
            .find(|(i, bracket)| {
                if *i == last {
                    age >= bracket.low
                } else {
                    bracket.low <= age && age < bracket.high
                }
            })
            .map_or(unknown, |(_, bracket)| bracket.label.as_str())
    }
}
