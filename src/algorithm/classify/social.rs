//! Social status classification
//!
//! Free-text statuses are matched in two tiers: an exact (case-insensitive) match against
//! each group's status list, then a substring match against the keyword rules. Children's
//! groups are redirected to the default group once the subject is an adult.

use rustc_hash::FxHashSet;

use crate::config::SocialConfig;

/// Maps a raw status string and an age to a social group label
#[derive(Debug, Clone)]
pub struct SocialStatusClassifier<'a> {
    /// Exact tier: lower-cased statuses per group, in priority order
    exact: Vec<(Vec<String>, &'a str)>,
    /// Substring tier: lower-cased keyword and its group, in priority order
    substring: Vec<(String, &'a str)>,
    adult_override: FxHashSet<&'a str>,
    adult_age: f64,
    default_group: &'a str,
}

impl<'a> SocialStatusClassifier<'a> {
    #[must_use]
    pub fn new(config: &'a SocialConfig) -> Self {
        let exact = config
            .groups
            .iter()
            .map(|group| {
                let keywords = group
                    .keywords
                    .iter()
                    .map(|k| k.trim().to_lowercase())
                    .collect();
                (keywords, group.label.as_str())
            })
            .collect();
        let substring = config
            .keyword_rules
            .iter()
            .map(|rule| (rule.keyword.to_lowercase(), rule.group.as_str()))
            .collect();

        Self {
            exact,
            substring,
            adult_override: config.adult_override.iter().map(String::as_str).collect(),
            adult_age: config.adult_age,
            default_group: config.default_group.as_str(),
        }
    }

    /// Social group for `raw_status` of a subject aged `age`
    #[must_use]
    pub fn classify(&self, raw_status: &str, age: Option<f64>) -> &'a str {
        let status = raw_status.trim().to_lowercase();

        let matched = self
            .exact_match(&status)
            .or_else(|| self.substring_match(&status));

        match matched {
            Some(group) if self.is_adult(age) && self.adult_override.contains(group) => {
                self.default_group
            }
            Some(group) => group,
            None => self.default_group,
        }
    }

    fn exact_match(&self, status: &str) -> Option<&'a str> {
        self.exact
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| k == status))
            .map(|&(_, group)| group)
    }

    fn substring_match(&self, status: &str) -> Option<&'a str> {
        self.substring
            .iter()
            .find(|(keyword, _)| status.contains(keyword.as_str()))
            .map(|&(_, group)| group)
    }

    fn is_adult(&self, age: Option<f64>) -> bool {
        age.is_some_and(|a| a >= self.adult_age)
    }
}
