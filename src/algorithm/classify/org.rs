//! Medical organization classification
//!
//! Organizations are tried in configured order and the first one with a keyword occurring
//! in the (lower-cased) name wins. When keyword lists overlap, configuration order decides.

use crate::config::OrganizationConfig;

/// Maps a free-text medical-organization name to an organization label
#[derive(Debug, Clone)]
pub struct OrgClassifier<'a> {
    rules: Vec<(Vec<String>, &'a str)>,
    other_label: &'a str,
}

impl<'a> OrgClassifier<'a> {
    #[must_use]
    pub fn new(config: &'a OrganizationConfig) -> Self {
        let rules = config
            .organizations
            .iter()
            .map(|org| {
                let keywords = org.keywords.iter().map(|k| k.to_lowercase()).collect();
                (keywords, org.label.as_str())
            })
            .collect();
        Self {
            rules,
            other_label: config.other_label.as_str(),
        }
    }

    /// Organization label for `name`; missing names and unmatched names are "other"
    #[must_use]
    pub fn classify(&self, name: Option<&str>) -> &'a str {
        let Some(name) = name else {
            return self.other_label;
        };
        let name = name.to_lowercase();
        self.rules
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| name.contains(k.as_str())))
            .map_or(self.other_label, |&(_, label)| label)
    }

    /// Whether any configured keyword occurs in `name`
    #[must_use]
    pub fn matches_any_keyword(&self, name: Option<&str>) -> bool {
        let Some(name) = name else {
            return false;
        };
        let name = name.to_lowercase();
        self.rules
            .iter()
            .flat_map(|(keywords, _)| keywords)
            .any(|k| name.contains(k.as_str()))
    }

    #[must_use]
    pub const fn other_label(&self) -> &'a str {
        self.other_label
    }
}
