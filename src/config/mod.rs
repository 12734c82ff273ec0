//! Configuration for case analysis.
//!
//! Everything the classifiers, aggregators and report writers need is collected in
//! [`AnalysisConfig`], which is built once at startup and passed around by reference.
//! All ordered lists are significant: classification is first-match-wins in list order.

mod defaults;

use std::fmt;
use std::path::Path;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::util::safe_read_to_string;
use crate::error::{AnalysisError, Result};
use crate::preprocess::dates::DateFormatConfig;
use crate::report::layout::ReportLayout;

/// One age bracket: `low <= age < high`, except the last bracket which is open-ended
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeBracketDef {
    pub label: String,
    pub low: f64,
    pub high: f64,
}

impl AgeBracketDef {
    pub fn new(label: impl Into<String>, low: f64, high: f64) -> Self {
        Self {
            label: label.into(),
            low,
            high,
        }
    }
}

/// Age banding configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgeConfig {
    /// Ordered brackets partitioning `[0, inf)`
    pub brackets: Vec<AgeBracketDef>,
    /// Label used when the age is undefined
    pub unknown_label: String,
}

/// A social group and the statuses that name it exactly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialGroupDef {
    pub label: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// A substring rule: a status containing `keyword` belongs to `group`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub keyword: String,
    pub group: String,
}

/// Social status classification rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialConfig {
    /// Exact-match tier, in priority order
    pub groups: Vec<SocialGroupDef>,
    /// Substring tier, in priority order
    pub keyword_rules: Vec<KeywordRule>,
    /// Groups redirected to `default_group` once the subject reaches `adult_age`
    pub adult_override: Vec<String>,
    /// Age (inclusive) from which the adult override applies
    pub adult_age: f64,
    /// Group for statuses no rule recognises
    pub default_group: String,
}

/// A severity category and the hospitalization places that belong to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCategoryDef {
    pub label: String,
    #[serde(default)]
    pub places: Vec<String>,
}

/// Severity classification rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeverityConfig {
    /// Categories in priority order; this is also the report label order
    pub categories: Vec<SeverityCategoryDef>,
    /// Category for places that appear in no list
    pub default_category: String,
}

/// A medical organization and the name fragments identifying it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationDef {
    pub label: String,
    pub keywords: Vec<String>,
}

/// Organization classification rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationConfig {
    /// Organizations in priority order; the first one with a matching keyword wins
    pub organizations: Vec<OrganizationDef>,
    /// Label for names matching no organization
    pub other_label: String,
}

/// The principal administrative unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MainCityConfig {
    pub name: String,
    /// Medical organizations located in the main city (exact names)
    pub org_names: Vec<String>,
}

/// Alternative spelling of a district name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistrictAlias {
    pub alias: String,
    pub name: String,
}

/// District naming and report ordering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistrictConfig {
    /// Row order of districts in the region report
    pub display_order: Vec<String>,
    pub aliases: Vec<DistrictAlias>,
    /// Bucket for records that carry no district and are not routed to the main city
    pub unknown_district: String,
}

/// Names of the input columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnConfig {
    pub district: String,
    pub med_org: String,
    pub birth_date: String,
    pub submission_date: String,
    pub social_status: String,
    /// Adjacent column used when the status cell is blank
    pub social_status_fallback: Option<String>,
    pub hosp_place: String,
    pub hosp_date: String,
    /// Leading rows to discard (template header lines)
    pub skip_rows: usize,
}

/// Complete configuration of an analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub age: AgeConfig,
    pub social: SocialConfig,
    pub severity: SeverityConfig,
    pub organizations: OrganizationConfig,
    pub main_city: MainCityConfig,
    pub districts: DistrictConfig,
    pub columns: ColumnConfig,
    pub dates: DateFormatConfig,
    pub region_layout: ReportLayout,
    pub org_layout: ReportLayout,
}

impl AnalysisConfig {
    /// Read a JSON configuration file and validate it
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = safe_read_to_string(path, "analysis configuration")?;
        let config: Self = serde_json::from_str(&text)
            .map_err(|e| AnalysisError::configuration(format!("{}: {e}", path.display())))?;
        config.validate()?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Check the configuration for inconsistencies that would make classification ambiguous
    pub fn validate(&self) -> Result<()> {
        self.validate_age()?;

        let groups: FxHashSet<&str> = self.social.groups.iter().map(|g| g.label.as_str()).collect();
        if !groups.contains(self.social.default_group.as_str()) {
            return Err(AnalysisError::configuration(format!(
                "default social group '{}' is not a configured group",
                self.social.default_group
            )));
        }
        for group in &self.social.adult_override {
            if !groups.contains(group.as_str()) {
                return Err(AnalysisError::configuration(format!(
                    "adult override group '{group}' is not a configured group"
                )));
            }
        }
        for rule in &self.social.keyword_rules {
            if !groups.contains(rule.group.as_str()) {
                return Err(AnalysisError::configuration(format!(
                    "keyword '{}' points to unknown group '{}'",
                    rule.keyword, rule.group
                )));
            }
        }

        if !self
            .severity
            .categories
            .iter()
            .any(|c| c.label == self.severity.default_category)
        {
            return Err(AnalysisError::configuration(format!(
                "default severity category '{}' is not a configured category",
                self.severity.default_category
            )));
        }

        if self.main_city.name.trim().is_empty() {
            return Err(AnalysisError::configuration("main city name is empty"));
        }
        Ok(())
    }

    fn validate_age(&self) -> Result<()> {
        let brackets = &self.age.brackets;
        let Some(first) = brackets.first() else {
            return Err(AnalysisError::configuration("no age brackets configured"));
        };
        if first.low != 0.0 {
            return Err(AnalysisError::configuration(format!(
                "first age bracket '{}' must start at 0",
                first.label
            )));
        }
        for pair in brackets.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if prev.high <= prev.low {
                return Err(AnalysisError::configuration(format!(
                    "age bracket '{}' is empty",
                    prev.label
                )));
            }
            if (next.low - prev.high).abs() > f64::EPSILON {
                return Err(AnalysisError::configuration(format!(
                    "age brackets '{}' and '{}' are not contiguous",
                    prev.label, next.label
                )));
            }
        }
        Ok(())
    }

    /// Age bracket labels in configured order, followed by the unknown label
    #[must_use]
    pub fn age_labels(&self) -> Vec<&str> {
        self.age
            .brackets
            .iter()
            .map(|b| b.label.as_str())
            .chain(std::iter::once(self.age.unknown_label.as_str()))
            .collect()
    }

    /// Social group labels in configured order
    #[must_use]
    pub fn social_labels(&self) -> Vec<&str> {
        self.social.groups.iter().map(|g| g.label.as_str()).collect()
    }

    /// Severity category labels in configured order
    #[must_use]
    pub fn severity_labels(&self) -> Vec<&str> {
        self.severity
            .categories
            .iter()
            .map(|c| c.label.as_str())
            .collect()
    }

    /// Organization labels in configured order, followed by the other label
    #[must_use]
    pub fn organization_labels(&self) -> Vec<&str> {
        self.organizations
            .organizations
            .iter()
            .map(|o| o.label.as_str())
            .chain(std::iter::once(self.organizations.other_label.as_str()))
            .collect()
    }
}

impl fmt::Display for AnalysisConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Analysis Configuration:")?;
        writeln!(f, "  Main City: {}", self.main_city.name)?;
        writeln!(f, "  Main City Organizations: {}", self.main_city.org_names.len())?;
        writeln!(f, "  Districts: {}", self.districts.display_order.len())?;
        writeln!(f, "  Age Brackets: {}", self.age.brackets.len())?;
        writeln!(f, "  Social Groups: {}", self.social.groups.len())?;
        writeln!(f, "  Severity Categories: {}", self.severity.categories.len())?;
        writeln!(
            f,
            "  Organizations: {}",
            self.organizations.organizations.len()
        )?;
        Ok(())
    }
}
