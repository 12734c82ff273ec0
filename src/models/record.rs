//! Case records
//!
//! [`RawRow`] holds the textual cells of one input row as the loader found them;
//! [`Record`] is the normalized, date-typed form consumed by the classifiers.

use chrono::NaiveDate;
use serde::Serialize;

use crate::preprocess::dates::age_in_years;

/// Textual cells of one input row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    pub district: Option<String>,
    pub med_org: Option<String>,
    pub birth_date: Option<String>,
    pub submission_date: Option<String>,
    pub social_status: Option<String>,
    pub social_status_fallback: Option<String>,
    pub hosp_place: Option<String>,
    pub hosp_date: Option<String>,
}

/// One normalized case entry
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Record {
    pub district: Option<String>,
    pub med_org: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub submission_date: Option<NaiveDate>,
    pub social_status: Option<String>,
    pub hosp_place: Option<String>,
    pub hosp_date: Option<NaiveDate>,
    /// A hospitalization date cell was filled in, whether or not it parsed
    pub hospitalized: bool,
    /// Age in years at submission; `None` when either date is missing
    pub age: Option<f64>,
}

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_district(mut self, district: impl Into<String>) -> Self {
        self.district = Some(district.into());
        self
    }

    #[must_use]
    pub fn with_med_org(mut self, med_org: impl Into<String>) -> Self {
        self.med_org = Some(med_org.into());
        self
    }

    #[must_use]
    pub fn with_social_status(mut self, status: impl Into<String>) -> Self {
        self.social_status = Some(status.into());
        self
    }

    #[must_use]
    pub fn with_hosp_place(mut self, place: impl Into<String>) -> Self {
        self.hosp_place = Some(place.into());
        self
    }

    #[must_use]
    pub fn with_hosp_date(mut self, date: NaiveDate) -> Self {
        self.hosp_date = Some(date);
        self.hospitalized = true;
        self
    }

    /// Mark as hospitalized without a usable date
    #[must_use]
    pub const fn with_hospitalized(mut self) -> Self {
        self.hospitalized = true;
        self
    }

    /// Set birth and submission dates and derive the age from them
    #[must_use]
    pub fn with_dates(mut self, birth: Option<NaiveDate>, submission: Option<NaiveDate>) -> Self {
        self.birth_date = birth;
        self.submission_date = submission;
        self.age = derive_age(birth, submission);
        self
    }

    /// Set the age directly, without dates
    #[must_use]
    pub fn with_age(mut self, age: f64) -> Self {
        self.age = Some(age);
        self
    }

    /// Social status as classifier input; a missing cell reads as an empty status
    #[must_use]
    pub fn status_text(&self) -> &str {
        self.social_status.as_deref().unwrap_or("")
    }

    /// Hospitalization place as classifier input
    #[must_use]
    pub fn place_text(&self) -> &str {
        self.hosp_place.as_deref().unwrap_or("")
    }
}

/// `(submission - birth).days / 365.25`, if both dates are known
#[must_use]
pub fn derive_age(birth: Option<NaiveDate>, submission: Option<NaiveDate>) -> Option<f64> {
    match (birth, submission) {
        (Some(birth), Some(submission)) => Some(age_in_years(birth, submission)),
        _ => None,
    }
}
