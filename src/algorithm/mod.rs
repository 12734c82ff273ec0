//! Classification and aggregation of case records
//!
//! This module contains the classifiers that map a record's free-text fields onto
//! configured categories, and the aggregators that count classified records per
//! administrative unit and per medical organization.

pub mod aggregate;
pub mod classify;

pub use aggregate::{MainCityRouter, OrgAggregator, RegionAggregator};
pub use classify::{
    AgeClassifier, OrgClassifier, RecordClassifier, SeverityClassifier, SocialStatusClassifier,
};
