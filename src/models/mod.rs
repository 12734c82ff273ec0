//! Data models for case analysis
//!
//! Input rows and normalized records, the per-bucket counters and the two aggregate
//! result shapes.

pub mod aggregate;
pub mod counts;
pub mod record;

pub use aggregate::{OrgAggregate, RegionAggregate};
pub use counts::{CaseCounts, SeverityCounts};
pub use record::{RawRow, Record};
