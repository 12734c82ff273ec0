//! Aggregation by medical organization

use std::time::Instant;

use log::{debug, info};
use rayon::prelude::*;

use super::MainCityRouter;
use crate::algorithm::classify::{OrgClassifier, RecordClassifier};
use crate::config::AnalysisConfig;
use crate::models::{OrgAggregate, Record};

/// Counts main-city and keyword-matched records per classified organization
#[derive(Debug, Clone)]
pub struct OrgAggregator<'a> {
    config: &'a AnalysisConfig,
    classifier: RecordClassifier<'a>,
    orgs: OrgClassifier<'a>,
    router: MainCityRouter<'a>,
}

impl<'a> OrgAggregator<'a> {
    #[must_use]
    pub fn new(config: &'a AnalysisConfig) -> Self {
        Self {
            config,
            classifier: RecordClassifier::new(config),
            orgs: OrgClassifier::new(&config.organizations),
            router: MainCityRouter::new(&config.main_city),
        }
    }

    /// Whether a record takes part in the organization analysis
    #[must_use]
    pub fn includes(&self, record: &Record) -> bool {
        self.router.is_main_city(record) || self.orgs.matches_any_keyword(record.med_org.as_deref())
    }

    /// Count one record into `aggregate`; records outside the analysis are skipped
    pub fn add(&self, aggregate: &mut OrgAggregate, record: &Record) {
        if !self.includes(record) {
            return;
        }
        let org = self.orgs.classify(record.med_org.as_deref());
        let bucket = aggregate.bucket_mut(org, self.config);
        self.classifier.count_into(record, bucket);
    }

    /// Count all records sequentially
    #[must_use]
    pub fn aggregate(&self, records: &[Record]) -> OrgAggregate {
        let start = Instant::now();
        let mut aggregate = OrgAggregate::new();
        for record in records {
            self.add(&mut aggregate, record);
        }
        log_result(&aggregate, records.len(), start);
        aggregate
    }

    /// Count records in parallel shards and merge the partial aggregates
    #[must_use]
    pub fn aggregate_parallel(&self, records: &[Record]) -> OrgAggregate {
        let start = Instant::now();
        let aggregate = records
            .par_iter()
            .fold(OrgAggregate::new, |mut partial, record| {
                self.add(&mut partial, record);
                partial
            })
            .reduce(OrgAggregate::new, |mut left, right| {
                left.merge(right);
                left
            });
        log_result(&aggregate, records.len(), start);
        aggregate
    }
}

fn log_result(aggregate: &OrgAggregate, input: usize, start: Instant) {
    for (org, counts) in &aggregate.buckets {
        debug!("{org}: {} records", counts.record_count());
    }
    info!(
        "Organization analysis counted {} of {input} records in {} organizations in {:?}",
        aggregate.record_count(),
        aggregate.buckets.len(),
        start.elapsed()
    );
}
