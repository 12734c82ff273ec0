//! Aggregation by administrative unit

use std::time::Instant;

use log::{debug, info};
use rayon::prelude::*;

use super::MainCityRouter;
use crate::algorithm::classify::RecordClassifier;
use crate::config::AnalysisConfig;
use crate::models::{Record, RegionAggregate};

/// Counts records per district, with the main city as its own bucket
#[derive(Debug, Clone)]
pub struct RegionAggregator<'a> {
    config: &'a AnalysisConfig,
    classifier: RecordClassifier<'a>,
    router: MainCityRouter<'a>,
}

impl<'a> RegionAggregator<'a> {
    #[must_use]
    pub fn new(config: &'a AnalysisConfig) -> Self {
        Self {
            config,
            classifier: RecordClassifier::new(config),
            router: MainCityRouter::new(&config.main_city),
        }
    }

    /// District bucket a record is counted under
    #[must_use]
    pub fn effective_district<'r>(&self, record: &'r Record) -> &'r str
    where
        'a: 'r,
    {
        if self.router.is_main_city(record) {
            return self.router.name();
        }
        match record.district.as_deref().map(str::trim) {
            Some(district) if !district.is_empty() => district,
            _ => self.config.districts.unknown_district.as_str(),
        }
    }

    /// Count one record into `aggregate`
    pub fn add(&self, aggregate: &mut RegionAggregate, record: &Record) {
        let district = self.effective_district(record);
        let bucket = aggregate.bucket_mut(district, self.config);
        self.classifier.count_into(record, bucket);
    }

    /// Count all records sequentially
    #[must_use]
    pub fn aggregate(&self, records: &[Record]) -> RegionAggregate {
        let start = Instant::now();
        let mut aggregate = RegionAggregate::new(self.config);
        for record in records {
            self.add(&mut aggregate, record);
        }
        self.log_result(&aggregate, start);
        aggregate
    }

    /// Count records in parallel shards and merge the partial aggregates
    #[must_use]
    pub fn aggregate_parallel(&self, records: &[Record]) -> RegionAggregate {
        let start = Instant::now();
        let aggregate = records
            .par_iter()
            .fold(
                || RegionAggregate::new(self.config),
                |mut partial, record| {
                    self.add(&mut partial, record);
                    partial
                },
            )
            .reduce(
                || RegionAggregate::new(self.config),
                |mut left, right| {
                    left.merge(right);
                    left
                },
            );
        self.log_result(&aggregate, start);
        aggregate
    }

    fn log_result(&self, aggregate: &RegionAggregate, start: Instant) {
        debug!(
            "{}: {} records",
            aggregate.main_city_name,
            aggregate.main_city.record_count()
        );
        for (district, counts) in &aggregate.districts {
            debug!("{district}: {} records", counts.record_count());
        }
        info!(
            "Region analysis counted {} records in {} districts plus {} in {:?}",
            aggregate.record_count(),
            aggregate.districts.len(),
            aggregate.main_city_name,
            start.elapsed()
        );
    }
}
