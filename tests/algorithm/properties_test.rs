//! Invariants that hold for any input

use case_report::config::{OrganizationConfig, OrganizationDef};
use case_report::{
    AgeClassifier, AnalysisConfig, CaseCounts, OrgAggregator, OrgClassifier, RegionAggregator,
    SeverityClassifier, SocialStatusClassifier,
};

use crate::utils::mixed_records;

fn social_total(counts: &CaseCounts) -> u64 {
    counts.social.values().sum()
}

fn severity_total(counts: &CaseCounts) -> u64 {
    counts.severity.values().map(|c| c.total).sum()
}

#[test]
fn test_region_completeness() {
    let config = AnalysisConfig::default();
    let records = mixed_records(1_000);
    let result = RegionAggregator::new(&config).aggregate(&records);

    let buckets = std::iter::once(&result.main_city).chain(result.districts.values());
    let (mut age, mut social, mut severity) = (0, 0, 0);
    for counts in buckets {
        age += counts.record_count();
        social += social_total(counts);
        severity += severity_total(counts);
    }
    assert_eq!(age, records.len() as u64);
    assert_eq!(social, records.len() as u64);
    assert_eq!(severity, records.len() as u64);
}

#[test]
fn test_org_completeness() {
    let config = AnalysisConfig::default();
    let records = mixed_records(1_000);
    let aggregator = OrgAggregator::new(&config);
    let routed = records.iter().filter(|r| aggregator.includes(r)).count() as u64;
    let result = aggregator.aggregate(&records);

    assert!(routed > 0 && routed < records.len() as u64);
    assert_eq!(result.record_count(), routed);
    assert_eq!(
        result.buckets.values().map(social_total).sum::<u64>(),
        routed
    );
    assert_eq!(
        result.buckets.values().map(severity_total).sum::<u64>(),
        routed
    );
}

#[test]
fn test_age_partition() {
    let config = AnalysisConfig::default();
    let classifier = AgeClassifier::new(&config.age);

    for tenth in 0..2_000 {
        let age = f64::from(tenth) / 10.0;
        assert_ne!(classifier.classify(Some(age)), config.age.unknown_label);
    }
    for bracket in &config.age.brackets {
        assert_eq!(classifier.classify(Some(bracket.low)), bracket.label);
    }
}

#[test]
fn test_override_monotonicity() {
    let config = AnalysisConfig::default();
    let classifier = SocialStatusClassifier::new(&config.social);

    for group in &config.social.groups {
        for status in &group.keywords {
            let child = classifier.classify(status, Some(17.9));
            if config.social.adult_override.iter().any(|g| g == child) {
                assert_eq!(
                    classifier.classify(status, Some(18.0)),
                    config.social.default_group,
                    "status '{status}'"
                );
            }
        }
    }
}

#[test]
fn test_default_routing() {
    let config = AnalysisConfig::default();
    let classifier = SocialStatusClassifier::new(&config.social);
    assert_eq!(classifier.classify("", None), config.social.default_group);
    assert_eq!(
        classifier.classify("unrecognized-garbage-text", None),
        config.social.default_group
    );
}

#[test]
fn test_org_keyword_priority() {
    let config = OrganizationConfig {
        organizations: vec![
            OrganizationDef {
                label: "Детская больница".to_string(),
                keywords: vec!["детская".to_string()],
            },
            OrganizationDef {
                label: "Областная больница".to_string(),
                keywords: vec!["областная".to_string()],
            },
        ],
        other_label: "Другие".to_string(),
    };
    let classifier = OrgClassifier::new(&config);
    let name = Some("Областная детская клиническая больница");
    let first = classifier.classify(name);
    assert_eq!(first, "Детская больница");
    for _ in 0..10 {
        assert_eq!(classifier.classify(name), first);
    }
}

#[test]
fn test_severity_two_tier_increment() {
    let config = AnalysisConfig::default();
    let classifier = SeverityClassifier::new(&config.severity);

    for category in &config.severity.categories {
        for place in &category.places {
            let with_date = classifier.classify_vector(place, true);
            for (label, counts) in &with_date {
                if *label == category.label {
                    assert_eq!((counts.total, counts.hospitalized), (1, 1));
                } else {
                    assert_eq!((counts.total, counts.hospitalized), (0, 0));
                }
            }

            let without_date = classifier.classify_vector(place, false);
            assert_eq!(without_date[category.label.as_str()].total, 1);
            assert_eq!(
                without_date.values().map(|c| c.hospitalized).sum::<u64>(),
                0
            );
        }
    }
}
