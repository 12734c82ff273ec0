//! Tests for region and organization aggregation

use case_report::models::RawRow;
use case_report::{
    AnalysisConfig, OrgAggregator, RecordPreprocessor, RegionAggregator, SeverityCounts,
};

use crate::utils::{CITY_POLYCLINIC, date, mixed_records, scenario_records};

#[test]
fn test_region_scenario() {
    let config = AnalysisConfig::default();
    let result = RegionAggregator::new(&config).aggregate(&scenario_records());

    // Student from the city and the child seen by a city polyclinic
    assert_eq!(result.main_city.record_count(), 2);
    assert_eq!(result.main_city.age_count("18-64 лет"), 1);
    assert_eq!(result.main_city.age_count("3-6 лет"), 1);
    assert_eq!(result.main_city.social_count("Студенты"), 1);
    assert_eq!(result.main_city.social_count("Неорганизованные дети"), 1);
    assert_eq!(
        result.main_city.severity_count("тяжелая"),
        SeverityCounts {
            total: 1,
            hospitalized: 1
        }
    );
    assert_eq!(
        result.main_city.severity_count("легкая"),
        SeverityCounts {
            total: 1,
            hospitalized: 0
        }
    );

    let district = result.bucket("Тамбовский").unwrap();
    assert_eq!(district.record_count(), 1);
    assert_eq!(district.age_count("65 и старше"), 1);
    assert_eq!(district.social_count("Пенсионеры"), 1);
    assert_eq!(district.severity_count("легкая").total, 1);

    // The child is counted in the city, not in the district of residence
    assert!(result.bucket("Знаменский").is_none());
    assert_eq!(result.districts.len(), 1);
}

#[test]
fn test_org_scenario() {
    let config = AnalysisConfig::default();
    let result = OrgAggregator::new(&config).aggregate(&scenario_records());

    // Pensioner from a district with an unlisted organization is excluded
    assert_eq!(result.record_count(), 2);

    let polyclinic = result.bucket("Городская поликлиника №2").unwrap();
    assert_eq!(polyclinic.record_count(), 1);
    assert_eq!(polyclinic.age_count("3-6 лет"), 1);

    // The student has no organization but lives in the main city
    let other = result.bucket("Другие").unwrap();
    assert_eq!(other.record_count(), 1);
    assert_eq!(other.social_count("Студенты"), 1);
}

#[test]
fn test_main_city_bucket_always_exists() {
    let config = AnalysisConfig::default();
    let result = RegionAggregator::new(&config).aggregate(&[]);
    assert_eq!(result.main_city_name, "Тамбов");
    assert_eq!(result.record_count(), 0);
    assert!(result.districts.is_empty());
}

#[test]
fn test_org_keyword_match_outside_main_city_is_included() {
    let config = AnalysisConfig::default();
    let record = case_report::Record::new()
        .with_district("Тамбовский")
        .with_med_org("ТОГБУЗ «Тамбовская ЦРБ»")
        .with_age(40.0);
    let result = OrgAggregator::new(&config).aggregate(&[record]);
    assert_eq!(result.bucket("Тамбовская ЦРБ").unwrap().record_count(), 1);
}

#[test]
fn test_missing_district_goes_to_unknown_bucket() {
    let config = AnalysisConfig::default();
    let record = case_report::Record::new().with_age(30.0);
    let result = RegionAggregator::new(&config).aggregate(&[record]);
    assert_eq!(result.bucket("Район не указан").unwrap().record_count(), 1);
}

#[test]
fn test_parallel_matches_sequential() {
    let config = AnalysisConfig::default();
    let records = mixed_records(5_000);

    let regions = RegionAggregator::new(&config);
    assert_eq!(regions.aggregate(&records), regions.aggregate_parallel(&records));

    let orgs = OrgAggregator::new(&config);
    assert_eq!(orgs.aggregate(&records), orgs.aggregate_parallel(&records));
}

#[test]
fn test_order_does_not_matter() {
    let config = AnalysisConfig::default();
    let records = mixed_records(300);
    let mut reversed = records.clone();
    reversed.reverse();

    let aggregator = RegionAggregator::new(&config);
    assert_eq!(aggregator.aggregate(&records), aggregator.aggregate(&reversed));
}

#[test]
fn test_hospitalized_counts_follow_dates() {
    let config = AnalysisConfig::default();
    let records = vec![
        case_report::Record::new()
            .with_district("Мичуринск")
            .with_med_org(CITY_POLYCLINIC)
            .with_hosp_place("Инфекционное отделение")
            .with_hosp_date(date(2024, 3, 1)),
        case_report::Record::new()
            .with_district("Мичуринск")
            .with_hosp_place("Инфекционное отделение"),
    ];
    let result = RegionAggregator::new(&config).aggregate(&records);
    assert_eq!(result.main_city.severity_count("средняя").hospitalized, 1);
    assert_eq!(
        result.bucket("Мичуринск").unwrap().severity_count("средняя"),
        SeverityCounts {
            total: 1,
            hospitalized: 0
        }
    );
}

fn raw_row(birth: &str, status: &str, hosp_date: Option<&str>) -> RawRow {
    RawRow {
        district: Some("Мичуринск".to_string()),
        birth_date: Some(birth.to_string()),
        submission_date: Some("2024-01-10".to_string()),
        social_status: Some(status.to_string()),
        hosp_place: Some("ОРИТ".to_string()),
        hosp_date: hosp_date.map(str::to_string),
        ..RawRow::default()
    }
}

#[test]
fn test_short_year_birth_date_is_classified_as_adult() {
    let config = AnalysisConfig::default();
    let records = RecordPreprocessor::new(&config).preprocess(vec![raw_row(
        "15.01.85",
        "школьник",
        None,
    )]);
    let result = RegionAggregator::new(&config).aggregate(&records);

    let district = result.bucket("Мичуринск").unwrap();
    assert_eq!(district.age_count("18-64 лет"), 1);
    assert_eq!(district.age_count("65 и старше"), 0);
    assert_eq!(district.social_count("Работающие взрослые"), 1);
}

#[test]
fn test_unparseable_hosp_date_counts_as_hospitalized() {
    let config = AnalysisConfig::default();
    let records = RecordPreprocessor::new(&config).preprocess(vec![
        raw_row("01.01.1990", "студент", Some("10.01.2024 г.")),
        raw_row("01.01.1990", "студент", None),
    ]);
    let result = RegionAggregator::new(&config).aggregate(&records);

    assert_eq!(
        result.bucket("Мичуринск").unwrap().severity_count("тяжелая"),
        SeverityCounts {
            total: 2,
            hospitalized: 1
        }
    );
}
