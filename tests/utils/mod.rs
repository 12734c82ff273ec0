use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, Date32Array, StringArray};
use arrow::record_batch::RecordBatch;
use case_report::Record;
use case_report::config::ColumnConfig;
use chrono::NaiveDate;
use parquet::arrow::ArrowWriter;

/// Organization located in the main city whose name also matches an organization keyword
pub const CITY_POLYCLINIC: &str = "ГБУЗ \"Городская поликлиника №2 г. Тамбова\"";

#[must_use]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// The three-record scenario: a pensioner from a district, a student from the main city
/// in intensive care, and a child seen by a main-city polyclinic but living in a district
#[must_use]
pub fn scenario_records() -> Vec<Record> {
    vec![
        Record::new()
            .with_district("Тамбовский")
            .with_med_org("ФАП с. Покрово-Пригородное")
            .with_social_status("пенсионер")
            .with_age(70.0)
            .with_hosp_place("Неизвестное отделение"),
        Record::new()
            .with_district("Тамбов")
            .with_social_status("студент")
            .with_age(20.0)
            .with_hosp_place("ОРИТ")
            .with_hosp_date(date(2024, 1, 10)),
        Record::new()
            .with_district("Знаменский")
            .with_med_org(CITY_POLYCLINIC)
            .with_social_status("ребенок")
            .with_age(5.0)
            .with_hosp_place("Амбулаторно"),
    ]
}

/// A larger mixed set for completeness checks
#[must_use]
pub fn mixed_records(n: usize) -> Vec<Record> {
    let districts = ["Тамбов", "Тамбовский", "Мичуринск", "  ", "Новый район"];
    let orgs = [
        Some(CITY_POLYCLINIC),
        Some("ТОГБУЗ Тамбовская ЦРБ"),
        Some("ФАП"),
        None,
    ];
    let statuses = ["школьник", "пенсионер", "", "студентка", "домохозяйка", "мусор"];
    let places = ["ОРИТ", "Инфекционное отделение", "На дому", "где-то"];

    (0..n)
        .map(|i| {
            let mut record = Record::new()
                .with_district(districts[i % districts.len()])
                .with_social_status(statuses[i % statuses.len()])
                .with_hosp_place(places[i % places.len()]);
            if let Some(org) = orgs[i % orgs.len()] {
                record = record.with_med_org(org);
            }
            if i % 7 != 0 {
                record = record.with_age((i % 90) as f64 + 0.5);
            }
            if i % 3 == 0 {
                record = record.with_hosp_date(date(2024, 2, 1));
            }
            record
        })
        .collect()
}

/// Text column with nulls where `None`
#[must_use]
pub fn text(values: &[Option<&str>]) -> ArrayRef {
    Arc::new(StringArray::from(values.to_vec()))
}

/// Typed date column, stored as days since the Unix epoch
#[must_use]
pub fn dates(values: &[Option<NaiveDate>]) -> ArrayRef {
    let epoch = date(1970, 1, 1);
    let days: Vec<Option<i32>> = values
        .iter()
        .map(|d| d.map(|d| (d - epoch).num_days() as i32))
        .collect();
    Arc::new(Date32Array::from(days))
}

/// Write one record batch with the given named columns to a parquet file
pub fn write_parquet(path: &Path, columns: Vec<(&str, ArrayRef)>) {
    let batch = RecordBatch::try_from_iter(columns).unwrap();
    let file = File::create(path).unwrap();
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None).unwrap();
    writer.write(&batch).unwrap();
    writer.close().unwrap();
}

/// The three-record scenario as a case file with the default column names
///
/// Birth dates are typed, submission dates are text, and the student's status is only
/// present in the fallback column.
pub fn write_scenario_parquet(path: &Path) {
    let columns = ColumnConfig::default();
    let fallback = columns.social_status_fallback.clone().unwrap();
    write_parquet(
        path,
        vec![
            (
                columns.district.as_str(),
                text(&[Some("Тамбовский"), Some(" г. Тамбов "), Some("Знаменский")]),
            ),
            (
                columns.med_org.as_str(),
                text(&[Some("ФАП с. Покрово-Пригородное"), None, Some(CITY_POLYCLINIC)]),
            ),
            (
                columns.birth_date.as_str(),
                dates(&[
                    Some(date(1954, 1, 10)),
                    Some(date(2003, 6, 1)),
                    Some(date(2019, 1, 1)),
                ]),
            ),
            (
                columns.submission_date.as_str(),
                text(&[Some("10.01.2024"), Some("10.01.2024"), Some("10.01.2024")]),
            ),
            (
                columns.social_status.as_str(),
                text(&[Some("пенсионер"), None, Some("ребенок")]),
            ),
            (fallback.as_str(), text(&[None, Some("студент"), None])),
            (
                columns.hosp_place.as_str(),
                text(&[Some("Неизвестное отделение"), Some("ОРИТ"), Some("Амбулаторно")]),
            ),
            (
                columns.hosp_date.as_str(),
                text(&[None, Some("10.01.2024"), None]),
            ),
        ],
    );
}
