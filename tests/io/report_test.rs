//! Tests for filling report sheets

use case_report::report::CellValue;
use case_report::{
    AnalysisConfig, OrgAggregator, RegionAggregator, ReportSheet, fill_org_report,
    fill_region_report,
};

use crate::utils::scenario_records;

fn district_row(config: &AnalysisConfig, district: &str) -> u32 {
    let position = config
        .districts
        .display_order
        .iter()
        .position(|d| d == district)
        .unwrap();
    config.region_layout.start_row + 1 + position as u32
}

#[test]
fn test_region_report_cells() {
    let config = AnalysisConfig::default();
    let layout = &config.region_layout;
    let aggregate = RegionAggregator::new(&config).aggregate(&scenario_records());

    let mut sheet = ReportSheet::blank();
    let rows = fill_region_report(&aggregate, &config, &mut sheet);
    assert_eq!(rows, 1 + config.districts.display_order.len());

    // Main city on the first row
    let city = layout.start_row;
    assert_eq!(sheet.get(city, 1), Some(&CellValue::from("Тамбов")));
    assert_eq!(sheet.number(city, layout.age["18-64 лет"]), Some(1));
    assert_eq!(sheet.number(city, layout.age["3-6 лет"]), Some(1));
    assert_eq!(sheet.number(city, layout.age["65 и старше"]), Some(0));
    assert_eq!(sheet.number(city, layout.social["Студенты"]), Some(1));
    let severe = layout.severity["тяжелая"];
    assert_eq!(sheet.number(city, severe.total.unwrap()), Some(1));
    assert_eq!(sheet.number(city, severe.hospitalized.unwrap()), Some(1));
    let mild = layout.severity["легкая"];
    assert_eq!(sheet.number(city, mild.total.unwrap()), Some(1));
    assert_eq!(sheet.number(city, mild.hospitalized.unwrap()), Some(0));

    let row = district_row(&config, "Тамбовский");
    assert_eq!(sheet.get(row, 1), Some(&CellValue::from("Тамбовский")));
    assert_eq!(sheet.number(row, layout.age["65 и старше"]), Some(1));
    assert_eq!(sheet.number(row, layout.social["Пенсионеры"]), Some(1));

    // Districts without records still get a row of zeros
    let row = district_row(&config, "Знаменский");
    assert_eq!(sheet.get(row, 1), Some(&CellValue::from("Знаменский")));
    for &column in layout.age.values() {
        assert_eq!(sheet.number(row, column), Some(0));
    }
}

#[test]
fn test_unlisted_district_follows_display_order() {
    let config = AnalysisConfig::default();
    let record = case_report::Record::new()
        .with_district("Новый район")
        .with_age(40.0);
    let aggregate = RegionAggregator::new(&config).aggregate(&[record]);

    let mut sheet = ReportSheet::blank();
    let rows = fill_region_report(&aggregate, &config, &mut sheet);
    assert_eq!(rows, 2 + config.districts.display_order.len());

    let last = config.region_layout.start_row + rows as u32 - 1;
    assert_eq!(sheet.get(last, 1), Some(&CellValue::from("Новый район")));
    assert_eq!(
        sheet.number(last, config.region_layout.age["18-64 лет"]),
        Some(1)
    );
}

#[test]
fn test_template_cells_are_kept() {
    let config = AnalysisConfig::default();
    let aggregate = RegionAggregator::new(&config).aggregate(&[]);

    let mut sheet = ReportSheet::blank();
    sheet.set(1, 1, "Пневмонии по районам");
    fill_region_report(&aggregate, &config, &mut sheet);
    assert_eq!(sheet.get(1, 1), Some(&CellValue::from("Пневмонии по районам")));
}

#[test]
fn test_org_report_cells() {
    let config = AnalysisConfig::default();
    let layout = &config.org_layout;
    let aggregate = OrgAggregator::new(&config).aggregate(&scenario_records());

    let mut sheet = ReportSheet::blank();
    let rows = fill_org_report(&aggregate, &config, &mut sheet);
    let labels = config.organization_labels();
    assert_eq!(rows, labels.len());

    for (offset, label) in labels.iter().enumerate() {
        let row = layout.start_row + offset as u32;
        assert_eq!(sheet.get(row, 1), Some(&CellValue::from(*label)));
    }

    let polyclinic = layout.start_row + 2;
    assert_eq!(sheet.number(polyclinic, layout.age["3-6 лет"]), Some(1));
    assert_eq!(
        sheet.number(polyclinic, layout.social["Неорганизованные дети"]),
        Some(1)
    );

    // The other label takes the last row
    let other = layout.start_row + rows as u32 - 1;
    assert_eq!(sheet.get(other, 1), Some(&CellValue::from("Другие")));
    assert_eq!(sheet.number(other, layout.social["Студенты"]), Some(1));

    // Organizations without records are zero-filled
    assert_eq!(sheet.number(layout.start_row, layout.age["3-6 лет"]), Some(0));
}
