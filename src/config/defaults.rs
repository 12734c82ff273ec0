//! Built-in configuration for the regional community-acquired pneumonia report.

use std::collections::BTreeMap;

use super::{
    AgeBracketDef, AgeConfig, AnalysisConfig, ColumnConfig, DistrictAlias, DistrictConfig,
    KeywordRule, MainCityConfig, OrganizationConfig, OrganizationDef, SeverityCategoryDef,
    SeverityConfig, SocialConfig, SocialGroupDef,
};
use crate::preprocess::dates::DateFormatConfig;
use crate::report::layout::{ReportLayout, SeverityColumns};

const MAIN_CITY: &str = "Тамбов";

const AGE_BRACKETS: &[(&str, f64, f64)] = &[
    ("0-2 года", 0.0, 3.0),
    ("3-6 лет", 3.0, 7.0),
    ("7-14 лет", 7.0, 15.0),
    ("15-17 лет", 15.0, 18.0),
    ("18-64 лет", 18.0, 65.0),
    ("65 и старше", 65.0, 150.0),
];

const UNORGANIZED_CHILDREN: &str = "Неорганизованные дети";
const PRESCHOOL_CHILDREN: &str = "Организованные дети (ДОУ)";
const SCHOOLCHILDREN: &str = "Школьники";
const STUDENTS: &str = "Студенты";
const PENSIONERS: &str = "Пенсионеры";
const UNEMPLOYED: &str = "Неработающие";
const MEDICAL_WORKERS: &str = "Медицинские работники";
const WORKING_ADULTS: &str = "Работающие взрослые";

const SOCIAL_GROUPS: &[(&str, &[&str])] = &[
    (
        UNORGANIZED_CHILDREN,
        &["ребенок", "ребёнок", "неорганизованный", "неорганизованный ребенок", "дошкольник"],
    ),
    (
        PRESCHOOL_CHILDREN,
        &["организованный", "посещает доу", "посещает детский сад", "воспитанник доу"],
    ),
    (SCHOOLCHILDREN, &["школьник", "школьница", "ученик", "учащийся"]),
    (STUDENTS, &["студент", "студентка", "курсант", "учащийся суз"]),
    (PENSIONERS, &["пенсионер", "пенсионерка", "инвалид"]),
    (UNEMPLOYED, &["безработный", "не работает", "неработающий", "домохозяйка"]),
    (
        MEDICAL_WORKERS,
        &["медработник", "медицинский работник", "врач", "медсестра", "фельдшер"],
    ),
    (WORKING_ADULTS, &["работающий", "работает", "служащий", "рабочий"]),
];

const KEYWORD_RULES: &[(&str, &str)] = &[
    ("доу", PRESCHOOL_CHILDREN),
    ("детский сад", PRESCHOOL_CHILDREN),
    ("школ", SCHOOLCHILDREN),
    ("студ", STUDENTS),
    ("пенси", PENSIONERS),
    ("инвалид", PENSIONERS),
    ("безработ", UNEMPLOYED),
    ("не работа", UNEMPLOYED),
    ("неработа", UNEMPLOYED),
    ("медработ", MEDICAL_WORKERS),
    ("медицинск", MEDICAL_WORKERS),
    ("медсест", MEDICAL_WORKERS),
    ("врач", MEDICAL_WORKERS),
    ("ребен", UNORGANIZED_CHILDREN),
    ("ребён", UNORGANIZED_CHILDREN),
];

const SEVERE: &str = "тяжелая";
const MODERATE: &str = "средняя";
const MILD: &str = "легкая";

const SEVERITY_CATEGORIES: &[(&str, &[&str])] = &[
    (
        SEVERE,
        &["ОРИТ", "Реанимация", "Отделение реанимации и интенсивной терапии", "ОАР"],
    ),
    (
        MODERATE,
        &[
            "Инфекционное отделение",
            "Пульмонологическое отделение",
            "Терапевтическое отделение",
            "Педиатрическое отделение",
        ],
    ),
    (MILD, &["Амбулаторно", "На дому", "Дневной стационар"]),
];

const ORGANIZATIONS: &[(&str, &[&str])] = &[
    (
        "ГКБ им. Архиепископа Луки",
        &["архиепископа луки", "городская клиническая больница"],
    ),
    ("Городская детская больница", &["детская городская", "городская детская"]),
    ("Городская поликлиника №2", &["поликлиника №2", "поликлиника № 2"]),
    ("Городская поликлиника №3", &["поликлиника №3", "поликлиника № 3"]),
    ("Тамбовская ЦРБ", &["тамбовская црб", "тамбовская центральная районная"]),
];

const MAIN_CITY_ORGS: &[&str] = &[
    "ГБУЗ \"Городская клиническая больница им. Архиепископа Луки г. Тамбова\"",
    "ГБУЗ \"Детская городская клиническая больница г. Тамбова\"",
    "ГБУЗ \"Городская поликлиника №2 г. Тамбова\"",
    "ГБУЗ \"Городская поликлиника №3 г. Тамбова\"",
];

const DISTRICTS: &[&str] = &[
    "Мичуринск",
    "Моршанск",
    "Рассказово",
    "Уварово",
    "Котовск",
    "Кирсанов",
    "Бондарский",
    "Гавриловский",
    "Жердевский",
    "Знаменский",
    "Инжавинский",
    "Кирсановский",
    "Мичуринский",
    "Мордовский",
    "Моршанский",
    "Мучкапский",
    "Никифоровский",
    "Первомайский",
    "Петровский",
    "Пичаевский",
    "Рассказовский",
    "Ржаксинский",
    "Сампурский",
    "Сосновский",
    "Староюрьевский",
    "Тамбовский",
    "Токарёвский",
    "Уваровский",
    "Умётский",
];

const DISTRICT_ALIASES: &[(&str, &str)] = &[
    ("г. Тамбов", MAIN_CITY),
    ("г.Тамбов", MAIN_CITY),
    ("Тамбов г", MAIN_CITY),
    ("Токаревский", "Токарёвский"),
    ("Уметский", "Умётский"),
    ("г. Мичуринск", "Мичуринск"),
    ("г. Моршанск", "Моршанск"),
    ("г. Рассказово", "Рассказово"),
    ("г. Уварово", "Уварово"),
    ("г. Котовск", "Котовск"),
    ("г. Кирсанов", "Кирсанов"),
];

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| (*s).to_string()).collect()
}

impl Default for AgeConfig {
    fn default() -> Self {
        Self {
            brackets: AGE_BRACKETS
                .iter()
                .map(|&(label, low, high)| AgeBracketDef::new(label, low, high))
                .collect(),
            unknown_label: "Неизвестно".to_string(),
        }
    }
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            groups: SOCIAL_GROUPS
                .iter()
                .map(|&(label, keywords)| SocialGroupDef {
                    label: label.to_string(),
                    keywords: strings(keywords),
                })
                .collect(),
            keyword_rules: KEYWORD_RULES
                .iter()
                .map(|&(keyword, group)| KeywordRule {
                    keyword: keyword.to_string(),
                    group: group.to_string(),
                })
                .collect(),
            adult_override: strings(&[UNORGANIZED_CHILDREN, PRESCHOOL_CHILDREN, SCHOOLCHILDREN]),
            adult_age: 18.0,
            default_group: WORKING_ADULTS.to_string(),
        }
    }
}

impl Default for SeverityConfig {
    fn default() -> Self {
        Self {
            categories: SEVERITY_CATEGORIES
                .iter()
                .map(|&(label, places)| SeverityCategoryDef {
                    label: label.to_string(),
                    places: strings(places),
                })
                .collect(),
            default_category: MILD.to_string(),
        }
    }
}

impl Default for OrganizationConfig {
    fn default() -> Self {
        Self {
            organizations: ORGANIZATIONS
                .iter()
                .map(|&(label, keywords)| OrganizationDef {
                    label: label.to_string(),
                    keywords: strings(keywords),
                })
                .collect(),
            other_label: "Другие".to_string(),
        }
    }
}

impl Default for MainCityConfig {
    fn default() -> Self {
        Self {
            name: MAIN_CITY.to_string(),
            org_names: strings(MAIN_CITY_ORGS),
        }
    }
}

impl Default for DistrictConfig {
    fn default() -> Self {
        Self {
            display_order: strings(DISTRICTS),
            aliases: DISTRICT_ALIASES
                .iter()
                .map(|&(alias, name)| DistrictAlias {
                    alias: alias.to_string(),
                    name: name.to_string(),
                })
                .collect(),
            unknown_district: "Район не указан".to_string(),
        }
    }
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            district: "Административная территория (город)".to_string(),
            med_org: "Медицинская организация".to_string(),
            birth_date: "Дата рождения".to_string(),
            submission_date: "Дата подачи ЭИ".to_string(),
            social_status: "Социальный статус".to_string(),
            social_status_fallback: Some("Место работы (учебы)".to_string()),
            hosp_place: "Место госпитализации".to_string(),
            hosp_date: "Дата госпитализации".to_string(),
            skip_rows: 0,
        }
    }
}

/// Columns are laid out left to right: name, age brackets, social groups, then
/// total/hospitalized pairs per severity category.
fn layout(start_row: u32) -> ReportLayout {
    let mut column = 2;
    let mut next = || {
        let current = column;
        column += 1;
        current
    };

    let age: BTreeMap<String, u32> = AGE_BRACKETS
        .iter()
        .map(|&(label, _, _)| (label.to_string(), next()))
        .collect();
    let social: BTreeMap<String, u32> = SOCIAL_GROUPS
        .iter()
        .map(|&(label, _)| (label.to_string(), next()))
        .collect();
    let severity: BTreeMap<String, SeverityColumns> = SEVERITY_CATEGORIES
        .iter()
        .map(|&(label, _)| {
            let columns = SeverityColumns {
                total: Some(next()),
                hospitalized: Some(next()),
            };
            (label.to_string(), columns)
        })
        .collect();

    ReportLayout {
        start_row,
        name_column: Some(1),
        age,
        social,
        severity,
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            age: AgeConfig::default(),
            social: SocialConfig::default(),
            severity: SeverityConfig::default(),
            organizations: OrganizationConfig::default(),
            main_city: MainCityConfig::default(),
            districts: DistrictConfig::default(),
            columns: ColumnConfig::default(),
            dates: DateFormatConfig::default(),
            region_layout: layout(8),
            org_layout: layout(6),
        }
    }
}
