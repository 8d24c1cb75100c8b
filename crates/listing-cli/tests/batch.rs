//! Integration tests for configuration loading and the batch loop.

use std::fs;

use listing_cli::batch::{BatchMode, RowOutcome, run_batch};
use listing_cli::config::{AppConfig, load_config};
use listing_model::{Carrier, CategoryTable, Column, RawRow, SaleStatus};
use listing_transform::{CategoryClassifier, RowConverter, RuleClassifier};
use tempfile::TempDir;

const CONFIG: &str = r#"
[conversion]
default_carrier = "HANJIN"
importer_placeholder = "수입사 문의"
child_certification_exclusion = false

[categories.marine]
keywords = ["어류"]
id_ranges = [{ start = 50000100, end = 50000199 }]

[vocabulary.sale_status]
"판매 진행" = "SALE"

[[vocabulary.carriers]]
alias = "씨제이"
carrier = "CJGLS"

[[origins]]
name = "중국"
code = "0200037"

[[origins]]
name = "베트남"
code = "0200090"
"#;

fn row(index: usize, name: &str, category: &str, price: &str) -> RawRow {
    RawRow::new(index)
        .with("상품명", name)
        .with("카테고리", category)
        .with("판매가", price)
        .with("재고수량", "3")
        .with("상세설명", "desc")
        .with("대표이미지", "http://x/1.jpg")
}

#[test]
fn config_sections_parse() {
    let config = AppConfig::from_toml(CONFIG).expect("parse config");
    assert_eq!(config.conversion.default_carrier, Carrier::Hanjin);
    assert_eq!(config.conversion.importer_placeholder, "수입사 문의");
    assert!(!config.conversion.child_certification_exclusion);
    assert!(config.conversion.safety_certification_exclusion);
    assert_eq!(config.vocabulary.carriers.len(), 1);

    let classifier = config.classifier();
    assert!(classifier.is_marine_category(Some("식품>어류>고등어")));
    assert!(!classifier.is_marine_category(Some("식품>과자")));

    let origins = config.origin_table();
    let names: Vec<&str> = origins.entries().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["중국", "베트남"]);
}

#[test]
fn missing_config_uses_defaults() {
    let config = load_config(None).expect("defaults");
    assert_eq!(config, AppConfig::default());
    let empty = AppConfig::from_toml("").expect("empty config");
    assert_eq!(empty, AppConfig::default());
}

#[test]
fn config_errors_name_the_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("listing.toml");
    fs::write(&path, "[conversion]\ndefault_carrier = \"TELEPORT\"\n").expect("write config");
    let err = load_config(Some(path.as_path())).unwrap_err();
    assert!(format!("{err:#}").contains("listing.toml"));
}

#[test]
fn config_file_round_trip() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("listing.toml");
    fs::write(&path, CONFIG).expect("write config");
    let config = load_config(Some(path.as_path())).expect("load config");
    assert_eq!(config, AppConfig::from_toml(CONFIG).expect("parse config"));
}

#[test]
fn configured_vocabulary_reaches_conversion() {
    let config = AppConfig::from_toml(CONFIG).expect("parse config");
    let vocabulary = config.vocabulary();
    let classifier = config.classifier();
    let origins = config.origin_table();
    let categories = CategoryTable::new();
    let converter = RowConverter::new(
        &config.conversion,
        &vocabulary,
        &categories,
        &classifier,
        &origins,
    );

    let input = row(2, "Widget", "12345", "1000")
        .with("판매상태", "판매 진행")
        .with("배송방법", "택배")
        .with("택배사", "씨제이 택배")
        .with("원산지", "중국");
    let request = converter.convert(&input).expect("convert");
    assert_eq!(request.sale_status, SaleStatus::Sale);
    let delivery = request.delivery.expect("delivery");
    assert_eq!(delivery.carrier, Some(Carrier::CjLogistics));
    assert_eq!(request.origin_info.code, "0200037");
    assert_eq!(request.origin_info.importer.as_deref(), Some("수입사 문의"));
    assert!(!request.certification_info.exclusion.child);
}

#[test]
fn batch_keeps_going_past_failures() {
    let options = Default::default();
    let vocabulary = Default::default();
    let classifier = RuleClassifier::default();
    let origins = Default::default();
    let categories = CategoryTable::from_pairs([("Food > Snacks", "50000145")]);
    let converter = RowConverter::new(&options, &vocabulary, &categories, &classifier, &origins);

    let rows = vec![
        row(2, "Widget", "12345", "1000"),
        row(3, "Gadget", "Toys > Robots", "1000"),
        row(4, "Snack", "Food > Snacks", "abc"),
        row(5, "Cracker", "food/snacks", "2,500"),
    ];
    let result = run_batch(&converter, &rows, BatchMode::Convert);

    assert_eq!(result.total(), 4);
    assert_eq!(result.succeeded(), 2);
    assert_eq!(result.failed(), 2);
    assert!(result.has_failures());
    assert_eq!(result.resolution_misses(), 1);

    let requests = result.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].category_id, "50000145");

    let failed_rows: Vec<usize> = result.errors().map(|err| err.row()).collect();
    assert_eq!(failed_rows, vec![3, 4]);
}

#[test]
fn check_mode_reports_every_violation() {
    let options = Default::default();
    let vocabulary = Default::default();
    let classifier = RuleClassifier::default();
    let origins = Default::default();
    let categories = CategoryTable::new();
    let converter = RowConverter::new(&options, &vocabulary, &categories, &classifier, &origins);

    let broken = RawRow::new(7).with("상품명", "Widget").with("판매가", "-5");
    let rows = vec![row(2, "Widget", "12345", "1000"), broken];
    let result = run_batch(&converter, &rows, BatchMode::Check);

    assert!(matches!(result.reports[0].outcome, RowOutcome::Valid));
    assert!(result.requests().is_empty());
    let fields: Vec<Column> = result.errors().map(|err| err.field()).collect();
    assert_eq!(
        fields,
        vec![
            Column::Category,
            Column::SalePrice,
            Column::StockQuantity,
            Column::DetailContent,
            Column::MainImage,
        ]
    );
}
