use std::path::PathBuf;

use chrono::NaiveDate;
use kaapi_fixtures::catalog::Money;
use kaapi_fixtures::config::{load_config, CountRange, GeneratorConfig, HourRange, QuantityWeight};
use kaapi_fixtures::error::FixtureError;

#[test]
fn defaults_describe_five_days_of_kaapi_ledgers() {
    let config = GeneratorConfig::default();
    config.validate().expect("defaults should be valid");
    assert_eq!(
        config.start_date,
        NaiveDate::from_ymd_opt(2026, 2, 8).expect("valid date")
    );
    assert_eq!(config.day_count, 5);
    assert_eq!(config.txn_count_range, CountRange { min: 100, max: 300 });
    assert_eq!(config.hour_range, HourRange { start: 7, end: 18 });
    assert_eq!(config.catalog.len(), 10);
    assert_eq!(config.payment_methods.len(), 3);
    assert_eq!(config.output_dir, PathBuf::from("test-data"));
    assert_eq!(config.file_prefix, "kaapi_ledger");
}

#[test]
fn loads_partial_yaml_over_defaults() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("fixtures.yaml");
    std::fs::write(
        &path,
        r#"
start_date: "2026-03-01"
day_count: 2
txn_count_range: { min: 10, max: 20 }
catalog:
  - { name: "Flat White", price: 4.25, category: "Coffee" }
  - { name: "Scone", price: 3, category: "Pastry" }
payment_methods: ["Cash"]
quantity_weights:
  - { value: 1, weight: 1 }
"#,
    )
    .expect("write config");

    let config = load_config(&path).expect("load config");
    config.validate().expect("loaded config should be valid");
    assert_eq!(
        config.start_date,
        NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date")
    );
    assert_eq!(config.day_count, 2);
    assert_eq!(config.txn_count_range, CountRange { min: 10, max: 20 });
    assert_eq!(config.catalog[0].price, Money::from_cents(425));
    assert_eq!(config.catalog[1].price, Money::from_cents(300));
    assert_eq!(config.payment_methods, ["Cash"]);
    assert_eq!(config.quantity_weights, [QuantityWeight { value: 1, weight: 1 }]);
    assert_eq!(config.hour_range, HourRange { start: 7, end: 18 });
    assert_eq!(config.file_prefix, "kaapi_ledger");
}

#[test]
fn rejects_unknown_and_malformed_yaml() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("bad.yaml");

    std::fs::write(&path, "days: 3\n").expect("write config");
    let err = load_config(&path).expect_err("unknown field should fail");
    assert!(matches!(err, FixtureError::Config { .. }), "unexpected error: {err}");
    assert!(err.to_string().contains("bad.yaml"), "unexpected error: {err}");

    std::fs::write(
        &path,
        "catalog:\n  - { name: Latte, price: -1.0, category: Coffee }\n",
    )
    .expect("write config");
    let err = load_config(&path).expect_err("negative price should fail");
    assert!(err.to_string().contains("non-negative"), "unexpected error: {err}");
}

#[test]
fn missing_config_file_names_the_path() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("absent.yaml");
    let err = load_config(&path).expect_err("missing file should fail");
    assert!(matches!(err, FixtureError::Io { .. }), "unexpected error: {err}");
    assert!(err.to_string().contains("absent.yaml"), "unexpected error: {err}");
}

#[test]
fn validate_rejects_degenerate_settings() {
    let cases: Vec<(GeneratorConfig, &str)> = vec![
        (
            GeneratorConfig {
                day_count: 0,
                ..GeneratorConfig::default()
            },
            "day_count",
        ),
        (
            GeneratorConfig {
                txn_count_range: CountRange { min: 5, max: 4 },
                ..GeneratorConfig::default()
            },
            "txn_count_range",
        ),
        (
            GeneratorConfig {
                catalog: Vec::new(),
                ..GeneratorConfig::default()
            },
            "catalog",
        ),
        (
            GeneratorConfig {
                payment_methods: Vec::new(),
                ..GeneratorConfig::default()
            },
            "payment_methods",
        ),
        (
            GeneratorConfig {
                hour_range: HourRange { start: 18, end: 7 },
                ..GeneratorConfig::default()
            },
            "hour_range",
        ),
        (
            GeneratorConfig {
                hour_range: HourRange { start: 7, end: 24 },
                ..GeneratorConfig::default()
            },
            "hour_range",
        ),
        (
            GeneratorConfig {
                quantity_weights: vec![QuantityWeight { value: 0, weight: 1 }],
                ..GeneratorConfig::default()
            },
            "quantity_weights",
        ),
        (
            GeneratorConfig {
                quantity_weights: vec![QuantityWeight { value: 1, weight: 0 }],
                ..GeneratorConfig::default()
            },
            "zero",
        ),
        (
            GeneratorConfig {
                quantity_weights: vec![
                    QuantityWeight {
                        value: 1,
                        weight: u32::MAX,
                    },
                    QuantityWeight { value: 2, weight: 1 },
                ],
                ..GeneratorConfig::default()
            },
            "maximum",
        ),
        (
            GeneratorConfig {
                file_prefix: "../escape".to_string(),
                ..GeneratorConfig::default()
            },
            "file_prefix",
        ),
        (
            GeneratorConfig {
                file_extension: String::new(),
                ..GeneratorConfig::default()
            },
            "file_extension",
        ),
        (
            GeneratorConfig {
                start_date: NaiveDate::MAX,
                day_count: 2,
                ..GeneratorConfig::default()
            },
            "out of range",
        ),
    ];

    for (config, needle) in cases {
        let err = config.validate().expect_err("config should be rejected");
        assert!(
            err.to_string().contains(needle),
            "expected '{needle}' in error: {err}"
        );
    }
}

#[test]
fn simulated_dates_cross_month_boundaries() {
    let config = GeneratorConfig {
        start_date: NaiveDate::from_ymd_opt(2026, 2, 27).expect("valid date"),
        ..GeneratorConfig::default()
    };
    assert_eq!(
        config.simulated_date(2).expect("date"),
        NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date")
    );
}
