use promo_lift_analytics::{DashboardReport, ReportInputs, Sensitivity};
use promo_lift_core::{DataConfig, RegionKey};
use promo_lift_data::{CsvDataSource, Snapshot};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

fn fixture_config() -> DataConfig {
    DataConfig {
        sales_path: fixture("sales.csv"),
        promotions_path: fixture("promotions.csv"),
        campaigns_path: Some(fixture("campaigns.csv")),
        inventory_path: Some(fixture("inventory.csv")),
        shipments_path: Some(fixture("shipments.csv")),
    }
}

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_promo-lift"))
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .args(["--config", "tests/data/Config.toml"])
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("failed to run promo-lift")
}

#[test]
fn test_report_over_fixtures() {
    let source = CsvDataSource::new(fixture_config());
    let snapshot = Snapshot::load(&source).unwrap();

    // The refund row is not a sale
    assert_eq!(snapshot.sales.len(), 6);

    let inputs = ReportInputs {
        campaigns: snapshot.campaigns.as_deref(),
        inventory: snapshot.inventory.as_deref(),
        shipments: snapshot.shipments.as_deref(),
        ..ReportInputs::new(&snapshot.sales, &snapshot.promotions)
    };
    let report = DashboardReport::build(&inputs, dec!(100));

    let summary = &report.promo_summary;
    assert_eq!(summary.promo.count, 3);
    assert_eq!(summary.promo.total_amount, dec!(190));
    assert_eq!(summary.non_promo.count, 3);
    assert_eq!(summary.non_promo.total_amount, dec!(110));
    assert!(summary.uplift_pct > Decimal::ZERO);

    assert_eq!(report.daily_uplift.promo_days.count, 3);
    assert_eq!(report.daily_uplift.normal_days.count, 3);

    let lift = &report.category_lift;
    assert_eq!(lift.len(), 2);
    assert_eq!(lift[0].category, "Drinks");
    assert_eq!(lift[0].lift_pct.round_dp(2), dec!(50));
    assert_eq!(lift[0].sensitivity, Sensitivity::Strong);
    assert_eq!(lift[1].category, "Snacks");
    assert_eq!(lift[1].promo_pairs, 2);
    assert_eq!(lift[1].regions, 2);
    assert_eq!(lift[1].sensitivity, Sensitivity::Negative);

    assert_eq!(report.region_performance[0].region, RegionKey::new("East"));
    assert_eq!(report.region_performance[0].total_sales, dec!(200));
    assert_eq!(report.yearly_sales.len(), 2);

    let east_growth: Vec<_> = report
        .monthly_growth
        .iter()
        .filter(|row| row.region == RegionKey::new("east"))
        .collect();
    assert_eq!(east_growth[0].growth_pct, None);
    assert_eq!(east_growth[1].growth_pct, Some(dec!(-75)));

    let roi = report.campaign_roi.as_ref().unwrap();
    assert_eq!(roi[0].campaign_type, "Social");
    assert_eq!(roi[0].roi, dec!(1.5));
    assert_eq!(roi[1].campaign_type, "Email");
    assert_eq!(roi[1].roi, dec!(0.8));

    let stockouts = report.stockout_rates.as_ref().unwrap();
    assert_eq!(stockouts[0].product_category, "Snacks");
    assert_eq!(stockouts[0].stockout_rate_pct, dec!(100));

    let delivery = report.delivery_performance.as_ref().unwrap();
    assert_eq!(delivery[0].destination_region, RegionKey::new("EAST"));
    assert_eq!(delivery[0].shipments, 2);
    assert_eq!(delivery[0].avg_delivery_days, dec!(3));
    assert_eq!(delivery[0].return_rate_pct, dec!(50));
}

#[test]
fn test_cli_promo_json() {
    let output = run_cli(&["promo", "--format", "json"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["promo"]["count"], 3);
    assert_eq!(json["non_promo"]["count"], 3);
}

#[test]
fn test_cli_lift_text_and_export() {
    let dir = TempDir::new().unwrap();
    let export = dir.path().join("lift.csv");

    let output = run_cli(&["lift", "--export", export.to_str().unwrap()]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Drinks"));
    assert!(stdout.contains("Forte"));

    let exported = std::fs::read_to_string(&export).unwrap();
    let mut lines = exported.lines();
    assert!(lines.next().unwrap().starts_with("category,avg_in_promo"));
    assert_eq!(lines.count(), 2);
}

#[test]
fn test_cli_report_exports_every_table() {
    let dir = TempDir::new().unwrap();
    let export = dir.path().join("report.csv");

    let output = run_cli(&["report", "--export", export.to_str().unwrap()]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(String::from_utf8_lossy(&output.stdout).contains("PROMOTION & SALES REPORT"));

    for table in [
        "regions",
        "yearly",
        "monthly_growth",
        "lift",
        "roi",
        "stockouts",
        "delivery",
    ] {
        assert!(
            dir.path().join(format!("report_{table}.csv")).exists(),
            "missing export for {table}"
        );
    }
}

#[test]
fn test_cli_trends_region_filter() {
    let output = run_cli(&["trends", "--region", "west", "--format", "json"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let growth = json["monthly_growth"].as_array().unwrap();
    assert_eq!(growth.len(), 2);
    assert!(growth.iter().all(|row| row["region"] == "WEST"));
}

#[test]
fn test_cli_rejects_unknown_format() {
    let output = run_cli(&["promo", "--format", "xml"]);
    assert!(!output.status.success());
}
