//! Full dashboard report.

use anyhow::Result;
use clap::Args;
use promo_lift_analytics::{DashboardReport, ReportFormatter, ReportInputs};
use promo_lift_core::AppConfig;
use promo_lift_data::{DataSource, Snapshot};
use rust_decimal::Decimal;

use super::output::OutputArgs;

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Rows shown in "top N" tables; defaults to `report.top_n`
    #[arg(long)]
    pub top: Option<usize>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Loads every table once and prints every analysis.
///
/// `--export` writes one CSV file per table.
///
/// # Errors
/// Returns an error if the data cannot be loaded or written.
pub fn run_report(args: &ReportArgs, config: &AppConfig, source: &dyn DataSource) -> Result<()> {
    let snapshot = Snapshot::load(source)?;

    let inputs = ReportInputs {
        campaigns: snapshot.campaigns.as_deref(),
        inventory: snapshot.inventory.as_deref(),
        shipments: snapshot.shipments.as_deref(),
        ..ReportInputs::new(&snapshot.sales, &snapshot.promotions)
    };
    let report = DashboardReport::build(
        &inputs,
        Decimal::from(config.report.growth_clip_pct),
    );

    export_report(&args.output, &report)?;

    let top_n = args.top.unwrap_or(config.report.top_n);
    args.output
        .print(config, &report, || ReportFormatter::format(&report, top_n))
}

fn export_report(output: &OutputArgs, report: &DashboardReport) -> Result<()> {
    if output.export.is_none() {
        return Ok(());
    }

    output.export_table("regions", &report.region_performance)?;
    output.export_table("yearly", &report.yearly_sales)?;
    output.export_table("monthly_growth", &report.monthly_growth)?;
    output.export_table("lift", &report.category_lift)?;
    if let Some(rows) = &report.campaign_roi {
        output.export_table("roi", rows)?;
    }
    if let Some(rows) = &report.stockout_rates {
        output.export_table("stockouts", rows)?;
    }
    if let Some(rows) = &report.delivery_performance {
        output.export_table("delivery", rows)?;
    }
    Ok(())
}
