//! Sales trends: revenue by region, yearly volume, monthly growth.

use anyhow::Result;
use clap::Args;
use promo_lift_analytics::{
    growth_for_region, monthly_growth, region_performance, yearly_sales, MonthlyGrowth,
    RegionPerformance, ReportFormatter, YearlySales,
};
use promo_lift_core::{AppConfig, RegionKey};
use promo_lift_data::DataSource;
use rust_decimal::Decimal;
use serde::Serialize;

use super::output::OutputArgs;

#[derive(Args, Debug, Clone)]
pub struct TrendsArgs {
    /// Restrict monthly growth to one region
    #[arg(long)]
    pub region: Option<String>,

    /// Growth clip in percent; defaults to `report.growth_clip_pct`
    #[arg(long)]
    pub clip: Option<u32>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Serialize)]
struct Trends {
    region_performance: Vec<RegionPerformance>,
    yearly_sales: Vec<YearlySales>,
    monthly_growth: Vec<MonthlyGrowth>,
}

/// Prints the sales trend tables.
///
/// # Errors
/// Returns an error if the data cannot be loaded or written.
pub fn run_trends(args: &TrendsArgs, config: &AppConfig, source: &dyn DataSource) -> Result<()> {
    let sales = source.sales()?;
    let clip = Decimal::from(args.clip.unwrap_or(config.report.growth_clip_pct));

    let mut growth = monthly_growth(&sales, clip);
    if let Some(region) = &args.region {
        let key = RegionKey::new(region);
        growth = growth_for_region(&growth, &key).into_iter().cloned().collect();
        if growth.is_empty() {
            tracing::warn!("No sales recorded for region {}", key);
        }
    }

    let trends = Trends {
        region_performance: region_performance(&sales),
        yearly_sales: yearly_sales(&sales),
        monthly_growth: growth,
    };

    args.output
        .export_table("regions", &trends.region_performance)?;
    args.output.export_table("yearly", &trends.yearly_sales)?;
    args.output
        .export_table("monthly_growth", &trends.monthly_growth)?;

    args.output.print(config, &trends, || {
        [
            ReportFormatter::format_region_performance(&trends.region_performance),
            ReportFormatter::format_yearly_sales(&trends.yearly_sales),
            ReportFormatter::format_monthly_growth(&trends.monthly_growth),
        ]
        .join("\n")
    })
}
