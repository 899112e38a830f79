//! Average daily sales during promotions.

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use promo_lift_analytics::{daily_region_totals, daily_uplift, PromotionIndex, ReportFormatter};
use promo_lift_core::{AppConfig, RegionKey};
use promo_lift_data::DataSource;
use rust_decimal::Decimal;
use serde::Serialize;

use super::output::OutputArgs;

#[derive(Args, Debug, Clone)]
pub struct DailyArgs {
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Exported line per `(day, region)` total.
#[derive(Debug, Serialize)]
struct DailyRow {
    day: NaiveDate,
    region: RegionKey,
    total_amount: Decimal,
    /// Number of promotion windows covering the day (0 for a normal day)
    covering_windows: usize,
}

/// Prints the promo vs normal daily averages.
///
/// `--export` writes the day-region totals with their window count.
///
/// # Errors
/// Returns an error if the data cannot be loaded or written.
pub fn run_daily(args: &DailyArgs, config: &AppConfig, source: &dyn DataSource) -> Result<()> {
    let sales = source.sales()?;
    let promotions = source.promotions()?;

    let uplift = daily_uplift(&sales, &promotions);

    if args.output.export.is_some() {
        let index = PromotionIndex::new(&promotions);
        let rows: Vec<DailyRow> = daily_region_totals(&sales)
            .into_iter()
            .map(|((day, region), total_amount)| DailyRow {
                covering_windows: index.matching(&region, day).count(),
                day,
                region,
                total_amount,
            })
            .collect();
        args.output.export(&rows)?;
    }

    args.output
        .print(config, &uplift, || ReportFormatter::format_daily_uplift(&uplift))
}
