//! Category sensitivity to promotions.

use anyhow::Result;
use clap::Args;
use promo_lift_analytics::{category_lift, region_baselines, ReportFormatter, Sensitivity};
use promo_lift_core::AppConfig;
use promo_lift_data::DataSource;

use super::output::OutputArgs;

#[derive(Args, Debug, Clone)]
pub struct LiftArgs {
    /// Only show categories with a strong lift
    #[arg(long)]
    pub strong_only: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Computes and prints the category lift table.
///
/// # Errors
/// Returns an error if the data cannot be loaded or written.
pub fn run_lift(args: &LiftArgs, config: &AppConfig, source: &dyn DataSource) -> Result<()> {
    let sales = source.sales()?;
    let promotions = source.promotions()?;

    let baselines = region_baselines(&sales);
    let mut rows = category_lift(&sales, &promotions, &baselines);
    if args.strong_only {
        rows.retain(|row| row.sensitivity == Sensitivity::Strong);
    }

    tracing::info!("{} categories with promoted sales", rows.len());
    args.output.export(&rows)?;

    args.output
        .print(config, &rows, || ReportFormatter::format_category_lift(&rows))
}
