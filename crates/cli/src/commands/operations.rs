//! Stockouts and delivery performance.

use anyhow::{bail, Result};
use clap::Args;
use promo_lift_analytics::{
    delivery_performance, stockout_rates, DeliveryPerformance, ReportFormatter, StockoutRate,
};
use promo_lift_core::AppConfig;
use promo_lift_data::DataSource;
use serde::Serialize;

use super::output::OutputArgs;

#[derive(Args, Debug, Clone)]
pub struct OperationsArgs {
    /// Rows shown per table; defaults to `report.top_n`
    #[arg(long)]
    pub top: Option<usize>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Serialize)]
struct Operations {
    stockout_rates: Option<Vec<StockoutRate>>,
    delivery_performance: Option<Vec<DeliveryPerformance>>,
}

/// Prints stockout rates and delivery performance, whichever tables exist.
///
/// # Errors
/// Returns an error if neither table is available or the data cannot be
/// loaded or written.
pub fn run_operations(
    args: &OperationsArgs,
    config: &AppConfig,
    source: &dyn DataSource,
) -> Result<()> {
    let operations = Operations {
        stockout_rates: source.inventory()?.map(|items| stockout_rates(&items)),
        delivery_performance: source
            .shipments()?
            .map(|shipments| delivery_performance(&shipments)),
    };
    if operations.stockout_rates.is_none() && operations.delivery_performance.is_none() {
        bail!("Neither an inventory nor a shipments table is available");
    }

    if let Some(rows) = &operations.stockout_rates {
        args.output.export_table("stockouts", rows)?;
    }
    if let Some(rows) = &operations.delivery_performance {
        args.output.export_table("delivery", rows)?;
    }

    let top_n = args.top.unwrap_or(config.report.top_n);
    args.output.print(config, &operations, || {
        let mut blocks = Vec::new();
        if let Some(rows) = &operations.stockout_rates {
            blocks.push(ReportFormatter::format_stockout_rates(rows, top_n));
        }
        if let Some(rows) = &operations.delivery_performance {
            blocks.push(ReportFormatter::format_delivery_performance(rows, top_n));
        }
        blocks.join("\n")
    })
}
