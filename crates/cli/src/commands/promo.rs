//! Promo vs normal sales comparison.

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use promo_lift_analytics::{
    attribute, summarize_promo_vs_normal, AttributedSale, ReportFormatter, Situation,
};
use promo_lift_core::AppConfig;
use promo_lift_data::DataSource;
use rust_decimal::Decimal;
use serde::Serialize;

use super::output::OutputArgs;

#[derive(Args, Debug, Clone)]
pub struct PromoArgs {
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Exported line per sale.
#[derive(Debug, Serialize)]
struct AttributedRow<'a> {
    transaction_id: &'a str,
    region: &'a str,
    transaction_date: NaiveDate,
    amount: Decimal,
    product_category: &'a str,
    is_promoted: bool,
    situation: Situation,
}

impl<'a> From<&AttributedSale<'a>> for AttributedRow<'a> {
    fn from(attributed: &AttributedSale<'a>) -> Self {
        let sale = attributed.sale;
        Self {
            transaction_id: &sale.transaction_id,
            region: &sale.region,
            transaction_date: sale.transaction_date,
            amount: sale.amount,
            product_category: &sale.product_category,
            is_promoted: attributed.is_promoted,
            situation: attributed.situation,
        }
    }
}

/// Attributes every sale and prints the promo vs normal summary.
///
/// `--export` writes the attributed sales, one line per sale.
///
/// # Errors
/// Returns an error if the data cannot be loaded or written.
pub fn run_promo(args: &PromoArgs, config: &AppConfig, source: &dyn DataSource) -> Result<()> {
    let sales = source.sales()?;
    let promotions = source.promotions()?;

    let attributed = attribute(&sales, &promotions);
    let summary = summarize_promo_vs_normal(&attributed);

    let rows: Vec<AttributedRow<'_>> = attributed.iter().map(AttributedRow::from).collect();
    args.output.export(&rows)?;

    args.output.print(config, &summary, || {
        ReportFormatter::format_promo_summary(&summary)
    })
}
