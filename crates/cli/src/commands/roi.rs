//! Marketing return per campaign channel.

use anyhow::{bail, Result};
use clap::Args;
use promo_lift_analytics::{campaign_roi, ReportFormatter};
use promo_lift_core::AppConfig;
use promo_lift_data::DataSource;

use super::output::OutputArgs;

#[derive(Args, Debug, Clone)]
pub struct RoiArgs {
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Prints ROI per campaign type.
///
/// # Errors
/// Returns an error if no campaigns table is available or the data cannot be
/// loaded or written.
pub fn run_roi(args: &RoiArgs, config: &AppConfig, source: &dyn DataSource) -> Result<()> {
    let Some(campaigns) = source.campaigns()? else {
        bail!("No campaigns table available. Set data.campaigns_path in the configuration");
    };
    let sales = source.sales()?;

    let rows = campaign_roi(&sales, &campaigns);
    args.output.export(&rows)?;

    args.output
        .print(config, &rows, || ReportFormatter::format_campaign_roi(&rows))
}
