//! Return on marketing spend per campaign channel.

use promo_lift_core::ratio::{mean, safe_div};
use promo_lift_core::{Campaign, SaleRecord};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::window_join::CampaignIndex;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CampaignRoi {
    pub campaign_type: String,
    /// Mean expected conversion rate over joined pairs, in percent
    pub avg_conversion_pct: Decimal,
    /// Sales generated per unit of budget
    pub roi: Decimal,
    pub avg_basket: Decimal,
    /// Number of `(sale, campaign)` pairs behind the figures
    pub matched_sales: u64,
}

#[derive(Default)]
struct ChannelBucket {
    conversion_rates: Vec<Decimal>,
    revenue: Decimal,
    budget: Decimal,
    pairs: u64,
}

/// Joins sales to the campaigns running in their region on their date and
/// aggregates per campaign type.
///
/// Every `(sale, campaign)` pair contributes its sale amount and the
/// campaign's budget, so a campaign's budget weighs in once per matched sale.
/// Channels without any matched sale are omitted. Rows are sorted by
/// `avg_conversion_pct` descending, then campaign type.
#[must_use]
pub fn campaign_roi(sales: &[SaleRecord], campaigns: &[Campaign]) -> Vec<CampaignRoi> {
    let index = CampaignIndex::new(campaigns);
    let mut channels: BTreeMap<&str, ChannelBucket> = BTreeMap::new();

    for sale in sales {
        for campaign in index.matching(&sale.region_key(), sale.transaction_date) {
            let bucket = channels.entry(campaign.campaign_type.as_str()).or_default();
            bucket.conversion_rates.push(campaign.conversion_rate);
            bucket.revenue += sale.amount;
            bucket.budget += campaign.budget;
            bucket.pairs += 1;
        }
    }

    let mut rows: Vec<CampaignRoi> = channels
        .into_iter()
        .map(|(campaign_type, bucket)| CampaignRoi {
            campaign_type: campaign_type.to_string(),
            avg_conversion_pct: mean(bucket.conversion_rates) * Decimal::ONE_HUNDRED,
            roi: safe_div(bucket.revenue, bucket.budget),
            avg_basket: safe_div(bucket.revenue, Decimal::from(bucket.pairs)),
            matched_sales: bucket.pairs,
        })
        .collect();

    rows.sort_by(|a, b| {
        b.avg_conversion_pct
            .cmp(&a.avg_conversion_pct)
            .then_with(|| a.campaign_type.cmp(&b.campaign_type))
    });

    tracing::debug!(
        "Campaign ROI over {} campaigns: {} channels with matched sales",
        index.len(),
        rows.len()
    );
    rows
}
