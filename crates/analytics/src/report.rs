//! Every dashboard table computed from one snapshot of inputs.

use promo_lift_core::{Campaign, InventoryItem, PromotionWindow, SaleRecord, Shipment};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::attribution::attribute;
use crate::daily::{daily_uplift, DailyUplift};
use crate::lift::{category_lift, region_baselines, CategoryLift};
use crate::marketing::{campaign_roi, CampaignRoi};
use crate::operations::{delivery_performance, stockout_rates, DeliveryPerformance, StockoutRate};
use crate::summary::{summarize_promo_vs_normal, PromoSummary};
use crate::trends::{
    monthly_growth, region_performance, yearly_sales, MonthlyGrowth, RegionPerformance,
    YearlySales,
};

/// Inputs for one render cycle. Operational tables are optional.
#[derive(Debug, Clone, Copy)]
pub struct ReportInputs<'a> {
    pub sales: &'a [SaleRecord],
    pub promotions: &'a [PromotionWindow],
    pub campaigns: Option<&'a [Campaign]>,
    pub inventory: Option<&'a [InventoryItem]>,
    pub shipments: Option<&'a [Shipment]>,
}

impl<'a> ReportInputs<'a> {
    #[must_use]
    pub fn new(sales: &'a [SaleRecord], promotions: &'a [PromotionWindow]) -> Self {
        Self {
            sales,
            promotions,
            campaigns: None,
            inventory: None,
            shipments: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardReport {
    pub region_performance: Vec<RegionPerformance>,
    pub yearly_sales: Vec<YearlySales>,
    pub monthly_growth: Vec<MonthlyGrowth>,
    pub promo_summary: PromoSummary,
    pub daily_uplift: DailyUplift,
    pub category_lift: Vec<CategoryLift>,
    pub campaign_roi: Option<Vec<CampaignRoi>>,
    pub stockout_rates: Option<Vec<StockoutRate>>,
    pub delivery_performance: Option<Vec<DeliveryPerformance>>,
}

impl DashboardReport {
    /// Runs every analysis over `inputs`.
    #[must_use]
    pub fn build(inputs: &ReportInputs<'_>, growth_clip_pct: Decimal) -> Self {
        tracing::info!(
            "Building report over {} sales and {} promotion windows",
            inputs.sales.len(),
            inputs.promotions.len()
        );

        let attributed = attribute(inputs.sales, inputs.promotions);
        let baselines = region_baselines(inputs.sales);

        Self {
            region_performance: region_performance(inputs.sales),
            yearly_sales: yearly_sales(inputs.sales),
            monthly_growth: monthly_growth(inputs.sales, growth_clip_pct),
            promo_summary: summarize_promo_vs_normal(&attributed),
            daily_uplift: daily_uplift(inputs.sales, inputs.promotions),
            category_lift: category_lift(inputs.sales, inputs.promotions, &baselines),
            campaign_roi: inputs
                .campaigns
                .map(|campaigns| campaign_roi(inputs.sales, campaigns)),
            stockout_rates: inputs.inventory.map(stockout_rates),
            delivery_performance: inputs.shipments.map(delivery_performance),
        }
    }
}
