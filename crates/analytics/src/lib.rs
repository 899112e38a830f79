//! Promotion attribution and sales analytics.
//!
//! Every analysis is a pure function over already-fetched records: no
//! connection handles, no global state. Joins between sales and dated
//! windows (promotions, campaigns) go through [`window_join`], and every
//! ratio uses the null-safe helpers of `promo_lift_core::ratio`.

pub mod attribution;
pub mod daily;
pub mod lift;
pub mod marketing;
pub mod operations;
pub mod report;
pub mod report_formatter;
pub mod summary;
pub mod trends;
pub mod window_join;

pub use attribution::{attribute, AttributedSale, Situation};
pub use daily::{daily_region_totals, daily_uplift, DailyUplift};
pub use lift::{category_lift, region_baselines, CategoryLift, Sensitivity};
pub use marketing::{campaign_roi, CampaignRoi};
pub use operations::{delivery_performance, stockout_rates, DeliveryPerformance, StockoutRate};
pub use report::{DashboardReport, ReportInputs};
pub use report_formatter::ReportFormatter;
pub use summary::{summarize_promo_vs_normal, uplift_pct, PromoSummary, Stats};
pub use trends::{
    growth_for_region, monthly_growth, region_performance, yearly_sales, MonthlyGrowth,
    RegionPerformance, YearlySales,
};
pub use window_join::{CampaignIndex, DatedWindow, PromotionIndex, WindowIndex};
