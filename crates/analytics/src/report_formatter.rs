#![allow(clippy::format_push_string)]
#![allow(clippy::uninlined_format_args)]

use rust_decimal::Decimal;

use crate::daily::DailyUplift;
use crate::lift::CategoryLift;
use crate::marketing::CampaignRoi;
use crate::operations::{DeliveryPerformance, StockoutRate};
use crate::report::DashboardReport;
use crate::summary::PromoSummary;
use crate::trends::{MonthlyGrowth, RegionPerformance, YearlySales};

const HEAVY_RULE: &str = "═══════════════════════════════════════════════════════════════\n";
const LIGHT_RULE: &str = "───────────────────────────────────────────────────────────────\n";

fn signed_pct(value: Decimal, places: usize) -> String {
    if value >= Decimal::ZERO {
        format!("+{:.*}%", places, value)
    } else {
        format!("{:.*}%", places, value)
    }
}

fn section(output: &mut String, title: &str) {
    output.push_str(title);
    output.push('\n');
    output.push_str(LIGHT_RULE);
}

pub struct ReportFormatter;

impl ReportFormatter {
    #[must_use]
    pub fn format_promo_summary(summary: &PromoSummary) -> String {
        let mut output = String::new();
        section(&mut output, "Sales with vs without promotion");
        output.push_str(&format!(
            "{:<16} {:>10} {:>16} {:>14}\n",
            "Situation", "Sales", "Revenue", "Avg basket"
        ));
        for (label, stats) in [("Promo", &summary.promo), ("Normal", &summary.non_promo)] {
            output.push_str(&format!(
                "{:<16} {:>10} {:>16.2} {:>14.2}\n",
                label, stats.count, stats.total_amount, stats.average_amount
            ));
        }
        output.push_str(&format!(
            "Uplift:                {}\n",
            signed_pct(summary.uplift_pct, 1)
        ));
        output
    }

    #[must_use]
    pub fn format_daily_uplift(daily: &DailyUplift) -> String {
        let mut output = String::new();
        section(&mut output, "Average daily sales: promo vs normal");
        output.push_str(&format!(
            "Promo days:            {:.2} ({} day-region rows)\n",
            daily.promo_days.average_amount, daily.promo_days.count
        ));
        output.push_str(&format!(
            "Normal days:           {:.2} ({} day-region rows)\n",
            daily.normal_days.average_amount, daily.normal_days.count
        ));
        output.push_str(&format!(
            "Boost (uplift):        {}\n",
            signed_pct(daily.uplift_pct, 1)
        ));
        output
    }

    #[must_use]
    pub fn format_category_lift(rows: &[CategoryLift]) -> String {
        let mut output = String::new();
        section(&mut output, "Category sensitivity to promotions (lift)");
        if rows.is_empty() {
            output.push_str("No sale falls inside a promotion window.\n");
            return output;
        }
        output.push_str(&format!(
            "{:<20} {:>12} {:>12} {:>10} {:>10}\n",
            "Category", "Promo avg", "Baseline", "Lift", "Level"
        ));
        for row in rows {
            output.push_str(&format!(
                "{:<20} {:>12.2} {:>12.2} {:>10} {:>10}\n",
                row.category,
                row.avg_in_promo,
                row.avg_region_baseline,
                signed_pct(row.lift_pct, 2),
                row.sensitivity
            ));
        }
        output
    }

    #[must_use]
    pub fn format_region_performance(rows: &[RegionPerformance]) -> String {
        let mut output = String::new();
        section(&mut output, "Revenue by region");
        let total: Decimal = rows.iter().map(|r| r.total_sales).sum();
        let transactions: u64 = rows.iter().map(|r| r.transactions).sum();
        for row in rows {
            output.push_str(&format!(
                "{:<20} {:>16.2} {:>10}\n",
                row.region.as_str(),
                row.total_sales,
                row.transactions
            ));
        }
        output.push_str(&format!(
            "Total revenue:         {:.2} ({} transactions)\n",
            total, transactions
        ));
        output
    }

    #[must_use]
    pub fn format_yearly_sales(rows: &[YearlySales]) -> String {
        let mut output = String::new();
        section(&mut output, "Yearly sales");
        for row in rows {
            output.push_str(&format!(
                "{:<8} {:>10} {:>16.2}\n",
                row.year, row.sales_count, row.total_amount
            ));
        }
        output
    }

    #[must_use]
    pub fn format_monthly_growth(rows: &[MonthlyGrowth]) -> String {
        let mut output = String::new();
        section(&mut output, "Monthly revenue growth by region (clipped)");
        for row in rows {
            let growth = row
                .growth_pct_clipped
                .map_or_else(|| "n/a".to_string(), |g| signed_pct(g, 1));
            output.push_str(&format!(
                "{} {:<16} {:>16.2} {:>10}\n",
                row.month.format("%Y-%m"),
                row.region.as_str(),
                row.total_amount,
                growth
            ));
        }
        output
    }

    #[must_use]
    pub fn format_campaign_roi(rows: &[CampaignRoi]) -> String {
        let mut output = String::new();
        section(&mut output, "ROI by campaign type");
        output.push_str(&format!(
            "{:<20} {:>10} {:>10} {:>12}\n",
            "Campaign type", "Conv %", "ROI", "Avg basket"
        ));
        for row in rows {
            output.push_str(&format!(
                "{:<20} {:>10.2} {:>10.4} {:>12.2}\n",
                row.campaign_type, row.avg_conversion_pct, row.roi, row.avg_basket
            ));
        }
        output
    }

    /// Shows only the `top_n` worst categories.
    #[must_use]
    pub fn format_stockout_rates(rows: &[StockoutRate], top_n: usize) -> String {
        let mut output = String::new();
        section(&mut output, "Stockout rate by category");
        for row in rows.iter().take(top_n) {
            output.push_str(&format!(
                "{:<20} {:>6}/{:<6} {:>8.2}%\n",
                row.product_category,
                row.products_in_stockout,
                row.total_products,
                row.stockout_rate_pct
            ));
        }
        output
    }

    /// Shows only the `top_n` routes with the highest return rate.
    #[must_use]
    pub fn format_delivery_performance(rows: &[DeliveryPerformance], top_n: usize) -> String {
        let mut output = String::new();
        section(&mut output, "Delivery times and returns");
        output.push_str(&format!(
            "{:<14} {:<12} {:>8} {:>10} {:>8} {:>10}\n",
            "Region", "Method", "Days", "Cost", "Returns", "Rate"
        ));
        for row in rows.iter().take(top_n) {
            output.push_str(&format!(
                "{:<14} {:<12} {:>8.2} {:>10.2} {:>8} {:>9.2}%\n",
                row.destination_region.as_str(),
                row.shipping_method,
                row.avg_delivery_days,
                row.avg_shipping_cost,
                row.total_returns,
                row.return_rate_pct
            ));
        }
        output
    }

    #[must_use]
    pub fn format(report: &DashboardReport, top_n: usize) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str(HEAVY_RULE);
        output.push_str("                 PROMOTION & SALES REPORT                      \n");
        output.push_str(HEAVY_RULE);
        output.push('\n');

        let mut blocks = vec![
            Self::format_region_performance(&report.region_performance),
            Self::format_yearly_sales(&report.yearly_sales),
            Self::format_monthly_growth(&report.monthly_growth),
            Self::format_promo_summary(&report.promo_summary),
            Self::format_daily_uplift(&report.daily_uplift),
            Self::format_category_lift(&report.category_lift),
        ];
        if let Some(rows) = &report.campaign_roi {
            blocks.push(Self::format_campaign_roi(rows));
        }
        if let Some(rows) = &report.stockout_rates {
            blocks.push(Self::format_stockout_rates(rows, top_n));
        }
        if let Some(rows) = &report.delivery_performance {
            blocks.push(Self::format_delivery_performance(rows, top_n));
        }

        output.push_str(&blocks.join("\n"));
        output.push('\n');
        output.push_str(HEAVY_RULE);

        if report.promo_summary.promo.count == 0 {
            output.push_str("\n⚠️  No sale matched a promotion window.\n");
            output.push_str("    Check that promotion regions and dates overlap the sales data.\n\n");
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lift::Sensitivity;
    use crate::summary::Stats;
    use rust_decimal_macros::dec;

    #[test]
    fn test_signed_pct() {
        assert_eq!(signed_pct(dec!(100), 1), "+100.0%");
        assert_eq!(signed_pct(dec!(-2.25), 2), "-2.25%");
        assert_eq!(signed_pct(Decimal::ZERO, 1), "+0.0%");
    }

    #[test]
    fn test_promo_summary_block() {
        let summary = PromoSummary {
            promo: Stats::from_amounts(vec![dec!(100)]),
            non_promo: Stats::from_amounts(vec![dec!(50)]),
            uplift_pct: dec!(100),
        };
        let text = ReportFormatter::format_promo_summary(&summary);
        assert!(text.contains("Uplift:                +100.0%"));
        assert!(text.contains("100.00"));
    }

    #[test]
    fn test_category_lift_block() {
        let rows = vec![CategoryLift {
            category: "Drinks".to_string(),
            avg_in_promo: dec!(80),
            avg_region_baseline: dec!(50),
            lift_pct: dec!(60),
            sensitivity: Sensitivity::Strong,
            promo_pairs: 3,
            regions: 1,
        }];
        let text = ReportFormatter::format_category_lift(&rows);
        assert!(text.contains("Drinks"));
        assert!(text.contains("+60.00%"));
        assert!(text.contains("Forte"));

        let empty = ReportFormatter::format_category_lift(&[]);
        assert!(empty.contains("No sale falls inside a promotion window."));
    }
}
