//! Sales volume by region, year and month.

use chrono::{Datelike, NaiveDate};
use promo_lift_core::ratio::{clip_symmetric, pct_change};
use promo_lift_core::{RegionKey, SaleRecord};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::summary::StatsAccumulator;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionPerformance {
    pub region: RegionKey,
    pub total_sales: Decimal,
    pub transactions: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearlySales {
    pub year: i32,
    pub sales_count: u64,
    pub total_amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyGrowth {
    /// First day of the month
    pub month: NaiveDate,
    pub region: RegionKey,
    pub total_amount: Decimal,
    pub sales_count: u64,
    /// Change against the region's previous month with sales; `None` for its first month
    pub growth_pct: Option<Decimal>,
    /// `growth_pct` clamped into the configured band
    pub growth_pct_clipped: Option<Decimal>,
}

/// Total and count per region, largest total first.
#[must_use]
pub fn region_performance(sales: &[SaleRecord]) -> Vec<RegionPerformance> {
    let mut per_region: BTreeMap<RegionKey, StatsAccumulator> = BTreeMap::new();
    for sale in sales {
        per_region
            .entry(sale.region_key())
            .or_default()
            .add(sale.amount);
    }

    let mut rows: Vec<RegionPerformance> = per_region
        .into_iter()
        .map(|(region, acc)| {
            let stats = acc.finish();
            RegionPerformance {
                region,
                total_sales: stats.total_amount,
                transactions: stats.count,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.total_sales
            .cmp(&a.total_sales)
            .then_with(|| a.region.cmp(&b.region))
    });
    rows
}

/// Count and total per calendar year, oldest first.
#[must_use]
pub fn yearly_sales(sales: &[SaleRecord]) -> Vec<YearlySales> {
    let mut per_year: BTreeMap<i32, StatsAccumulator> = BTreeMap::new();
    for sale in sales {
        per_year
            .entry(sale.transaction_date.year())
            .or_default()
            .add(sale.amount);
    }

    per_year
        .into_iter()
        .map(|(year, acc)| {
            let stats = acc.finish();
            YearlySales {
                year,
                sales_count: stats.count,
                total_amount: stats.total_amount,
            }
        })
        .collect()
}

fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Monthly totals per region with month-over-month growth.
///
/// Growth compares against the previous month *with sales* in the same
/// region, which may be more than one calendar month back. Rows are sorted
/// by month, then region.
#[must_use]
pub fn monthly_growth(sales: &[SaleRecord], clip_pct: Decimal) -> Vec<MonthlyGrowth> {
    let mut per_region_month: BTreeMap<(RegionKey, NaiveDate), StatsAccumulator> = BTreeMap::new();
    for sale in sales {
        per_region_month
            .entry((sale.region_key(), month_start(sale.transaction_date)))
            .or_default()
            .add(sale.amount);
    }

    let mut rows = Vec::with_capacity(per_region_month.len());
    let mut previous: Option<(RegionKey, Decimal)> = None;

    // Keys are ordered by region then month, so the previous entry is the
    // lag within the region whenever the regions agree.
    for ((region, month), acc) in per_region_month {
        let stats = acc.finish();
        let growth_pct = match &previous {
            Some((prev_region, prev_total)) if *prev_region == region => {
                Some(pct_change(stats.total_amount, *prev_total))
            }
            _ => None,
        };

        previous = Some((region.clone(), stats.total_amount));
        rows.push(MonthlyGrowth {
            month,
            region,
            total_amount: stats.total_amount,
            sales_count: stats.count,
            growth_pct,
            growth_pct_clipped: growth_pct.map(|g| clip_symmetric(g, clip_pct)),
        });
    }

    rows.sort_by(|a, b| a.month.cmp(&b.month).then_with(|| a.region.cmp(&b.region)));
    rows
}

/// Rows of `monthly_growth` for one region, oldest first.
#[must_use]
pub fn growth_for_region<'a>(rows: &'a [MonthlyGrowth], region: &RegionKey) -> Vec<&'a MonthlyGrowth> {
    rows.iter().filter(|row| &row.region == region).collect()
}
