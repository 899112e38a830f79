//! Average daily sales during promo vs normal periods.
//!
//! Sales are first totalled per `(day, region)`. Each day-region total is then
//! left-joined against the promotion windows of its region: it yields one
//! promo row per covering window, or a single normal row when no window
//! covers the day.

use chrono::NaiveDate;
use promo_lift_core::{PromotionWindow, RegionKey, SaleRecord};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::summary::{uplift_pct, Stats, StatsAccumulator};
use crate::window_join::PromotionIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyUplift {
    /// Statistics over promo day-region totals
    pub promo_days: Stats,
    /// Statistics over normal day-region totals
    pub normal_days: Stats,
    pub uplift_pct: Decimal,
}

/// Sales total per `(day, normalized region)`.
#[must_use]
pub fn daily_region_totals(sales: &[SaleRecord]) -> BTreeMap<(NaiveDate, RegionKey), Decimal> {
    let mut totals: BTreeMap<(NaiveDate, RegionKey), Decimal> = BTreeMap::new();
    for sale in sales {
        *totals
            .entry((sale.transaction_date, sale.region_key()))
            .or_insert(Decimal::ZERO) += sale.amount;
    }
    totals
}

#[must_use]
pub fn daily_uplift(sales: &[SaleRecord], promotions: &[PromotionWindow]) -> DailyUplift {
    let index = PromotionIndex::new(promotions);
    let totals = daily_region_totals(sales);

    let mut promo = StatsAccumulator::default();
    let mut normal = StatsAccumulator::default();

    for ((day, region), total) in &totals {
        let covering = index.matching(region, *day).count();
        if covering == 0 {
            normal.add(*total);
        } else {
            for _ in 0..covering {
                promo.add(*total);
            }
        }
    }

    let promo_days = promo.finish();
    let normal_days = normal.finish();

    tracing::debug!(
        "Daily uplift over {} day-region totals: {} promo rows, {} normal rows",
        totals.len(),
        promo_days.count,
        normal_days.count
    );

    DailyUplift {
        uplift_pct: uplift_pct(&promo_days, &normal_days),
        promo_days,
        normal_days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sale(id: &str, region: &str, day: NaiveDate, amount: Decimal) -> SaleRecord {
        SaleRecord::new(id, region, day, amount, "Drinks").unwrap()
    }

    #[test]
    fn test_sales_are_totalled_per_day_and_region() {
        let sales = vec![
            sale("T-1", "East", date(2024, 1, 10), dec!(30)),
            sale("T-2", "east ", date(2024, 1, 10), dec!(70)),
            sale("T-3", "West", date(2024, 1, 10), dec!(5)),
        ];
        let totals = daily_region_totals(&sales);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[&(date(2024, 1, 10), RegionKey::new("EAST"))], dec!(100));
    }

    #[test]
    fn test_daily_uplift() {
        let sales = vec![
            sale("T-1", "East", date(2024, 1, 10), dec!(60)),
            sale("T-2", "East", date(2024, 1, 10), dec!(60)),
            sale("T-3", "East", date(2024, 2, 10), dec!(40)),
            sale("T-4", "East", date(2024, 2, 11), dec!(80)),
        ];
        let promotions =
            vec![PromotionWindow::new("P-1", "East", date(2024, 1, 1), date(2024, 1, 31), None)
                .unwrap()];

        let result = daily_uplift(&sales, &promotions);
        assert_eq!(result.promo_days.count, 1);
        assert_eq!(result.promo_days.average_amount, dec!(120));
        assert_eq!(result.normal_days.average_amount, dec!(60));
        assert_eq!(result.uplift_pct, dec!(100));
    }

    #[test]
    fn test_day_in_two_windows_is_counted_per_window() {
        let sales = vec![
            sale("T-1", "East", date(2024, 1, 15), dec!(100)),
            sale("T-2", "East", date(2024, 1, 5), dec!(40)),
        ];
        let promotions = vec![
            PromotionWindow::new("P-1", "East", date(2024, 1, 1), date(2024, 1, 31), None).unwrap(),
            PromotionWindow::new("P-2", "East", date(2024, 1, 10), date(2024, 1, 20), None)
                .unwrap(),
        ];

        let result = daily_uplift(&sales, &promotions);
        assert_eq!(result.promo_days.count, 3);
        assert_eq!(result.promo_days.total_amount, dec!(240));
        assert_eq!(result.normal_days.count, 0);
        assert_eq!(result.uplift_pct, Decimal::ZERO);
    }
}
