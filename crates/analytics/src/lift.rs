//! Category sensitivity to promotions.
//!
//! Unlike attribution, the lift join keeps every `(sale, window)` pair: a sale
//! covered by two windows of its region counts twice in the category's promo
//! average. The baseline a category is compared against is the mean of the
//! overall average basket of each region that contributed promo pairs to it.
//!
//! `avg_in_promo` is pooled over pairs, not a mean of per-region promo
//! averages: pooling is what makes each extra covering window weigh in.
//!
//! Categories are grouped case-insensitively, matching how scoped windows
//! compare categories. A row is labelled with the first spelling seen.

use promo_lift_core::ratio::{mean, pct_change};
use promo_lift_core::{PromotionWindow, RegionKey, SaleRecord};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::summary::StatsAccumulator;
use crate::window_join::PromotionIndex;

/// Lift above this percentage is strong.
const STRONG_LIFT_PCT: Decimal = dec!(5);

/// How strongly a category responds to promotions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sensitivity {
    /// Lift above 5%
    #[serde(rename = "Forte")]
    Strong,
    /// Lift between 0% and 5% inclusive
    #[serde(rename = "Modérée")]
    Moderate,
    /// Lift below 0%
    #[serde(rename = "Négative")]
    Negative,
}

impl Sensitivity {
    #[must_use]
    pub fn from_lift_pct(lift_pct: Decimal) -> Self {
        if lift_pct > STRONG_LIFT_PCT {
            Sensitivity::Strong
        } else if lift_pct >= Decimal::ZERO {
            Sensitivity::Moderate
        } else {
            Sensitivity::Negative
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Sensitivity::Strong => "Forte",
            Sensitivity::Moderate => "Modérée",
            Sensitivity::Negative => "Négative",
        }
    }
}

impl std::fmt::Display for Sensitivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

/// One row of the category lift table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryLift {
    pub category: String,
    /// Mean amount over every matching `(sale, window)` pair
    pub avg_in_promo: Decimal,
    /// Mean of the per-region overall averages of the contributing regions
    pub avg_region_baseline: Decimal,
    pub lift_pct: Decimal,
    pub sensitivity: Sensitivity,
    /// Number of `(sale, window)` pairs behind `avg_in_promo`
    pub promo_pairs: u64,
    /// Number of regions behind `avg_region_baseline`
    pub regions: usize,
}

/// Overall average sale amount per normalized region, regardless of promotion
/// status or category.
#[must_use]
pub fn region_baselines(sales: &[SaleRecord]) -> BTreeMap<RegionKey, Decimal> {
    let mut per_region: BTreeMap<RegionKey, StatsAccumulator> = BTreeMap::new();
    for sale in sales {
        per_region
            .entry(sale.region_key())
            .or_default()
            .add(sale.amount);
    }

    per_region
        .into_iter()
        .map(|(region, acc)| (region, acc.finish().average_amount))
        .collect()
}

struct CategoryBucket<'a> {
    name: &'a str,
    promo: StatsAccumulator,
    regions: BTreeSet<RegionKey>,
}

fn category_key(category: &str) -> String {
    category.trim().to_ascii_lowercase()
}

/// Computes per-category lift against region-normalized baselines.
///
/// A pair contributes when the sale and window share a normalized region, the
/// window covers the sale date, and the window's category (if any) matches
/// the sale's category. Categories with no pair are absent from the output.
/// Rows are sorted by `lift_pct` descending, then category name.
#[must_use]
pub fn category_lift(
    sales: &[SaleRecord],
    promotions: &[PromotionWindow],
    baselines: &BTreeMap<RegionKey, Decimal>,
) -> Vec<CategoryLift> {
    let index = PromotionIndex::new(promotions);
    let mut buckets: BTreeMap<String, CategoryBucket<'_>> = BTreeMap::new();

    for sale in sales {
        let region = sale.region_key();
        let category = sale.product_category.trim();

        for _window in index
            .matching(&region, sale.transaction_date)
            .filter(|window| window.applies_to_category(category))
        {
            let bucket = buckets
                .entry(category_key(category))
                .or_insert_with(|| CategoryBucket {
                    name: category,
                    promo: StatsAccumulator::default(),
                    regions: BTreeSet::new(),
                });
            bucket.promo.add(sale.amount);
            bucket.regions.insert(region.clone());
        }
    }

    let mut rows: Vec<CategoryLift> = buckets
        .into_values()
        .map(|bucket| {
            let category = bucket.name;
            let region_averages: Vec<Decimal> = bucket
                .regions
                .iter()
                .filter_map(|region| {
                    let baseline = baselines.get(region).copied();
                    if baseline.is_none() {
                        tracing::warn!(
                            "No baseline for region {} in category {}, excluded from baseline",
                            region,
                            category
                        );
                    }
                    baseline
                })
                .collect();

            let promo = bucket.promo.finish();
            let avg_region_baseline = mean(region_averages.iter().copied());
            let lift_pct = pct_change(promo.average_amount, avg_region_baseline);

            CategoryLift {
                category: category.to_string(),
                avg_in_promo: promo.average_amount,
                avg_region_baseline,
                lift_pct,
                sensitivity: Sensitivity::from_lift_pct(lift_pct),
                promo_pairs: promo.count,
                regions: region_averages.len(),
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.lift_pct
            .cmp(&a.lift_pct)
            .then_with(|| a.category.cmp(&b.category))
    });

    tracing::debug!("Computed lift for {} categories", rows.len());
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sale(id: &str, region: &str, day: NaiveDate, amount: Decimal, category: &str) -> SaleRecord {
        SaleRecord::new(id, region, day, amount, category).unwrap()
    }

    fn promo(
        id: &str,
        region: &str,
        start: NaiveDate,
        end: NaiveDate,
        category: Option<&str>,
    ) -> PromotionWindow {
        PromotionWindow::new(id, region, start, end, category.map(str::to_string)).unwrap()
    }

    #[test]
    fn test_sensitivity_boundaries() {
        assert_eq!(Sensitivity::from_lift_pct(dec!(5.0)), Sensitivity::Moderate);
        assert_eq!(Sensitivity::from_lift_pct(dec!(5.0001)), Sensitivity::Strong);
        assert_eq!(Sensitivity::from_lift_pct(dec!(-0.01)), Sensitivity::Negative);
        assert_eq!(Sensitivity::from_lift_pct(Decimal::ZERO), Sensitivity::Moderate);
    }

    #[test]
    fn test_sensitivity_labels() {
        assert_eq!(Sensitivity::Strong.to_string(), "Forte");
        assert_eq!(
            serde_json::to_string(&Sensitivity::Moderate).unwrap(),
            "\"Modérée\""
        );
        assert_eq!(Sensitivity::Negative.label(), "Négative");
    }

    #[test]
    fn test_region_baselines_use_every_sale() {
        let sales = vec![
            sale("T-1", "East", date(2024, 1, 1), dec!(100), "Drinks"),
            sale("T-2", " east", date(2024, 2, 1), dec!(50), "Snacks"),
            sale("T-3", "West", date(2024, 1, 1), dec!(30), "Drinks"),
        ];
        let baselines = region_baselines(&sales);
        assert_eq!(baselines[&RegionKey::new("EAST")], dec!(75));
        assert_eq!(baselines[&RegionKey::new("west")], dec!(30));
    }

    #[test]
    fn test_overlapping_windows_count_each_pair() {
        // T-1 sits in both windows, T-2 only in the first.
        let sales = vec![
            sale("T-1", "East", date(2024, 1, 15), dec!(100), "Drinks"),
            sale("T-2", "East", date(2024, 1, 5), dec!(40), "Drinks"),
            sale("T-3", "East", date(2024, 3, 1), dec!(10), "Drinks"),
        ];
        let promotions = vec![
            promo("P-1", "East", date(2024, 1, 1), date(2024, 1, 31), None),
            promo("P-2", "East", date(2024, 1, 10), date(2024, 1, 20), None),
        ];
        let baselines = region_baselines(&sales);

        let rows = category_lift(&sales, &promotions, &baselines);
        assert_eq!(rows.len(), 1);
        let drinks = &rows[0];
        assert_eq!(drinks.promo_pairs, 3);
        // (100 + 100 + 40) / 3
        assert_eq!(drinks.avg_in_promo, dec!(80));
        // (100 + 40 + 10) / 3
        assert_eq!(drinks.avg_region_baseline, dec!(50));
        assert_eq!(drinks.lift_pct, dec!(60));
        assert_eq!(drinks.sensitivity, Sensitivity::Strong);
    }

    #[test]
    fn test_baseline_is_mean_of_region_means() {
        // East baseline 100 (one sale), West baseline 20 (avg of 10 and 30).
        let sales = vec![
            sale("E-1", "East", date(2024, 1, 10), dec!(100), "Drinks"),
            sale("W-1", "West", date(2024, 1, 10), dec!(10), "Drinks"),
            sale("W-2", "West", date(2024, 6, 10), dec!(30), "Snacks"),
        ];
        let promotions = vec![
            promo("P-E", "East", date(2024, 1, 1), date(2024, 1, 31), None),
            promo("P-W", "West", date(2024, 1, 1), date(2024, 1, 31), None),
        ];
        let baselines = region_baselines(&sales);

        let rows = category_lift(&sales, &promotions, &baselines);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category, "Drinks");
        assert_eq!(rows[0].regions, 2);
        assert_eq!(rows[0].avg_region_baseline, dec!(60));
        // pooled promo average: (100 + 10) / 2
        assert_eq!(rows[0].avg_in_promo, dec!(55));
        assert_eq!(rows[0].sensitivity, Sensitivity::Negative);
    }

    #[test]
    fn test_category_scoped_window_only_applies_to_its_category() {
        let sales = vec![
            sale("T-1", "East", date(2024, 1, 10), dec!(100), "Drinks"),
            sale("T-2", "East", date(2024, 1, 10), dec!(20), "Snacks"),
        ];
        let promotions = vec![promo(
            "P-1",
            "East",
            date(2024, 1, 1),
            date(2024, 1, 31),
            Some("drinks"),
        )];
        let baselines = region_baselines(&sales);

        let rows = category_lift(&sales, &promotions, &baselines);
        let categories: Vec<&str> = rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(categories, vec!["Drinks"]);
    }

    #[test]
    fn test_zero_baseline_gives_zero_lift() {
        let sales = vec![sale("T-1", "East", date(2024, 1, 10), Decimal::ZERO, "Drinks")];
        let promotions = vec![promo("P-1", "East", date(2024, 1, 1), date(2024, 1, 31), None)];
        let baselines = region_baselines(&sales);

        let rows = category_lift(&sales, &promotions, &baselines);
        assert_eq!(rows[0].lift_pct, Decimal::ZERO);
        assert_eq!(rows[0].sensitivity, Sensitivity::Moderate);
    }

    #[test]
    fn test_rows_sorted_by_lift_then_name() {
        let sales = vec![
            sale("T-1", "East", date(2024, 1, 10), dec!(100), "Bakery"),
            sale("T-2", "East", date(2024, 1, 10), dec!(100), "Anchovies"),
            sale("T-3", "East", date(2024, 1, 10), dec!(10), "Cheese"),
            sale("T-4", "East", date(2024, 1, 10), dec!(200), "Drinks"),
        ];
        let promotions = vec![promo("P-1", "East", date(2024, 1, 1), date(2024, 1, 31), None)];
        let baselines = region_baselines(&sales);

        let rows = category_lift(&sales, &promotions, &baselines);
        let order: Vec<&str> = rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(order, vec!["Drinks", "Anchovies", "Bakery", "Cheese"]);
    }

    #[test]
    fn test_missing_baseline_region_is_skipped() {
        let sales = vec![sale("T-1", "East", date(2024, 1, 10), dec!(100), "Drinks")];
        let promotions = vec![promo("P-1", "East", date(2024, 1, 1), date(2024, 1, 31), None)];

        let rows = category_lift(&sales, &promotions, &BTreeMap::new());
        assert_eq!(rows[0].regions, 0);
        assert_eq!(rows[0].avg_region_baseline, Decimal::ZERO);
        assert_eq!(rows[0].lift_pct, Decimal::ZERO);
    }

    #[test]
    fn test_category_case_variants_share_one_row() {
        let sales = vec![
            sale("T-1", "East", date(2024, 1, 10), dec!(100), "Drinks"),
            sale("T-2", "East", date(2024, 1, 11), dec!(20), "drinks "),
        ];
        let promotions = vec![promo(
            "P-1",
            "East",
            date(2024, 1, 1),
            date(2024, 1, 31),
            Some("Drinks"),
        )];
        let baselines = region_baselines(&sales);

        let rows = category_lift(&sales, &promotions, &baselines);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category, "Drinks");
        assert_eq!(rows[0].promo_pairs, 2);
        assert_eq!(rows[0].avg_in_promo, dec!(60));
    }
}
