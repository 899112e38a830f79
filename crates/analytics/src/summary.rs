//! Promo vs normal bucket statistics and uplift.

use promo_lift_core::ratio::{pct_change, safe_div};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::attribution::{AttributedSale, Situation};

/// Count, total and mean of a bucket of amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Stats {
    pub count: u64,
    pub total_amount: Decimal,
    /// `total_amount / count`, zero for an empty bucket
    pub average_amount: Decimal,
}

impl Stats {
    pub fn from_amounts<I>(amounts: I) -> Self
    where
        I: IntoIterator<Item = Decimal>,
    {
        let mut accumulator = StatsAccumulator::default();
        for amount in amounts {
            accumulator.add(amount);
        }
        accumulator.finish()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Running count and total for one bucket.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsAccumulator {
    count: u64,
    total: Decimal,
}

impl StatsAccumulator {
    pub fn add(&mut self, amount: Decimal) {
        self.count += 1;
        self.total += amount;
    }

    #[must_use]
    pub fn finish(&self) -> Stats {
        Stats {
            count: self.count,
            total_amount: self.total,
            average_amount: safe_div(self.total, Decimal::from(self.count)),
        }
    }
}

/// Uplift of a promo average over a normal average, in percent.
///
/// Zero when the promo bucket is empty or the normal average is zero: an
/// absent or zero baseline reads as "no observable effect".
#[must_use]
pub fn uplift_pct(promo: &Stats, normal: &Stats) -> Decimal {
    if promo.is_empty() {
        return Decimal::ZERO;
    }
    pct_change(promo.average_amount, normal.average_amount)
}

/// Promo and normal buckets side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PromoSummary {
    pub promo: Stats,
    pub non_promo: Stats,
    pub uplift_pct: Decimal,
}

impl PromoSummary {
    #[must_use]
    pub fn stats(&self, situation: Situation) -> &Stats {
        match situation {
            Situation::Promo => &self.promo,
            Situation::NonPromo => &self.non_promo,
        }
    }
}

/// Splits attributed sales into promo/non-promo buckets and computes uplift.
#[must_use]
pub fn summarize_promo_vs_normal(attributed: &[AttributedSale<'_>]) -> PromoSummary {
    let mut promo = StatsAccumulator::default();
    let mut non_promo = StatsAccumulator::default();

    for entry in attributed {
        match entry.situation {
            Situation::Promo => promo.add(entry.sale.amount),
            Situation::NonPromo => non_promo.add(entry.sale.amount),
        }
    }

    let promo = promo.finish();
    let non_promo = non_promo.finish();

    PromoSummary {
        uplift_pct: uplift_pct(&promo, &non_promo),
        promo,
        non_promo,
    }
}
