//! Stockouts and delivery performance.

use promo_lift_core::ratio::{mean, pct_of};
use promo_lift_core::{InventoryItem, RegionKey, Shipment};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockoutRate {
    pub product_category: String,
    pub total_products: u64,
    pub products_in_stockout: u64,
    pub stockout_rate_pct: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryPerformance {
    pub destination_region: RegionKey,
    pub shipping_method: String,
    pub shipments: u64,
    pub avg_delivery_days: Decimal,
    pub avg_shipping_cost: Decimal,
    pub total_returns: u64,
    pub return_rate_pct: Decimal,
}

/// Share of products at or below their reorder point, per category.
///
/// Sorted by rate descending, then category.
#[must_use]
pub fn stockout_rates(inventory: &[InventoryItem]) -> Vec<StockoutRate> {
    let mut per_category: BTreeMap<&str, (u64, u64)> = BTreeMap::new();
    for item in inventory {
        let (total, out) = per_category
            .entry(item.product_category.trim())
            .or_insert((0, 0));
        *total += 1;
        if item.is_stockout() {
            *out += 1;
        }
    }

    let mut rows: Vec<StockoutRate> = per_category
        .into_iter()
        .map(|(category, (total, out))| StockoutRate {
            product_category: category.to_string(),
            total_products: total,
            products_in_stockout: out,
            stockout_rate_pct: pct_of(Decimal::from(out), Decimal::from(total)),
        })
        .collect();

    rows.sort_by(|a, b| {
        b.stockout_rate_pct
            .cmp(&a.stockout_rate_pct)
            .then_with(|| a.product_category.cmp(&b.product_category))
    });
    rows
}

#[derive(Default)]
struct RouteBucket {
    durations: Vec<Decimal>,
    costs: Vec<Decimal>,
    returns: u64,
}

/// Planned delivery time, cost and return rate per region and shipping method.
///
/// Sorted by return rate descending, then region and method.
#[must_use]
pub fn delivery_performance(shipments: &[Shipment]) -> Vec<DeliveryPerformance> {
    let mut per_route: BTreeMap<(RegionKey, &str), RouteBucket> = BTreeMap::new();
    for shipment in shipments {
        let bucket = per_route
            .entry((
                RegionKey::new(&shipment.destination_region),
                shipment.shipping_method.trim(),
            ))
            .or_default();
        bucket
            .durations
            .push(Decimal::from(shipment.planned_duration_days()));
        bucket.costs.push(shipment.shipping_cost);
        if shipment.is_returned() {
            bucket.returns += 1;
        }
    }

    let mut rows: Vec<DeliveryPerformance> = per_route
        .into_iter()
        .map(|((region, method), bucket)| {
            let shipments = bucket.costs.len() as u64;
            DeliveryPerformance {
                destination_region: region,
                shipping_method: method.to_string(),
                shipments,
                avg_delivery_days: mean(bucket.durations),
                avg_shipping_cost: mean(bucket.costs),
                total_returns: bucket.returns,
                return_rate_pct: pct_of(Decimal::from(bucket.returns), Decimal::from(shipments)),
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.return_rate_pct
            .cmp(&a.return_rate_pct)
            .then_with(|| a.destination_region.cmp(&b.destination_region))
            .then_with(|| a.shipping_method.cmp(&b.shipping_method))
    });
    rows
}
