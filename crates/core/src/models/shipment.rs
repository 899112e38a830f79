//! Shipments and delivery status.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::fields::{required, required_text};
use crate::error::{AnalyticsError, RecordKind, Result};

/// Status value marking a returned shipment.
pub const RETURNED_STATUS: &str = "Returned";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipmentRow {
    pub shipment_id: Option<String>,
    pub order_id: Option<String>,
    pub destination_region: Option<String>,
    pub shipping_method: Option<String>,
    pub ship_date: Option<NaiveDate>,
    pub estimated_delivery: Option<NaiveDate>,
    pub status: Option<String>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub shipping_cost: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    pub shipment_id: String,
    pub order_id: Option<String>,
    pub destination_region: String,
    pub shipping_method: String,
    pub ship_date: NaiveDate,
    pub estimated_delivery: NaiveDate,
    pub status: String,
    pub shipping_cost: Decimal,
}

impl Shipment {
    /// Planned transit time in days (may be negative for bad source data).
    #[must_use]
    pub fn planned_duration_days(&self) -> i64 {
        (self.estimated_delivery - self.ship_date).num_days()
    }

    #[must_use]
    pub fn is_returned(&self) -> bool {
        self.status == RETURNED_STATUS
    }
}

impl TryFrom<ShipmentRow> for Shipment {
    type Error = AnalyticsError;

    fn try_from(row: ShipmentRow) -> Result<Self> {
        const KIND: RecordKind = RecordKind::Shipment;

        let shipment_id = required_text(row.shipment_id, KIND, None, "shipment_id")?;
        let id = Some(shipment_id.as_str());
        Ok(Self {
            order_id: row.order_id,
            destination_region: required_text(
                row.destination_region,
                KIND,
                id,
                "destination_region",
            )?,
            shipping_method: required_text(row.shipping_method, KIND, id, "shipping_method")?,
            ship_date: required(row.ship_date, KIND, id, "ship_date")?,
            estimated_delivery: required(row.estimated_delivery, KIND, id, "estimated_delivery")?,
            status: required_text(row.status, KIND, id, "status")?,
            shipping_cost: required(row.shipping_cost, KIND, id, "shipping_cost")?,
            shipment_id,
        })
    }
}
