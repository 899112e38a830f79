//! Inventory snapshots.

use serde::{Deserialize, Serialize};

use super::fields::{required, required_text};
use crate::error::{AnalyticsError, RecordKind, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRow {
    pub product_id: Option<String>,
    pub product_category: Option<String>,
    pub current_stock: Option<i64>,
    pub reorder_point: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub product_id: String,
    pub product_category: String,
    pub current_stock: i64,
    pub reorder_point: i64,
}

impl InventoryItem {
    /// Stock at or below the reorder point counts as a stockout.
    #[must_use]
    pub fn is_stockout(&self) -> bool {
        self.current_stock <= self.reorder_point
    }
}

impl TryFrom<InventoryRow> for InventoryItem {
    type Error = AnalyticsError;

    fn try_from(row: InventoryRow) -> Result<Self> {
        const KIND: RecordKind = RecordKind::Inventory;

        let product_id = required_text(row.product_id, KIND, None, "product_id")?;
        let id = Some(product_id.as_str());
        Ok(Self {
            product_category: required_text(row.product_category, KIND, id, "product_category")?,
            current_stock: required(row.current_stock, KIND, id, "current_stock")?,
            reorder_point: required(row.reorder_point, KIND, id, "reorder_point")?,
            product_id,
        })
    }
}
