//! Data sources feeding the analytics.
//!
//! The analytics never open a connection themselves; a [`DataSource`] hands
//! over validated collections for one render cycle.

use anyhow::{Context, Result};
use promo_lift_core::{
    AnalyticsError, Campaign, CampaignRow, DataConfig, InventoryItem, InventoryRow,
    PromotionRow, PromotionWindow, SaleRecord, SaleRow, Shipment, ShipmentRow,
};
use serde::de::DeserializeOwned;
use std::path::Path;

use crate::csv_storage::CsvStorage;

/// Supplies validated records. Optional tables return `None` when the source
/// does not carry them.
pub trait DataSource {
    /// Sale transactions only; other transaction types are dropped.
    fn sales(&self) -> Result<Vec<SaleRecord>>;
    fn promotions(&self) -> Result<Vec<PromotionWindow>>;
    fn campaigns(&self) -> Result<Option<Vec<Campaign>>>;
    fn inventory(&self) -> Result<Option<Vec<InventoryItem>>>;
    fn shipments(&self) -> Result<Option<Vec<Shipment>>>;
}

/// Validates raw rows, stopping at the first malformed one.
///
/// # Errors
/// Returns the [`AnalyticsError`] of the first invalid row, tagged with its
/// position.
pub fn validate_rows<R, T>(rows: Vec<R>) -> Result<Vec<T>>
where
    T: TryFrom<R, Error = AnalyticsError>,
{
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| {
            T::try_from(row).with_context(|| format!("Rejected record #{}", index + 1))
        })
        .collect()
}

/// Drops rows typed as something other than `Sale` and validates the rest.
///
/// Rows with a missing or blank `transaction_type` are kept, so they fail
/// validation instead of vanishing.
///
/// # Errors
/// Returns an error if a sale row is missing a required field.
pub fn validate_sales(rows: Vec<SaleRow>) -> Result<Vec<SaleRecord>> {
    let total = rows.len();
    let sale_rows: Vec<SaleRow> = rows
        .into_iter()
        .filter(|row| !row.is_other_transaction())
        .collect();
    let skipped = total - sale_rows.len();
    if skipped > 0 {
        tracing::debug!("Skipped {} non-sale transactions", skipped);
    }
    validate_rows(sale_rows)
}

/// Reads the CSV exports named in a [`DataConfig`].
#[derive(Debug, Clone)]
pub struct CsvDataSource {
    config: DataConfig,
}

impl CsvDataSource {
    #[must_use]
    pub fn new(config: DataConfig) -> Self {
        Self { config }
    }

    fn read_optional<R, T>(path: Option<&Path>, table: &str) -> Result<Option<Vec<T>>>
    where
        R: DeserializeOwned,
        T: TryFrom<R, Error = AnalyticsError>,
    {
        let Some(path) = path else {
            tracing::debug!("No {} table configured", table);
            return Ok(None);
        };
        if !path.exists() {
            tracing::warn!("{} table not found at {}, skipping", table, path.display());
            return Ok(None);
        }

        let rows: Vec<R> = CsvStorage::read_rows(path)?;
        let records = validate_rows(rows)
            .with_context(|| format!("Invalid {} table {}", table, path.display()))?;
        Ok(Some(records))
    }
}

impl DataSource for CsvDataSource {
    fn sales(&self) -> Result<Vec<SaleRecord>> {
        let path = &self.config.sales_path;
        let rows: Vec<SaleRow> = CsvStorage::read_rows(path)?;
        let sales = validate_sales(rows)
            .with_context(|| format!("Invalid sales table {}", path.display()))?;
        tracing::info!("Loaded {} sales from {}", sales.len(), path.display());
        Ok(sales)
    }

    fn promotions(&self) -> Result<Vec<PromotionWindow>> {
        let path = &self.config.promotions_path;
        let rows: Vec<PromotionRow> = CsvStorage::read_rows(path)?;
        let promotions = validate_rows(rows)
            .with_context(|| format!("Invalid promotions table {}", path.display()))?;
        tracing::info!(
            "Loaded {} promotion windows from {}",
            promotions.len(),
            path.display()
        );
        Ok(promotions)
    }

    fn campaigns(&self) -> Result<Option<Vec<Campaign>>> {
        Self::read_optional::<CampaignRow, Campaign>(
            self.config.campaigns_path.as_deref(),
            "campaigns",
        )
    }

    fn inventory(&self) -> Result<Option<Vec<InventoryItem>>> {
        Self::read_optional::<InventoryRow, InventoryItem>(
            self.config.inventory_path.as_deref(),
            "inventory",
        )
    }

    fn shipments(&self) -> Result<Option<Vec<Shipment>>> {
        Self::read_optional::<ShipmentRow, Shipment>(
            self.config.shipments_path.as_deref(),
            "shipments",
        )
    }
}

/// Fixture-backed source.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    pub sales: Vec<SaleRecord>,
    pub promotions: Vec<PromotionWindow>,
    pub campaigns: Option<Vec<Campaign>>,
    pub inventory: Option<Vec<InventoryItem>>,
    pub shipments: Option<Vec<Shipment>>,
}

impl InMemorySource {
    #[must_use]
    pub fn new(sales: Vec<SaleRecord>, promotions: Vec<PromotionWindow>) -> Self {
        Self {
            sales,
            promotions,
            ..Self::default()
        }
    }
}

impl DataSource for InMemorySource {
    fn sales(&self) -> Result<Vec<SaleRecord>> {
        Ok(self.sales.clone())
    }

    fn promotions(&self) -> Result<Vec<PromotionWindow>> {
        Ok(self.promotions.clone())
    }

    fn campaigns(&self) -> Result<Option<Vec<Campaign>>> {
        Ok(self.campaigns.clone())
    }

    fn inventory(&self) -> Result<Option<Vec<InventoryItem>>> {
        Ok(self.inventory.clone())
    }

    fn shipments(&self) -> Result<Option<Vec<Shipment>>> {
        Ok(self.shipments.clone())
    }
}

/// Every table fetched once for a render cycle.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub sales: Vec<SaleRecord>,
    pub promotions: Vec<PromotionWindow>,
    pub campaigns: Option<Vec<Campaign>>,
    pub inventory: Option<Vec<InventoryItem>>,
    pub shipments: Option<Vec<Shipment>>,
}

impl Snapshot {
    /// Fetches every table from `source`.
    ///
    /// # Errors
    /// Returns the first fetch or validation error.
    pub fn load(source: &dyn DataSource) -> Result<Self> {
        Ok(Self {
            sales: source.sales()?,
            promotions: source.promotions()?,
            campaigns: source.campaigns()?,
            inventory: source.inventory()?,
            shipments: source.shipments()?,
        })
    }
}
