//! Core types for the promotion analytics workspace.
//!
//! This crate provides:
//! - Raw and validated input records (sales, promotion windows, campaigns,
//!   inventory, shipments)
//! - Validation errors
//! - Region normalization and null-safe ratio helpers shared by every analysis
//! - Layered configuration loading

pub mod config;
pub mod config_loader;
pub mod error;
pub mod models;
pub mod ratio;
pub mod region;

pub use config::{AppConfig, DataConfig, OutputFormat, ReportConfig};
pub use config_loader::ConfigLoader;
pub use error::{AnalyticsError, RecordKind, Result};
pub use models::{
    Campaign, CampaignRow, InventoryItem, InventoryRow, PromotionRow, PromotionWindow, SaleRecord,
    SaleRow, Shipment, ShipmentRow, RETURNED_STATUS, SALE_TRANSACTION_TYPE,
};
pub use region::RegionKey;
