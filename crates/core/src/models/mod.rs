//! Input records for the promotion analytics.
//!
//! Each record comes in two shapes: a `*Row` with every field optional,
//! matching what a data source hands over, and a validated type built from
//! it with `TryFrom`. Amounts use `rust_decimal::Decimal`.

mod fields;

pub mod campaign;
pub mod inventory;
pub mod promotion;
pub mod sale;
pub mod shipment;

pub use campaign::{Campaign, CampaignRow};
pub use inventory::{InventoryItem, InventoryRow};
pub use promotion::{PromotionRow, PromotionWindow};
pub use sale::{SaleRecord, SaleRow, SALE_TRANSACTION_TYPE};
pub use shipment::{Shipment, ShipmentRow, RETURNED_STATUS};
