//! Sale transactions.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::fields::{required, required_text};
use crate::error::{AnalyticsError, RecordKind, Result};
use crate::region::RegionKey;

/// The only transaction type the analytics consume.
pub const SALE_TRANSACTION_TYPE: &str = "Sale";

/// A raw transaction row as it comes out of the data source.
///
/// Every field is optional so that a missing column surfaces as
/// [`AnalyticsError::MissingField`] instead of a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaleRow {
    pub transaction_id: Option<String>,
    pub region: Option<String>,
    pub transaction_date: Option<NaiveDate>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub amount: Option<Decimal>,
    pub transaction_type: Option<String>,
    pub product_category: Option<String>,
}

impl SaleRow {
    /// Returns true if this row is a sale (as opposed to a refund, fee, ...).
    #[must_use]
    pub fn is_sale(&self) -> bool {
        self.transaction_type.as_deref().map(str::trim) == Some(SALE_TRANSACTION_TYPE)
    }

    /// Returns true if the row carries a transaction type other than `Sale`.
    ///
    /// A missing or blank type is not "other": such rows must still fail
    /// validation.
    #[must_use]
    pub fn is_other_transaction(&self) -> bool {
        match self.transaction_type.as_deref().map(str::trim) {
            Some(kind) => !kind.is_empty() && kind != SALE_TRANSACTION_TYPE,
            None => false,
        }
    }
}

/// A validated sale transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub transaction_id: String,
    pub region: String,
    pub transaction_date: NaiveDate,
    /// Non-negative sale amount
    pub amount: Decimal,
    /// Always [`SALE_TRANSACTION_TYPE`]
    pub transaction_type: String,
    pub product_category: String,
}

impl SaleRecord {
    /// Creates a validated sale.
    ///
    /// # Errors
    /// Returns an error if the id, region or category is blank, or the amount is negative.
    pub fn new(
        transaction_id: impl Into<String>,
        region: impl Into<String>,
        transaction_date: NaiveDate,
        amount: Decimal,
        product_category: impl Into<String>,
    ) -> Result<Self> {
        SaleRow {
            transaction_id: Some(transaction_id.into()),
            region: Some(region.into()),
            transaction_date: Some(transaction_date),
            amount: Some(amount),
            transaction_type: Some(SALE_TRANSACTION_TYPE.to_string()),
            product_category: Some(product_category.into()),
        }
        .try_into()
    }

    #[must_use]
    pub fn region_key(&self) -> RegionKey {
        RegionKey::new(&self.region)
    }
}

impl TryFrom<SaleRow> for SaleRecord {
    type Error = AnalyticsError;

    fn try_from(row: SaleRow) -> Result<Self> {
        const KIND: RecordKind = RecordKind::Sale;

        let transaction_id = required_text(row.transaction_id, KIND, None, "transaction_id")?;
        let id = Some(transaction_id.as_str());
        let region = required_text(row.region, KIND, id, "region")?;
        let transaction_date = required(row.transaction_date, KIND, id, "transaction_date")?;
        let amount = required(row.amount, KIND, id, "amount")?;
        let transaction_type =
            required_text(row.transaction_type, KIND, id, "transaction_type")?
                .trim()
                .to_string();
        let product_category = required_text(row.product_category, KIND, id, "product_category")?;

        if transaction_type != SALE_TRANSACTION_TYPE {
            return Err(AnalyticsError::invalid(
                KIND,
                &transaction_id,
                format!("transaction_type is '{transaction_type}', expected '{SALE_TRANSACTION_TYPE}'"),
            ));
        }
        if amount < Decimal::ZERO {
            return Err(AnalyticsError::invalid(
                KIND,
                &transaction_id,
                format!("negative amount {amount}"),
            ));
        }

        Ok(Self {
            transaction_id,
            region,
            transaction_date,
            amount,
            transaction_type,
            product_category,
        })
    }
}
