//! Promotion windows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::fields::{optional_text, required, required_text};
use crate::error::{AnalyticsError, RecordKind, Result};
use crate::region::RegionKey;

/// A raw promotion row as it comes out of the data source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionRow {
    pub promotion_id: Option<String>,
    pub region: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub product_category: Option<String>,
}

/// A validated promotion window with inclusive date bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionWindow {
    pub promotion_id: String,
    pub region: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// When set, the window only applies to sales of this category
    pub product_category: Option<String>,
}

impl PromotionWindow {
    /// Creates a validated promotion window.
    ///
    /// # Errors
    /// Returns an error if the id or region is blank, or `start_date > end_date`.
    pub fn new(
        promotion_id: impl Into<String>,
        region: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        product_category: Option<String>,
    ) -> Result<Self> {
        PromotionRow {
            promotion_id: Some(promotion_id.into()),
            region: Some(region.into()),
            start_date: Some(start_date),
            end_date: Some(end_date),
            product_category,
        }
        .try_into()
    }

    #[must_use]
    pub fn region_key(&self) -> RegionKey {
        RegionKey::new(&self.region)
    }

    /// Returns true if `date` lies within `[start_date, end_date]`.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Returns true if the window applies to `category`.
    ///
    /// Windows without a category apply to every category.
    #[must_use]
    pub fn applies_to_category(&self, category: &str) -> bool {
        match &self.product_category {
            Some(scoped) => scoped.trim().eq_ignore_ascii_case(category.trim()),
            None => true,
        }
    }
}

impl TryFrom<PromotionRow> for PromotionWindow {
    type Error = AnalyticsError;

    fn try_from(row: PromotionRow) -> Result<Self> {
        const KIND: RecordKind = RecordKind::Promotion;

        let promotion_id = required_text(row.promotion_id, KIND, None, "promotion_id")?;
        let id = Some(promotion_id.as_str());
        let region = required_text(row.region, KIND, id, "region")?;
        let start_date = required(row.start_date, KIND, id, "start_date")?;
        let end_date = required(row.end_date, KIND, id, "end_date")?;

        if start_date > end_date {
            return Err(AnalyticsError::invalid(
                KIND,
                &promotion_id,
                format!("start_date {start_date} is after end_date {end_date}"),
            ));
        }

        Ok(Self {
            promotion_id,
            region,
            start_date,
            end_date,
            product_category: optional_text(row.product_category),
        })
    }
}
