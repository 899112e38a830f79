//! Marketing campaigns.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::fields::{required, required_text};
use crate::error::{AnalyticsError, RecordKind, Result};
use crate::region::RegionKey;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignRow {
    pub campaign_id: Option<String>,
    pub campaign_type: Option<String>,
    pub region: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub budget: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub conversion_rate: Option<Decimal>,
}

/// A marketing campaign running in one region over an inclusive date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub campaign_id: String,
    /// Channel (e.g., "Email", "Social Media")
    pub campaign_type: String,
    pub region: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: Decimal,
    /// Expected conversion as a fraction (0.05 = 5%)
    pub conversion_rate: Decimal,
}

impl Campaign {
    #[must_use]
    pub fn region_key(&self) -> RegionKey {
        RegionKey::new(&self.region)
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

impl TryFrom<CampaignRow> for Campaign {
    type Error = AnalyticsError;

    fn try_from(row: CampaignRow) -> Result<Self> {
        const KIND: RecordKind = RecordKind::Campaign;

        let campaign_id = required_text(row.campaign_id, KIND, None, "campaign_id")?;
        let id = Some(campaign_id.as_str());
        let campaign_type = required_text(row.campaign_type, KIND, id, "campaign_type")?;
        let region = required_text(row.region, KIND, id, "region")?;
        let start_date = required(row.start_date, KIND, id, "start_date")?;
        let end_date = required(row.end_date, KIND, id, "end_date")?;
        let budget = required(row.budget, KIND, id, "budget")?;
        let conversion_rate = required(row.conversion_rate, KIND, id, "conversion_rate")?;

        if start_date > end_date {
            return Err(AnalyticsError::invalid(
                KIND,
                &campaign_id,
                format!("start_date {start_date} is after end_date {end_date}"),
            ));
        }
        if budget < Decimal::ZERO {
            return Err(AnalyticsError::invalid(
                KIND,
                &campaign_id,
                format!("negative budget {budget}"),
            ));
        }

        Ok(Self {
            campaign_id,
            campaign_type,
            region,
            start_date,
            end_date,
            budget,
            conversion_rate,
        })
    }
}
