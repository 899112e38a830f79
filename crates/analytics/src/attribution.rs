//! Promo/non-promo attribution of individual sales.

use promo_lift_core::{PromotionWindow, SaleRecord};
use serde::Serialize;

use crate::window_join::PromotionIndex;

/// Whether a sale happened during a promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Situation {
    Promo,
    NonPromo,
}

impl Situation {
    #[must_use]
    pub fn from_promoted(is_promoted: bool) -> Self {
        if is_promoted {
            Situation::Promo
        } else {
            Situation::NonPromo
        }
    }
}

impl std::fmt::Display for Situation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Situation::Promo => write!(f, "Promo period"),
            Situation::NonPromo => write!(f, "Normal period"),
        }
    }
}

/// A sale tagged with its promotion status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributedSale<'a> {
    pub sale: &'a SaleRecord,
    pub is_promoted: bool,
    pub situation: Situation,
}

/// Tags each sale as promoted when any window of its region covers its date.
///
/// Attribution is existential: a sale covered by several windows still yields
/// exactly one entry. Sales in regions without windows are `NonPromo`.
/// Output order follows input order.
#[must_use]
pub fn attribute<'a>(
    sales: &'a [SaleRecord],
    promotions: &[PromotionWindow],
) -> Vec<AttributedSale<'a>> {
    let index = PromotionIndex::new(promotions);

    let attributed: Vec<AttributedSale<'a>> = sales
        .iter()
        .map(|sale| {
            let is_promoted = index.is_active(&sale.region_key(), sale.transaction_date);
            AttributedSale {
                sale,
                is_promoted,
                situation: Situation::from_promoted(is_promoted),
            }
        })
        .collect();

    let promoted = attributed.iter().filter(|a| a.is_promoted).count();
    tracing::debug!(
        "Attributed {} sales against {} promotion windows: {} promo, {} normal",
        attributed.len(),
        index.len(),
        promoted,
        attributed.len() - promoted
    );

    attributed
}
