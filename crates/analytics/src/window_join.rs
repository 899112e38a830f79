//! Region/date range join shared by every promotion and campaign analysis.
//!
//! A sale joins a window when both sides have the same [`RegionKey`] and the
//! sale date lies within the window's inclusive `[start, end]` range. The
//! index groups windows by region so each lookup only scans the windows of
//! one region.
//!
//! Callers choose the join flavour:
//! - existence ([`WindowIndex::is_active`]) for promo/non-promo attribution,
//! - every match ([`WindowIndex::matching`]) when each `(sale, window)` pair
//!   must contribute separately.

use chrono::NaiveDate;
use promo_lift_core::{Campaign, PromotionWindow, RegionKey};
use std::collections::HashMap;

/// A record active in one region over an inclusive date range.
pub trait DatedWindow {
    fn region_key(&self) -> RegionKey;
    fn contains(&self, date: NaiveDate) -> bool;
}

impl DatedWindow for PromotionWindow {
    fn region_key(&self) -> RegionKey {
        PromotionWindow::region_key(self)
    }

    fn contains(&self, date: NaiveDate) -> bool {
        PromotionWindow::contains(self, date)
    }
}

impl DatedWindow for Campaign {
    fn region_key(&self) -> RegionKey {
        Campaign::region_key(self)
    }

    fn contains(&self, date: NaiveDate) -> bool {
        Campaign::contains(self, date)
    }
}

/// Windows grouped by normalized region.
#[derive(Debug)]
pub struct WindowIndex<'a, W> {
    by_region: HashMap<RegionKey, Vec<&'a W>>,
    len: usize,
}

pub type PromotionIndex<'a> = WindowIndex<'a, PromotionWindow>;
pub type CampaignIndex<'a> = WindowIndex<'a, Campaign>;

impl<'a, W: DatedWindow> WindowIndex<'a, W> {
    #[must_use]
    pub fn new(windows: &'a [W]) -> Self {
        let mut by_region: HashMap<RegionKey, Vec<&'a W>> = HashMap::new();
        for window in windows {
            by_region.entry(window.region_key()).or_default().push(window);
        }

        tracing::debug!(
            "Indexed {} windows across {} regions",
            windows.len(),
            by_region.len()
        );

        Self {
            by_region,
            len: windows.len(),
        }
    }

    /// Every window of `region` whose range contains `date`.
    pub fn matching<'s>(
        &'s self,
        region: &RegionKey,
        date: NaiveDate,
    ) -> impl Iterator<Item = &'a W> + 's {
        self.by_region
            .get(region)
            .into_iter()
            .flat_map(|windows| windows.iter().copied())
            .filter(move |window| window.contains(date))
    }

    /// Returns true if at least one window of `region` contains `date`.
    #[must_use]
    pub fn is_active(&self, region: &RegionKey, date: NaiveDate) -> bool {
        self.matching(region, date).next().is_some()
    }

    #[must_use]
    pub fn has_region(&self, region: &RegionKey) -> bool {
        self.by_region.contains_key(region)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn window(id: &str, region: &str, start: NaiveDate, end: NaiveDate) -> PromotionWindow {
        PromotionWindow::new(id, region, start, end, None).unwrap()
    }

    #[test]
    fn test_lookup_normalizes_region() {
        let windows = vec![window("P-1", "North", date(2024, 1, 1), date(2024, 1, 31))];
        let index = PromotionIndex::new(&windows);

        assert!(index.is_active(&RegionKey::new(" north "), date(2024, 1, 15)));
        assert!(!index.is_active(&RegionKey::new("south"), date(2024, 1, 15)));
        assert!(index.has_region(&RegionKey::new("NORTH")));
    }

    #[test]
    fn test_matching_returns_every_overlapping_window() {
        let windows = vec![
            window("P-1", "North", date(2024, 1, 1), date(2024, 1, 31)),
            window("P-2", "north", date(2024, 1, 10), date(2024, 2, 10)),
            window("P-3", "North", date(2024, 3, 1), date(2024, 3, 31)),
        ];
        let index = PromotionIndex::new(&windows);

        let ids: Vec<&str> = index
            .matching(&RegionKey::new("North"), date(2024, 1, 20))
            .map(|w| w.promotion_id.as_str())
            .collect();
        assert_eq!(ids, vec!["P-1", "P-2"]);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_empty_index() {
        let windows: Vec<PromotionWindow> = Vec::new();
        let index = PromotionIndex::new(&windows);
        assert!(index.is_empty());
        assert_eq!(index.matching(&RegionKey::new("x"), date(2024, 1, 1)).count(), 0);
    }
}
