//! Region keys.
//!
//! Regions arrive from several feeds with inconsistent casing and padding
//! (`" north "`, `"North"`, `"NORTH"`). Every join and grouping in the
//! analytics goes through [`RegionKey`] so they all agree on equality.

use serde::{Deserialize, Serialize};

/// A region name trimmed and upper-cased.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionKey(String);

impl RegionKey {
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_uppercase())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RegionKey {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl std::fmt::Display for RegionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_and_case_are_ignored() {
        assert_eq!(RegionKey::new(" north "), RegionKey::new("North"));
        assert_eq!(RegionKey::new("\tNORTH"), RegionKey::new("north"));
        assert_eq!(RegionKey::new(" north ").as_str(), "NORTH");
    }

    #[test]
    fn test_inner_whitespace_is_kept() {
        assert_ne!(RegionKey::new("North East"), RegionKey::new("NorthEast"));
    }
}
