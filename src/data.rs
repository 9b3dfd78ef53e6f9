// src/data.rs
//
// Record types for every on-disk artifact. BTreeMap keeps key order
// stable so re-serializing an unchanged dataset is byte-identical.

use std::collections::BTreeMap;

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

/// Master dataset: bot name → record (`bots.json`).
pub type Dataset = BTreeMap<String, BotRecord>;

/// Pending detail fetches: bot name → detail-page url (`queue.json`).
pub type Queue = BTreeMap<String, String>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub name: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotRecord {
    pub name: String,
    pub url: String,
    pub tagline: String,
    pub categories: Vec<CategoryRef>,
    pub description: Option<String>,
    pub site: Option<String>,
}

impl BotRecord {
    /// Skeletal record from a first sighting in a category listing.
    /// Detail fields stay empty until the detail fetch fills them.
    pub fn from_listing(entry: &ListingEntry) -> Self {
        Self {
            name: entry.name.clone(),
            url: entry.url.clone(),
            tagline: entry.tagline.clone(),
            categories: Vec::new(),
            description: None,
            site: None,
        }
    }

    /// Complete iff the description has been filled in. Completeness is
    /// monotonic: nothing in the workflow clears a filled description.
    pub fn is_complete(&self) -> bool {
        self.description.as_deref().is_some_and(|d| !d.is_empty())
    }
}

/// One row of a category listing. Rank is the 1-based position in
/// document order; it is meaningful only within one category's listing
/// and is not carried into the master record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingEntry {
    pub name: String,
    pub url: String,
    pub tagline: String,
    pub rank: u32,
}

/// One category's listing results at a point in time. A run writes all
/// of its snapshots into a single dated artifact that a later run can
/// merge back in offline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub date: String,
    pub category: CategoryRef,
    pub results: Vec<ListingEntry>,
}

/// Local date as `yyyy_m_d`, unpadded. Stamps snapshots and their files.
pub fn date_stamp() -> String {
    let now = Local::now();
    format!("{}_{}_{}", now.year(), now.month(), now.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completeness_requires_nonempty_description() {
        let entry = ListingEntry {
            name: "A".into(),
            url: "u".into(),
            tagline: "t".into(),
            rank: 1,
        };
        let mut bot = BotRecord::from_listing(&entry);
        assert!(!bot.is_complete());

        bot.description = Some(String::new());
        assert!(!bot.is_complete());

        bot.description = Some("Does things.".into());
        assert!(bot.is_complete());
    }

    #[test]
    fn date_stamp_has_three_fields() {
        let stamp = date_stamp();
        assert_eq!(stamp.split('_').count(), 3);
        assert!(stamp.split('_').all(|part| part.parse::<u32>().is_ok()));
    }
}
