// src/merge.rs
//
// Pure reconciliation between the in-memory dataset and freshly parsed
// pages. No I/O here; the runner decides what to persist and when.

use tracing::debug;

use crate::data::{BotRecord, Dataset, Queue, Snapshot};

/// Fold listing snapshots into the dataset. Unknown names get a skeletal
/// record; names already present are left untouched, so re-merging the
/// same snapshots is a no-op. Returns how many records were inserted.
pub fn merge_listings(dataset: &mut Dataset, snapshots: &[Snapshot]) -> usize {
    let mut inserted = 0;
    for snapshot in snapshots {
        for entry in &snapshot.results {
            match dataset.get(&entry.name) {
                None => {
                    dataset.insert(entry.name.clone(), BotRecord::from_listing(entry));
                    inserted += 1;
                }
                Some(existing) => {
                    // first sighting wins; a same-name entry from another
                    // category never overwrites, even with a different url
                    if existing.url != entry.url {
                        debug!(
                            name = %entry.name,
                            kept = %existing.url,
                            skipped = %entry.url,
                            "name collision across categories"
                        );
                    }
                }
            }
        }
    }
    inserted
}

/// Apply detail-fetch results: each update fully replaces the record
/// under its key.
pub fn merge_details(dataset: &mut Dataset, updates: Vec<BotRecord>) {
    for update in updates {
        dataset.insert(update.name.clone(), update);
    }
}

/// Rebuild the work queue: every incomplete bot not already in `current`
/// gets queued under its detail url. `current` is empty under the
/// recompute policy and the saved queue under respect-disk.
pub fn build_queue(dataset: &Dataset, current: &Queue) -> Queue {
    let mut queue = Queue::new();
    for (name, bot) in dataset {
        if !bot.is_complete() && !current.contains_key(name) {
            queue.insert(name.clone(), bot.url.clone());
        }
    }
    queue
}
