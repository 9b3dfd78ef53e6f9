// src/config/options.rs
use std::path::PathBuf;

use url::Url;

use super::consts::BASE_URL;

/// What to do with the on-disk `queue.json` when rebuilding the queue.
///
/// The dataset alone says which bots are incomplete; the policy decides
/// whether a bot already listed in the saved queue gets re-listed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QueuePolicy {
    /// Ignore the saved queue; every incomplete bot is queued. A bot whose
    /// detail page yielded no description gets picked up again next run.
    #[default]
    Recompute,
    /// Load the saved queue and skip bots it already lists.
    RespectDisk,
}

#[derive(Clone, Debug)]
pub struct RunOptions {
    pub base: Url,                    // directory site root
    pub data_dir: PathBuf,            // bots.json / queue.json / snapshots/
    pub queue_policy: QueuePolicy,
    pub skip_details: bool,           // stop after the queue is rebuilt
    pub no_queue: bool,               // stop after new bots are merged
    pub merge_path: Option<PathBuf>,  // offline mode: merge a saved snapshot
    pub list_categories: bool,        // print categories then exit
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            // const literal, cannot fail to parse
            base: Url::parse(BASE_URL).expect("BASE_URL is a valid url"),
            data_dir: PathBuf::from("."),
            queue_policy: QueuePolicy::default(),
            skip_details: false,
            no_queue: false,
            merge_path: None,
            list_categories: false,
        }
    }
}
