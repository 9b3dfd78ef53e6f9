// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://slack.com";
pub const DIRECTORY_PATH: &str = "/apps";
pub const USER_AGENT: &str = "botdir/0.1";

// On-disk artifacts
pub const BOTS_FILE: &str = "bots.json";
pub const QUEUE_FILE: &str = "queue.json";
pub const SNAPSHOT_SUBDIR: &str = "snapshots";
