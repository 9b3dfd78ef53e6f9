// src/store.rs
//
// JSON persistence for the three artifact kinds: master dataset, work
// queue, dated listing snapshots. Compact output, UTF-8. Loading a file
// that does not exist yet yields the empty mapping (first run).

use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};

use crate::config::consts::{BOTS_FILE, QUEUE_FILE, SNAPSHOT_SUBDIR};
use crate::data::{Dataset, Queue, Snapshot, date_stamp};

pub fn load_dataset(dir: &Path) -> Result<Dataset> {
    load_json(&dir.join(BOTS_FILE))
}

pub fn save_dataset(dir: &Path, dataset: &Dataset) -> Result<PathBuf> {
    save_json(dir, &dir.join(BOTS_FILE), dataset)
}

pub fn load_queue(dir: &Path) -> Result<Queue> {
    load_json(&dir.join(QUEUE_FILE))
}

pub fn save_queue(dir: &Path, queue: &Queue) -> Result<PathBuf> {
    save_json(dir, &dir.join(QUEUE_FILE), queue)
}

/// Write one run's category snapshots as a single dated artifact under
/// `snapshots/`. The file takes the date of the snapshots it holds.
pub fn save_snapshots(dir: &Path, snapshots: &[Snapshot]) -> Result<PathBuf> {
    let date = snapshots
        .first()
        .map(|s| s.date.clone())
        .unwrap_or_else(date_stamp);
    let subdir = dir.join(SNAPSHOT_SUBDIR);
    save_json(&subdir, &subdir.join(format!("{date}.json")), snapshots)
}

/// Read back a snapshot artifact for an offline merge. Unlike the
/// mapping loaders this fails on a missing file: the caller named it.
pub fn load_snapshots(path: &Path) -> Result<Vec<Snapshot>> {
    let text = fs::read_to_string(path)
        .wrap_err_with(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).wrap_err_with(|| format!("parsing {}", path.display()))
}

fn load_json<T: serde::de::DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Ok(T::default());
    }
    let text = fs::read_to_string(path)
        .wrap_err_with(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).wrap_err_with(|| format!("parsing {}", path.display()))
}

fn save_json<T: serde::Serialize + ?Sized>(dir: &Path, path: &Path, value: &T) -> Result<PathBuf> {
    fs::create_dir_all(dir).wrap_err_with(|| format!("creating {}", dir.display()))?;
    let text = serde_json::to_string(value)?;
    fs::write(path, text).wrap_err_with(|| format!("writing {}", path.display()))?;
    Ok(path.to_path_buf())
}
