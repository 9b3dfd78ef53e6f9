// src/runner.rs
//
// Run state machine: INIT → FETCH_CATEGORIES → FETCH_LISTINGS →
// MERGE_NEW → BUILD_QUEUE → FETCH_DETAILS → MERGE_DETAILS → PERSIST.
// No resumability: a fetch failure anywhere aborts the run, and each
// stage persists only after its gather succeeded, so a failed run
// leaves no partial output for that stage.

use std::path::{Path, PathBuf};

use color_eyre::eyre::Result;
use tracing::info;

use crate::config::options::{QueuePolicy, RunOptions};
use crate::core::net::Fetcher;
use crate::data::{CategoryRef, Dataset, Queue};
use crate::progress::Progress;
use crate::{crawl, merge, store};

/// What a run produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub inserted: usize,
    pub queued: usize,
    pub detailed: usize,
    pub files_written: Vec<PathBuf>,
}

/// Top-level runner: one crawl pass, or an offline snapshot merge when
/// `--merge` was given. `progress` can be None (no UI updates).
pub async fn run(
    opts: &RunOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    match &opts.merge_path {
        Some(path) => merge_snapshot(opts, path, progress),
        None => crawl_pass(opts, progress).await,
    }
}

/// Fetch the directory index and return the category list, touching no
/// on-disk state. Backs `--list-categories`.
pub async fn list_categories(opts: &RunOptions) -> Result<Vec<CategoryRef>> {
    let fetcher = Fetcher::new()?;
    crawl::fetch_categories(&fetcher, &opts.base).await
}

/* ---------------- crawl pass ---------------- */

async fn crawl_pass(
    opts: &RunOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();
    let mut dataset = store::load_dataset(&opts.data_dir)?;
    let fetcher = Fetcher::new()?;

    let categories = crawl::fetch_categories(&fetcher, &opts.base).await?;
    info!(count = categories.len(), "categories fetched");
    if let Some(p) = progress.as_deref_mut() {
        p.begin(categories.len());
        p.log(&format!("{} categories", categories.len()));
    }

    let snapshots = crawl::fetch_listings(&fetcher, &opts.base, &categories).await?;
    if let Some(p) = progress.as_deref_mut() {
        for snapshot in &snapshots {
            p.item_done(&snapshot.category.name);
        }
    }
    summary
        .files_written
        .push(store::save_snapshots(&opts.data_dir, &snapshots)?);

    summary.inserted = merge::merge_listings(&mut dataset, &snapshots);
    info!(inserted = summary.inserted, "listings merged");
    if summary.inserted > 0 {
        summary
            .files_written
            .push(store::save_dataset(&opts.data_dir, &dataset)?);
    }

    if opts.no_queue {
        finish(progress);
        return Ok(summary);
    }

    let queue = rebuild_queue(opts, &dataset, &mut summary)?;
    if opts.skip_details || queue.is_empty() {
        finish(progress);
        return Ok(summary);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.begin(queue.len());
    }
    let updates = crawl::fetch_details(&fetcher, &opts.base, &dataset, &queue).await?;
    summary.detailed = updates.len();
    if let Some(p) = progress.as_deref_mut() {
        for update in &updates {
            p.item_done(&update.name);
        }
    }
    merge::merge_details(&mut dataset, updates);
    summary
        .files_written
        .push(store::save_dataset(&opts.data_dir, &dataset)?);

    finish(progress);
    Ok(summary)
}

/* ---------------- offline snapshot merge ---------------- */

/// Merge a previously written snapshot artifact into the dataset.
/// No network I/O; the queue is still rebuilt unless suppressed.
fn merge_snapshot(
    opts: &RunOptions,
    path: &Path,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();
    let mut dataset = store::load_dataset(&opts.data_dir)?;
    let snapshots = store::load_snapshots(path)?;

    summary.inserted = merge::merge_listings(&mut dataset, &snapshots);
    info!(inserted = summary.inserted, path = %path.display(), "snapshot merged");
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("{} new bots from {}", summary.inserted, path.display()));
    }
    if summary.inserted > 0 {
        summary
            .files_written
            .push(store::save_dataset(&opts.data_dir, &dataset)?);
    }

    if !opts.no_queue {
        rebuild_queue(opts, &dataset, &mut summary)?;
    }

    finish(progress);
    Ok(summary)
}

/* ---------------- shared steps ---------------- */

fn rebuild_queue(
    opts: &RunOptions,
    dataset: &Dataset,
    summary: &mut RunSummary,
) -> Result<Queue> {
    let current = match opts.queue_policy {
        QueuePolicy::Recompute => Queue::new(),
        QueuePolicy::RespectDisk => store::load_queue(&opts.data_dir)?,
    };
    let queue = merge::build_queue(dataset, &current);
    info!(queued = queue.len(), policy = ?opts.queue_policy, "queue rebuilt");
    summary
        .files_written
        .push(store::save_queue(&opts.data_dir, &queue)?);
    summary.queued = queue.len();
    Ok(queue)
}

fn finish(progress: Option<&mut dyn Progress>) {
    if let Some(p) = progress {
        p.finish();
    }
}
