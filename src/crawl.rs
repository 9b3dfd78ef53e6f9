// src/crawl.rs
//
// Concurrent fetch+parse fan-out. Each batch is gathered with an
// all-complete barrier: the batch succeeds only if every branch does,
// and fails on the first branch failure. Branches are plain futures on
// a single-threaded runtime, so "concurrent" means interleaved network
// waits; parses and merges never race.

use color_eyre::eyre::{Result, eyre};
use futures::future::try_join_all;
use tracing::info;
use url::Url;

use crate::config::consts::DIRECTORY_PATH;
use crate::core::net::Fetcher;
use crate::data::{BotRecord, CategoryRef, Dataset, Queue, Snapshot, date_stamp};
use crate::specs;

/// Fetch the directory index and extract the category list.
pub async fn fetch_categories(fetcher: &Fetcher, base: &Url) -> Result<Vec<CategoryRef>> {
    let url = base.join(DIRECTORY_PATH)?;
    let doc = fetcher.get_doc(url.as_str()).await?;
    Ok(specs::directory::categories(&doc, base))
}

/// Fan out one listing fetch per category and gather the snapshots.
pub async fn fetch_listings(
    fetcher: &Fetcher,
    base: &Url,
    categories: &[CategoryRef],
) -> Result<Vec<Snapshot>> {
    let date = date_stamp();
    try_join_all(
        categories
            .iter()
            .map(|category| fetch_one_listing(fetcher, base, category, &date)),
    )
    .await
}

async fn fetch_one_listing(
    fetcher: &Fetcher,
    base: &Url,
    category: &CategoryRef,
    date: &str,
) -> Result<Snapshot> {
    let doc = fetcher.get_doc(&category.url).await?;
    let results = specs::listing::bots(&doc, base);
    info!(category = %category.name, bots = results.len(), "listing fetched");
    Ok(Snapshot {
        date: date.to_string(),
        category: category.clone(),
        results,
    })
}

/// Fan out one detail fetch per queued bot and gather the replacement
/// records. The queue was built from the dataset, so every queued name
/// resolves to a saved record.
pub async fn fetch_details(
    fetcher: &Fetcher,
    base: &Url,
    dataset: &Dataset,
    queue: &Queue,
) -> Result<Vec<BotRecord>> {
    try_join_all(
        queue
            .iter()
            .map(|(name, url)| fetch_one_detail(fetcher, base, dataset, name, url)),
    )
    .await
}

async fn fetch_one_detail(
    fetcher: &Fetcher,
    base: &Url,
    dataset: &Dataset,
    name: &str,
    url: &str,
) -> Result<BotRecord> {
    let saved = dataset
        .get(name)
        .ok_or_else(|| eyre!("queued bot {name} missing from dataset"))?;
    let doc = fetcher.get_doc(url).await?;
    let record = specs::detail::parse(&doc, base).into_record(saved);
    info!(bot = %name, complete = record.is_complete(), "processed");
    Ok(record)
}
