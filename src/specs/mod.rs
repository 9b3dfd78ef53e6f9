// src/specs/mod.rs
//! Page-specific scraping specs.
//!
//! Each spec encodes *where the ground truth lives in the HTML* of one
//! page shape and how to pull it out:
//!
//! - `directory` – the `/apps` index page → category anchors.
//! - `listing`  – one category page → ranked bot rows.
//! - `detail`   – one bot page → description, site link, category tags.
//!
//! Specs are pure over a parsed document: no networking, no persistence,
//! no merge logic. Missing selectors yield absent/empty values rather
//! than errors; upstream decides what incomplete means. Everything is
//! testable offline against fixture HTML.

pub mod detail;
pub mod directory;
pub mod listing;

use url::Url;

/// Resolve a scraped href against the site base. Hrefs on the directory
/// site are site-relative; absolute ones pass through unchanged. A href
/// that won't join is kept verbatim rather than dropped.
pub(crate) fn join_url(base: &Url, href: &str) -> String {
    match base.join(href) {
        Ok(u) => u.to_string(),
        Err(_) => href.to_string(),
    }
}
