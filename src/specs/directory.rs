// src/specs/directory.rs
//! Spec for the directory index page (`/apps`).
//!
//! The category list lives in a titled sidebar list; each anchor is one
//! category with a site-relative href.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use url::Url;

use crate::core::markdown;
use crate::data::CategoryRef;

static CATEGORY_LINKS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".titled_list ul li a").unwrap());

/// Extract the ordered category list. An index page without the list
/// yields an empty vec, not an error.
pub fn categories(doc: &Html, base: &Url) -> Vec<CategoryRef> {
    doc.select(&CATEGORY_LINKS)
        .map(|a| CategoryRef {
            name: markdown::from_html(&a.inner_html()),
            url: super::join_url(base, a.value().attr("href").unwrap_or_default()),
        })
        .collect()
}
