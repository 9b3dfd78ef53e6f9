// src/specs/listing.rs
//! Spec for a category listing page.
//!
//! Each bot is an anchor in the media list carrying two spans: name,
//! then tagline. Rank is the 1-based position in document order.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use url::Url;

use crate::core::markdown;
use crate::data::ListingEntry;

static BOT_LINKS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".media_list li a").unwrap());
static SPANS: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span").unwrap());

/// Extract the ranked bot rows. Anchors missing a span yield empty
/// strings for that field; a page without the list yields an empty vec.
pub fn bots(doc: &Html, base: &Url) -> Vec<ListingEntry> {
    doc.select(&BOT_LINKS)
        .enumerate()
        .map(|(i, a)| {
            let mut spans = a.select(&SPANS);
            let name = spans
                .next()
                .map(|s| markdown::from_html(&s.inner_html()))
                .unwrap_or_default();
            let tagline = spans
                .next()
                .map(|s| markdown::from_html(&s.inner_html()))
                .unwrap_or_default();
            ListingEntry {
                name,
                url: super::join_url(base, a.value().attr("href").unwrap_or_default()),
                tagline,
                rank: i as u32 + 1,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"
        <ul class="media_list">
          <li><a href="/apps/A1-growbot"><span>Growbot</span><span>Praise your team</span></a></li>
          <li><a href="/apps/A2-lunchtrain"><span>Lunch Train</span><span>All aboard</span></a></li>
          <li><a href="/apps/A3-bare"><span>Bare</span></a></li>
        </ul>
    "#;

    fn base() -> Url {
        Url::parse("https://slack.test").unwrap()
    }

    #[test]
    fn rank_is_one_based_document_order() {
        let doc = Html::parse_document(FIXTURE);
        let rows = bots(&doc, &base());
        assert_eq!(rows.len(), 3);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.rank, i as u32 + 1);
        }
        assert_eq!(rows[0].name, "Growbot");
        assert_eq!(rows[0].tagline, "Praise your team");
        assert_eq!(rows[0].url, "https://slack.test/apps/A1-growbot");
    }

    #[test]
    fn missing_tagline_span_yields_empty_string() {
        let doc = Html::parse_document(FIXTURE);
        let rows = bots(&doc, &base());
        assert_eq!(rows[2].name, "Bare");
        assert_eq!(rows[2].tagline, "");
    }

    #[test]
    fn empty_page_yields_no_rows() {
        let doc = Html::parse_document("<html><body></body></html>");
        assert!(bots(&doc, &base()).is_empty());
    }
}
