// src/specs/detail.rs
//! Spec for a bot detail page.
//!
//! Pulls the description block, the primary install/site link, and the
//! category tags. All three are optional on the page; absence means the
//! record stays incomplete, not that the fetch failed.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use url::Url;

use crate::core::markdown;
use crate::data::{BotRecord, CategoryRef};

static DESCRIPTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".tsf_output").unwrap());
static SITE_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".single_install_button a").unwrap());
static TAGS: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".tag").unwrap());

/// What a detail page yields for one bot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BotDetail {
    pub description: Option<String>,
    pub site: Option<String>,
    pub categories: Vec<CategoryRef>,
}

impl BotDetail {
    /// Build the replacement record for a detail merge: identity fields
    /// carry over from the saved record, detail fields are taken wholesale
    /// from this parse (full replace, not field-merge).
    pub fn into_record(self, saved: &BotRecord) -> BotRecord {
        BotRecord {
            name: saved.name.clone(),
            url: saved.url.clone(),
            tagline: saved.tagline.clone(),
            categories: self.categories,
            description: self.description,
            site: self.site,
        }
    }
}

pub fn parse(doc: &Html, base: &Url) -> BotDetail {
    let description = doc
        .select(&DESCRIPTION)
        .next()
        .map(|el| markdown::from_html(&el.inner_html()))
        .filter(|d| !d.is_empty());

    let site = doc
        .select(&SITE_LINK)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(|href| href.to_string());

    let categories = doc
        .select(&TAGS)
        .map(|a| CategoryRef {
            name: markdown::from_html(a.inner_html().trim()),
            url: super::join_url(base, a.value().attr("href").unwrap_or_default()),
        })
        .collect();

    BotDetail {
        description,
        site,
        categories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"
        <div class="tsf_output"><p>Praise bot for <b>teams</b>.</p></div>
        <div class="single_install_button">
          <a href="https://growbot.example/install">Install</a>
        </div>
        <a class="tag" href="/apps/category/At0EFW6M9P-bots">Bots</a>
        <a class="tag" href="/apps/category/At0EFX5M9Q-fun">Fun</a>
    "#;

    fn base() -> Url {
        Url::parse("https://slack.test").unwrap()
    }

    #[test]
    fn extracts_all_three_fields() {
        let doc = Html::parse_document(FIXTURE);
        let detail = parse(&doc, &base());
        assert_eq!(detail.description.as_deref(), Some("Praise bot for **teams**."));
        assert_eq!(detail.site.as_deref(), Some("https://growbot.example/install"));
        assert_eq!(detail.categories.len(), 2);
        assert_eq!(detail.categories[0].name, "Bots");
        assert_eq!(
            detail.categories[1].url,
            "https://slack.test/apps/category/At0EFX5M9Q-fun"
        );
    }

    #[test]
    fn missing_selectors_yield_absent_values() {
        let doc = Html::parse_document("<html><body><p>sparse</p></body></html>");
        let detail = parse(&doc, &base());
        assert_eq!(detail.description, None);
        assert_eq!(detail.site, None);
        assert!(detail.categories.is_empty());
    }

    #[test]
    fn into_record_keeps_identity_replaces_detail() {
        let saved = BotRecord {
            name: "Growbot".into(),
            url: "https://slack.test/apps/A1-growbot".into(),
            tagline: "Praise your team".into(),
            categories: vec![CategoryRef {
                name: "Old".into(),
                url: "https://slack.test/old".into(),
            }],
            description: None,
            site: Some("stale".into()),
        };
        let detail = BotDetail {
            description: Some("Fresh".into()),
            site: None,
            categories: Vec::new(),
        };
        let rec = detail.into_record(&saved);
        assert_eq!(rec.name, saved.name);
        assert_eq!(rec.tagline, saved.tagline);
        assert_eq!(rec.description.as_deref(), Some("Fresh"));
        // old detail fields do not survive the replace
        assert_eq!(rec.site, None);
        assert!(rec.categories.is_empty());
    }
}
