// src/core/net.rs

use color_eyre::eyre::{Result, WrapErr};
use scraper::Html;

use crate::config::consts::USER_AGENT;

/// HTTP GET → parsed document. One shared client, cloned per fetch.
///
/// No retries, no timeout tuning: the first failure propagates to the
/// caller and aborts that branch of the fan-out. A non-2xx status counts
/// as a failure.
#[derive(Clone)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .wrap_err("building http client")?;
        Ok(Self { client })
    }

    /// Fetch `url` and return a queryable document handle.
    pub async fn get_doc(&self, url: &str) -> Result<Html> {
        let body = self
            .client
            .get(url)
            .send()
            .await
            .wrap_err_with(|| format!("GET {url}"))?
            .error_for_status()
            .wrap_err_with(|| format!("GET {url}"))?
            .text()
            .await
            .wrap_err_with(|| format!("reading body of {url}"))?;
        Ok(Html::parse_document(&body))
    }
}
