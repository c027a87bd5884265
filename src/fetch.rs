use anyhow::{Context, Result};
use tracing::info;

use crate::lemma::Lemma;
use crate::parser;

const BASE_URL: &str = "https://dictionary.cambridge.org/dictionary/english/";

// The dictionary serves a bot-wall to clients without a browser UA.
const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:60.0) Gecko/20100101 Firefox/60.0";

pub fn client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("failed to build HTTP client")
}

/// Fetch the raw dictionary page for a word id.
pub async fn fetch_page(client: &reqwest::Client, word_id: &str) -> Result<String> {
    let url = format!("{BASE_URL}{word_id}");
    info!("fetching {url}");
    let response = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("request for {url} failed"))?
        .error_for_status()
        .with_context(|| format!("server rejected {url}"))?;
    response
        .text()
        .await
        .with_context(|| format!("failed to read body of {url}"))
}

/// Fetch and parse in one step: the live-page counterpart of
/// [`parser::parse`].
pub async fn query_lemmas(client: &reqwest::Client, word_id: &str) -> Result<Vec<Lemma>> {
    let html = fetch_page(client, word_id).await?;
    parser::parse(&html).with_context(|| format!("could not parse dictionary page for {word_id:?}"))
}
