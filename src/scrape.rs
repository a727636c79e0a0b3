use chrono::Local;
use reqwest::Client;
use serde::Serialize;

use crate::parse::extract_lines;
use crate::request::{fetch_page_html, page_url};
use crate::{info_time, Result};

/// One successfully harvested page.
#[derive(Debug, Clone, Serialize)]
pub struct PageResult {
    pub id: usize,
    pub url: String,
    pub lines: Vec<String>,
}

/// Fetches and parses a single page.
///
/// Any failure (transport, bad status, extraction) gets logged with its
/// cause and collapsed to `None` here, so one bad page never takes the
/// whole batch down.
pub(crate) async fn scrape_page(client: &Client, base_url: &str, id: usize) -> Option<PageResult> {
    let url = page_url(base_url, id);
    match try_scrape_page(client, id, url).await {
        Ok(page) => {
            info_time!("[ok]   id: {} - {} lines", page.id, page.lines.len());
            Some(page)
        }
        Err(err) => {
            info_time!("[fail] id: {} - {}", id, err);
            None
        }
    }
}

async fn try_scrape_page(client: &Client, id: usize, url: String) -> Result<PageResult> {
    let html = fetch_page_html(client, &url).await?;
    let lines = extract_lines(html).await?;

    Ok(PageResult { id, url, lines })
}
