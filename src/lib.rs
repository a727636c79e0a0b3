//! One-shot harvester for a numbered run of article pages.
//!
//! Fetches `{base}/{id}.html` for every id in `1..=N`, pulls the article
//! body paragraphs out of each page, and dumps everything into a single
//! JSON file at the end. Pages that fail to fetch or parse are logged and
//! dropped; a rerun starts from scratch.

mod error;
mod macros;
mod parse;
pub mod process;
mod request;
mod scrape;

pub use error::{Error, Result};
pub use scrape::PageResult;

use std::ops::Range;

const BASE_URL: &str = "http://www.meimingce.com/guandi";
const TOTAL_PAGES: usize = 100;
/// Pages requested at the same time. Keep it low to avoid an IP ban.
const CONCURRENCY: usize = 5;
/// Pre-fetch delay sampled uniformly from this range, in milliseconds.
const JITTER_MS: Range<u64> = 100..500;
const OUT_PATH: &str = "result.json";

/// Everything a batch run needs to know, fixed at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub total_pages: usize,
    pub concurrency: usize,
    pub jitter_ms: Range<u64>,
    pub output_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: BASE_URL.into(),
            total_pages: TOTAL_PAGES,
            concurrency: CONCURRENCY,
            jitter_ms: JITTER_MS,
            output_path: OUT_PATH.into(),
        }
    }
}
