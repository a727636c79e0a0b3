use reqwest::Client;

use crate::{Error, Result};

/// Builds a page URL from the fixed `{base}/{id}.html` template.
pub(crate) fn page_url(base_url: &str, id: usize) -> String {
    format!("{base_url}/{id}.html")
}

/// Requests a single page and returns its HTML.
///
/// One GET, no retries. A non-success status is an error, and so is a
/// request that never completes (DNS, connection, timeout). The body goes
/// through reqwest's default charset handling, so a site served in a legacy
/// encoding (older Chinese sites are often GBK) may come out garbled.
pub(crate) async fn fetch_page_html(client: &Client, url: &str) -> Result<String> {
    let res = client.get(url).send().await?;
    let status = res.status();
    if !status.is_success() {
        return Err(Error::HttpStatus(status));
    }
    let html = res.text().await?;
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_follows_the_template() {
        assert_eq!(
            page_url("http://example.test/x", 3),
            "http://example.test/x/3.html"
        );
        assert_eq!(
            page_url("http://www.meimingce.com/guandi", 100),
            "http://www.meimingce.com/guandi/100.html"
        );
    }
}
