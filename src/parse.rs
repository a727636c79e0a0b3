use scraper::{Html, Selector};
use tokio::task::spawn_blocking;

use crate::{Error, Result};

/// The container carrying both classes, then its paragraph descendants.
const CONTENT_SELECTOR: &str = ".article-body-cont.mt20 p";

/// Extracts the article body lines from a page.
///
/// `scraper` is sync, so the actual parsing runs on a blocking thread.
/// Returns the trimmed text of every matched paragraph in document order,
/// with empty paragraphs dropped. Malformed markup never errors out here;
/// the parser is tolerant, so in the worst case the selector matches
/// nothing and the result is empty.
pub(crate) async fn extract_lines(html: String) -> Result<Vec<String>> {
    spawn_blocking(move || extract_lines_sync(&html)).await?
}

fn extract_lines_sync(html: &str) -> Result<Vec<String>> {
    let doc = Html::parse_document(html);
    let par_selector = create_selector(CONTENT_SELECTOR)?;

    let lines = doc
        .select(&par_selector)
        .map(|par| par.text().collect::<String>().trim().to_owned())
        .filter(|text| !text.is_empty())
        .collect();

    Ok(lines)
}

#[inline]
fn create_selector(sel_str: &str) -> Result<Selector> {
    Selector::parse(sel_str).map_err(|_| Error::BadSelector(sel_str.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(body: &str) -> String {
        format!(
            r#"<html><body><h1>title</h1><div class="article-body-cont mt20">{body}</div></body></html>"#
        )
    }

    #[test]
    fn trims_text_and_drops_empty_paragraphs() {
        let html = page("<p> Hello </p><p></p>");
        assert_eq!(extract_lines_sync(&html).unwrap(), ["Hello"]);
    }

    #[test]
    fn keeps_document_order() {
        let html = page("<p>one</p><p>two</p><p>three</p>");
        assert_eq!(extract_lines_sync(&html).unwrap(), ["one", "two", "three"]);
    }

    #[test]
    fn concatenates_nested_markup() {
        let html = page("<p>first <b>second</b> third</p>");
        assert_eq!(extract_lines_sync(&html).unwrap(), ["first second third"]);
    }

    #[test]
    fn container_needs_both_classes() {
        let html = r#"<div class="article-body-cont"><p>close but wrong</p></div>"#;
        assert!(extract_lines_sync(html).unwrap().is_empty());
    }

    #[test]
    fn missing_container_yields_empty_not_error() {
        let html = "<html><body><p>stray paragraph</p></body></html>";
        assert!(extract_lines_sync(html).unwrap().is_empty());
    }

    #[test]
    fn tolerates_malformed_markup() {
        let html = r#"<div class="article-body-cont mt20"><p>unclosed"#;
        assert_eq!(extract_lines_sync(html).unwrap(), ["unclosed"]);
    }

    #[tokio::test]
    async fn async_wrapper_matches_sync() {
        let html = page("<p>async</p>");
        assert_eq!(extract_lines(html).await.unwrap(), ["async"]);
    }
}
