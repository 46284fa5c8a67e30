//! News search-results page scrape.
//!
//! The search provider is a black-box URL source: one GET for the query
//! `"<entity> news"`, then every `href` on the page is collected verbatim.
//! Shaping (URL regex, provider-domain exclusion, dedup, cap) happens in
//! [`crate::resultset`].

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use scraper::{Html, Selector};

/// Fetch the search-results page for an entity and return every raw `href`.
///
/// A network error or non-2xx status is recovered locally: the failure is
/// logged and an empty list returned, so a dead search provider never aborts
/// a scan.
pub async fn fetch_search_links(
    client: &reqwest::Client,
    user_agent: &str,
    entity: &str,
) -> Vec<String> {
    fetch_links_from(client, user_agent, &search_url(entity), entity).await
}

/// Fetch `url` and return every raw `href` on the page, with the same
/// recovery behavior as [`fetch_search_links`]. Parameterized on the full
/// URL so alternate search endpoints can be scraped.
pub async fn fetch_links_from(
    client: &reqwest::Client,
    user_agent: &str,
    url: &str,
    entity: &str,
) -> Vec<String> {
    let response = match client
        .get(url)
        .header(reqwest::header::USER_AGENT, user_agent)
        .send()
        .await
    {
        Ok(resp) => resp,
        Err(e) => {
            tracing::warn!(entity, error = %e, "news search request failed");
            return Vec::new();
        }
    };

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(entity, status = status.as_u16(), "news search returned non-2xx");
        return Vec::new();
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(entity, error = %e, "failed to read search response body");
            return Vec::new();
        }
    };

    let links = collect_raw_links(&body);
    tracing::debug!(entity, count = links.len(), "collected raw search links");
    links
}

/// Build the provider search URL for `"<entity> news"` on the news vertical.
pub(crate) fn search_url(entity: &str) -> String {
    let query = format!("{entity} news");
    let encoded = utf8_percent_encode(&query, NON_ALPHANUMERIC).to_string();
    format!("https://www.google.com/search?q={encoded}&tbm=nws")
}

/// Collect the raw `href` attribute of every anchor on the page.
pub(crate) fn collect_raw_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("a[href]").expect("valid anchor selector");

    document
        .select(&selector)
        .filter_map(|a| a.value().attr("href"))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_encodes_entity_and_query() {
        let url = search_url("Acme Corp");
        assert_eq!(
            url,
            "https://www.google.com/search?q=Acme%20Corp%20news&tbm=nws"
        );
    }

    #[test]
    fn collect_raw_links_returns_every_href() {
        let html = r#"
            <html><body>
              <a href="/url?q=https://example.com/story&sa=U">one</a>
              <a href="https://news.example.org/acme">two</a>
              <a>no href</a>
            </body></html>"#;
        let links = collect_raw_links(html);
        assert_eq!(
            links,
            vec![
                "/url?q=https://example.com/story&sa=U".to_string(),
                "https://news.example.org/acme".to_string(),
            ]
        );
    }

    #[test]
    fn collect_raw_links_empty_page() {
        assert!(collect_raw_links("<html><body></body></html>").is_empty());
    }
}
