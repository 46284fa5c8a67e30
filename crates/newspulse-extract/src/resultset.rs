//! URL result-set construction.
//!
//! Turns the raw `href` soup scraped from a search page into at most `cap`
//! distinct article URLs. Dedup is order-preserving: the first occurrence of
//! a URL wins and iteration order matches discovery order, so which
//! candidates survive the cap is deterministic across runs.

use std::collections::HashSet;

use regex::Regex;

/// Hosts containing this domain belong to the search provider and are never
/// article URLs.
const PROVIDER_DOMAIN: &str = "google.com";

/// Shape raw search-page links into a deduplicated, capped URL result set.
///
/// Per raw link: take the first `https?://…` match, cut it at the first `&`
/// (search-result hrefs append tracking parameters there), drop it if it does
/// not parse as an absolute URL or its host belongs to the search provider.
/// Survivors are deduplicated preserving first-seen order and capped at `cap`.
#[must_use]
pub fn build_result_set(raw_links: &[String], cap: usize) -> Vec<String> {
    let url_re = Regex::new(r"(https?://\S+)").expect("valid url regex");

    let mut seen: HashSet<String> = HashSet::new();
    let mut urls: Vec<String> = Vec::new();

    for raw in raw_links {
        let Some(m) = url_re.captures(raw).and_then(|c| c.get(1)) else {
            continue;
        };
        let candidate = m.as_str().split('&').next().unwrap_or_default();

        let Ok(parsed) = url::Url::parse(candidate) else {
            continue;
        };
        let Some(host) = parsed.host_str() else {
            continue;
        };
        if host.contains(PROVIDER_DOMAIN) {
            continue;
        }

        if seen.insert(candidate.to_string()) {
            urls.push(candidate.to_string());
            if urls.len() == cap {
                break;
            }
        }
    }

    urls
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(links: &[&str]) -> Vec<String> {
        links.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn extracts_url_embedded_in_redirect_href() {
        let links = raw(&["/url?q=https://example.com/story&sa=U&ved=xyz"]);
        assert_eq!(build_result_set(&links, 10), vec!["https://example.com/story"]);
    }

    #[test]
    fn strips_trailing_query_continuation() {
        let links = raw(&["https://example.com/a?id=1&utm_source=search"]);
        assert_eq!(build_result_set(&links, 10), vec!["https://example.com/a?id=1"]);
    }

    #[test]
    fn drops_links_without_absolute_url() {
        let links = raw(&["/settings", "#top", "javascript:void(0)"]);
        assert!(build_result_set(&links, 10).is_empty());
    }

    #[test]
    fn excludes_provider_hosts() {
        let links = raw(&[
            "https://news.google.com/articles/abc",
            "https://www.google.com/preferences",
            "https://example.com/kept",
        ]);
        assert_eq!(build_result_set(&links, 10), vec!["https://example.com/kept"]);
    }

    #[test]
    fn dedup_preserves_first_seen_order() {
        let links = raw(&[
            "https://b.example.com/2",
            "https://a.example.com/1",
            "https://b.example.com/2",
            "https://c.example.com/3",
        ]);
        assert_eq!(
            build_result_set(&links, 10),
            vec![
                "https://b.example.com/2",
                "https://a.example.com/1",
                "https://c.example.com/3",
            ]
        );
    }

    #[test]
    fn caps_at_requested_size_keeping_earliest() {
        let links: Vec<String> = (0..15)
            .map(|i| format!("https://example.com/story-{i}"))
            .collect();
        let set = build_result_set(&links, 10);
        assert_eq!(set.len(), 10);
        assert_eq!(set[0], "https://example.com/story-0");
        assert_eq!(set[9], "https://example.com/story-9");
    }

    // 12 raw links: 7 distinct article URLs, 3 repeat occurrences, 2 provider
    // links. Exactly the 7 distinct non-provider URLs survive.
    #[test]
    fn mixed_duplicates_and_provider_links() {
        let links = raw(&[
            "https://one.example.com/a",
            "https://two.example.com/b",
            "https://one.example.com/a",
            "https://news.google.com/articles/x",
            "https://three.example.com/c",
            "https://four.example.com/d",
            "https://two.example.com/b",
            "https://www.google.com/search?q=acme",
            "https://five.example.com/e",
            "https://six.example.com/f",
            "https://three.example.com/c",
            "https://seven.example.com/g",
        ]);
        let set = build_result_set(&links, 10);
        assert_eq!(set.len(), 7);
        let unique: HashSet<&String> = set.iter().collect();
        assert_eq!(unique.len(), 7, "result set must not contain duplicates");
        assert!(set.iter().all(|u| !u.contains("google.com")));
    }
}
