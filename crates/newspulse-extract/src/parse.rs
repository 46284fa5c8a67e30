//! HTML-to-text helpers shared by the fetch strategies.

use scraper::{Html, Selector};

/// Containers tried, in order, by the article-reader strategy.
const ARTICLE_SELECTORS: [&str; 7] = [
    "article",
    "main",
    "[role='main']",
    ".article-body",
    ".post-content",
    ".entry-content",
    "#article-body",
];

/// Article containers shorter than this are treated as a miss (nav shells,
/// cookie banners) so the extractor can fall through to the next strategy.
const MIN_ARTICLE_CHARS: usize = 100;

/// Extract the text of the main article container, if the page has one.
///
/// Returns `None` when no known container matches or the matched container
/// carries too little text to be a real article body.
pub(crate) fn article_text(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    for raw in ARTICLE_SELECTORS {
        let selector = Selector::parse(raw).expect("valid article selector");
        if let Some(container) = document.select(&selector).next() {
            let text = collapse_whitespace(&container.text().collect::<Vec<_>>().join(" "));
            if text.chars().count() >= MIN_ARTICLE_CHARS {
                return Some(text);
            }
        }
    }

    None
}

/// Join the text of every `<p>` element, one paragraph per line.
///
/// Returns an empty string for pages without paragraph text; callers decide
/// whether that counts as a miss.
pub(crate) fn paragraph_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let selector = Selector::parse("p").expect("valid paragraph selector");

    document
        .select(&selector)
        .map(|p| collapse_whitespace(&p.text().collect::<Vec<_>>().join(" ")))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}
