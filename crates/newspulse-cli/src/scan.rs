//! Per-entity scan orchestration.
//!
//! Sequences discovery → result set → per-URL extract/filter/score, printing
//! one report block per article. Every per-URL failure is isolated: the
//! governing policy is best-effort per item, never abort the batch.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use newspulse_core::AppConfig;
use newspulse_extract::{build_result_set, discovery, ContentExtractor};
use newspulse_nlp::{HttpNerClient, HttpSentimentModel, RelevanceFilter, SentimentEngine};

/// Extra seconds granted to a headless render on top of the page-fetch
/// timeout, since browser startup dominates the render budget.
const RENDER_TIMEOUT_MARGIN_SECS: u64 = 15;

/// Run one full scan for `entity`.
///
/// Articles are processed strictly sequentially. A Ctrl-C stops the run
/// before the next article's extraction begins; the in-flight article is
/// abandoned with the process.
///
/// # Errors
///
/// Returns an error only if the shared HTTP client cannot be constructed.
/// Discovery and per-article failures are reported and recovered.
pub(crate) async fn run_scan(config: &AppConfig, entity: &str) -> anyhow::Result<()> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .build()?;

    println!("searching news for: {entity}");

    let raw_links = discovery::fetch_search_links(&client, &config.user_agent, entity).await;
    let urls = build_result_set(&raw_links, config.result_cap);

    if urls.is_empty() {
        println!("no news URLs found for {entity}");
        return Ok(());
    }
    tracing::info!(entity, count = urls.len(), "built URL result set");

    let extractor = ContentExtractor::with_default_strategies(
        client.clone(),
        &config.user_agent,
        &config.headless_cmd,
        config.render_wait_ms,
        config.request_timeout_secs + RENDER_TIMEOUT_MARGIN_SECS,
    );
    let filter = RelevanceFilter::with_period_space(Box::new(HttpNerClient::new(
        client.clone(),
        &config.ner_url,
    )));
    let engine = SentimentEngine::new(Box::new(HttpSentimentModel::new(
        client,
        &config.sentiment_url,
    )));

    let interrupted = Arc::new(AtomicBool::new(false));
    {
        let interrupted = Arc::clone(&interrupted);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                interrupted.store(true, Ordering::SeqCst);
            }
        });
    }

    // Run-scoped seen-set: the result set is already deduplicated, but a URL
    // must never be processed twice within one run regardless of upstream.
    let mut seen: HashSet<String> = HashSet::new();

    for (index, url) in urls.iter().enumerate() {
        if interrupted.load(Ordering::SeqCst) {
            tracing::info!("interrupt received, stopping before next article");
            break;
        }
        if !seen.insert(url.clone()) {
            continue;
        }

        println!("\narticle {}: {url}", index + 1);

        let Some(content) = extractor.extract(url).await else {
            println!("  failed to extract content");
            continue;
        };

        let relevant = filter.filter(&content.text, entity).await;
        let verdict = engine.analyze(&relevant).await;

        println!("  extracted via: {}", content.strategy);
        println!("  {}", preview(&relevant, config.preview_chars));
        println!("  sentiment: {} ({:.2})", verdict.label, verdict.score);
    }

    Ok(())
}

/// Single-line preview of the relevant text, truncated on a character
/// boundary with a trailing ellipsis when content was cut.
fn preview(text: &str, max_chars: usize) -> String {
    let mut out: String = text.chars().take(max_chars).collect();
    if text.chars().count() > max_chars {
        out.push_str("...");
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::preview;

    #[test]
    fn preview_passes_short_text_through() {
        assert_eq!(preview("short text", 500), "short text");
    }

    #[test]
    fn preview_truncates_and_marks_cut() {
        let text = "a".repeat(600);
        let out = preview(&text, 500);
        assert_eq!(out.len(), 503);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn preview_respects_multibyte_boundaries() {
        let text = "é".repeat(600);
        let out = preview(&text, 500);
        assert_eq!(out.chars().count(), 503);
    }

    #[test]
    fn preview_collapses_newlines() {
        assert_eq!(preview("line one\nline two", 500), "line one line two");
    }
}
