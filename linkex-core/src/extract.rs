use crate::progress::BarProgress;
use anyhow::Context;
use linkex_scanner::fetcher::DEFAULT_TIMEOUT_SECS;
use linkex_scanner::{HttpFetcher, LinkExtractor, LinkMap, ProgressSink};
use std::sync::Arc;
use tracing::info;

/// Options for configuring an extraction run
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub urls: Vec<String>,
    pub timeout_secs: u64,
    /// Upper bound on fetches in flight; `None` fetches every URL at once
    pub max_concurrency: Option<usize>,
    pub show_progress_bars: bool,
    /// Bars to draw into, shared with the log writer; built from
    /// `show_progress_bars` when absent
    pub progress: Option<BarProgress>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            urls: Vec::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_concurrency: None,
            show_progress_bars: true,
            progress: None,
        }
    }
}

/// Execute an extraction run with the given options.
///
/// Individual URLs that fail are logged and left out of the result.
pub async fn execute_extract(options: ExtractOptions) -> anyhow::Result<LinkMap> {
    let ExtractOptions {
        urls,
        timeout_secs,
        max_concurrency,
        show_progress_bars,
        progress,
    } = options;

    let fetcher = HttpFetcher::with_timeout(timeout_secs)
        .context("Failed to create HTTP client")?;

    let mut extractor = LinkExtractor::new(fetcher);
    if let Some(limit) = max_concurrency {
        extractor = extractor.with_max_concurrency(limit);
    }

    let progress: Arc<dyn ProgressSink> = match progress {
        Some(bars) => Arc::new(bars),
        None if show_progress_bars => Arc::new(BarProgress::new()),
        None => Arc::new(BarProgress::hidden()),
    };

    info!(
        "Starting extraction of {} URL(s) (timeout {}s, concurrency {})",
        urls.len(),
        timeout_secs,
        max_concurrency.map_or_else(|| "unbounded".to_string(), |n| n.to_string())
    );

    let links = extractor
        .extract(Some(urls), Some(progress))
        .await
        .context("Link extraction failed")?;

    Ok(links)
}
