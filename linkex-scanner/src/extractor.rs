use crate::error::{Result, ScanError};
use crate::fetcher::Fetcher;
use crate::origin::origin_of;
use crate::parser::extract_links;
use crate::progress::{ProgressSink, ProgressTask};
use crate::result::{LinkMap, PageLinks};
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::{Mutex, Semaphore};
use tracing::{debug, info, warn};
use url::Url;

/// Completes a progress task when dropped, whichever way the unit of work ends
struct ProgressGuard(Box<dyn ProgressTask>);

impl Drop for ProgressGuard {
    fn drop(&mut self) {
        self.0.increment(100);
    }
}

/// Fetches pages concurrently and groups the links found on them by origin
pub struct LinkExtractor<F: Fetcher> {
    fetcher: Arc<F>,
    max_concurrency: Option<usize>,
}

impl<F: Fetcher> LinkExtractor<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            max_concurrency: None,
        }
    }

    /// Cap the number of fetches in flight. Zero is treated as one.
    pub fn with_max_concurrency(mut self, limit: usize) -> Self {
        self.max_concurrency = Some(limit.max(1));
        self
    }

    /// Fetch a single page and return its links resolved against `url`.
    ///
    /// Fetch errors are returned to the caller.
    pub async fn get_links(&self, url: Option<&str>) -> Result<Vec<String>> {
        let url = url.ok_or(ScanError::InvalidArgument("url"))?;
        let (_, links) = Self::fetch_and_parse(&self.fetcher, url).await?;
        Ok(links)
    }

    /// Extract links from every URL concurrently and group them by origin.
    ///
    /// Only missing arguments fail the call. A URL that cannot be fetched is
    /// logged and contributes nothing; the remaining URLs are unaffected.
    /// Returns once every URL has either succeeded or failed.
    pub async fn extract(
        &self,
        urls: Option<Vec<String>>,
        progress: Option<Arc<dyn ProgressSink>>,
    ) -> Result<LinkMap> {
        let urls = urls.ok_or(ScanError::InvalidArgument("urls"))?;
        let progress = progress.ok_or(ScanError::InvalidArgument("progress"))?;

        if urls.is_empty() {
            return Ok(LinkMap::new());
        }

        info!("Extracting links from {} URL(s)", urls.len());

        let results: Arc<Mutex<LinkMap>> = Arc::new(Mutex::new(LinkMap::new()));
        let semaphore = self
            .max_concurrency
            .map(|limit| Arc::new(Semaphore::new(limit)));

        let mut handles = Vec::with_capacity(urls.len());

        for url in urls {
            let task = ProgressGuard(progress.add_task(&format!("Extracting links: \"{}\"", url)));
            let fetcher = self.fetcher.clone();
            let results = results.clone();
            let semaphore = semaphore.clone();

            let handle = tokio::spawn(async move {
                let _task = task;
                let _permit = match semaphore {
                    Some(semaphore) => semaphore.acquire_owned().await.ok(),
                    None => None,
                };

                match Self::collect_page(&fetcher, &url).await {
                    Ok(Some(page)) => {
                        debug!(
                            "Merging {} link(s) from {} into {}",
                            page.links.len(),
                            page.url,
                            page.origin
                        );
                        results.lock().await.merge(page);
                    }
                    Ok(None) => debug!("No links found on {}", url),
                    Err(e) => warn!("Error fetching links from {}: {}", url, e),
                }
            });

            handles.push(handle);
        }

        for joined in join_all(handles).await {
            if let Err(e) = joined {
                warn!("Extraction task failed: {}", e);
            }
        }

        let results = std::mem::take(&mut *results.lock().await);
        info!(
            "Extraction complete. {} link(s) across {} origin(s)",
            results.link_count(),
            results.len()
        );
        Ok(results)
    }

    async fn collect_page(fetcher: &F, url: &str) -> Result<Option<PageLinks>> {
        let (parsed, links) = Self::fetch_and_parse(fetcher, url).await?;
        if links.is_empty() {
            return Ok(None);
        }

        let origin = origin_of(&parsed)?;
        Ok(Some(PageLinks::new(url.to_string(), origin, links)))
    }

    async fn fetch_and_parse(fetcher: &F, url: &str) -> Result<(Url, Vec<String>)> {
        let parsed = Url::parse(url).map_err(|e| ScanError::InvalidUrl(format!("{}: {}", url, e)))?;
        let body = fetcher.fetch(url).await?;
        let links = extract_links(&parsed, &body);
        Ok((parsed, links))
    }
}
