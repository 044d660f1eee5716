use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::error::DataError;

// ---------------------------------------------------------------------------
// Fetch abstraction
// ---------------------------------------------------------------------------

/// Retrieval of a raw CSV resource by identifier (a URL or file name).
pub trait Fetch {
    fn fetch(&self, resource: &str) -> Result<String>;
}

/// Fetches resources over HTTP(S).
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("building HTTP client")?;
        Ok(HttpFetcher { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, resource: &str) -> Result<String> {
        let response = self
            .client
            .get(resource)
            .send()
            .and_then(|r| r.error_for_status())
            .with_context(|| format!("GET {resource}"))?;
        response.text().context("reading response body")
    }
}

/// Serves resources from a local directory, matching on the resource's
/// final path segment. Used for offline runs (see `generate_sample`) and
/// for tests.
pub struct FileFetcher {
    root: PathBuf,
}

impl FileFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileFetcher { root: root.into() }
    }
}

impl Fetch for FileFetcher {
    fn fetch(&self, resource: &str) -> Result<String> {
        let path = self.root.join(file_name(resource));
        std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))
    }
}

/// Final path segment with "%20" decoded, so URL identifiers map onto plain
/// file names on disk.
fn file_name(resource: &str) -> String {
    let segment = resource.rsplit('/').next().unwrap_or(resource);
    segment.replace("%20", " ")
}

// ---------------------------------------------------------------------------
// Per-resource memoization
// ---------------------------------------------------------------------------

/// Memoizes raw fetch results per resource identifier for the process
/// lifetime. Both outcomes are cached: a resource is fetched at most once,
/// and a failed fetch stays failed until restart rather than being retried.
pub struct SourceCache<F> {
    fetcher: F,
    entries: BTreeMap<String, Result<Arc<str>, DataError>>,
}

impl<F: Fetch> SourceCache<F> {
    pub fn new(fetcher: F) -> Self {
        SourceCache {
            fetcher,
            entries: BTreeMap::new(),
        }
    }

    /// Return the cached content of `resource`, fetching it on first access.
    pub fn get(&mut self, resource: &str) -> Result<Arc<str>, DataError> {
        if let Some(cached) = self.entries.get(resource) {
            return cached.clone();
        }
        let outcome = match self.fetcher.fetch(resource) {
            Ok(text) => {
                log::info!("fetched {resource} ({} bytes)", text.len());
                Ok(Arc::<str>::from(text))
            }
            Err(err) => {
                log::error!("fetch failed for {resource}: {err:#}");
                Err(DataError::unavailable(err))
            }
        };
        self.entries.insert(resource.to_string(), outcome.clone());
        outcome
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
