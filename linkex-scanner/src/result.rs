use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Links extracted from one successfully fetched page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageLinks {
    pub url: String,
    pub origin: String,
    pub links: Vec<String>,
}

impl PageLinks {
    pub fn new(url: String, origin: String, links: Vec<String>) -> Self {
        Self { url, origin, links }
    }
}

/// Links grouped by the origin of the page they were found on.
///
/// Keys iterate in sorted order. Links under one key keep the order in which
/// their pages were merged, without deduplication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkMap {
    by_origin: BTreeMap<String, Vec<String>>,
}

impl LinkMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page's links under its origin, creating the entry if needed
    pub fn merge(&mut self, page: PageLinks) {
        self.by_origin
            .entry(page.origin)
            .or_default()
            .extend(page.links);
    }

    pub fn get(&self, origin: &str) -> Option<&[String]> {
        self.by_origin.get(origin).map(Vec::as_slice)
    }

    pub fn contains_origin(&self, origin: &str) -> bool {
        self.by_origin.contains_key(origin)
    }

    pub fn origins(&self) -> impl Iterator<Item = &str> {
        self.by_origin.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.by_origin
            .iter()
            .map(|(origin, links)| (origin.as_str(), links.as_slice()))
    }

    /// Number of origins
    pub fn len(&self) -> usize {
        self.by_origin.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_origin.is_empty()
    }

    /// Total number of links across all origins
    pub fn link_count(&self) -> usize {
        self.by_origin.values().map(Vec::len).sum()
    }
}
