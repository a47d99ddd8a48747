// Decoding and validation of the JSON input file

use crate::error::ScrapeError;
use repohunt_scanner::{ProxyPool, SearchRequest, SearchType};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Input file layout:
/// `{"keywords": [...], "proxies": [...], "type": "Repositories"}`
#[derive(Debug, Deserialize)]
struct RawInput {
    keywords: Option<Vec<String>>,
    proxies: Option<Vec<String>>,
    #[serde(rename = "type")]
    search_type: Option<SearchType>,
}

/// A validated input: what to search for and which proxies may carry it
#[derive(Debug, Clone)]
pub struct ScrapeInput {
    pub request: SearchRequest,
    pub proxies: ProxyPool,
}

impl ScrapeInput {
    pub fn from_file(path: &Path) -> Result<Self, ScrapeError> {
        let content = fs::read_to_string(path).map_err(|e| ScrapeError::io(path, e))?;
        Self::from_json_str(&content)
    }

    /// Checks run in a fixed order: syntax, then keywords, then proxies
    pub fn from_json_str(json: &str) -> Result<Self, ScrapeError> {
        let raw: RawInput = serde_json::from_str(json).map_err(ScrapeError::MalformedInput)?;

        let keywords = raw
            .keywords
            .filter(|k| !k.is_empty())
            .ok_or(ScrapeError::MissingKeywords)?;
        let proxies = raw
            .proxies
            .filter(|p| !p.is_empty())
            .ok_or(ScrapeError::MissingProxies)?;

        Ok(Self {
            request: SearchRequest::new(keywords, raw.search_type)?,
            proxies: ProxyPool::new(proxies)?,
        })
    }

    pub fn search_type(&self) -> Option<&SearchType> {
        self.request.search_type()
    }

    /// Only repository searches get per-result details
    pub fn wants_enrichment(&self) -> bool {
        self.search_type()
            .map(SearchType::supports_enrichment)
            .unwrap_or(false)
    }
}
