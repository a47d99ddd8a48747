use crate::error::{Result, ScanError};
use crate::fetcher::Fetcher;
use crate::parser::parse_language_stats;
use crate::result::{Extra, ResultRecord};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Called before each record is fetched with its index and URL
pub type ProgressCallback = Arc<dyn Fn(usize, String) + Send + Sync>;

/// What to do when a single record cannot be enriched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EnrichFailurePolicy {
    /// Stop at the first failing record and return its error
    #[default]
    Abort,
    /// Log the failure, leave the record's `extra` empty and carry on
    Skip,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichSummary {
    pub enriched: usize,
    pub skipped: usize,
}

/// Adds owner and language stats to url-only records by visiting each
/// record's page in turn.
pub struct Enricher<'a> {
    fetcher: &'a Fetcher,
    policy: EnrichFailurePolicy,
    progress_callback: Option<ProgressCallback>,
}

impl<'a> Enricher<'a> {
    pub fn new(fetcher: &'a Fetcher) -> Self {
        Self {
            fetcher,
            policy: EnrichFailurePolicy::default(),
            progress_callback: None,
        }
    }

    pub fn with_policy(mut self, policy: EnrichFailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Enrich every record in order, one request at a time.
    pub async fn enrich(&self, records: &mut [ResultRecord]) -> Result<EnrichSummary> {
        info!(
            "Enriching {} results via {} ({:?} on failure)",
            records.len(),
            self.fetcher.proxy(),
            self.policy
        );

        let mut summary = EnrichSummary::default();

        for (index, record) in records.iter_mut().enumerate() {
            if let Some(ref callback) = self.progress_callback {
                callback(index, record.url.clone());
            }

            match self.fetch_extra(&record.url).await {
                Ok(extra) => {
                    debug!(
                        "{}: owner {}, {} languages",
                        record.url,
                        extra.owner,
                        extra.language_stats.len()
                    );
                    record.extra = Some(extra);
                    summary.enriched += 1;
                }
                Err(e) => match self.policy {
                    EnrichFailurePolicy::Abort => return Err(e),
                    EnrichFailurePolicy::Skip => {
                        warn!("Skipping enrichment of {}: {}", record.url, e);
                        summary.skipped += 1;
                    }
                },
            }
        }

        info!(
            "Enrichment complete: {} enriched, {} skipped",
            summary.enriched, summary.skipped
        );
        Ok(summary)
    }

    async fn fetch_extra(&self, url: &str) -> Result<Extra> {
        let owner = derive_owner(url)?;
        let response = self.fetcher.fetch(url).await?;
        if !(200..300).contains(&response.status_code) {
            return Err(ScanError::HttpStatus {
                url: url.to_string(),
                status: response.status_code,
            });
        }
        let language_stats = parse_language_stats(&response.body)?;

        Ok(Extra {
            owner,
            language_stats,
        })
    }
}

/// First path component after the host: the `atuldjadhav` in
/// `https://github.com/atuldjadhav/DropBox-Cloud-Storage`.
pub fn derive_owner(url: &str) -> Result<String> {
    url.split('/')
        .nth(3)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ScanError::InvalidUrl(format!("no owner segment in {}", url)))
}
