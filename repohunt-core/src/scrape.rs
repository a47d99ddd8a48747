use crate::error::ScrapeError;
use crate::input::ScrapeInput;
use indicatif::{ProgressBar, ProgressStyle};
use repohunt_scanner::parser::parse_result_list;
use repohunt_scanner::{
    EnrichFailurePolicy, EnrichSummary, Enricher, Fetcher, ResultRecord, ScanError,
    encode_request,
};
use std::sync::Arc;
use tracing::info;
use url::Url;

/// Options for configuring a scrape run
pub struct ScrapeOptions {
    pub input: ScrapeInput,
    /// Site origin used for the search URL and for resolving result links
    pub base_url: String,
    pub failure_policy: EnrichFailurePolicy,
    pub show_progress_bars: bool,
}

/// Callback for reporting scrape milestones
pub type ScrapeProgressCallback = Arc<dyn Fn(String) + Send + Sync>;

/// Everything a run produced
#[derive(Debug)]
pub struct ScrapeOutcome {
    pub request_url: String,
    pub proxy: String,
    pub records: Vec<ResultRecord>,
    /// `None` when the search type does not support enrichment
    pub enrichment: Option<EnrichSummary>,
}

/// Execute one search and, for repository searches, enrich every result.
///
/// The search page and all detail pages go through the same randomly
/// chosen proxy. Requests are made one after another.
pub async fn execute_scrape(
    options: ScrapeOptions,
    progress_callback: Option<ScrapeProgressCallback>,
) -> Result<ScrapeOutcome, ScrapeError> {
    let ScrapeOptions {
        input,
        base_url,
        failure_policy,
        show_progress_bars,
    } = options;

    let report = |msg: String| {
        if let Some(ref callback) = progress_callback {
            callback(msg);
        }
    };

    let origin = Url::parse(&base_url)
        .map_err(|e| ScanError::InvalidUrl(format!("{}: {}", base_url, e)))?;
    let request_url = encode_request(&base_url, &input.request);
    let proxy = input.proxies.choose().to_string();

    info!("Searching {} via proxy {}", request_url, proxy);
    report(format!("Searching {} via {}", request_url, proxy));

    let fetcher = Fetcher::new(&proxy)?;
    let response = fetcher.fetch(&request_url).await?;

    let mut records = parse_result_list(&response.body, &origin)?;
    info!("Search returned {} results", records.len());
    report(format!("Found {} results", records.len()));

    let enrichment = if input.wants_enrichment() {
        let summary = enrich_with_progress(
            &fetcher,
            &mut records,
            failure_policy,
            show_progress_bars,
        )
        .await?;
        report(format!(
            "Enriched {} results ({} skipped)",
            summary.enriched, summary.skipped
        ));
        Some(summary)
    } else {
        None
    };

    Ok(ScrapeOutcome {
        request_url,
        proxy,
        records,
        enrichment,
    })
}

async fn enrich_with_progress(
    fetcher: &Fetcher,
    records: &mut [ResultRecord],
    failure_policy: EnrichFailurePolicy,
    show_progress_bars: bool,
) -> Result<EnrichSummary, ScrapeError> {
    let mut enricher = Enricher::new(fetcher).with_policy(failure_policy);

    // Progress bar over the detail fetches (only if enabled)
    let progress_bar = if show_progress_bars {
        let pb = ProgressBar::new(records.len() as u64);
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} [{pos}/{len}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Fetching details...");
        Some(pb)
    } else {
        None
    };

    if let Some(ref pb) = progress_bar {
        let pb_clone = pb.clone();
        enricher = enricher.with_progress_callback(Arc::new(move |index: usize, url: String| {
            pb_clone.set_position(index as u64);
            pb_clone.set_message(url);
        }));
    }

    let result = enricher.enrich(records).await;

    if let Some(ref pb) = progress_bar {
        pb.finish_and_clear();
    }

    result.map_err(ScrapeError::from)
}
