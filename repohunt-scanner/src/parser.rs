//! HTML extraction for search result listings and repository pages.
//!
//! Both parsers are tied to the site's markup. The selectors below are the
//! only place that knows about it; when the site changes its class names,
//! this module is what needs updating.

use crate::error::{Result, ScanError};
use crate::result::{LanguageStats, ResultRecord};
use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use url::Url;

/// Container wrapping each hit on a search results page
const RESULT_CONTAINER_SELECTOR: &str = "div.f4.text-normal";
const RESULT_LINK_SELECTOR: &str = "a[href]";

/// Language names in a repository's language bar
const LANGUAGE_LABEL_SELECTOR: &str = "span.lang";
/// Percentages paired by position with the language names
const LANGUAGE_PERCENT_SELECTOR: &str = "span.percent";

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| ScanError::ParseError(format!("invalid selector {}: {:?}", css, e)))
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Extract one record per search hit, in document order.
///
/// Hrefs are resolved against `origin`. Containers without a link are
/// skipped, and a page with no hits yields an empty list.
pub fn parse_result_list(html: &str, origin: &Url) -> Result<Vec<ResultRecord>> {
    let document = Html::parse_document(html);
    let container_selector = selector(RESULT_CONTAINER_SELECTOR)?;
    let link_selector = selector(RESULT_LINK_SELECTOR)?;

    let mut records = Vec::new();

    for container in document.select(&container_selector) {
        let Some(href) = container
            .select(&link_selector)
            .next()
            .and_then(|link| link.value().attr("href"))
        else {
            debug!("Result container without a link, skipping");
            continue;
        };

        match origin.join(href) {
            Ok(absolute) => {
                debug!("Found result: {}", absolute);
                records.push(ResultRecord::new(absolute.to_string()));
            }
            Err(e) => debug!("Unresolvable result href {}: {}", href, e),
        }
    }

    debug!("Parsed {} results", records.len());
    Ok(records)
}

/// Extract the language breakdown from a repository page.
///
/// Labels and percentages are two separate element lists zipped by
/// position. Lists of different lengths are rejected rather than truncated.
pub fn parse_language_stats(html: &str) -> Result<LanguageStats> {
    let document = Html::parse_document(html);
    let label_selector = selector(LANGUAGE_LABEL_SELECTOR)?;
    let percent_selector = selector(LANGUAGE_PERCENT_SELECTOR)?;

    let labels: Vec<String> = document.select(&label_selector).map(element_text).collect();
    let percents = document
        .select(&percent_selector)
        .map(|element| parse_percent(&element_text(element)))
        .collect::<Result<Vec<f64>>>()?;

    if labels.len() != percents.len() {
        return Err(ScanError::ParseError(format!(
            "found {} language labels but {} percentages",
            labels.len(),
            percents.len()
        )));
    }

    Ok(labels.into_iter().zip(percents).collect())
}

/// Parse `"47.2%"` into `47.2`. Only finite values in `0..=100` are accepted.
fn parse_percent(raw: &str) -> Result<f64> {
    let number = raw.strip_suffix('%').unwrap_or(raw).trim();
    let percent = number
        .parse::<f64>()
        .map_err(|e| ScanError::ParseError(format!("invalid percentage '{}': {}", raw, e)))?;

    if !percent.is_finite() || !(0.0..=100.0).contains(&percent) {
        return Err(ScanError::ParseError(format!(
            "percentage '{}' is outside 0-100",
            raw
        )));
    }

    Ok(percent)
}
