use crate::error::Result;
use reqwest::{Client, Proxy};
use tracing::{debug, warn};

/// Raw response of a single GET
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub status_code: u16,
    pub text_encoding: String,
    pub body: String,
}

/// HTTP client bound to one proxy for the lifetime of a run.
///
/// Every HTTPS request made through a `Fetcher` is tunnelled through the
/// proxy it was built with. Plain HTTP goes out directly.
pub struct Fetcher {
    client: Client,
    proxy: String,
}

impl Fetcher {
    pub fn new(proxy: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("repohunt/", env!("CARGO_PKG_VERSION")))
            .proxy(Proxy::https(proxy)?)
            .build()?;

        Ok(Self {
            client,
            proxy: proxy.to_string(),
        })
    }

    pub fn proxy(&self) -> &str {
        &self.proxy
    }

    /// Issue exactly one GET request. Transport failures are returned as-is;
    /// a non-success status is not an error.
    pub async fn fetch(&self, url: &str) -> Result<FetchResult> {
        debug!("Fetching {} via {}", url, self.proxy);

        let response = self.client.get(url).send().await?;

        let status_code = response.status().as_u16();
        let text_encoding = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .and_then(charset_from_content_type)
            .unwrap_or_else(|| "utf-8".to_string());

        if !response.status().is_success() {
            warn!("{} answered with status {}", url, status_code);
        }

        let body = response.text().await?;
        debug!("Received {} bytes from {}", body.len(), url);

        Ok(FetchResult {
            status_code,
            text_encoding,
            body,
        })
    }
}

/// Extract the `charset` parameter from a Content-Type header value
fn charset_from_content_type(content_type: &str) -> Option<String> {
    content_type
        .split(';')
        .skip(1)
        .filter_map(|param| param.split_once('='))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("charset"))
        .map(|(_, value)| value.trim().trim_matches('"').to_ascii_lowercase())
        .filter(|charset| !charset.is_empty())
}
