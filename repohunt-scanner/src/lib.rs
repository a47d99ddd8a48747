pub mod enricher;
pub mod error;
pub mod fetcher;
pub mod parser;
pub mod proxy;
pub mod request;
pub mod result;

pub use enricher::{EnrichFailurePolicy, EnrichSummary, Enricher, ProgressCallback};
pub use error::ScanError;
pub use fetcher::{FetchResult, Fetcher};
pub use proxy::ProxyPool;
pub use request::{DEFAULT_BASE_URL, SearchRequest, SearchType, encode_request};
pub use result::{Extra, LanguageStats, ResultRecord};
