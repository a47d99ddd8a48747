// Errors surfaced to the repohunt binary, each mapped to a process exit code

use repohunt_scanner::ScanError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("please specify <input_file> and <output_file>")]
    MissingFileArguments,

    #[error("keywords are mandatory in input")]
    MissingKeywords,

    #[error("proxies are mandatory in input")]
    MissingProxies,

    #[error("input JSON is malformed: {0}")]
    MalformedInput(#[source] serde_json::Error),

    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("output JSON error: {0}")]
    Output(#[source] serde_json::Error),

    #[error(transparent)]
    Scan(#[from] ScanError),
}

impl ScrapeError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScrapeError::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ScrapeError::MissingKeywords | ScrapeError::Scan(ScanError::EmptyKeywords) => 2,
            ScrapeError::MissingProxies
            | ScrapeError::MissingFileArguments
            | ScrapeError::Scan(ScanError::EmptyProxyPool) => 3,
            ScrapeError::MalformedInput(_) => 4,
            ScrapeError::Io { .. } | ScrapeError::Output(_) | ScrapeError::Scan(_) => 1,
        }
    }
}
