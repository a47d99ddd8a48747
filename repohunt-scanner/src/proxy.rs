use crate::error::{Result, ScanError};
use rand::seq::SliceRandom;

/// Proxy addresses (`host:port`) available for a run
#[derive(Debug, Clone)]
pub struct ProxyPool {
    proxies: Vec<String>,
}

impl ProxyPool {
    pub fn new(proxies: Vec<String>) -> Result<Self> {
        if proxies.is_empty() {
            return Err(ScanError::EmptyProxyPool);
        }
        Ok(Self { proxies })
    }

    /// Pick one proxy uniformly at random. Calls are independent of each other.
    pub fn choose(&self) -> &str {
        self.proxies
            .choose(&mut rand::thread_rng())
            .map(String::as_str)
            // new() rejects empty pools
            .unwrap_or(self.proxies[0].as_str())
    }

    pub fn len(&self) -> usize {
        self.proxies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proxies.is_empty()
    }

    pub fn contains(&self, proxy: &str) -> bool {
        self.proxies.iter().any(|p| p == proxy)
    }
}
