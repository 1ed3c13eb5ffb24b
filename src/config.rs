//! Runtime settings for talking to the project generator.

use crate::constants::{limits, DEFAULT_SERVICE_URL};
use std::time::Duration;

/// Settings shared by the fetcher and the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Endpoint returning the zipped project, without query.
    pub service_url: String,
    /// Upper bound for the whole download, headers and body.
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Archives larger than this are rejected.
    pub max_archive_bytes: u64,
}

impl GeneratorConfig {
    pub fn with_service_url(mut self, service_url: impl Into<String>) -> Self {
        self.service_url = service_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_archive_bytes(mut self, max_archive_bytes: u64) -> Self {
        self.max_archive_bytes = max_archive_bytes;
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            timeout: Duration::from_secs(limits::DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(limits::CONNECT_TIMEOUT_SECS),
            max_archive_bytes: limits::DEFAULT_MAX_ARCHIVE_MIB * 1024 * 1024,
        }
    }
}
