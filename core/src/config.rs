//! Transport settings.

use std::time::Duration;

use crate::error::ApiError;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the API lives and how long a round-trip may take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl TransportConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read `SYLIUS_BASE_URL` and optionally `SYLIUS_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ApiError> {
        let base_url = std::env::var("SYLIUS_BASE_URL")
            .map_err(|_| ApiError::invalid("SYLIUS_BASE_URL", "environment variable not set"))?;
        Self::from_parts(&base_url, std::env::var("SYLIUS_TIMEOUT_SECS").ok().as_deref())
    }

    fn from_parts(base_url: &str, timeout_secs: Option<&str>) -> Result<Self, ApiError> {
        if base_url.is_empty() {
            return Err(ApiError::invalid("SYLIUS_BASE_URL", "cannot be empty"));
        }
        let config = Self::new(base_url);
        match timeout_secs {
            None => Ok(config),
            Some(raw) => {
                let secs: u64 = raw
                    .parse()
                    .map_err(|_| ApiError::invalid("SYLIUS_TIMEOUT_SECS", format!("not a number: {raw}")))?;
                Ok(config.with_timeout(Duration::from_secs(secs)))
            }
        }
    }
}
