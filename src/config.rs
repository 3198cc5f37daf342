// Pipeline configuration
use std::time::Duration;

pub const ACME_URL: &str = "https://5f2be0b4ffc88500167b85a0.mockapi.io/suppliers/acme";
pub const PAPERFLIES_URL: &str =
    "https://5f2be0b4ffc88500167b85a0.mockapi.io/suppliers/paperflies";
pub const PATAGONIA_URL: &str =
    "https://5f2be0b4ffc88500167b85a0.mockapi.io/suppliers/patagonia";

pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Per-request timeout for each supplier fetch.
    pub timeout_ms: u64,
    /// How many supplier requests may be in flight at once. `1` fetches
    /// strictly one after another.
    pub max_concurrent_fetches: usize,
    pub acme_url: String,
    pub paperflies_url: String,
    pub patagonia_url: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_concurrent_fetches: 3,
            acme_url: ACME_URL.to_string(),
            paperflies_url: PAPERFLIES_URL.to_string(),
            patagonia_url: PATAGONIA_URL.to_string(),
        }
    }
}

impl PipelineConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
