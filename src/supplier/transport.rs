// HTTP transport: GET a JSON array with a fixed timeout
use serde_json::Value;
use std::time::Duration;

use crate::error::FetchError;

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;
        Ok(Self::from_reqwest(client, timeout))
    }

    pub fn from_reqwest(client: reqwest::Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// Fetches `url` and returns the elements of its top-level JSON array.
    pub async fn get_json_array(&self, url: &str) -> Result<Vec<Value>, FetchError> {
        tracing::debug!(url, timeout_ms = self.timeout_ms(), "requesting supplier data");

        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status_code: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body: Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(self.timeout_ms())
            } else {
                FetchError::Decode(e.to_string())
            }
        })?;

        match body {
            Value::Array(items) => Ok(items),
            _ => Err(FetchError::NotAnArray(url.to_string())),
        }
    }

    fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }

    fn map_reqwest_error(&self, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout(self.timeout_ms())
        } else {
            FetchError::Network(e.to_string())
        }
    }
}
