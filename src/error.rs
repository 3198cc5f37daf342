// Error types for supplier fetching and record parsing
use thiserror::Error;

// Transport-level failures. Recovered per supplier: the batch becomes empty.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timeout after {0}ms")]
    Timeout(u64),

    #[error("Unexpected status {status_code} from {url}")]
    Status { status_code: u16, url: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Response from {0} is not a JSON array")]
    NotAnArray(String),

    #[error("Client error: {0}")]
    Client(String),
}

// Record-level failures. Recovered per record: the record is dropped.
#[derive(Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid value for {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Record is not a JSON object")]
    NotARecord,
}
