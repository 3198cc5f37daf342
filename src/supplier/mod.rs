// Supplier adapters: one per upstream provider, each normalizing its own
// record shape into the canonical `Hotel`.

mod acme;
mod paperflies;
mod patagonia;
pub mod transport;

pub use acme::Acme;
pub use paperflies::Paperflies;
pub use patagonia::Patagonia;
pub use transport::HttpTransport;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::PipelineConfig;
use crate::error::ParseError;
use crate::model::Hotel;

/// Outcome of one supplier fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SupplierReport {
    pub supplier: &'static str,
    /// Records in the upstream array.
    pub fetched: usize,
    /// Records that produced a hotel.
    pub parsed: usize,
    /// Records skipped because a required field was missing or invalid.
    pub dropped: usize,
    /// Transport failure, if the supplier could not be read at all.
    pub error: Option<String>,
}

#[derive(Debug, Default)]
pub struct SupplierBatch {
    pub hotels: Vec<Hotel>,
    pub report: SupplierReport,
}

#[async_trait]
pub trait Supplier: Send + Sync {
    fn name(&self) -> &'static str;

    fn endpoint(&self) -> &str;

    /// Normalizes one raw record. An `Err` means the record is skipped.
    fn parse(&self, raw: &Value) -> Result<Hotel, ParseError>;

    /// Fetches and parses this supplier's records.
    ///
    /// Never fails: a transport error yields an empty batch, and records that
    /// do not parse are dropped individually. Both are logged and counted in
    /// the batch report.
    async fn fetch(&self, transport: &HttpTransport) -> SupplierBatch {
        match transport.get_json_array(self.endpoint()).await {
            Ok(records) => parse_records(self, &records),
            Err(e) => {
                tracing::warn!(
                    supplier = self.name(),
                    endpoint = self.endpoint(),
                    error = %e,
                    "supplier fetch failed"
                );
                SupplierBatch {
                    hotels: Vec::new(),
                    report: SupplierReport {
                        supplier: self.name(),
                        error: Some(e.to_string()),
                        ..Default::default()
                    },
                }
            }
        }
    }
}

/// Parses each record independently, skipping the ones that fail.
pub fn parse_records<S: Supplier + ?Sized>(supplier: &S, records: &[Value]) -> SupplierBatch {
    let mut hotels = Vec::with_capacity(records.len());
    let mut dropped = 0;

    for (index, raw) in records.iter().enumerate() {
        match supplier.parse(raw) {
            Ok(hotel) => hotels.push(hotel),
            Err(e) => {
                dropped += 1;
                tracing::warn!(supplier = supplier.name(), index, error = %e, "dropping record");
            }
        }
    }

    let report = SupplierReport {
        supplier: supplier.name(),
        fetched: records.len(),
        parsed: hotels.len(),
        dropped,
        error: None,
    };
    SupplierBatch { hotels, report }
}

/// The compiled-in supplier list. Merge precedence follows this order.
pub fn default_suppliers(config: &PipelineConfig) -> Vec<Box<dyn Supplier>> {
    vec![
        Box::new(Acme::new(config.acme_url.clone())),
        Box::new(Paperflies::new(config.paperflies_url.clone())),
        Box::new(Patagonia::new(config.patagonia_url.clone())),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_parse_records_skips_bad_records() {
        let records = vec![
            json!({ "Id": "iJhz", "DestinationId": 5432, "Name": "Beach Villas Singapore" }),
            json!({ "DestinationId": 5432, "Name": "No id" }),
            json!("not a record"),
            json!({ "Id": "", "DestinationId": 5432, "Name": "Blank id" }),
            json!({ "Id": "SjyX", "DestinationId": 5432, "Name": "InterContinental" }),
        ];

        let batch = parse_records(&Acme::default(), &records);

        let ids: Vec<&str> = batch.hotels.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["iJhz", "SjyX"]);
        assert_eq!(
            batch.report,
            SupplierReport {
                supplier: "acme",
                fetched: 5,
                parsed: 2,
                dropped: 3,
                error: None,
            }
        );
    }

    #[test]
    fn test_default_supplier_order() {
        let suppliers = default_suppliers(&PipelineConfig::default());
        let names: Vec<&str> = suppliers.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["acme", "paperflies", "patagonia"]);
    }

    #[tokio::test]
    async fn test_fetch_degrades_to_empty_batch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/suppliers/paperflies"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let supplier = Paperflies::new(format!("{}/suppliers/paperflies", server.uri()));
        let transport = HttpTransport::new(Duration::from_secs(1)).unwrap();
        let batch = supplier.fetch(&transport).await;

        assert!(batch.hotels.is_empty());
        assert_eq!(batch.report.supplier, "paperflies");
        assert_eq!(batch.report.fetched, 0);
        assert!(batch.report.error.unwrap().contains("500"));
    }

    #[tokio::test]
    async fn test_fetch_parses_array() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/suppliers/patagonia"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": "iJhz", "destination": 5432, "name": "Beach Villas Singapore" },
                { "destination": 5432, "name": "Missing id" }
            ])))
            .mount(&server)
            .await;

        let supplier = Patagonia::new(format!("{}/suppliers/patagonia", server.uri()));
        let transport = HttpTransport::new(Duration::from_secs(1)).unwrap();
        let batch = supplier.fetch(&transport).await;

        assert_eq!(batch.hotels.len(), 1);
        assert_eq!(batch.hotels[0].destination_id, "5432");
        assert_eq!(batch.report.dropped, 1);
        assert!(batch.report.error.is_none());
    }
}
