// Fetch from every supplier, merge, filter
use futures::stream::{self, StreamExt};

use crate::config::PipelineConfig;
use crate::error::FetchError;
use crate::model::Hotel;
use crate::registry::{HotelFilter, HotelRegistry};
use crate::supplier::{default_suppliers, HttpTransport, Supplier, SupplierReport};

#[derive(Debug, Default)]
pub struct PipelineOutput {
    pub hotels: Vec<Hotel>,
    pub reports: Vec<SupplierReport>,
}

pub struct HotelPipeline {
    suppliers: Vec<Box<dyn Supplier>>,
    transport: HttpTransport,
    max_concurrent_fetches: usize,
}

impl HotelPipeline {
    /// Pipeline over the compiled-in supplier list.
    pub fn new(config: &PipelineConfig) -> Result<Self, FetchError> {
        let transport = HttpTransport::new(config.timeout())?;
        Ok(Self::with_suppliers(
            default_suppliers(config),
            transport,
            config.max_concurrent_fetches,
        ))
    }

    pub fn with_suppliers(
        suppliers: Vec<Box<dyn Supplier>>,
        transport: HttpTransport,
        max_concurrent_fetches: usize,
    ) -> Self {
        Self {
            suppliers,
            transport,
            max_concurrent_fetches: max_concurrent_fetches.max(1),
        }
    }

    /// Fetches every supplier and merges the batches into `registry`.
    ///
    /// Requests may overlap, but batches are merged one at a time in supplier
    /// order, so precedence is the same as a sequential run.
    pub async fn fetch_all(&self, registry: &mut HotelRegistry) -> Vec<SupplierReport> {
        let mut batches = stream::iter(&self.suppliers)
            .map(|supplier| supplier.fetch(&self.transport))
            .buffered(self.max_concurrent_fetches);

        let mut reports = Vec::with_capacity(self.suppliers.len());
        while let Some(batch) = batches.next().await {
            let report = batch.report;
            tracing::info!(
                supplier = report.supplier,
                fetched = report.fetched,
                parsed = report.parsed,
                dropped = report.dropped,
                failed = report.error.is_some(),
                "supplier batch merged"
            );
            registry.merge_hotels(batch.hotels);
            reports.push(report);
        }
        reports
    }

    pub async fn run(&self, filter: &HotelFilter) -> PipelineOutput {
        let mut registry = HotelRegistry::new();
        let reports = self.fetch_all(&mut registry).await;

        let hotels: Vec<Hotel> = registry.find(filter).into_iter().cloned().collect();
        tracing::debug!(
            total = registry.len(),
            matched = hotels.len(),
            "registry filtered"
        );

        PipelineOutput { hotels, reports }
    }
}

/// Runs the full pipeline with `config` and returns the matching hotels.
pub async fn fetch_hotels(
    config: &PipelineConfig,
    filter: &HotelFilter,
) -> Result<PipelineOutput, FetchError> {
    let pipeline = HotelPipeline::new(config)?;
    Ok(pipeline.run(filter).await)
}
