// Hotel data aggregation: normalize supplier records and merge them by hotel id

pub mod coerce;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod registry;
pub mod supplier;

// Re-export key types for convenience
pub use config::PipelineConfig;
pub use error::{FetchError, ParseError};
pub use model::{to_json_pretty, Amenities, Hotel, Image, Images, Location};
pub use pipeline::{fetch_hotels, HotelPipeline, PipelineOutput};
pub use registry::{HotelFilter, HotelRegistry};
pub use supplier::{
    Acme, HttpTransport, Paperflies, Patagonia, Supplier, SupplierBatch, SupplierReport,
};
