use async_trait::async_trait;
use serde_json::Value;

use super::Supplier;
use crate::coerce::{
    as_record, float_or_default, image_list, record_or_empty, required_id,
    required_string, string_or_default, trimmed_list_or_default,
};
use crate::config::PATAGONIA_URL;
use crate::error::ParseError;
use crate::model::{Amenities, Hotel, Images, Location};

/// Patagonia: flat amenity list (treated as room amenities) and images keyed
/// `url`/`description`. Carries no city or country.
#[derive(Debug, Clone)]
pub struct Patagonia {
    endpoint: String,
}

impl Patagonia {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for Patagonia {
    fn default() -> Self {
        Self::new(PATAGONIA_URL)
    }
}

#[async_trait]
impl Supplier for Patagonia {
    fn name(&self) -> &'static str {
        "patagonia"
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn parse(&self, raw: &Value) -> Result<Hotel, ParseError> {
        let data = as_record(raw)?;
        let images = record_or_empty(data, "images");

        Ok(Hotel {
            id: required_id(data, "id")?,
            destination_id: required_string(data, "destination")?,
            name: required_string(data, "name")?,
            location: Location {
                lat: float_or_default(data, "lat"),
                lng: float_or_default(data, "lng"),
                address: string_or_default(data, "address"),
                ..Default::default()
            },
            description: string_or_default(data, "info"),
            amenities: Amenities {
                general: Vec::new(),
                room: trimmed_list_or_default(data, "amenities"),
            },
            images: Images {
                rooms: image_list(images, "rooms", "url", "description"),
                site: Vec::new(),
                amenities: image_list(images, "amenities", "url", "description"),
            },
            booking_conditions: Vec::new(),
        })
    }
}
