use async_trait::async_trait;
use serde_json::Value;

use super::Supplier;
use crate::coerce::{
    as_record, image_list, record_or_empty, required_id, required_string,
    string_list_or_default, string_or_default,
};
use crate::config::PAPERFLIES_URL;
use crate::error::ParseError;
use crate::model::{Amenities, Hotel, Images, Location};

/// Paperflies: nested location/amenities/images, images keyed `link`/`caption`.
/// Carries no coordinates.
#[derive(Debug, Clone)]
pub struct Paperflies {
    endpoint: String,
}

impl Paperflies {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for Paperflies {
    fn default() -> Self {
        Self::new(PAPERFLIES_URL)
    }
}

#[async_trait]
impl Supplier for Paperflies {
    fn name(&self) -> &'static str {
        "paperflies"
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn parse(&self, raw: &Value) -> Result<Hotel, ParseError> {
        let data = as_record(raw)?;
        let location = record_or_empty(data, "location");
        let amenities = record_or_empty(data, "amenities");
        let images = record_or_empty(data, "images");

        Ok(Hotel {
            id: required_id(data, "hotel_id")?,
            destination_id: required_string(data, "destination_id")?,
            name: required_string(data, "hotel_name")?,
            location: Location {
                address: string_or_default(location, "address"),
                city: string_or_default(location, "city"),
                country: string_or_default(location, "country"),
                ..Default::default()
            },
            description: string_or_default(data, "details"),
            amenities: Amenities {
                general: string_list_or_default(amenities, "general"),
                room: string_list_or_default(amenities, "room"),
            },
            images: Images {
                rooms: image_list(images, "rooms", "link", "caption"),
                site: image_list(images, "site", "link", "caption"),
                amenities: Vec::new(),
            },
            booking_conditions: string_list_or_default(data, "booking_conditions"),
        })
    }
}
