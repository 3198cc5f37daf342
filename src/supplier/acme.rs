use async_trait::async_trait;
use serde_json::Value;

use super::Supplier;
use crate::coerce::{
    as_record, float_or_default, required_id, required_string, string_list_or_default,
    string_or_default,
};
use crate::config::ACME_URL;
use crate::error::ParseError;
use crate::model::{Amenities, Hotel, Location};

/// Acme: flat PascalCase records, facilities only, no images.
#[derive(Debug, Clone)]
pub struct Acme {
    endpoint: String,
}

impl Acme {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for Acme {
    fn default() -> Self {
        Self::new(ACME_URL)
    }
}

#[async_trait]
impl Supplier for Acme {
    fn name(&self) -> &'static str {
        "acme"
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn parse(&self, raw: &Value) -> Result<Hotel, ParseError> {
        let data = as_record(raw)?;

        Ok(Hotel {
            id: required_id(data, "Id")?,
            destination_id: required_string(data, "DestinationId")?,
            name: required_string(data, "Name")?,
            location: Location {
                lat: float_or_default(data, "Latitude"),
                lng: float_or_default(data, "Longitude"),
                address: string_or_default(data, "Address"),
                city: string_or_default(data, "City"),
                country: string_or_default(data, "Country"),
            },
            description: string_or_default(data, "Description"),
            amenities: Amenities {
                general: string_list_or_default(data, "Facilities"),
                room: Vec::new(),
            },
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_full_record() {
        let raw = json!({
            "Id": "iJhz",
            "DestinationId": 5432,
            "Name": "Beach Villas Singapore",
            "Latitude": 1.264751,
            "Longitude": 103.824006,
            "Address": " 8 Sentosa Gateway, Beach Villas ",
            "City": "Singapore",
            "Country": "SG",
            "PostalCode": "098269",
            "Description": "  This 5 star hotel is located on the coastline of Singapore.",
            "Facilities": ["Pool", "BusinessCenter", "WiFi ", "DryCleaning", " Breakfast"]
        });

        let hotel = Acme::default().parse(&raw).unwrap();

        assert_eq!(hotel.id, "iJhz");
        assert_eq!(hotel.destination_id, "5432");
        assert_eq!(hotel.name, "Beach Villas Singapore");
        assert_eq!(hotel.location.lat, 1.264751);
        assert_eq!(hotel.location.lng, 103.824006);
        assert_eq!(hotel.location.address, " 8 Sentosa Gateway, Beach Villas ");
        assert_eq!(hotel.location.city, "Singapore");
        assert_eq!(hotel.location.country, "SG");
        assert_eq!(
            hotel.description,
            "  This 5 star hotel is located on the coastline of Singapore."
        );
        // Facilities are taken as-is
        assert_eq!(hotel.amenities.general[2], "WiFi ");
        assert_eq!(hotel.amenities.general.len(), 5);
        assert!(hotel.amenities.room.is_empty());
        assert_eq!(hotel.images, crate::model::Images::default());
        assert!(hotel.booking_conditions.is_empty());
    }

    #[test]
    fn test_parse_missing_optional_fields() {
        let raw = json!({
            "Id": "f8c9",
            "DestinationId": 1122,
            "Name": "Hilton Shinjuku",
            "Latitude": "",
            "Longitude": null
        });

        let hotel = Acme::default().parse(&raw).unwrap();

        assert_eq!(hotel.location, Location::default());
        assert_eq!(hotel.description, "");
        assert!(hotel.amenities.general.is_empty());
    }

    #[test]
    fn test_parse_missing_id() {
        let raw = json!({ "DestinationId": 5432, "Name": "Beach Villas Singapore" });
        assert_eq!(
            Acme::default().parse(&raw),
            Err(ParseError::MissingField("Id"))
        );
    }

    #[test]
    fn test_parse_non_record() {
        assert_eq!(
            Acme::default().parse(&json!(["Id", "iJhz"])),
            Err(ParseError::NotARecord)
        );
    }

    #[test]
    fn test_parse_empty_id() {
        let raw = json!({ "Id": "", "DestinationId": 5, "Name": "Ghost" });
        assert_eq!(
            Acme::default().parse(&raw),
            Err(ParseError::InvalidField {
                field: "Id",
                reason: "empty".to_string()
            })
        );
    }

    #[test]
    fn test_parse_null_name() {
        // A null required field counts as missing, so the record is dropped
        let raw = json!({ "Id": "iJhz", "DestinationId": 5432, "Name": null });
        assert_eq!(
            Acme::default().parse(&raw),
            Err(ParseError::MissingField("Name"))
        );
    }
}
