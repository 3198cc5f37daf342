// Canonical hotel model shared by every supplier
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Image {
    link: String,
    description: String,
}

impl Image {
    pub fn new(link: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            description: description.into(),
        }
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Amenity names as accumulated from suppliers.
///
/// Storage keeps every entry, duplicates included. Serialization emits each
/// list deduplicated and sorted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Amenities {
    pub general: Vec<String>,
    pub room: Vec<String>,
}

fn dedup_sorted(items: &[String]) -> Vec<&str> {
    items
        .iter()
        .map(String::as_str)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

impl Serialize for Amenities {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Amenities", 2)?;
        state.serialize_field("general", &dedup_sorted(&self.general))?;
        state.serialize_field("room", &dedup_sorted(&self.room))?;
        state.end()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Images {
    pub rooms: Vec<Image>,
    pub site: Vec<Image>,
    pub amenities: Vec<Image>,
}

// Field order here is the output order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Hotel {
    pub id: String,
    pub destination_id: String,
    pub name: String,
    pub location: Location,
    pub description: String,
    pub amenities: Amenities,
    pub images: Images,
    pub booking_conditions: Vec<String>,
}

impl Hotel {
    pub fn new(
        id: impl Into<String>,
        destination_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            destination_id: destination_id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Folds another supplier's view of the same hotel into this one.
    ///
    /// `id`, `destination_id`, `name` and `location` are left untouched, so
    /// the first record seen for an id keeps them. The description is
    /// replaced only by a strictly longer one. Amenities, images and booking
    /// conditions are appended as-is.
    ///
    /// Callers must only merge hotels sharing the same id.
    pub fn merge(&mut self, other: Hotel) {
        debug_assert_eq!(self.id, other.id, "merging hotels with different ids");

        if other.description.chars().count() > self.description.chars().count() {
            self.description = other.description;
        }

        self.amenities.general.extend(other.amenities.general);
        self.amenities.room.extend(other.amenities.room);

        self.images.rooms.extend(other.images.rooms);
        self.images.site.extend(other.images.site);
        self.images.amenities.extend(other.images.amenities);

        self.booking_conditions.extend(other.booking_conditions);
    }

    /// Ordered JSON view of this hotel.
    pub fn to_value(&self) -> serde_json::Value {
        // Serializing plain structs of strings and floats cannot fail.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// Renders hotels as a pretty-printed JSON array (2-space indent).
pub fn to_json_pretty(hotels: &[Hotel]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(hotels)
}
