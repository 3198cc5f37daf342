// In-memory store of merged hotels keyed by id
use indexmap::IndexMap;
use std::collections::HashSet;

use crate::model::Hotel;

/// Sentinel accepted on the command line for "no filter".
pub const NO_FILTER: &str = "none";

/// Hotel id / destination id constraints. `None` on an axis means no
/// constraint; `Some` of an empty set matches nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HotelFilter {
    pub hotel_ids: Option<HashSet<String>>,
    pub destination_ids: Option<HashSet<String>>,
}

impl HotelFilter {
    pub fn new(
        hotel_ids: Option<HashSet<String>>,
        destination_ids: Option<HashSet<String>>,
    ) -> Self {
        Self {
            hotel_ids,
            destination_ids,
        }
    }

    /// Builds a filter from the two command-line arguments.
    pub fn from_args(hotel_ids: &str, destination_ids: &str) -> Self {
        Self::new(parse_id_list(hotel_ids), parse_id_list(destination_ids))
    }

    pub fn matches(&self, hotel: &Hotel) -> bool {
        let id_ok = self
            .hotel_ids
            .as_ref()
            .map_or(true, |ids| ids.contains(&hotel.id));
        let destination_ok = self
            .destination_ids
            .as_ref()
            .map_or(true, |ids| ids.contains(&hotel.destination_id));
        id_ok && destination_ok
    }
}

/// Parses a comma-separated id list. The case-insensitive sentinel `none`
/// yields `None`. Entries are trimmed and blanks discarded.
pub fn parse_id_list(arg: &str) -> Option<HashSet<String>> {
    if arg.trim().eq_ignore_ascii_case(NO_FILTER) {
        return None;
    }
    Some(
        arg.split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

#[derive(Debug, Default)]
pub struct HotelRegistry {
    // Keeps first-insertion order so output is stable between runs.
    hotels: IndexMap<String, Hotel>,
}

impl HotelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.hotels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Hotel> {
        self.hotels.get(id)
    }

    /// Inserts new hotels and merges the rest into the hotel already stored
    /// under the same id.
    pub fn merge_hotels(&mut self, incoming: impl IntoIterator<Item = Hotel>) {
        for hotel in incoming {
            match self.hotels.get_mut(&hotel.id) {
                Some(existing) => existing.merge(hotel),
                None => {
                    self.hotels.insert(hotel.id.clone(), hotel);
                }
            }
        }
    }

    pub fn find(&self, filter: &HotelFilter) -> Vec<&Hotel> {
        self.hotels
            .values()
            .filter(|hotel| filter.matches(hotel))
            .collect()
    }
}
