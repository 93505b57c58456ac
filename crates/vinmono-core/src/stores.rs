//! Store domain models.

use serde::{Deserialize, Serialize};

/// A wall-clock time of day, minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
}

/// One weekday's opening hours. `opens`/`closes` are `None` when the store
/// is closed that day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    /// Localized weekday name as the upstream sends it, e.g. `"Mandag"`.
    pub week_day: String,
    pub opens: Option<TimeOfDay>,
    pub closes: Option<TimeOfDay>,
}

impl OpeningHours {
    /// `true` when the store does not open at all on this day.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.opens.is_none() || self.closes.is_none()
    }
}

/// A store as listed by the store-search API.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BaseStore {
    /// Unique upstream store number.
    pub store_number: String,
    pub name: String,
    pub street_address: String,
    pub zip: Option<String>,
    pub city: Option<String>,
    /// `[latitude, longitude]`.
    pub gps_coordinates: [f64; 2],
}

/// The full store-detail shape: [`BaseStore`] plus assortment tier and a
/// week of opening hours.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PopulatedStore {
    #[serde(flatten)]
    pub base: BaseStore,
    /// Assortment tier, `"1"` (smallest selection) through `"7"`.
    pub category: String,
    pub opening_hours: Vec<OpeningHours>,
}

/// A store row from the bulk CSV export.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StreamStore {
    pub store_number: String,
    pub name: String,
    pub street_address: String,
    pub zip: Option<String>,
    pub city: Option<String>,
    pub gps_coordinates: [f64; 2],
    pub opening_hours: Vec<OpeningHours>,
}
