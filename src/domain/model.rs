use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A resolved geographic position in signed decimal degrees.
/// Latitude and longitude always travel together; a record with only
/// one half is treated as having no coordinate at all.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub long: f64,
}

/// Postcode to coordinate mapping from one bulk resolution call.
/// A postcode that failed to resolve is simply absent, never mapped
/// to a placeholder value.
pub type CoordinateMap = HashMap<String, Coordinate>;

/// A raw store entry as it appears in the catalog, optionally enriched
/// with a resolved coordinate during aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreRecord {
    pub name: String,
    pub postcode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long: Option<f64>,
}

impl StoreRecord {
    pub fn new(name: impl Into<String>, postcode: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            postcode: postcode.into(),
            lat: None,
            long: None,
        }
    }

    pub fn coordinate(&self) -> Option<Coordinate> {
        match (self.lat, self.long) {
            (Some(lat), Some(long)) => Some(Coordinate { lat, long }),
            _ => None,
        }
    }

    pub fn set_coordinate(&mut self, coordinate: Coordinate) {
        self.lat = Some(coordinate.lat);
        self.long = Some(coordinate.long);
    }
}
