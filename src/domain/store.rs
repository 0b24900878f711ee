use crate::domain::geo;
use crate::domain::model::Coordinate;
use crate::utils::error::{LocatorError, Result};

/// Domain entity for a single store. Holds the radius membership logic;
/// the distance calculation itself lives in [`geo`].
#[derive(Debug, Clone)]
pub struct Store {
    pub name: String,
    pub postcode: String,
    pub coordinate: Option<Coordinate>,
}

impl Store {
    pub fn new(
        name: impl Into<String>,
        postcode: impl Into<String>,
        coordinate: Option<Coordinate>,
    ) -> Self {
        Self {
            name: name.into(),
            postcode: postcode.into(),
            coordinate,
        }
    }

    /// Distance from this store to the query point, or `None` when the
    /// store's own location is unknown. Public because it could be
    /// useful on its own later, i.e. to display how far away.
    pub fn distance_km_from(&self, query: &Coordinate) -> Option<f64> {
        self.coordinate
            .map(|own| geo::distance_km(own.lat, own.long, query.lat, query.long))
    }

    /// Whether this store lies within `radius_km` of the query point.
    ///
    /// A negative radius is a caller bug and fails the query outright,
    /// regardless of whether this store has a coordinate. A store with
    /// no coordinate is never within any radius.
    pub fn is_within_radius(&self, query: &Coordinate, radius_km: f64) -> Result<bool> {
        if radius_km < 0.0 {
            return Err(LocatorError::InvalidRadiusError { radius_km });
        }

        match self.distance_km_from(query) {
            Some(distance_km) => Ok(geo::is_within_radius(distance_km, radius_km)),
            None => Ok(false),
        }
    }
}
