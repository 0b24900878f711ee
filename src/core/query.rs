use crate::domain::model::{CoordinateMap, StoreRecord};
use crate::domain::ports::{CoordinateResolver, StoreCatalog};
use crate::domain::store::Store;
use crate::utils::error::{LocatorError, Result};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Aggregates the store catalog with bulk coordinate resolution and
/// answers the two queries the presentation layer needs: the full
/// store list and the stores near a postcode.
pub struct StoreQueryService<C: StoreCatalog, R: CoordinateResolver> {
    catalog: C,
    resolver: R,
    min_resolution_rate: f64,
}

impl<C: StoreCatalog, R: CoordinateResolver> StoreQueryService<C, R> {
    pub fn new(catalog: C, resolver: R, min_resolution_rate: f64) -> Self {
        Self {
            catalog,
            resolver,
            min_resolution_rate,
        }
    }

    /// All stores, enriched with resolved coordinates where available,
    /// sorted ascending by name.
    pub async fn list_stores(&self) -> Result<Vec<StoreRecord>> {
        let mut stores = self.catalog.list().await?;

        let postcodes = distinct_postcodes(&stores);
        let coordinate_map = self.resolver.resolve(&postcodes).await?;
        self.check_resolution_rate(&postcodes, &coordinate_map);

        attach_coordinates(&mut stores, &coordinate_map);
        stores.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(stores)
    }

    /// Stores within `radius_km` of the query postcode, sorted from
    /// north to south. Every returned record carries a coordinate.
    ///
    /// The query postcode rides along in the same bulk resolution call
    /// as the store postcodes, so one round trip covers everything. If
    /// the query postcode itself fails to resolve there is no point to
    /// measure from and the result is empty.
    pub async fn nearby_stores(
        &self,
        query_postcode: &str,
        radius_km: f64,
    ) -> Result<Vec<StoreRecord>> {
        if radius_km < 0.0 {
            return Err(LocatorError::InvalidRadiusError { radius_km });
        }

        let stores = self.catalog.list().await?;

        let mut postcodes = distinct_postcodes(&stores);
        if !postcodes.iter().any(|p| p == query_postcode) {
            postcodes.push(query_postcode.to_string());
        }
        let coordinate_map = self.resolver.resolve(&postcodes).await?;
        self.check_resolution_rate(&postcodes, &coordinate_map);

        let Some(query) = coordinate_map.get(query_postcode).copied() else {
            tracing::warn!(
                "Query postcode '{}' did not resolve; returning no stores",
                query_postcode
            );
            return Ok(Vec::new());
        };

        let mut stores = stores;
        attach_coordinates(&mut stores, &coordinate_map);

        let mut nearby = Vec::new();
        for record in stores {
            let store = Store::new(
                record.name.clone(),
                record.postcode.clone(),
                record.coordinate(),
            );
            if store.is_within_radius(&query, radius_km)? {
                nearby.push(record);
            }
        }

        // North to south. Every kept record has a latitude because the
        // radius check already excluded coordinate-less stores.
        nearby.sort_by(|a, b| b.lat.partial_cmp(&a.lat).unwrap_or(Ordering::Equal));

        Ok(nearby)
    }

    fn check_resolution_rate(&self, requested: &[String], resolved: &CoordinateMap) {
        if requested.is_empty() {
            return;
        }
        let rate = resolved.len() as f64 / requested.len() as f64;
        if rate < self.min_resolution_rate {
            tracing::warn!(
                "Only {}/{} postcodes resolved ({:.0}%), below the agreed {:.0}% threshold",
                resolved.len(),
                requested.len(),
                rate * 100.0,
                self.min_resolution_rate * 100.0
            );
        }
    }
}

fn distinct_postcodes(stores: &[StoreRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    stores
        .iter()
        .filter(|s| seen.insert(s.postcode.as_str()))
        .map(|s| s.postcode.clone())
        .collect()
}

fn attach_coordinates(stores: &mut [StoreRecord], coordinate_map: &CoordinateMap) {
    for store in stores {
        if let Some(coordinate) = coordinate_map.get(&store.postcode) {
            store.set_coordinate(*coordinate);
        }
    }
}
