use crate::domain::model::{CoordinateMap, StoreRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of the raw store list. Backed by a JSON file today; the trait
/// keeps the query service ignorant of where the records come from so a
/// database or API catalog can be swapped in later.
#[async_trait]
pub trait StoreCatalog: Send + Sync {
    async fn list(&self) -> Result<Vec<StoreRecord>>;
}

/// Bulk postcode to coordinate resolution. One call resolves a whole
/// batch; postcodes that cannot be resolved are left out of the result
/// rather than reported as errors.
#[async_trait]
pub trait CoordinateResolver: Send + Sync {
    async fn resolve(&self, postcodes: &[String]) -> Result<CoordinateMap>;
}
