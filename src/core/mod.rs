pub mod query;

pub use crate::domain::model::{Coordinate, CoordinateMap, StoreRecord};
pub use crate::domain::ports::{CoordinateResolver, StoreCatalog};
pub use crate::utils::error::Result;
pub use query::StoreQueryService;
