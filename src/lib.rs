pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{FileCatalog, PostcodesIoResolver};
pub use config::{AppConfig, CliConfig, Command};
pub use core::StoreQueryService;
pub use domain::model::{Coordinate, CoordinateMap, StoreRecord};
pub use domain::ports::{CoordinateResolver, StoreCatalog};
pub use utils::error::{LocatorError, Result};
