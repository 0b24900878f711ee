// Adapters layer: concrete implementations of the domain ports for
// external systems (the store file on disk, the postcodes.io API).

pub mod catalog;
pub mod postcodes;

pub use catalog::FileCatalog;
pub use postcodes::PostcodesIoResolver;
