// Service exports
pub mod catalog;

pub use catalog::{load_catalog_from_path, load_catalog_from_str, CatalogLoad, SkippedRecord};
