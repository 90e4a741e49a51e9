// Service exports
pub mod catalog;

pub use catalog::{catalog_from_json, CatalogError, CatalogLoader};
