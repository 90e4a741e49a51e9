//! Restaurant Map - restaurant discovery around a set of hotels
//!
//! This library provides the listing core behind the map widget: Haversine
//! distance, restaurant filtering and sorting, and the view descriptions the
//! list, details modal and map are drawn from.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    distance::{distance, haversine_distance},
    filter_restaurants, sort_restaurants, FilterCriteria, Intent, RestaurantFinder, SortDirection,
    SortKey, ViewState,
};
pub use models::{Catalog, Coordinate, Hotel, HotelRestaurants, Restaurant};
pub use services::{CatalogError, CatalogLoader};
