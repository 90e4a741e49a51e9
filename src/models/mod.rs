// Model exports
pub mod catalog;
pub mod domain;
pub mod requests;
pub mod responses;

pub use catalog::{Catalog, HotelRestaurants, RestaurantsFile};
pub use domain::{Bounds, Coordinate, Hotel, OpeningHours, Restaurant};
pub use requests::{DetailsQuery, DispatchRequest, RestaurantsQuery};
pub use responses::{CuisineOption, CuisinesResponse, DispatchResponse, ErrorResponse, HealthResponse, HotelsResponse};
