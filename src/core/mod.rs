// Core algorithm exports
pub mod cuisine;
pub mod distance;
pub mod filters;
pub mod finder;
pub mod render;
pub mod sorting;
pub mod view;

pub use cuisine::{cuisine_label, cuisine_vocabulary, format_tag, relevant_tags, sentence_tag, GENERIC_TAGS};
pub use distance::{distance, haversine_distance, to_radians, DistanceUnit};
pub use filters::{filter_restaurants, filter_sequence, flatten, matches_criteria, FilterCriteria};
pub use finder::RestaurantFinder;
pub use render::{DisplayOptions, ListView, MapView, RestaurantCard, RestaurantDetails};
pub use sorting::{compare, sort_restaurants, SortDirection, SortKey};
pub use view::{Intent, ViewState};
