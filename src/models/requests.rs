use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::{Intent, SortDirection, SortKey, ViewState};

/// Query string of the restaurant list endpoint
///
/// `sort` and `direction` are lenient: unknown values fall back to
/// distance and ascending.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RestaurantsQuery {
    #[serde(default)]
    pub hotel: Option<String>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[validate(range(min = 0.0, max = 5.0))]
    #[serde(default, alias = "min_rating", rename = "minRating")]
    pub min_rating: Option<f64>,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub direction: Option<String>,
}

impl RestaurantsQuery {
    pub fn to_view_state(&self) -> ViewState {
        let parse_key = |s: &String| s.parse::<SortKey>().unwrap_or_default();
        let parse_direction = |s: &String| s.parse::<SortDirection>().unwrap_or_default();

        ViewState {
            hotel_id: self.hotel.clone().filter(|h| !h.is_empty()),
            cuisine: self.cuisine.clone().filter(|c| !c.is_empty()),
            min_rating: self.min_rating.unwrap_or(0.0),
            sort: self.sort.as_ref().map(parse_key).unwrap_or_default(),
            direction: self.direction.as_ref().map(parse_direction).unwrap_or_default(),
        }
    }
}

/// Query string of the restaurant details endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetailsQuery {
    #[serde(default)]
    pub hotel: Option<String>,
}

/// Body of the view dispatch endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchRequest {
    #[serde(default)]
    pub state: ViewState,
    pub intent: Intent,
}
