use serde::{Deserialize, Serialize};

use crate::core::distance::Coordinate;
use crate::core::filters::FilterCriteria;
use crate::core::sorting::{SortDirection, SortKey};
use crate::models::Catalog;

/// Current selections of the filter/sort controls
///
/// Owned by the caller; every change produces a new value through
/// [`ViewState::apply`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    #[serde(default)]
    pub hotel_id: Option<String>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub min_rating: f64,
    #[serde(default)]
    pub sort: SortKey,
    #[serde(default)]
    pub direction: SortDirection,
}

/// A user action on the controls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum Intent {
    /// `None` or an empty id clears the hotel selection
    SelectHotel(Option<String>),
    SelectCuisine(Option<String>),
    SetMinRating(f64),
    SetSort(SortKey),
    ToggleDirection,
    Reset,
}

fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl ViewState {
    pub fn apply(self, intent: Intent) -> ViewState {
        match intent {
            Intent::SelectHotel(hotel_id) => ViewState {
                hotel_id: normalize(hotel_id),
                ..self
            },
            Intent::SelectCuisine(cuisine) => ViewState {
                cuisine: normalize(cuisine),
                ..self
            },
            Intent::SetMinRating(min_rating) => ViewState {
                min_rating: if min_rating.is_finite() { min_rating.max(0.0) } else { 0.0 },
                ..self
            },
            Intent::SetSort(sort) => ViewState { sort, ..self },
            Intent::ToggleDirection => ViewState {
                direction: self.direction.toggled(),
                ..self
            },
            Intent::Reset => ViewState::default(),
        }
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(
            self.hotel_id.as_deref(),
            self.cuisine.as_deref(),
            self.min_rating,
        )
    }

    /// Location of the selected hotel, the origin for distance sorting
    pub fn reference_point(&self, catalog: &Catalog) -> Option<Coordinate> {
        self.hotel_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .and_then(|id| catalog.hotel(id))
            .map(|hotel| hotel.coordinate())
    }
}
