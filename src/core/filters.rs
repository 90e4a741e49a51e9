use serde::{Deserialize, Serialize};

use crate::models::{Catalog, Restaurant};

/// Active restrictions on the restaurant list
///
/// An empty hotel or cuisine and a non-positive rating impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub hotel_id: Option<String>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub min_rating: f64,
}

impl FilterCriteria {
    pub fn new(hotel_id: Option<&str>, cuisine: Option<&str>, min_rating: f64) -> Self {
        Self {
            hotel_id: hotel_id.map(str::to_string),
            cuisine: cuisine.map(str::to_string),
            min_rating,
        }
    }

    pub fn hotel(&self) -> Option<&str> {
        non_empty(self.hotel_id.as_deref())
    }

    pub fn cuisine(&self) -> Option<&str> {
        non_empty(self.cuisine.as_deref())
    }

    /// Rating threshold, if one is active
    pub fn rating_threshold(&self) -> Option<f64> {
        (self.min_rating.is_finite() && self.min_rating > 0.0).then_some(self.min_rating)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Flatten the per-hotel groups into one sequence annotated with hotel ids
///
/// With a hotel id, only that hotel's restaurants are returned (empty if the
/// hotel is unknown); otherwise every group is concatenated in catalog order.
pub fn flatten(catalog: &Catalog, hotel_id: Option<&str>) -> Vec<Restaurant> {
    let annotate = |hotel: &str, restaurants: &[Restaurant]| -> Vec<Restaurant> {
        restaurants
            .iter()
            .map(|r| Restaurant {
                hotel_id: Some(hotel.to_string()),
                ..r.clone()
            })
            .collect()
    };

    match non_empty(hotel_id) {
        Some(id) => catalog
            .restaurants_for(id)
            .map(|restaurants| annotate(id, restaurants))
            .unwrap_or_default(),
        None => catalog
            .groups()
            .iter()
            .flat_map(|g| annotate(&g.id, &g.restaurants))
            .collect(),
    }
}

/// Check if a restaurant satisfies every active criterion
#[inline]
pub fn matches_criteria(restaurant: &Restaurant, criteria: &FilterCriteria) -> bool {
    if let Some(hotel) = criteria.hotel() {
        if restaurant.hotel_id.as_deref() != Some(hotel) {
            return false;
        }
    }

    // Exact tag match only
    if let Some(cuisine) = criteria.cuisine() {
        if !restaurant.has_tag(cuisine) {
            return false;
        }
    }

    // Unrated restaurants never pass an active threshold
    if let Some(threshold) = criteria.rating_threshold() {
        match restaurant.rating {
            Some(rating) if rating >= threshold => {}
            _ => return false,
        }
    }

    true
}

/// Filter an already flattened sequence, keeping its order
pub fn filter_sequence(restaurants: &[Restaurant], criteria: &FilterCriteria) -> Vec<Restaurant> {
    restaurants
        .iter()
        .filter(|r| matches_criteria(r, criteria))
        .cloned()
        .collect()
}

/// Select the restaurants matching the criteria, in catalog order
pub fn filter_restaurants(catalog: &Catalog, criteria: &FilterCriteria) -> Vec<Restaurant> {
    let flattened = flatten(catalog, criteria.hotel());
    let filtered = filter_sequence(&flattened, criteria);

    tracing::debug!(
        "Filtered {} of {} restaurants (hotel={:?}, cuisine={:?}, min_rating={})",
        filtered.len(),
        flattened.len(),
        criteria.hotel(),
        criteria.cuisine(),
        criteria.min_rating
    );

    filtered
}
