use crate::core::{
    filters::{filter_restaurants, flatten},
    render::{list_view, map_focus, map_overview, restaurant_details, DisplayOptions, ListView, MapView, RestaurantDetails},
    sorting::sort_restaurants,
    view::{Intent, ViewState},
};
use crate::models::{Catalog, Restaurant};

/// Main listing orchestrator - runs the filter, sort and render pipeline
///
/// # Pipeline Stages
/// 1. Flatten and filter by hotel, cuisine and minimum rating
/// 2. Order by the selected key and direction
/// 3. Build card view descriptions
#[derive(Debug, Clone, Default)]
pub struct RestaurantFinder {
    options: DisplayOptions,
}

impl RestaurantFinder {
    pub fn new(options: DisplayOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DisplayOptions {
        &self.options
    }

    /// Filtered and ordered restaurants for a view state
    pub fn restaurants(&self, catalog: &Catalog, state: &ViewState) -> Vec<Restaurant> {
        let filtered = filter_restaurants(catalog, &state.criteria());
        sort_restaurants(
            filtered,
            state.sort,
            state.direction,
            state.reference_point(catalog),
        )
    }

    pub fn list(&self, catalog: &Catalog, state: &ViewState) -> ListView {
        let restaurants = self.restaurants(catalog, state);
        let view = list_view(catalog, &restaurants, state.hotel_id.as_deref(), &self.options);

        tracing::debug!(
            "Listing {} restaurants (sort={} {})",
            view.count,
            state.sort,
            state.direction
        );

        view
    }

    /// Details for one restaurant, looked up among the selected hotel's
    /// restaurants or, without a selection, among all of them
    pub fn details(
        &self,
        catalog: &Catalog,
        hotel_id: Option<&str>,
        place_id: &str,
    ) -> Option<RestaurantDetails> {
        let candidates = flatten(catalog, hotel_id);
        let restaurant = candidates.iter().find(|r| r.place_id == place_id)?;
        Some(restaurant_details(catalog, restaurant, hotel_id, &self.options))
    }

    /// Apply an intent and render the resulting list
    pub fn dispatch(&self, catalog: &Catalog, state: ViewState, intent: Intent) -> (ViewState, ListView) {
        tracing::debug!("Applying intent {:?}", intent);
        let state = state.apply(intent);
        let view = self.list(catalog, &state);
        (state, view)
    }

    /// Map for a view state: the selected hotel's area, or every hotel
    pub fn map(&self, catalog: &Catalog, hotel_id: Option<&str>) -> Option<MapView> {
        match hotel_id.filter(|id| !id.is_empty()) {
            Some(id) => map_focus(catalog, id, &self.options),
            None => Some(map_overview(catalog)),
        }
    }
}
