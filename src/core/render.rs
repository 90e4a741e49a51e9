//! View descriptions for the listing, details modal and map
//!
//! These are plain data: the front end decides how to draw them.

use serde::{Deserialize, Serialize};

use crate::core::cuisine::cuisine_label;
use crate::core::distance::{haversine_distance, Bounds, Coordinate, DistanceUnit};
use crate::models::{Catalog, Hotel, Restaurant};

/// Map center used before any hotel is shown (center of Japan)
pub const DEFAULT_CENTER: Coordinate = Coordinate::new(36.2048, 138.2529);
pub const DEFAULT_ZOOM: u8 = 5;
/// Zoom cap when the viewport is fitted to a single hotel
pub const SINGLE_HOTEL_MAX_ZOOM: u8 = 15;
pub const FOCUSED_RESTAURANT_ZOOM: u8 = 17;

const CARD_TAG_SEPARATOR: &str = " • ";
const DETAIL_TAG_SEPARATOR: &str = ", ";

/// Formatting options shared by every view
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayOptions {
    pub unit: DistanceUnit,
    pub currency_symbol: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            unit: DistanceUnit::Miles,
            currency_symbol: "¥".to_string(),
        }
    }
}

/// Five-character star bar, `★` for each whole rating point
pub fn rating_stars(rating: Option<f64>) -> String {
    let filled = rating
        .filter(|r| r.is_finite())
        .map(|r| r.floor().clamp(0.0, 5.0) as usize)
        .unwrap_or(0);
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

pub fn rating_text(rating: Option<f64>) -> String {
    match rating {
        Some(r) if r.is_finite() && r != 0.0 => r.to_string(),
        _ => "N/A".to_string(),
    }
}

/// Currency symbol repeated once per price tier, `None` for free or unknown
pub fn price_text(price_level: Option<u8>, symbol: &str) -> Option<String> {
    price_level.filter(|p| *p > 0).map(|p| symbol.repeat(p as usize))
}

pub fn distance_text(distance: f64, unit: DistanceUnit, hotel_name: &str) -> String {
    format!("{:.1} {} from {}", distance, unit.label(), hotel_name)
}

/// Walking directions from a hotel to a restaurant on Google Maps
pub fn directions_url(from: Coordinate, to: Coordinate) -> String {
    format!(
        "https://www.google.com/maps/dir/?api=1&origin={},{}&destination={},{}&travelmode=walking",
        from.lat, from.lng, to.lat, to.lng
    )
}

/// Pluralised result count, e.g. "1 restaurant found"
pub fn count_text(count: usize) -> String {
    format!(
        "{} restaurant{} found",
        count,
        if count == 1 { "" } else { "s" }
    )
}

pub const NO_RESULTS_MESSAGE: &str =
    "No restaurants found matching your criteria. Try adjusting your filters.";

/// One entry of the restaurant list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantCard {
    pub place_id: String,
    pub hotel_id: Option<String>,
    pub name: String,
    pub stars: String,
    pub rating: String,
    pub review_count: Option<u32>,
    pub cuisine: Option<String>,
    pub price: Option<String>,
    pub distance: Option<f64>,
    pub distance_text: Option<String>,
    pub directions_url: Option<String>,
    pub photo: Option<String>,
    pub address: Option<String>,
}

/// The restaurant list with its result count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListView {
    pub cards: Vec<RestaurantCard>,
    pub count: usize,
    pub count_text: String,
    pub empty_message: Option<String>,
}

/// Everything shown in the restaurant details modal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDetails {
    #[serde(flatten)]
    pub card: RestaurantCard,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub opening_hours: Vec<String>,
    pub focus: Coordinate,
    pub focus_zoom: u8,
}

/// A marker with its info window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub id: String,
    pub title: String,
    pub position: Coordinate,
    pub info: InfoWindow,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum InfoWindow {
    #[serde(rename_all = "camelCase")]
    Hotel {
        name: String,
        address: String,
        description: String,
        website: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Restaurant {
        name: String,
        stars: String,
        rating: String,
        review_count: Option<u32>,
        cuisine: Option<String>,
        price: Option<String>,
        distance_text: String,
        address: Option<String>,
        website: Option<String>,
        directions_url: String,
    },
}

/// Markers and viewport for the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    pub active_hotel_id: Option<String>,
    pub hotels: Vec<Marker>,
    pub restaurants: Vec<Marker>,
    /// `None` means no fitting: show `center` at `default_zoom`
    pub bounds: Option<Bounds>,
    pub center: Coordinate,
    pub max_zoom: Option<u8>,
    pub default_zoom: u8,
}

/// Build the card for a restaurant, measuring distance from its hotel if known
pub fn restaurant_card(
    restaurant: &Restaurant,
    hotel: Option<&Hotel>,
    options: &DisplayOptions,
) -> RestaurantCard {
    let distance = hotel.map(|h| haversine_distance(h.coordinate(), restaurant.coordinate(), options.unit));

    RestaurantCard {
        place_id: restaurant.place_id.clone(),
        hotel_id: restaurant.hotel_id.clone(),
        name: restaurant.name.clone(),
        stars: rating_stars(restaurant.rating),
        rating: rating_text(restaurant.rating),
        review_count: restaurant.user_ratings_total.filter(|n| *n > 0),
        cuisine: cuisine_label(&restaurant.types, CARD_TAG_SEPARATOR),
        price: price_text(restaurant.price_level, &options.currency_symbol),
        distance,
        distance_text: hotel
            .zip(distance)
            .map(|(h, d)| distance_text(d, options.unit, &h.name)),
        directions_url: hotel.map(|h| directions_url(h.coordinate(), restaurant.coordinate())),
        photo: restaurant.photos.first().cloned(),
        address: restaurant.display_address().map(str::to_string),
    }
}

/// Hotel a listed restaurant is measured from: the selected one, else its owner
fn associated_hotel<'a>(
    catalog: &'a Catalog,
    selected: Option<&str>,
    restaurant: &Restaurant,
) -> Option<&'a Hotel> {
    selected
        .filter(|id| !id.is_empty())
        .or(restaurant.hotel_id.as_deref())
        .and_then(|id| catalog.hotel(id))
}

pub fn list_view(
    catalog: &Catalog,
    restaurants: &[Restaurant],
    selected_hotel: Option<&str>,
    options: &DisplayOptions,
) -> ListView {
    let cards: Vec<RestaurantCard> = restaurants
        .iter()
        .map(|r| restaurant_card(r, associated_hotel(catalog, selected_hotel, r), options))
        .collect();

    let count = cards.len();
    ListView {
        cards,
        count,
        count_text: count_text(count),
        empty_message: (count == 0).then(|| NO_RESULTS_MESSAGE.to_string()),
    }
}

pub fn restaurant_details(
    catalog: &Catalog,
    restaurant: &Restaurant,
    selected_hotel: Option<&str>,
    options: &DisplayOptions,
) -> RestaurantDetails {
    let hotel = associated_hotel(catalog, selected_hotel, restaurant);
    let mut card = restaurant_card(restaurant, hotel, options);
    card.cuisine = cuisine_label(&restaurant.types, DETAIL_TAG_SEPARATOR);

    RestaurantDetails {
        card,
        phone: restaurant.phone.clone().filter(|p| !p.is_empty()),
        website: restaurant.website.clone().filter(|w| !w.is_empty()),
        opening_hours: restaurant.opening_hours.weekday_text.clone(),
        focus: restaurant.coordinate(),
        focus_zoom: FOCUSED_RESTAURANT_ZOOM,
    }
}

fn hotel_marker(hotel: &Hotel) -> Marker {
    Marker {
        id: hotel.id.clone(),
        title: hotel.name.clone(),
        position: hotel.coordinate(),
        info: InfoWindow::Hotel {
            name: hotel.name.clone(),
            address: hotel.address.clone(),
            description: hotel.description.clone(),
            website: hotel.website.clone().filter(|w| !w.is_empty()),
        },
    }
}

fn restaurant_marker(restaurant: &Restaurant, hotel: &Hotel, options: &DisplayOptions) -> Marker {
    let distance = haversine_distance(hotel.coordinate(), restaurant.coordinate(), options.unit);

    Marker {
        id: restaurant.place_id.clone(),
        title: restaurant.name.clone(),
        position: restaurant.coordinate(),
        info: InfoWindow::Restaurant {
            name: restaurant.name.clone(),
            stars: rating_stars(restaurant.rating),
            rating: rating_text(restaurant.rating),
            review_count: restaurant.user_ratings_total.filter(|n| *n > 0),
            cuisine: cuisine_label(&restaurant.types, DETAIL_TAG_SEPARATOR),
            price: price_text(restaurant.price_level, &options.currency_symbol),
            distance_text: distance_text(distance, options.unit, &hotel.name),
            address: restaurant.display_address().map(str::to_string),
            website: restaurant.website.clone().filter(|w| !w.is_empty()),
            directions_url: directions_url(hotel.coordinate(), restaurant.coordinate()),
        },
    }
}

/// All hotels, no restaurants, viewport fitted to the hotels
pub fn map_overview(catalog: &Catalog) -> MapView {
    let hotels: Vec<Marker> = catalog.hotels().iter().map(hotel_marker).collect();
    let bounds = Bounds::around(hotels.iter().map(|m| m.position));

    MapView {
        active_hotel_id: None,
        max_zoom: (hotels.len() == 1).then_some(SINGLE_HOTEL_MAX_ZOOM),
        center: bounds.map(|b| b.center()).unwrap_or(DEFAULT_CENTER),
        hotels,
        restaurants: Vec::new(),
        bounds,
        default_zoom: DEFAULT_ZOOM,
    }
}

/// All hotels plus one hotel's restaurants, viewport fitted to that hotel's area
///
/// Returns `None` for an unknown hotel.
pub fn map_focus(catalog: &Catalog, hotel_id: &str, options: &DisplayOptions) -> Option<MapView> {
    let hotel = catalog.hotel(hotel_id)?;
    let restaurants: Vec<Marker> = catalog
        .restaurants_for(hotel_id)
        .unwrap_or_default()
        .iter()
        .map(|r| restaurant_marker(r, hotel, options))
        .collect();

    // Nothing to fit to without restaurants
    let bounds = if restaurants.is_empty() {
        tracing::warn!("No restaurants found for hotel: {}", hotel_id);
        None
    } else {
        Bounds::around(
            std::iter::once(hotel.coordinate()).chain(restaurants.iter().map(|m| m.position)),
        )
    };

    Some(MapView {
        active_hotel_id: Some(hotel.id.clone()),
        hotels: catalog.hotels().iter().map(hotel_marker).collect(),
        restaurants,
        center: bounds.map(|b| b.center()).unwrap_or_else(|| hotel.coordinate()),
        bounds,
        max_zoom: None,
        default_zoom: DEFAULT_ZOOM,
    })
}
