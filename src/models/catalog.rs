use serde::{Deserialize, Serialize};

use crate::models::domain::{Hotel, Restaurant};

/// One hotel's restaurants as grouped in `restaurants.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelRestaurants {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub restaurants: Vec<Restaurant>,
}

/// Top-level shape of `restaurants.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantsFile {
    #[serde(default)]
    pub hotels: Vec<HotelRestaurants>,
}

/// Read-only in-memory data set: hotels plus restaurants grouped by hotel
///
/// Groups keep the order in which hotels first appear in the restaurant data.
/// A repeated hotel id replaces the earlier group's restaurants in place.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    hotels: Vec<Hotel>,
    groups: Vec<HotelRestaurants>,
}

impl Catalog {
    pub fn new(hotels: Vec<Hotel>, groups: Vec<HotelRestaurants>) -> Self {
        let mut merged: Vec<HotelRestaurants> = Vec::with_capacity(groups.len());
        for group in groups {
            match merged.iter_mut().find(|g| g.id == group.id) {
                Some(existing) => existing.restaurants = group.restaurants,
                None => merged.push(group),
            }
        }

        Self {
            hotels,
            groups: merged,
        }
    }

    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    pub fn hotel(&self, id: &str) -> Option<&Hotel> {
        self.hotels.iter().find(|h| h.id == id)
    }

    pub fn groups(&self) -> &[HotelRestaurants] {
        &self.groups
    }

    pub fn restaurants_for(&self, hotel_id: &str) -> Option<&[Restaurant]> {
        self.groups
            .iter()
            .find(|g| g.id == hotel_id)
            .map(|g| g.restaurants.as_slice())
    }

    pub fn restaurant_count(&self) -> usize {
        self.groups.iter().map(|g| g.restaurants.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty() && self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant(id: &str) -> Restaurant {
        serde_json::from_value(serde_json::json!({
            "place_id": id,
            "name": id,
            "lat": 35.0,
            "lng": 139.0,
        }))
        .unwrap()
    }

    fn group(id: &str, restaurants: &[&str]) -> HotelRestaurants {
        HotelRestaurants {
            id: id.to_string(),
            name: String::new(),
            restaurants: restaurants.iter().map(|r| restaurant(r)).collect(),
        }
    }

    #[test]
    fn test_repeated_hotel_replaces_in_place() {
        let catalog = Catalog::new(
            vec![],
            vec![group("a", &["r1"]), group("b", &["r2"]), group("a", &["r3", "r4"])],
        );

        let ids: Vec<_> = catalog.groups().iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(catalog.restaurants_for("a").unwrap().len(), 2);
        assert_eq!(catalog.restaurant_count(), 3);
    }

    #[test]
    fn test_unknown_hotel_has_no_restaurants() {
        let catalog = Catalog::new(vec![], vec![group("a", &["r1"])]);
        assert!(catalog.restaurants_for("zzz").is_none());
    }

    #[test]
    fn test_restaurant_optional_fields_default() {
        let r = restaurant("r1");
        assert_eq!(r.rating_value(), 0.0);
        assert_eq!(r.price_value(), 0);
        assert!(r.types.is_empty());
        assert!(r.display_address().is_none());
        assert!(r.hotel_id.is_none());
    }
}
