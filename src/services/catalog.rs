use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::{Catalog, Hotel, RestaurantsFile};

/// Errors that can occur while loading the static data files
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate hotel id: {0}")]
    DuplicateHotel(String),
}

/// Loads hotels and their grouped restaurants from JSON files
///
/// `hotels.json` is an array of hotel records; `restaurants.json` is
/// `{"hotels": [{"id", "name", "restaurants": [...]}]}`.
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    hotels_path: PathBuf,
    restaurants_path: PathBuf,
}

impl CatalogLoader {
    pub fn new(hotels_path: impl Into<PathBuf>, restaurants_path: impl Into<PathBuf>) -> Self {
        Self {
            hotels_path: hotels_path.into(),
            restaurants_path: restaurants_path.into(),
        }
    }

    /// Loader for `hotels.json` and `restaurants.json` inside a directory
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(dir.join("hotels.json"), dir.join("restaurants.json"))
    }

    pub fn load(&self) -> Result<Catalog, CatalogError> {
        let hotels_json = read(&self.hotels_path)?;
        let restaurants_json = read(&self.restaurants_path)?;

        let catalog = parse_catalog(&hotels_json, &restaurants_json)
            .map_err(|e| e.with_paths(&self.hotels_path, &self.restaurants_path))?;

        tracing::info!(
            "Loaded {} hotels and {} restaurants",
            catalog.hotels().len(),
            catalog.restaurant_count()
        );

        Ok(catalog)
    }
}

fn read(path: &Path) -> Result<String, CatalogError> {
    fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Debug)]
enum ParseError {
    Hotels(serde_json::Error),
    Restaurants(serde_json::Error),
    Catalog(CatalogError),
}

impl ParseError {
    fn with_paths(self, hotels_path: &Path, restaurants_path: &Path) -> CatalogError {
        match self {
            ParseError::Hotels(source) => CatalogError::Json {
                path: hotels_path.to_path_buf(),
                source,
            },
            ParseError::Restaurants(source) => CatalogError::Json {
                path: restaurants_path.to_path_buf(),
                source,
            },
            ParseError::Catalog(e) => e,
        }
    }
}

fn parse_catalog(hotels_json: &str, restaurants_json: &str) -> Result<Catalog, ParseError> {
    let hotels: Vec<Hotel> = serde_json::from_str(hotels_json).map_err(ParseError::Hotels)?;
    let mut restaurants: RestaurantsFile =
        serde_json::from_str(restaurants_json).map_err(ParseError::Restaurants)?;

    let mut seen = HashSet::new();
    for hotel in &hotels {
        if !seen.insert(hotel.id.as_str()) {
            return Err(ParseError::Catalog(CatalogError::DuplicateHotel(hotel.id.clone())));
        }
    }

    for group in &mut restaurants.hotels {
        if !seen.contains(group.id.as_str()) {
            tracing::warn!(
                "Restaurants grouped under unknown hotel {} ({} entries)",
                group.id,
                group.restaurants.len()
            );
        }

        group.restaurants.retain(|r| {
            let located = r.has_coordinate();
            if !located {
                tracing::warn!("Skipping restaurant {} without coordinates", r.place_id);
            }
            located
        });
    }

    Ok(Catalog::new(hotels, restaurants.hotels))
}

/// Build a catalog from in-memory JSON documents
pub fn catalog_from_json(hotels_json: &str, restaurants_json: &str) -> Result<Catalog, CatalogError> {
    parse_catalog(hotels_json, restaurants_json)
        .map_err(|e| e.with_paths(Path::new("hotels.json"), Path::new("restaurants.json")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOTELS: &str = r#"[
        {"id": "h1", "name": "Hotel One", "address": "1 Chome", "lat": 35.0, "lng": 139.0,
         "description": "Near the station", "website": "https://example.com"}
    ]"#;

    const RESTAURANTS: &str = r#"{"hotels": [
        {"id": "h1", "name": "Hotel One", "restaurants": [
            {"place_id": "r1", "name": "Sushi Place", "lat": 35.01, "lng": 139.0,
             "rating": 4.5, "user_ratings_total": 120, "price_level": 2,
             "types": ["sushi_restaurant", "food"], "photos": ["ref"],
             "website": "", "phone": "", "opening_hours": {"weekday_text": ["Mon: 11-22"]},
             "hotel_distance_km": 1.11, "vicinity": "Chuo", "address": null},
            {"place_id": "r2", "name": "Noodles", "lat": 35.0, "lng": 139.02,
             "rating": null, "price_level": null, "opening_hours": {}}
        ]}
    ]}"#;

    #[test]
    fn test_parse_catalog() {
        let catalog = catalog_from_json(HOTELS, RESTAURANTS).unwrap();

        assert_eq!(catalog.hotels().len(), 1);
        let restaurants = catalog.restaurants_for("h1").unwrap();
        assert_eq!(restaurants.len(), 2);
        assert_eq!(restaurants[0].rating, Some(4.5));
        assert_eq!(restaurants[0].opening_hours.weekday_text.len(), 1);
        assert!(restaurants[1].rating.is_none());
        assert!(restaurants[1].types.is_empty());
    }

    #[test]
    fn test_restaurants_without_coordinates_are_skipped() {
        let restaurants = r#"{"hotels": [
            {"id": "h1", "name": "Hotel One", "restaurants": [
                {"place_id": "null-lat", "name": "Nowhere", "lat": null, "lng": 139.0},
                {"place_id": "no-lng", "name": "Half There", "lat": 35.0},
                {"place_id": "r1", "name": "Sushi Place", "lat": 35.01, "lng": 139.0}
            ]}
        ]}"#;

        let catalog = catalog_from_json(HOTELS, restaurants).unwrap();
        let ids: Vec<&str> = catalog
            .restaurants_for("h1")
            .unwrap()
            .iter()
            .map(|r| r.place_id.as_str())
            .collect();
        assert_eq!(ids, vec!["r1"]);
    }

    #[test]
    fn test_duplicate_hotel_rejected() {
        let hotels = r#"[
            {"id": "h1", "name": "A", "lat": 0.0, "lng": 0.0},
            {"id": "h1", "name": "B", "lat": 1.0, "lng": 1.0}
        ]"#;

        let err = catalog_from_json(hotels, r#"{"hotels": []}"#).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateHotel(id) if id == "h1"));
    }

    #[test]
    fn test_invalid_json_names_file() {
        let err = catalog_from_json(HOTELS, "{not json").unwrap_err();
        assert!(err.to_string().contains("restaurants.json"));
    }

    #[test]
    fn test_missing_file() {
        let loader = CatalogLoader::from_dir("/definitely/not/here");
        let err = loader.load().unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
