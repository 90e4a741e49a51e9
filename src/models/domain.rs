use serde::{Deserialize, Deserializer, Serialize};

/// Geographic point in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Hotel record as stored in `hotels.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub website: Option<String>,
}

impl Hotel {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpeningHours {
    #[serde(default)]
    pub weekday_text: Vec<String>,
}

/// Restaurant record as stored under a hotel in `restaurants.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub place_id: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub vicinity: Option<String>,
    /// NaN when the source has no coordinate
    #[serde(default = "missing_degrees", deserialize_with = "nullable_degrees")]
    pub lat: f64,
    #[serde(default = "missing_degrees", deserialize_with = "nullable_degrees")]
    pub lng: f64,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: Option<u32>,
    #[serde(default)]
    pub price_level: Option<u8>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub opening_hours: OpeningHours,
    #[serde(default)]
    pub hotel_distance_km: Option<f64>,
    /// Owning hotel, set when the restaurant is flattened out of its group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel_id: Option<String>,
}

fn missing_degrees() -> f64 {
    f64::NAN
}

fn nullable_degrees<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_else(missing_degrees))
}

impl Restaurant {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }

    /// Whether both latitude and longitude are known
    pub fn has_coordinate(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Rating used for ordering; missing or NaN counts as 0
    pub fn rating_value(&self) -> f64 {
        match self.rating {
            Some(r) if !r.is_nan() => r,
            _ => 0.0,
        }
    }

    /// Price tier used for ordering; missing counts as 0
    pub fn price_value(&self) -> u8 {
        self.price_level.unwrap_or(0)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t == tag)
    }

    /// Display address, preferring the short vicinity form
    pub fn display_address(&self) -> Option<&str> {
        self.vicinity
            .as_deref()
            .filter(|v| !v.is_empty())
            .or_else(|| self.address.as_deref().filter(|a| !a.is_empty()))
    }
}

/// Geographic bounds used to fit the map viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}
