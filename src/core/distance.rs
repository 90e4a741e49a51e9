use serde::{Deserialize, Serialize};

pub use crate::models::{Bounds, Coordinate};

/// Earth's radius in miles
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Earth's radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Unit a great-circle distance is reported in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    Miles,
    Kilometers,
}

impl DistanceUnit {
    pub fn earth_radius(self) -> f64 {
        match self {
            DistanceUnit::Miles => EARTH_RADIUS_MILES,
            DistanceUnit::Kilometers => EARTH_RADIUS_KM,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DistanceUnit::Miles => "miles",
            DistanceUnit::Kilometers => "km",
        }
    }
}

/// Convert degrees to radians
#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * (std::f64::consts::PI / 180.0)
}

/// Calculate the Haversine distance between two points
///
/// # Arguments
/// * `from` - First point in degrees
/// * `to` - Second point in degrees
/// * `unit` - Selects the Earth radius, and therefore the unit of the result
///
/// # Returns
/// Non-negative great-circle distance. Out-of-range degrees are not validated.
#[inline]
pub fn haversine_distance(from: Coordinate, to: Coordinate, unit: DistanceUnit) -> f64 {
    let lat1_rad = to_radians(from.lat);
    let lat2_rad = to_radians(to.lat);
    let delta_lat = to_radians(to.lat - from.lat);
    let delta_lng = to_radians(to.lng - from.lng);

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    // Rounding can push `a` a hair outside [0, 1] for antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    unit.earth_radius() * c
}

/// Distance in miles, the unit the listing and map views display
#[inline]
pub fn distance(from: Coordinate, to: Coordinate) -> f64 {
    haversine_distance(from, to, DistanceUnit::Miles)
}

impl Bounds {
    pub fn from_point(point: Coordinate) -> Self {
        Self {
            min_lat: point.lat,
            max_lat: point.lat,
            min_lng: point.lng,
            max_lng: point.lng,
        }
    }

    /// Smallest bounds containing every point, or `None` for no points
    pub fn around<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Self::from_point(first), |bounds, p| bounds.extend(p)))
    }

    pub fn extend(self, point: Coordinate) -> Self {
        Self {
            min_lat: self.min_lat.min(point.lat),
            max_lat: self.max_lat.max(point.lat),
            min_lng: self.min_lng.min(point.lng),
            max_lng: self.max_lng.max(point.lng),
        }
    }

    #[inline]
    pub fn contains(&self, point: Coordinate) -> bool {
        point.lat >= self.min_lat
            && point.lat <= self.max_lat
            && point.lng >= self.min_lng
            && point.lng <= self.max_lng
    }

    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }
}
