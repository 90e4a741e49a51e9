use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use icu_collator::{Collator, CollatorOptions};
use serde::{Deserialize, Serialize};

use crate::core::distance::{distance, Coordinate};
use crate::models::Restaurant;

/// Attribute the restaurant list is ordered by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Rating,
    Name,
    Price,
    /// Also used for any unrecognised key
    #[default]
    #[serde(other)]
    Distance,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Rating => "rating",
            SortKey::Name => "name",
            SortKey::Price => "price",
            SortKey::Distance => "distance",
        }
    }
}

impl FromStr for SortKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "rating" => SortKey::Rating,
            "name" => SortKey::Name,
            "price" => SortKey::Price,
            _ => SortKey::Distance,
        })
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Apply the direction to a base ordering
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = std::convert::Infallible;

    /// Anything other than "desc" sorts ascending
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s.trim().eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        })
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[inline]
fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

thread_local! {
    /// Root-locale collator, built once per thread
    static NAME_COLLATOR: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new())
            .map_err(|e| tracing::warn!("Name collator unavailable: {}", e))
            .ok();
}

/// Locale-aware name order, falling back to byte order for names the
/// collator considers equal
fn compare_names(a: &str, b: &str) -> Ordering {
    NAME_COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => a.to_lowercase().cmp(&b.to_lowercase()),
        })
        .then_with(|| a.cmp(b))
}

/// Base comparator for a key, before the direction is applied
///
/// Rating's natural order is highest first. Distance compares as equal when
/// there is no reference point.
pub fn compare(
    key: SortKey,
    a: &Restaurant,
    b: &Restaurant,
    reference: Option<Coordinate>,
) -> Ordering {
    match key {
        SortKey::Rating => cmp_f64(b.rating_value(), a.rating_value()),
        SortKey::Name => compare_names(&a.name, &b.name),
        SortKey::Price => a.price_value().cmp(&b.price_value()),
        SortKey::Distance => match reference {
            Some(origin) => cmp_f64(
                distance(origin, a.coordinate()),
                distance(origin, b.coordinate()),
            ),
            None => Ordering::Equal,
        },
    }
}

/// Order restaurants by key and direction
///
/// The sort is stable: ties keep their incoming relative order in both
/// directions. Sorting by distance without a reference point returns the
/// sequence unchanged.
pub fn sort_restaurants(
    mut restaurants: Vec<Restaurant>,
    key: SortKey,
    direction: SortDirection,
    reference: Option<Coordinate>,
) -> Vec<Restaurant> {
    match (key, reference) {
        (SortKey::Distance, None) => {
            tracing::trace!("No reference point, skipping distance sort");
            restaurants
        }
        (SortKey::Distance, Some(origin)) => {
            // Compute each distance once instead of per comparison
            let mut keyed: Vec<(f64, Restaurant)> = restaurants
                .into_iter()
                .map(|r| (distance(origin, r.coordinate()), r))
                .collect();
            keyed.sort_by(|(da, _), (db, _)| direction.apply(cmp_f64(*da, *db)));
            keyed.into_iter().map(|(_, r)| r).collect()
        }
        _ => {
            restaurants.sort_by(|a, b| direction.apply(compare(key, a, b, reference)));
            restaurants
        }
    }
}
