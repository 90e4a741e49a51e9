use std::collections::BTreeSet;

use crate::models::Catalog;

/// Place-type tags that say nothing about the cuisine
///
/// One set for every surface: the cuisine dropdown, list cards, the details
/// view and map info windows.
pub const GENERIC_TAGS: [&str; 5] = [
    "point_of_interest",
    "establishment",
    "food",
    "lodging",
    "cafe",
];

#[inline]
pub fn is_generic(tag: &str) -> bool {
    GENERIC_TAGS.contains(&tag)
}

/// Tags worth showing or filtering on, in their stored order
pub fn relevant_tags(tags: &[String]) -> impl Iterator<Item = &str> {
    tags.iter().map(String::as_str).filter(|t| !is_generic(t))
}

/// Every relevant tag in the catalog, sorted and deduplicated
pub fn cuisine_vocabulary(catalog: &Catalog) -> Vec<String> {
    let vocabulary: BTreeSet<&str> = catalog
        .groups()
        .iter()
        .flat_map(|g| g.restaurants.iter())
        .flat_map(|r| relevant_tags(&r.types))
        .collect();

    vocabulary.into_iter().map(str::to_string).collect()
}

/// Title-case every underscore-separated word
///
/// `"japanese_restaurant"` becomes `"Japanese Restaurant"`.
pub fn format_tag(tag: &str) -> String {
    tag.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Capitalise the first letter and turn underscores into spaces
///
/// `"ramen_restaurant"` becomes `"Ramen restaurant"`. Used on cards and info
/// windows; the dropdown uses [`format_tag`].
pub fn sentence_tag(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>().replace('_', " "),
        None => String::new(),
    }
}

/// Human-readable cuisine line, `None` when only generic tags are present
pub fn cuisine_label(tags: &[String], separator: &str) -> Option<String> {
    let labels: Vec<String> = relevant_tags(tags).map(sentence_tag).collect();
    if labels.is_empty() {
        None
    } else {
        Some(labels.join(separator))
    }
}
