//! Vibe-to-selector mapping for Overpass queries.
//!
//! Each vibe owns a fixed, ordered list of OSM tag selectors. The tables are
//! data, not branches: first-declared wins on duplicates, and extending a
//! vibe means appending a row.

use crate::models::VibeTag;

/// An OSM tag selector as a `(key, value)` pair. A value of `"*"` matches any
/// value for the key.
pub type TagSelector = (&'static str, &'static str);

const CHILL_SELECTORS: &[TagSelector] = &[
    ("amenity", "cafe"),
    ("leisure", "park"),
    ("amenity", "library"),
    ("tourism", "museum"),
    ("tourism", "gallery"),
    ("amenity", "cinema"),
    ("leisure", "garden"),
    ("shop", "bookstore"),
    ("tourism", "attraction"),
    ("amenity", "theatre"),
    ("amenity", "community_centre"),
];

const ENERGETIC_SELECTORS: &[TagSelector] = &[
    ("leisure", "sports_centre"),
    ("leisure", "fitness_centre"),
    ("leisure", "stadium"),
    ("leisure", "swimming_pool"),
    ("leisure", "playground"),
    ("sport", "*"),
];

const NATURE_SELECTORS: &[TagSelector] = &[
    ("leisure", "park"),
    ("natural", "beach"),
    ("leisure", "nature_reserve"),
    ("tourism", "zoo"),
    ("tourism", "picnic_site"),
];

const ROMANTIC_SELECTORS: &[TagSelector] = &[
    ("tourism", "viewpoint"),
    ("amenity", "restaurant"),
    ("natural", "beach"),
    ("leisure", "garden"),
];

const SOCIAL_SELECTORS: &[TagSelector] = &[
    ("amenity", "pub"),
    ("amenity", "bar"),
    ("amenity", "cafe"),
    ("amenity", "restaurant"),
    ("amenity", "food_court"),
    ("shop", "mall"),
    ("amenity", "nightclub"),
    ("shop", "bakery"),
];

/// Used when the caller selected no recognized vibe at all.
pub const DEFAULT_SELECTORS: &[TagSelector] = &[
    ("leisure", "park"),
    ("amenity", "cafe"),
    ("tourism", "viewpoint"),
    ("amenity", "restaurant"),
];

/// Untargeted selectors for the broader fallback query.
pub const BROAD_SELECTORS: &[TagSelector] = &[
    ("amenity", "*"),
    ("leisure", "*"),
    ("tourism", "*"),
    ("shop", "*"),
];

fn selectors_for(tag: VibeTag) -> &'static [TagSelector] {
    match tag {
        VibeTag::Chill => CHILL_SELECTORS,
        VibeTag::Energetic => ENERGETIC_SELECTORS,
        VibeTag::Nature => NATURE_SELECTORS,
        VibeTag::Romantic => ROMANTIC_SELECTORS,
        VibeTag::Social => SOCIAL_SELECTORS,
    }
}

/// Build the deduplicated union of selectors for the given vibe labels,
/// preserving declaration order. Unrecognized labels contribute nothing; an
/// empty union falls back to [`DEFAULT_SELECTORS`].
pub fn build_selectors(vibes: &[String]) -> Vec<TagSelector> {
    let mut selectors: Vec<TagSelector> = Vec::new();

    for label in vibes {
        if let Some(tag) = VibeTag::from_label(label) {
            for selector in selectors_for(tag) {
                if !selectors.contains(selector) {
                    selectors.push(*selector);
                }
            }
        }
    }

    if selectors.is_empty() {
        selectors.extend_from_slice(DEFAULT_SELECTORS);
    }

    selectors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn single_vibe_yields_its_table() {
        let selectors = build_selectors(&labels(&["Nature"]));
        assert_eq!(selectors, NATURE_SELECTORS.to_vec());
    }

    #[test]
    fn union_is_deduplicated_preserving_order() {
        // Chill and Social both map cafes; Romantic and Social both map
        // restaurants. Each selector must appear exactly once, at its first
        // position.
        let selectors = build_selectors(&labels(&["Chill", "Social"]));
        let cafe_count = selectors
            .iter()
            .filter(|s| **s == ("amenity", "cafe"))
            .count();
        assert_eq!(cafe_count, 1);
        assert_eq!(selectors[0], ("amenity", "cafe"));
        assert!(selectors.contains(&("amenity", "nightclub")));
    }

    #[test]
    fn empty_vibes_fall_back_to_defaults() {
        assert_eq!(build_selectors(&[]), DEFAULT_SELECTORS.to_vec());
    }

    #[test]
    fn unrecognized_vibes_are_ignored() {
        assert_eq!(
            build_selectors(&labels(&["Spooky", "Mysterious"])),
            DEFAULT_SELECTORS.to_vec()
        );
        // A recognized vibe alongside junk still wins
        let selectors = build_selectors(&labels(&["Spooky", "Romantic"]));
        assert_eq!(selectors, ROMANTIC_SELECTORS.to_vec());
    }
}
