//! Place classification and crowd scoring.
//!
//! Every step here is a pure function of the normalized place and the request
//! context: no wall clock, no randomness, no external state. Absent tags
//! degrade to defaults at every step; nothing in this module can fail.
//!
//! The matching policies are fixed ordered tables (first match wins) so the
//! heuristics stay auditable and extensible.

use crate::constants::*;
use crate::models::{ClassifiedPlace, NormalizedPlace, PlaceCategory, RequestContext};
use std::collections::HashMap;

/// Tag categories scanned for type derivation, in priority order.
const TYPE_TAG_PRIORITY: &[&str] = &[
    "amenity", "leisure", "tourism", "shop", "natural", "historic", "landuse", "sport",
];

/// A place is food iff its lowercase type contains one of these.
const FOOD_KEYWORDS: &[&str] = &[
    "restaurant",
    "cafe",
    "bar",
    "pub",
    "fast_food",
    "ice_cream",
    "bakery",
    "food_court",
];

/// Type keywords that mark a place as inherently busy.
const BUSY_TYPE_KEYWORDS: &[&str] = &["mall", "market", "attraction", "viewpoint"];

/// Mainstream type keywords that disqualify a place from the offbeat flag.
const MAINSTREAM_KEYWORDS: &[&str] = &["mall", "market", "theme park", "stadium", "nightclub"];

/// Type keywords that qualify a place as an offbeat alternative.
const OFFBEAT_KEYWORDS: &[&str] = &["park", "garden", "viewpoint", "library", "community"];

/// Experience phrases by type keyword, first match wins.
const EXPERIENCE_PHRASES: &[(&str, &str)] = &[
    ("cafe", "Quiet coffee time ☕"),
    ("park", "Relaxing nature walk 🌿"),
    ("beach", "Sunset walk & sea breeze 🌅"),
    ("museum", "Slow cultural discovery 🏛️"),
    ("gallery", "Art & photo-friendly corners 🎨"),
    ("restaurant", "Sit-down meal & conversation 🍽️"),
    ("bar", "Loud social drinks & music 🥂"),
    ("pub", "Casual hangout & games 🍻"),
    ("library", "Deep focus & solo recharge 📖"),
    ("viewpoint", "Scenic viewpoints & photos 📸"),
    ("cinema", "Cozy movie time 🍿"),
    ("mall", "Indoor roaming & people-watching 🛍️"),
    ("theatre", "Live performance experience 🎭"),
    ("community centre", "Workshops & local events 🤝"),
];

/// Address tags joined (in this order) into a display address.
const ADDRESS_TAGS: &[&str] = &["addr:street", "addr:housenumber", "addr:city", "addr:state"];

/// Annotate one normalized place with type, category, crowd level, offbeat
/// flag, experience phrase, explanation, address, and resolved name.
pub fn classify(place: &NormalizedPlace, ctx: &RequestContext) -> ClassifiedPlace {
    let place_type = derive_type(&place.tags);
    let lower_type = place_type.to_lowercase();

    let category = if FOOD_KEYWORDS.iter().any(|k| lower_type.contains(k)) {
        PlaceCategory::Food
    } else {
        PlaceCategory::Activity
    };

    let crowd_level = crowd_level(&lower_type, category, ctx);
    let offbeat = is_offbeat(&lower_type);

    ClassifiedPlace {
        name: place.name.clone().unwrap_or_else(|| place_type.clone()),
        latitude: place.latitude,
        longitude: place.longitude,
        experience: experience_phrase(&place_type, &ctx.vibes),
        explanation: build_explanation(crowd_level, offbeat, ctx),
        address: derive_address(&place.tags),
        place_type,
        category,
        crowd_level,
    }
}

/// Derive the human-readable type from the first non-empty tag in priority
/// order, underscores replaced with spaces and the first letter capitalized.
pub fn derive_type(tags: &HashMap<String, String>) -> String {
    for key in TYPE_TAG_PRIORITY {
        if let Some(value) = tags.get(*key) {
            if !value.is_empty() {
                return capitalize(&value.replace('_', " "));
            }
        }
    }
    "Spot".to_string()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Heuristic 1-5 crowd estimate, deterministic and reproducible from its
/// inputs alone.
fn crowd_level(lower_type: &str, category: PlaceCategory, ctx: &RequestContext) -> u8 {
    let mut score = CROWD_LEVEL_BASE;

    if BUSY_TYPE_KEYWORDS.iter().any(|k| lower_type.contains(k)) {
        score += CROWD_BUSY_TYPE_BONUS;
    }
    if category == PlaceCategory::Food && ctx.is_evening_or_night() {
        score += CROWD_EVENING_FOOD_BONUS;
    }
    if ctx.is_weekend {
        score += CROWD_WEEKEND_BONUS;
    }
    if ctx.is_peak_tourist_season {
        score += CROWD_PEAK_SEASON_BONUS;
    }

    score.clamp(CROWD_LEVEL_MIN, CROWD_LEVEL_MAX) as u8
}

/// A place is offbeat when it matches none of the mainstream keywords and at
/// least one of the offbeat keywords.
fn is_offbeat(lower_type: &str) -> bool {
    !MAINSTREAM_KEYWORDS.iter().any(|k| lower_type.contains(k))
        && OFFBEAT_KEYWORDS.iter().any(|k| lower_type.contains(k))
}

fn experience_phrase(place_type: &str, vibes: &[String]) -> String {
    let lower_type = place_type.to_lowercase();
    for (keyword, phrase) in EXPERIENCE_PHRASES {
        if lower_type.contains(keyword) {
            return (*phrase).to_string();
        }
    }

    let vibe = vibes.first().map(String::as_str).unwrap_or(DEFAULT_VIBE);
    let vibe_word = if vibe.trim().is_empty() {
        "nice".to_string()
    } else {
        vibe.to_lowercase()
    };
    format!("Experience a {} vibe at this {} ✨", vibe_word, place_type)
}

fn build_explanation(crowd_level: u8, offbeat: bool, ctx: &RequestContext) -> String {
    let vibe_list = if ctx.vibes.is_empty() {
        DEFAULT_VIBE.to_string()
    } else {
        ctx.vibes.join(", ")
    };

    let mut explanation = format!(
        "Perfect for {} vibes during {}.",
        vibe_list, ctx.time_of_day
    );
    if crowd_level >= 4 {
        explanation.push_str(" Likely to be busy at this time – great if you enjoy a lively crowd.");
    } else if crowd_level <= 2 {
        explanation.push_str(" Usually on the calmer side – good if you want to avoid crowds.");
    }
    if offbeat {
        explanation.push_str(" This is a slightly offbeat option, away from usual tourist rush.");
    }
    explanation
}

/// Join the available `addr:*` tags in fixed order, falling back to
/// `addr:full`, else `None`. Empty tag values count as absent.
fn derive_address(tags: &HashMap<String, String>) -> Option<String> {
    let parts: Vec<&str> = ADDRESS_TAGS
        .iter()
        .filter_map(|key| tags.get(*key))
        .filter(|v| !v.is_empty())
        .map(String::as_str)
        .collect();

    if !parts.is_empty() {
        return Some(parts.join(", "));
    }
    tags.get("addr:full").filter(|v| !v.is_empty()).cloned()
}
