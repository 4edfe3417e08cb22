use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A single raw element from the Overpass API response: either a point
/// (`node`) with direct coordinates, or an area (`way`/`relation`) carrying a
/// precomputed center. Consumed once by the normalizer, then discarded.
#[derive(Debug, Clone, Deserialize)]
pub struct RawGeoEntity {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub center: Option<AreaCenter>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

/// Center point reported by Overpass for way/relation elements.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AreaCenter {
    pub lat: f64,
    pub lon: f64,
}

/// A raw entity that survived the drop policy: coordinates are finite and in
/// range, and the tag map is non-empty. The tags are retained for type,
/// address, and name derivation downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedPlace {
    /// Resolved from `name`, then `name:en`, then `name:local`. `None` means
    /// the classifier falls back to the derived type label.
    pub name: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub tags: HashMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceCategory {
    Activity,
    Food,
}

impl fmt::Display for PlaceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceCategory::Activity => write!(f, "activity"),
            PlaceCategory::Food => write!(f, "food"),
        }
    }
}

/// A fully annotated place, ready for ranking and serialization. Field names
/// follow the public API contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedPlace {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Human-readable place type, e.g. "Cafe" or "Nature reserve".
    #[serde(rename = "type")]
    pub place_type: String,
    /// Short descriptive phrase for the kind of experience to expect.
    pub experience: String,
    pub category: PlaceCategory,
    /// Generated sentence combining vibes, time of day, crowd, and offbeat
    /// status.
    pub explanation: String,
    /// Heuristic 1-5 estimate, always clamped to that range.
    pub crowd_level: u8,
    pub address: Option<String>,
}
