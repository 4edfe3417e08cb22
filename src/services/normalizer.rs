//! Raw geodata cleanup.
//!
//! Upstream geodata is inherently noisy and partial, so this boundary applies
//! a silent drop policy (`incomplete-or-untagged`) instead of signaling
//! errors: an entity is retained only when it has a recognized shape, finite
//! in-range coordinates, and at least one tag. Everything else is filtered,
//! never failed.

use crate::models::{NormalizedPlace, RawGeoEntity};

/// Normalize a batch, preserving relative order. `output.len() <=
/// input.len()` always holds.
pub fn normalize(entities: &[RawGeoEntity]) -> Vec<NormalizedPlace> {
    entities.iter().filter_map(normalize_entity).collect()
}

/// Whether an entity would survive the drop policy. Used by the fetch layer
/// to decide if the broader fallback query is worth running.
pub fn is_usable(entity: &RawGeoEntity) -> bool {
    normalize_entity(entity).is_some()
}

fn normalize_entity(entity: &RawGeoEntity) -> Option<NormalizedPlace> {
    let (lat, lon) = match entity.kind.as_str() {
        "node" => (entity.lat?, entity.lon?),
        "way" | "relation" => {
            let center = entity.center.as_ref()?;
            (center.lat, center.lon)
        }
        _ => return None,
    };

    if !lat.is_finite() || !lon.is_finite() {
        return None;
    }
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return None;
    }
    if entity.tags.is_empty() {
        return None;
    }

    let name = ["name", "name:en", "name:local"]
        .iter()
        .find_map(|key| entity.tags.get(*key).filter(|n| !n.is_empty()))
        .cloned();

    Some(NormalizedPlace {
        name,
        latitude: lat,
        longitude: lon,
        tags: entity.tags.clone(),
    })
}
