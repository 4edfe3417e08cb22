//! In-memory cache for Overpass result batches, backed by moka with TTL and
//! bounded capacity. All methods are `&self` — no locking needed.

use crate::models::{Coordinates, RawGeoEntity};
use moka::future::Cache;
use serde::Serialize;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub struct PlaceCache {
    entries: Cache<String, Arc<Vec<RawGeoEntity>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl PlaceCache {
    pub fn new(ttl_seconds: u64, max_capacity: u64) -> Self {
        let entries = Cache::builder()
            .time_to_live(Duration::from_secs(ttl_seconds))
            .max_capacity(max_capacity)
            .build();

        PlaceCache {
            entries,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Generate a cache key for a place search.
    /// Coordinates are rounded to 3 decimal places (~100m precision), the
    /// radius to 1km buckets, and vibes are sorted so selection order does
    /// not fragment the cache.
    pub fn key(center: &Coordinates, radius_meters: f64, vibes: &[String]) -> String {
        let mut hasher = DefaultHasher::new();

        let rounded = center.round(3);
        ((rounded.lat * 1000.0).round() as i64).hash(&mut hasher);
        ((rounded.lng * 1000.0).round() as i64).hash(&mut hasher);
        ((radius_meters / 1000.0).ceil() as i64).hash(&mut hasher);

        let mut sorted_vibes: Vec<&str> = vibes.iter().map(String::as_str).collect();
        sorted_vibes.sort_unstable();
        sorted_vibes.hash(&mut hasher);

        format!("places:{:x}", hasher.finish())
    }

    pub async fn get(&self, key: &str) -> Option<Vec<RawGeoEntity>> {
        match self.entries.get(key).await {
            Some(arc_places) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                tracing::debug!("Place cache hit: {}", key);
                Some((*arc_places).clone())
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                tracing::debug!("Place cache miss: {}", key);
                None
            }
        }
    }

    pub async fn insert(&self, key: &str, places: &[RawGeoEntity]) {
        let arc_places = Arc::new(places.to_vec());
        self.entries.insert(key.to_string(), arc_places).await;
        tracing::debug!("Cached {} places: {}", places.len(), key);
    }

    pub fn stats(&self) -> CacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let hit_rate = if hits + misses > 0 {
            (hits as f64 / (hits + misses) as f64) * 100.0
        } else {
            0.0
        };

        CacheStats {
            hits,
            misses,
            hit_rate,
        }
    }
}

/// Cache statistics for monitoring
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub hit_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn make_entity(name: &str) -> RawGeoEntity {
        let mut tags = HashMap::new();
        tags.insert("amenity".to_string(), "cafe".to_string());
        tags.insert("name".to_string(), name.to_string());
        RawGeoEntity {
            kind: "node".to_string(),
            lat: Some(40.0),
            lon: Some(-73.0),
            center: None,
            tags,
        }
    }

    fn vibes(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn cache_miss() {
        let cache = PlaceCache::new(3600, 100);
        assert!(cache.get("nonexistent").await.is_none());
    }

    #[tokio::test]
    async fn roundtrip() {
        let cache = PlaceCache::new(3600, 100);
        let places = vec![make_entity("Joe's"), make_entity("Moe's")];

        cache.insert("key1", &places).await;
        let cached = cache.get("key1").await.unwrap();

        assert_eq!(cached.len(), 2);
        assert_eq!(cached[0].tags.get("name").unwrap(), "Joe's");
    }

    #[tokio::test]
    async fn stats_tracking() {
        let cache = PlaceCache::new(3600, 100);
        cache.insert("key1", &[make_entity("Joe's")]).await;

        // 1 miss
        cache.get("missing").await;
        // 2 hits
        cache.get("key1").await;
        cache.get("key1").await;

        let stats = cache.stats();
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
        assert!((stats.hit_rate - 66.666).abs() < 1.0);
    }

    #[test]
    fn key_is_stable_under_vibe_order() {
        let center = Coordinates::new(48.8566, 2.3522).unwrap();
        let key1 = PlaceCache::key(&center, 5000.0, &vibes(&["Chill", "Nature"]));
        let key2 = PlaceCache::key(&center, 5000.0, &vibes(&["Nature", "Chill"]));
        assert_eq!(key1, key2);
    }

    #[test]
    fn key_coordinate_precision() {
        // Differences within ~100m should produce the same key
        let coord1 = Coordinates::new(48.8566, 2.3522).unwrap();
        let coord2 = Coordinates::new(48.8567, 2.3523).unwrap();
        let key1 = PlaceCache::key(&coord1, 5000.0, &vibes(&["Chill"]));
        let key2 = PlaceCache::key(&coord2, 5000.0, &vibes(&["Chill"]));
        assert_eq!(key1, key2);
    }

    #[test]
    fn key_differs_across_radius_buckets() {
        let center = Coordinates::new(48.8566, 2.3522).unwrap();
        let key1 = PlaceCache::key(&center, 5000.0, &vibes(&["Chill"]));
        let key2 = PlaceCache::key(&center, 9000.0, &vibes(&["Chill"]));
        assert_ne!(key1, key2);
    }
}
