//! The outdoor suggestion pipeline: fetch (cached), normalize, classify,
//! rank.

use crate::cache::{CacheStats, PlaceCache};
use crate::models::{ClassifiedPlace, Coordinates, RequestContext};
use crate::services::overpass::OverpassClient;
use crate::services::ranker::{self, RankedSuggestions};
use crate::services::{classifier, normalizer};

pub struct SuggestionService {
    overpass: OverpassClient,
    cache: PlaceCache,
}

impl SuggestionService {
    pub fn new(overpass: OverpassClient, cache: PlaceCache) -> Self {
        SuggestionService { overpass, cache }
    }

    /// Run the full pipeline for one request. Never fails: an empty upstream
    /// batch yields empty result lists.
    pub async fn suggest(
        &self,
        center: &Coordinates,
        radius_meters: f64,
        ctx: &RequestContext,
    ) -> RankedSuggestions {
        let cache_key = PlaceCache::key(center, radius_meters, &ctx.vibes);
        let raw = match self.cache.get(&cache_key).await {
            Some(cached) => cached,
            None => {
                let fetched = self
                    .overpass
                    .fetch_places(center, radius_meters, &ctx.vibes)
                    .await;
                if !fetched.is_empty() {
                    self.cache.insert(&cache_key, &fetched).await;
                }
                fetched
            }
        };

        let normalized = normalizer::normalize(&raw);
        tracing::info!(
            "Normalized {} of {} raw entities",
            normalized.len(),
            raw.len()
        );

        let classified: Vec<ClassifiedPlace> = normalized
            .iter()
            .map(|place| classifier::classify(place, ctx))
            .collect();

        ranker::rank(classified, ctx.wants_calm())
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_PLACE_CACHE_MAX_ENTRIES, DEFAULT_PLACE_CACHE_TTL_SECONDS};
    use crate::models::RawGeoEntity;
    use time::macros::datetime;

    fn service() -> SuggestionService {
        SuggestionService::new(
            OverpassClient::new(),
            PlaceCache::new(DEFAULT_PLACE_CACHE_TTL_SECONDS, DEFAULT_PLACE_CACHE_MAX_ENTRIES),
        )
    }

    fn entity(name: &str, tag: (&str, &str), lat: f64) -> RawGeoEntity {
        let mut tags = std::collections::HashMap::new();
        tags.insert(tag.0.to_string(), tag.1.to_string());
        tags.insert("name".to_string(), name.to_string());
        RawGeoEntity {
            kind: "node".to_string(),
            lat: Some(lat),
            lon: Some(-73.0),
            center: None,
            tags,
        }
    }

    #[tokio::test]
    async fn cached_batch_feeds_the_pipeline_without_fetching() {
        let svc = service();
        let center = Coordinates::new(40.0, -73.0).unwrap();
        let ctx = RequestContext::new(
            vec!["Chill".to_string()],
            "morning".to_string(),
            "low".to_string(),
            datetime!(2025-05-14 09:00 UTC),
        );

        // Pre-seed the cache so no network fetch happens
        let key = PlaceCache::key(&center, 5000.0, &ctx.vibes);
        let batch = vec![
            entity("Joe's", ("amenity", "cafe"), 40.0),
            entity("Riverside", ("leisure", "park"), 40.01),
        ];
        svc.cache.insert(&key, &batch).await;

        let ranked = svc.suggest(&center, 5000.0, &ctx).await;
        assert_eq!(ranked.food.len(), 1);
        assert_eq!(ranked.activities.len(), 1);
        assert_eq!(ranked.food[0].name, "Joe's");
        assert_eq!(ranked.activities[0].name, "Riverside");
    }
}
