//! Overpass API client: the geodata fetch collaborator for the suggestion
//! pipeline.
//!
//! Transport faults end here: any upstream failure degrades to an empty
//! batch, and data-quality problems inside a successful response are the
//! normalizer's concern.

use crate::constants::{
    FALLBACK_MIN_USABLE_PLACES, OVERPASS_MAX_ELEMENTS, OVERPASS_QUERY_TIMEOUT_SECONDS,
};
use crate::error::{AppError, Result};
use crate::models::{Coordinates, RawGeoEntity};
use crate::services::normalizer;
use crate::services::vibe_query::{self, TagSelector};
use reqwest::Client;
use serde::Deserialize;

/// Primary Overpass API endpoints with automatic rotation
const OVERPASS_ENDPOINTS: &[&str] = &[
    "https://overpass-api.de/api/interpreter", // Official main endpoint
    "https://overpass.private.coffee/api/interpreter", // Community mirror
    "https://maps.mail.ru/osm/tools/overpass/api/interpreter", // Mail.ru mirror
];

#[derive(Clone)]
pub struct OverpassClient {
    client: Client,
    endpoints: Vec<String>,
    current_endpoint_idx: std::sync::Arc<std::sync::atomic::AtomicUsize>,
}

impl OverpassClient {
    pub fn new() -> Self {
        let endpoints: Vec<String> = OVERPASS_ENDPOINTS.iter().map(|s| s.to_string()).collect();
        Self::with_endpoints(endpoints)
    }

    /// Build a client against explicit endpoints (e.g. a local mirror).
    pub fn with_endpoints(endpoints: Vec<String>) -> Self {
        OverpassClient {
            client: Client::new(),
            endpoints,
            current_endpoint_idx: std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0)),
        }
    }

    /// Get the next endpoint to try (round-robin)
    fn next_endpoint(&self) -> String {
        let idx = self
            .current_endpoint_idx
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        self.endpoints[idx % self.endpoints.len()].clone()
    }

    /// Fetch raw geodata around a center point for the given vibes.
    ///
    /// Runs the vibe-targeted query first; when it yields fewer than
    /// [`FALLBACK_MIN_USABLE_PLACES`] usable places, retries once with the
    /// broader untargeted query and keeps the larger result set. Returns an
    /// empty batch on any upstream failure.
    pub async fn fetch_places(
        &self,
        center: &Coordinates,
        radius_meters: f64,
        vibes: &[String],
    ) -> Vec<RawGeoEntity> {
        let selectors = vibe_query::build_selectors(vibes);
        let query = self.build_query(center, radius_meters, &selectors);

        tracing::debug!("Overpass vibe query: {}", query);

        let primary = match self.execute_query(&query).await {
            Ok(elements) => elements,
            Err(e) => {
                tracing::warn!("Overpass vibe query failed: {}", e);
                Vec::new()
            }
        };

        let usable = primary.iter().filter(|e| normalizer::is_usable(e)).count();
        if usable >= FALLBACK_MIN_USABLE_PLACES {
            tracing::info!(
                "Overpass vibe query returned {} elements ({} usable)",
                primary.len(),
                usable
            );
            return primary;
        }

        tracing::info!(
            "Only {} usable places from vibe query, trying broader search",
            usable
        );

        let fallback_query =
            self.build_query(center, radius_meters, vibe_query::BROAD_SELECTORS);
        match self.execute_query(&fallback_query).await {
            Ok(fallback) => {
                let fallback_usable = fallback
                    .iter()
                    .filter(|e| normalizer::is_usable(e))
                    .count();
                tracing::info!(
                    "Broader query returned {} elements ({} usable)",
                    fallback.len(),
                    fallback_usable
                );
                if fallback_usable > usable {
                    fallback
                } else {
                    primary
                }
            }
            Err(e) => {
                tracing::warn!("Broader fallback query failed: {}", e);
                primary
            }
        }
    }

    async fn execute_query(&self, query: &str) -> Result<Vec<RawGeoEntity>> {
        let endpoint = self.next_endpoint();

        let response = self
            .client
            .post(&endpoint)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(format!("data={}", urlencoding::encode(query)))
            .timeout(std::time::Duration::from_secs(
                OVERPASS_QUERY_TIMEOUT_SECONDS,
            ))
            .send()
            .await
            .map_err(|e| AppError::OverpassApi(format!("Request failed ({}): {}", endpoint, e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::OverpassApi(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let api_response: OverpassResponse = response
            .json()
            .await
            .map_err(|e| AppError::OverpassApi(format!("Failed to parse response: {}", e)))?;

        Ok(api_response.elements)
    }

    fn build_query(
        &self,
        center: &Coordinates,
        radius_meters: f64,
        selectors: &[TagSelector],
    ) -> String {
        let mut query_parts = vec![format!(
            "[out:json][timeout:{}];(",
            OVERPASS_QUERY_TIMEOUT_SECONDS
        )];

        for (key, value) in selectors {
            let selector_query = if *value == "*" {
                format!(
                    r#"nwr["{}"](around:{},{},{});"#,
                    key, radius_meters, center.lat, center.lng
                )
            } else {
                format!(
                    r#"nwr["{}"="{}"](around:{},{},{});"#,
                    key, value, radius_meters, center.lat, center.lng
                )
            };
            query_parts.push(selector_query);
        }

        // Cap results to bound upstream response size
        query_parts.push(format!(");out center {};", OVERPASS_MAX_ELEMENTS));
        query_parts.join("\n")
    }
}

impl Default for OverpassClient {
    fn default() -> Self {
        Self::new()
    }
}

// Overpass API response types

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<RawGeoEntity>,
}
