//! Request and response bodies for the HTTP API.

use crate::constants::{DEFAULT_VIBE, MAX_SEARCH_RADIUS_METERS};
use crate::models::ClassifiedPlace;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    pub latitude: f64,
    pub longitude: f64,
    /// Vibe labels, e.g. `["Chill", "Nature"]`. Absent means a single
    /// default vibe; an explicit empty list stays empty.
    #[serde(default)]
    pub vibes: Option<Vec<String>>,
    #[serde(default)]
    pub time_of_day: String,
    #[serde(default)]
    pub energy_level: String,
    /// Search radius in kilometers.
    pub distance: f64,
}

impl SuggestionRequest {
    pub fn validate(&self) -> Result<(), String> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err("latitude must be a number between -90 and 90".to_string());
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err("longitude must be a number between -180 and 180".to_string());
        }
        if !self.distance.is_finite() || self.distance <= 0.0 {
            return Err("distance must be a positive number of kilometers".to_string());
        }
        Ok(())
    }

    /// Requested radius in meters, capped for upstream performance.
    pub fn radius_meters(&self) -> f64 {
        (self.distance * 1000.0).min(MAX_SEARCH_RADIUS_METERS)
    }

    pub fn vibes_or_default(&self) -> Vec<String> {
        self.vibes
            .clone()
            .unwrap_or_else(|| vec![DEFAULT_VIBE.to_string()])
    }
}

#[derive(Debug, Serialize)]
pub struct SuggestionResponse {
    pub activities: Vec<ClassifiedPlace>,
    pub food: Vec<ClassifiedPlace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BoardGameRequest {
    #[serde(default)]
    pub vibe: String,
    #[serde(default)]
    pub energy: String,
    #[serde(default)]
    pub people: u32,
}

#[derive(Debug, Deserialize)]
pub struct MovieRequest {
    #[serde(default)]
    pub genre: String,
}

#[derive(Debug, Deserialize)]
pub struct RecipeRequest {
    /// Comma-separated ingredient list. Required.
    #[serde(default)]
    pub ingredients: String,
    pub time: Option<String>,
    pub health: Option<String>,
    pub spice: Option<String>,
    pub cuisine: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(latitude: f64, longitude: f64, distance: f64) -> SuggestionRequest {
        SuggestionRequest {
            latitude,
            longitude,
            vibes: None,
            time_of_day: String::new(),
            energy_level: String::new(),
            distance,
        }
    }

    #[test]
    fn validate_rejects_bad_coordinates_and_distance() {
        assert!(request(48.8, 2.3, 5.0).validate().is_ok());
        assert!(request(91.0, 2.3, 5.0).validate().is_err());
        assert!(request(48.8, -200.0, 5.0).validate().is_err());
        assert!(request(f64::NAN, 2.3, 5.0).validate().is_err());
        assert!(request(48.8, 2.3, 0.0).validate().is_err());
        assert!(request(48.8, 2.3, -2.0).validate().is_err());
    }

    #[test]
    fn radius_is_capped_at_fifty_km() {
        assert_eq!(request(0.0, 0.0, 5.0).radius_meters(), 5000.0);
        assert_eq!(request(0.0, 0.0, 120.0).radius_meters(), 50_000.0);
    }

    #[test]
    fn missing_vibes_default_but_explicit_empty_stays_empty() {
        let mut req = request(0.0, 0.0, 5.0);
        assert_eq!(req.vibes_or_default(), vec!["Chill".to_string()]);
        req.vibes = Some(Vec::new());
        assert!(req.vibes_or_default().is_empty());
    }

    #[test]
    fn suggestion_request_accepts_minimal_body() {
        let req: SuggestionRequest =
            serde_json::from_str(r#"{"latitude": 40.0, "longitude": -73.0, "distance": 5}"#)
                .unwrap();
        assert!(req.vibes.is_none());
        assert_eq!(req.time_of_day, "");
        assert_eq!(req.energy_level, "");
    }

    #[test]
    fn empty_response_message_is_omitted_when_none() {
        let response = SuggestionResponse {
            activities: Vec::new(),
            food: Vec::new(),
            message: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("message").is_none());
    }
}
