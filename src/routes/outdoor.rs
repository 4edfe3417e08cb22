use crate::constants::NO_PLACES_MESSAGE;
use crate::error::{AppError, Result};
use crate::models::{Coordinates, RequestContext, SuggestionRequest, SuggestionResponse};
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;
use time::OffsetDateTime;

/// POST /outdoor/suggestions
/// Ranked activity and food suggestions around a point, for a set of vibes.
pub async fn get_suggestions(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SuggestionRequest>,
) -> Result<Json<SuggestionResponse>> {
    request.validate().map_err(AppError::InvalidRequest)?;

    let center = Coordinates::new(request.latitude, request.longitude)
        .map_err(AppError::InvalidRequest)?;
    let radius_meters = request.radius_meters();

    tracing::info!(
        lat = request.latitude,
        lng = request.longitude,
        radius_m = radius_meters,
        "Suggestion request: vibes={:?}, timeOfDay={:?}, energyLevel={:?}",
        request.vibes,
        request.time_of_day,
        request.energy_level
    );

    let ctx = RequestContext::new(
        request.vibes_or_default(),
        request.time_of_day.clone(),
        request.energy_level.clone(),
        OffsetDateTime::now_utc(),
    );

    let ranked = state.suggestions.suggest(&center, radius_meters, &ctx).await;

    let message = if ranked.activities.is_empty() && ranked.food.is_empty() {
        Some(NO_PLACES_MESSAGE.to_string())
    } else {
        None
    };

    Ok(Json(SuggestionResponse {
        activities: ranked.activities,
        food: ranked.food,
        message,
    }))
}
