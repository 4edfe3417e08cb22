use crate::error::{AppError, Result};
use crate::models::{BoardGame, BoardGameRequest, Movie, MovieRequest, Recipe, RecipeRequest};
use crate::services::indoor;
use axum::Json;

/// POST /indoor/boardgames
pub async fn get_board_games(
    Json(request): Json<BoardGameRequest>,
) -> Json<Vec<BoardGame>> {
    tracing::info!(
        vibe = %request.vibe,
        energy = %request.energy,
        people = request.people,
        "Board game request"
    );
    Json(indoor::suggest_board_games(
        &request.vibe,
        &request.energy,
        request.people,
    ))
}

/// POST /indoor/movies
pub async fn get_movies(Json(request): Json<MovieRequest>) -> Json<Vec<Movie>> {
    tracing::info!(genre = %request.genre, "Movie request");
    Json(indoor::suggest_movies(&request.genre))
}

/// POST /indoor/recipes
pub async fn get_recipes(Json(request): Json<RecipeRequest>) -> Result<Json<Vec<Recipe>>> {
    if request.ingredients.trim().is_empty() {
        return Err(AppError::InvalidRequest(
            "Ingredients are required".to_string(),
        ));
    }

    tracing::info!(ingredients = %request.ingredients, "Recipe request");

    let recipes = indoor::generate_recipes(
        &request.ingredients,
        request.time.as_deref(),
        request.health.as_deref(),
        request.spice.as_deref(),
        request.cuisine.as_deref(),
    );

    if recipes.is_empty() {
        return Err(AppError::NotFound(
            "No recipes found. Try different ingredients.".to_string(),
        ));
    }

    Ok(Json(recipes))
}
