pub mod debug;
pub mod indoor;
pub mod outdoor;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/outdoor/suggestions", post(outdoor::get_suggestions))
        .route("/indoor/boardgames", post(indoor::get_board_games))
        .route("/indoor/movies", post(indoor::get_movies))
        .route("/indoor/recipes", post(indoor::get_recipes))
        .route("/debug/health", get(debug::health_check))
        .with_state(state)
}
