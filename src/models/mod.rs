pub mod api;
pub mod context;
pub mod coordinates;
pub mod indoor;
pub mod place;
pub mod vibe;

pub use api::{
    BoardGameRequest, MovieRequest, RecipeRequest, SuggestionRequest, SuggestionResponse,
};
pub use context::RequestContext;
pub use coordinates::Coordinates;
pub use indoor::{BoardGame, Movie, Recipe};
pub use place::{AreaCenter, ClassifiedPlace, NormalizedPlace, PlaceCategory, RawGeoEntity};
pub use vibe::VibeTag;
