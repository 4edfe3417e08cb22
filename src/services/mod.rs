pub mod classifier;
pub mod indoor;
pub mod normalizer;
pub mod overpass;
pub mod ranker;
pub mod suggestions;
pub mod vibe_query;
