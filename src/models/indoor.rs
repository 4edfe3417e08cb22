use serde::Serialize;

/// A board game from the built-in catalog.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardGame {
    pub name: String,
    /// Vibe family the game belongs to, e.g. "social" or "chill".
    pub vibe: String,
    /// "low", "medium", or "high".
    pub energy: String,
    /// Minimum player count.
    pub min: u32,
    /// Maximum player count.
    pub max: u32,
    pub desc: String,
    pub how_to_play: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Movie {
    pub title: String,
    pub genre: String,
}

/// A deterministic recipe card templated from the caller's ingredients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    pub prep_time: String,
    pub calories: u32,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub cuisine: String,
    pub health: String,
    pub spice: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_game_serializes_camel_case() {
        let game = BoardGame {
            name: "Catan".to_string(),
            vibe: "social".to_string(),
            energy: "medium".to_string(),
            min: 3,
            max: 4,
            desc: "Trade, build, and settle.".to_string(),
            how_to_play: "Roll, collect, build.".to_string(),
        };
        let json = serde_json::to_value(&game).unwrap();
        assert!(json.get("howToPlay").is_some());
        assert!(json.get("how_to_play").is_none());
    }

    #[test]
    fn recipe_serializes_prep_time_field() {
        let recipe = Recipe {
            name: "Fusion Paneer One-Pan Skillet".to_string(),
            prep_time: "30 mins".to_string(),
            calories: 320,
            ingredients: vec!["paneer".to_string()],
            instructions: "1. Prep.".to_string(),
            cuisine: "Fusion".to_string(),
            health: "Comfort Food".to_string(),
            spice: "Medium".to_string(),
        };
        let json = serde_json::to_value(&recipe).unwrap();
        assert_eq!(json["prepTime"], "30 mins");
    }
}
