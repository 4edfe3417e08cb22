//! Rule-based indoor suggestion generators: board games, movies, and
//! recipes.
//!
//! Everything here is deterministic and offline: fixed catalogs filtered by
//! the caller's preferences, and recipe cards templated from the caller's own
//! ingredient list. Same inputs, same outputs.

use crate::models::{BoardGame, Movie, Recipe};

/// Maximum board games returned per request.
const MAX_BOARD_GAMES: usize = 5;
/// Maximum recipes returned per request.
const MAX_RECIPES: usize = 6;

/// Deterministic calorie estimates, one per recipe template.
const RECIPE_CALORIES: [u32; 6] = [320, 280, 350, 220, 400, 260];

fn game(
    name: &str,
    vibe: &str,
    energy: &str,
    min: u32,
    max: u32,
    desc: &str,
    how_to_play: &str,
) -> BoardGame {
    BoardGame {
        name: name.to_string(),
        vibe: vibe.to_string(),
        energy: energy.to_string(),
        min,
        max,
        desc: desc.to_string(),
        how_to_play: how_to_play.to_string(),
    }
}

fn board_game_catalog() -> Vec<BoardGame> {
    vec![
        game(
            "Catan", "social", "medium", 3, 4,
            "Trade, build, and settle. A classic strategy game.",
            "1. Lay out the hex tiles and numbers.\n2. Each player places two settlements and roads.\n3. On your turn roll dice, collect resources, trade and build.\n4. First to 10 victory points wins.",
        ),
        game(
            "Ticket to Ride", "chill", "low", 2, 5,
            "Build train routes across countries. Relaxing yet strategic.",
            "1. Draw Destination Tickets and keep your routes secret.\n2. On your turn either draw train cards, claim a route, or draw more tickets.\n3. Connect cities before others and score long continuous routes.",
        ),
        game(
            "Codenames", "social", "high", 4, 8,
            "Word association game for teams. Great for parties.",
            "1. Split into two teams with a spymaster each.\n2. Spymaster gives a one-word clue + number.\n3. Team guesses words on the grid, avoiding the assassin.\n4. First team to find all their agents wins.",
        ),
        game(
            "Pandemic", "cooperative", "high", 2, 4,
            "Save the world from diseases together.",
            "1. Each player gets a role with special powers.\n2. On your turn move, treat disease cubes, share knowledge, and build research stations.\n3. Work together to discover 4 cures before outbreaks spiral.",
        ),
        game(
            "Exploding Kittens", "funny", "medium", 2, 5,
            "Russian roulette with cats. Fast and funny.",
            "1. Take turns drawing cards from the deck.\n2. If you draw an Exploding Kitten, play a Defuse or you are out.\n3. Use action cards to skip, attack, see the future, or reshuffle.",
        ),
        game(
            "Monopoly", "competitive", "high", 2, 6,
            "The classic property trading game. Ruins friendships.",
            "1. Roll and move around the board, buying properties you land on.\n2. Collect rent, trade, and build houses/hotels.\n3. Last player not bankrupt wins.",
        ),
        game(
            "Scrabble", "chill", "low", 2, 4,
            "Word building game. Good for quiet evenings.",
            "1. Draw 7 letter tiles.\n2. Form words on the board crossword-style.\n3. Use premium squares (double/triple letter/word) to maximize points.",
        ),
        game(
            "Twister", "energetic", "high", 2, 4,
            "Get tied in knots. Very physical.",
            "1. Spread out the mat and spin the wheel.\n2. Place hands/feet on the called color.\n3. The last player still standing without falling wins.",
        ),
        game(
            "Dixit", "creative", "low", 3, 6,
            "Storytelling through abstract cards.",
            "1. Active player gives a clue for one of their cards.\n2. Others submit cards that also fit the clue.\n3. Guess which card was the storyteller's; score for good clues and guesses.",
        ),
        game(
            "The Resistance", "social", "high", 5, 10,
            "Social deduction and bluffing.",
            "1. Secretly deal roles (spies vs resistance).\n2. Propose mission teams; players vote.\n3. Mission cards determine success or failure; deduce who is lying.",
        ),
    ]
}

/// Suggest up to five board games matching player count, vibe family, and
/// energy level. When the filters empty the list, relax to a player-count
/// floor so the response is never needlessly empty.
pub fn suggest_board_games(vibe: &str, energy: &str, people: u32) -> Vec<BoardGame> {
    let catalog = board_game_catalog();

    let mut filtered: Vec<BoardGame> = catalog
        .iter()
        .filter(|g| people >= g.min && people <= g.max)
        .cloned()
        .collect();

    let vibe_lower = vibe.to_lowercase();
    if vibe_lower.contains("chill") {
        filtered.retain(|g| ["chill", "creative", "funny"].contains(&g.vibe.as_str()));
    }
    if vibe_lower.contains("social") || vibe_lower.contains("party") {
        filtered.retain(|g| {
            ["social", "energetic", "funny", "cooperative"].contains(&g.vibe.as_str())
        });
    }
    if vibe_lower.contains("competitive") {
        filtered.retain(|g| ["competitive", "social"].contains(&g.vibe.as_str()));
    }

    match energy {
        "high" => filtered.retain(|g| g.energy == "high" || g.energy == "medium"),
        "low" => filtered.retain(|g| g.energy == "low"),
        _ => {}
    }

    // Relax when the filters were too strict
    if filtered.is_empty() {
        filtered = catalog.into_iter().filter(|g| people >= g.min).collect();
    }

    filtered.truncate(MAX_BOARD_GAMES);
    filtered
}

const MOVIES_BY_GENRE: &[(&str, &[&str])] = &[
    (
        "action",
        &["Mad Max: Fury Road", "John Wick", "The Dark Knight", "Inception", "Gladiator"],
    ),
    (
        "comedy",
        &["Superbad", "The Grand Budapest Hotel", "Palm Springs", "Game Night", "Step Brothers"],
    ),
    (
        "drama",
        &["The Shawshank Redemption", "Parasite", "The Godfather", "La La Land", "Forrest Gump"],
    ),
    (
        "horror",
        &["Hereditary", "Get Out", "The Shining", "A Quiet Place", "It"],
    ),
    (
        "romance",
        &["The Notebook", "Pride & Prejudice", "Before Sunrise", "About Time", "La La Land"],
    ),
    (
        "sci-fi",
        &["Interstellar", "Blade Runner 2049", "Arrival", "The Matrix", "Dune"],
    ),
];

/// Picks for genres outside the table.
const FALLBACK_MOVIES: &[&str] = &["The Truman Show", "Spirited Away", "Pulp Fiction"];

/// Suggest movies for a genre, echoing the requested genre on each entry.
pub fn suggest_movies(genre: &str) -> Vec<Movie> {
    let genre_lower = genre.to_lowercase();
    let titles = MOVIES_BY_GENRE
        .iter()
        .find(|(key, _)| *key == genre_lower)
        .map(|(_, titles)| *titles)
        .unwrap_or(FALLBACK_MOVIES);

    titles
        .iter()
        .map(|title| Movie {
            title: title.to_string(),
            genre: genre.to_string(),
        })
        .collect()
}

fn or_default<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => default,
    }
}

/// Generate up to six deterministic recipe cards using only the caller's
/// ingredients, shaped by the time, health, spice, and cuisine preferences.
/// Returns an empty list when no ingredients are given.
pub fn generate_recipes(
    ingredients: &str,
    time: Option<&str>,
    health: Option<&str>,
    spice: Option<&str>,
    cuisine: Option<&str>,
) -> Vec<Recipe> {
    if ingredients.trim().is_empty() {
        return Vec::new();
    }

    let ingredient_list: Vec<String> = ingredients
        .split(',')
        .map(str::trim)
        .filter(|i| !i.is_empty())
        .map(str::to_string)
        .collect();

    let main_ingredient = ingredient_list
        .first()
        .cloned()
        .unwrap_or_else(|| "Chef's Choice".to_string());
    let readable_ingredients = ingredient_list.join(", ");

    let time_label = or_default(time, "30 mins");
    let health_label = or_default(health, "Comfort Food");
    let spice_label = or_default(spice, "Medium");
    let cuisine_label = or_default(cuisine, "Fusion");

    let quick = time_label.to_lowercase().contains("10");
    let long = time_label.to_lowercase().contains("1 hour");
    let is_healthy = health_label.to_lowercase().contains("healthy");
    let is_indulgent = health_label.to_lowercase().contains("indulgent");

    let spice_word = match spice_label.to_lowercase().as_str() {
        "mild" => "very gently spiced",
        "hot" => "bold and fiery",
        _ => "moderately spiced",
    };

    let base_intro = format!("Using only: {}.", readable_ingredients);

    let recipe = |name: String, prep_time: &str, health: &str, cuisine: &str, calories: u32, instructions: String| Recipe {
        name,
        prep_time: prep_time.to_string(),
        calories,
        ingredients: ingredient_list.clone(),
        instructions,
        cuisine: cuisine.to_string(),
        health: health.to_string(),
        spice: spice_label.to_string(),
    };

    let recipes = vec![
        recipe(
            format!("{} {} One-Pan Skillet", cuisine_label, main_ingredient),
            time_label,
            health_label,
            cuisine_label,
            RECIPE_CALORIES[0],
            format!(
                "{}\n1. Prep: Finely chop all the vegetables and aromatics you have.\n2. Heat: Warm a pan on medium heat with a teaspoon of oil or butter.\n3. Sauté: Start with firmer ingredients first, then softer ones, keeping it {}.\n4. Simmer: Let everything cook together until tender{}\n5. Finish: Taste, adjust salt and spice, and serve hot with whatever carbs you have on hand (bread, rice, etc.).",
                base_intro,
                spice_word,
                if quick {
                    " (keep it slightly crunchy for a quick bite)."
                } else {
                    " and flavors have blended deeply."
                },
            ),
        ),
        recipe(
            format!("Comfort-Style {} Bowl", main_ingredient),
            if quick { "10 mins" } else { "30 mins" },
            if is_healthy { "Balanced" } else { "Comfort Food" },
            "Home-Style",
            RECIPE_CALORIES[1],
            format!(
                "{}\n1. Base: If you have rice, noodles or bread, warm them up as a base.\n2. Topper: Lightly pan-fry {} with just salt, pepper and your preferred spices.\n3. Mix-ins: Add remaining chopped ingredients on top, either raw (for crunch) or quickly sautéed.\n4. Serve: Layer base + {} + veggies, drizzle with any available sauce (soy, ketchup, yogurt) for a quick, filling bowl.",
                base_intro, main_ingredient, main_ingredient,
            ),
        ),
        recipe(
            format!("Spiced {} Stuffed Pockets / Toast", main_ingredient),
            "20 mins",
            if is_indulgent { "Indulgent" } else { "Medium" },
            cuisine_label,
            RECIPE_CALORIES[2],
            format!(
                "{}\n1. Filling: Finely chop {} and mix with salt, herbs, and your {} seasoning.\n2. Stuff: Use bread slices, wraps, or dough to enclose the filling.\n3. Cook: Toast on a pan with a little oil/butter until golden on both sides.\n4. Cut & Serve: Slice into triangles/strips for easy snacking or a light meal.",
                base_intro, readable_ingredients, spice_word,
            ),
        ),
        recipe(
            format!("{} {} Salad / Cold Plate", cuisine_label, main_ingredient),
            if quick { "10 mins" } else { "15 mins" },
            if is_healthy { "Healthy" } else { "Light" },
            cuisine_label,
            RECIPE_CALORIES[3],
            format!(
                "{}\n1. Prep: Keep crunchy items (like cucumbers, carrots, onions) raw and chop them small.\n2. Protein: If {} is protein (eggs, paneer, chicken), cook or boil it quickly.\n3. Dressing: Whisk a simple dressing with lemon/vinegar, a bit of oil, salt and your chosen spice level.\n4. Toss: Combine everything in a bowl and toss right before serving for maximum freshness.",
                base_intro, main_ingredient,
            ),
        ),
        recipe(
            format!("{} One-Pot Comfort Stew", main_ingredient),
            if long { "1 hour" } else { "30 mins" },
            if is_healthy { "Balanced" } else { "Comfort Food" },
            "Global Comfort",
            RECIPE_CALORIES[4],
            format!(
                "{}\n1. Base: Start by sautéing any onions/garlic/strong aromatics in a deep pot.\n2. Bulk: Add the rest of the ingredients and enough water/broth to just cover them.\n3. Simmer: Cook on low heat until the hardest ingredient is tender.\n4. Adjust: Thicken with mashed veggies or a bit of starch if you like a thicker stew.\n5. Serve: Ideal for days when you want something warm, filling, and hands-off.",
                base_intro,
            ),
        ),
        recipe(
            format!("Quick {} Snack Bites", main_ingredient),
            "10-15 mins",
            if is_indulgent { "Indulgent" } else { "Medium" },
            "Snack",
            RECIPE_CALORIES[5],
            format!(
                "{}\n1. Chop everything into small, bite-sized pieces.\n2. If you have skewers, toothpicks, or just a plate, arrange items as small finger-food combos.\n3. Sprinkle with your preferred spice level and a squeeze of lemon/yogurt dip if available.\n4. Perfect for a movie night at home with exactly what's in your fridge.",
                base_intro,
            ),
        ),
    ];

    recipes.into_iter().take(MAX_RECIPES).collect()
}
