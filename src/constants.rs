//! Stable application-wide constants.
//!
//! Values here are structural invariants, heuristic coefficients, and default
//! fallbacks for env-var-based configuration. They should rarely change.

use time::Month;

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "5000";

// --- Search limits ---

/// Hard cap on the Overpass search radius. Requests asking for a larger
/// distance are clamped here to keep upstream queries tractable.
pub const MAX_SEARCH_RADIUS_METERS: f64 = 50_000.0;
/// Minimum number of usable places the vibe-targeted query must yield before
/// the broader untargeted fallback query is skipped.
pub const FALLBACK_MIN_USABLE_PLACES: usize = 3;
/// Maximum places returned per category (activities, food) after ranking.
pub const MAX_RESULTS_PER_CATEGORY: usize = 10;

// --- Overpass query limits ---

/// Timeout passed to the Overpass interpreter and applied to the HTTP request.
pub const OVERPASS_QUERY_TIMEOUT_SECONDS: u64 = 30;
/// Element cap in the `out center` statement, to bound upstream response size.
pub const OVERPASS_MAX_ELEMENTS: u32 = 200;

// --- Crowd heuristic coefficients ---
// The crowd level is a 1-5 heuristic estimate derived from the place type and
// the request context, not a measured value. Scores start at the base and are
// clamped to [CROWD_LEVEL_MIN, CROWD_LEVEL_MAX] after all bonuses.

/// Starting crowd score for every place.
pub const CROWD_LEVEL_BASE: i32 = 1;
/// Lower clamp bound for the crowd level.
pub const CROWD_LEVEL_MIN: i32 = 1;
/// Upper clamp bound for the crowd level.
pub const CROWD_LEVEL_MAX: i32 = 5;
/// Bonus for inherently busy place types (malls, markets, attractions).
pub const CROWD_BUSY_TYPE_BONUS: i32 = 2;
/// Bonus for food places during the evening or night.
pub const CROWD_EVENING_FOOD_BONUS: i32 = 1;
/// Bonus applied on Saturdays and Sundays.
pub const CROWD_WEEKEND_BONUS: i32 = 1;
/// Bonus applied during the peak tourist season months.
pub const CROWD_PEAK_SEASON_BONUS: i32 = 1;

// --- Season policy ---
// Placeholder calendar policy: hemisphere- and region-agnostic month windows.
// Tune per deployment region rather than deriving from geography.

/// Months treated as "summer" for context derivation.
pub const SUMMER_MONTHS: [Month; 3] = [Month::April, Month::May, Month::June];
/// Months treated as peak tourist season for crowd scoring.
pub const PEAK_TOURIST_MONTHS: [Month; 3] = [Month::November, Month::December, Month::January];

// --- Vibe defaults ---

/// Vibe assumed when the request carries none.
pub const DEFAULT_VIBE: &str = "Chill";
/// Vibe labels that indicate the user wants a calm, low-crowd experience.
pub const CALM_VIBES: &[&str] = &["Chill", "Solo Recharge", "Calm"];

// --- In-memory cache defaults ---

/// Default TTL for cached Overpass result batches: 15 minutes.
/// Overridden by `PLACE_CACHE_TTL`.
pub const DEFAULT_PLACE_CACHE_TTL_SECONDS: u64 = 900;
/// Maximum entries for the in-memory place cache (LRU eviction).
pub const DEFAULT_PLACE_CACHE_MAX_ENTRIES: u64 = 1_000;

// --- Response messages ---

/// Advisory message returned when a search yields no places at all.
pub const NO_PLACES_MESSAGE: &str =
    "No places found in this area. Try increasing the radius or selecting a different location.";
