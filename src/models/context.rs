use crate::constants::{CALM_VIBES, PEAK_TOURIST_MONTHS, SUMMER_MONTHS};
use time::{OffsetDateTime, Weekday};

/// Per-request context for the suggestion pipeline. The calendar facts are
/// computed once here, from an explicit timestamp supplied by the caller, so
/// the classifier stays a pure function of its inputs.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Raw vibe labels as supplied by the caller, order preserved.
    pub vibes: Vec<String>,
    /// Free-form; only "evening" and "night" carry scoring weight.
    pub time_of_day: String,
    /// Free-form; only "low" (case-insensitive) carries ranking weight.
    pub energy_level: String,
    pub is_weekend: bool,
    pub is_summer_month: bool,
    pub is_peak_tourist_season: bool,
}

impl RequestContext {
    pub fn new(
        vibes: Vec<String>,
        time_of_day: String,
        energy_level: String,
        now: OffsetDateTime,
    ) -> Self {
        let month = now.month();
        RequestContext {
            vibes,
            time_of_day,
            energy_level,
            is_weekend: matches!(now.weekday(), Weekday::Saturday | Weekday::Sunday),
            is_summer_month: SUMMER_MONTHS.contains(&month),
            is_peak_tourist_season: PEAK_TOURIST_MONTHS.contains(&month),
        }
    }

    /// True when food places should be considered busier.
    pub fn is_evening_or_night(&self) -> bool {
        matches!(self.time_of_day.as_str(), "evening" | "night")
    }

    /// Whether low-crowd places should rank first: low energy, or any of the
    /// calm vibe labels selected.
    pub fn wants_calm(&self) -> bool {
        self.energy_level.eq_ignore_ascii_case("low")
            || self
                .vibes
                .iter()
                .any(|v| CALM_VIBES.contains(&v.as_str()))
    }
}
