use std::fmt;

/// A user-chosen mood label. Drives both the upstream search selectors and
/// the explanation text. Labels outside this set contribute nothing to the
/// search query but still appear verbatim in generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VibeTag {
    Chill,
    Energetic,
    Nature,
    Romantic,
    Social,
}

impl VibeTag {
    /// Parse a caller-supplied label. Unrecognized labels yield `None` and
    /// are never an error.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Chill" => Some(VibeTag::Chill),
            "Energetic" => Some(VibeTag::Energetic),
            "Nature" => Some(VibeTag::Nature),
            "Romantic" => Some(VibeTag::Romantic),
            "Social" => Some(VibeTag::Social),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VibeTag::Chill => "Chill",
            VibeTag::Energetic => "Energetic",
            VibeTag::Nature => "Nature",
            VibeTag::Romantic => "Romantic",
            VibeTag::Social => "Social",
        }
    }
}

impl fmt::Display for VibeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
