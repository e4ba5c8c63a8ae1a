pub mod client;
pub mod wire;

use chrono::NaiveDate;
use std::collections::HashMap;

/// Sentinel rendered wherever a nested stats field is absent.
pub const NOT_AVAILABLE: &str = "N/A";

/// Locale preferred when picking a club display name.
pub const DEFAULT_LOCALE: &str = "fr-FR";

// ---------------------------------------------------------------------------
// Domain types — clean model, independent of the MPG wire format
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct Player {
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Coarse position code.
    pub position: u8,
    /// Fine-grained position code; drives the displayed label.
    pub ultra_position: u8,
    pub club_id: String,
}

impl Player {
    /// "first last" concatenation; a missing part contributes an empty string.
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        )
    }

    pub fn position_label(&self) -> Option<&'static str> {
        ultra_position_label(self.ultra_position)
    }

    /// Case-folded substring match against the "first last" concatenation.
    /// The empty query matches every player.
    pub fn matches_query(&self, query: &str) -> bool {
        self.full_name()
            .to_lowercase()
            .contains(&query.to_lowercase())
    }
}

/// The six known ultraPosition codes and their French labels.
/// Codes outside the set produce no label text.
pub fn ultra_position_label(code: u8) -> Option<&'static str> {
    match code {
        10 => Some("Gardien - G"),
        20 => Some("Defenseur - D"),
        21 => Some("Lateral - L"),
        30 => Some("Milieu défensir - MD"),
        31 => Some("Milieu offensif - MO"),
        40 => Some("Attaquant - A"),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Per-season statistics — explicit accessors per nesting level
// ---------------------------------------------------------------------------

/// A player's per-season statistics, keyed by championship season.
/// Any level of the tree may be absent; each accessor returns Option so
/// callers decide where to substitute the N/A sentinel.
#[derive(Debug, Clone, Default)]
pub struct PlayerSeasonStats {
    pub player_id: String,
    pub seasons: HashMap<String, SeasonSheet>,
}

impl PlayerSeasonStats {
    pub fn season(&self, season: &str) -> Option<&SeasonSheet> {
        self.seasons.get(season)
    }

    /// Walk season → club in one step.
    pub fn club_sheet(&self, season: &str, club_id: &str) -> Option<&ClubSheet> {
        self.season(season)?.club(club_id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SeasonSheet {
    pub clubs: HashMap<String, ClubSheet>,
}

impl SeasonSheet {
    pub fn club(&self, club_id: &str) -> Option<&ClubSheet> {
        self.clubs.get(club_id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ClubSheet {
    pub join_date: Option<NaiveDate>,
    pub stats: StatLine,
}

/// Aggregate counters for one player at one club in one season.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatLine {
    pub matches_played: Option<u32>,
    pub goals: Option<u32>,
    pub assists: Option<u32>,
    pub yellow_cards: Option<u32>,
    pub red_cards: Option<u32>,
    pub average_rating: Option<f64>,
}

/// Counter display: the value, or the N/A sentinel.
pub fn fmt_count(value: Option<u32>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string())
}

/// Rating display: rounded to exactly one decimal place, or the N/A sentinel.
pub fn fmt_rating(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format!("{v:.1}"))
}

// ---------------------------------------------------------------------------
// Club directory
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct Club {
    pub id: String,
    /// Localized names, keyed by locale code ("fr-FR", "en-GB", ...).
    pub names: HashMap<String, String>,
    pub crest: CrestAssets,
}

impl Club {
    /// Prefer the home locale, fall back to any available entry.
    pub fn display_name(&self) -> Option<&str> {
        self.names
            .get(DEFAULT_LOCALE)
            .or_else(|| self.names.values().next())
            .map(String::as_str)
    }
}

/// Crest image URLs at the sizes the API publishes. All optional.
#[derive(Debug, Clone, Default)]
pub struct CrestAssets {
    pub small: Option<String>,
    pub medium: Option<String>,
    pub large: Option<String>,
}

/// The full club directory, fetched in bulk.
#[derive(Debug, Clone, Default)]
pub struct ClubDirectory {
    pub clubs: HashMap<String, Club>,
}

impl ClubDirectory {
    pub fn get(&self, club_id: &str) -> Option<&Club> {
        self.clubs.get(club_id)
    }

    pub fn club_name(&self, club_id: &str) -> Option<&str> {
        self.get(club_id)?.display_name()
    }

    /// The small crest URL, only when the whole asset chain resolves.
    pub fn crest_small(&self, club_id: &str) -> Option<&str> {
        self.get(club_id)?.crest.small.as_deref()
    }
}
