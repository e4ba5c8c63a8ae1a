/// MPG API raw wire types — serde shapes for deserializing MPG responses.
/// These map to our clean domain types via the mapping functions in client.rs.
use serde::Deserialize;
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Player pool  (championship-players-pool/{leagueId})
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct PoolResponse {
    #[serde(rename = "poolPlayers")]
    pub pool_players: Option<Vec<WirePlayer>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WirePlayer {
    pub id: Option<String>,
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
    pub position: Option<u8>,
    #[serde(rename = "ultraPosition")]
    pub ultra_position: Option<u8>,
    #[serde(rename = "clubId")]
    pub club_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Player stats  (championship-player-stats/{playerId}/{season})
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct StatsResponse {
    pub id: Option<String>,
    /// Per-season sheets, keyed by championship season string.
    pub championships: Option<HashMap<String, WireSeasonSheet>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireSeasonSheet {
    pub clubs: Option<HashMap<String, WireClubSheet>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireClubSheet {
    #[serde(rename = "joinDate")]
    pub join_date: Option<String>, // ISO 8601 or plain date
    pub stats: Option<WireStatLine>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireStatLine {
    #[serde(rename = "totalPlayedMatches")]
    pub total_played_matches: Option<u32>,
    #[serde(rename = "totalGoals")]
    pub total_goals: Option<u32>,
    #[serde(rename = "totalGoalAssist")]
    pub total_goal_assist: Option<u32>,
    #[serde(rename = "totalYellowCard")]
    pub total_yellow_card: Option<u32>,
    #[serde(rename = "totalRedCard")]
    pub total_red_card: Option<u32>,
    #[serde(rename = "averageRating")]
    pub average_rating: Option<f64>,
}

// ---------------------------------------------------------------------------
// Club directory  (championship-clubs)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ClubsResponse {
    #[serde(rename = "championshipClubs")]
    pub championship_clubs: Option<HashMap<String, WireClub>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireClub {
    /// Localized names keyed by locale code.
    pub name: Option<HashMap<String, String>>,
    #[serde(rename = "defaultAssets")]
    pub default_assets: Option<WireClubAssets>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireClubAssets {
    pub logo: Option<WireClubLogo>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireClubLogo {
    pub small: Option<String>,
    pub medium: Option<String>,
    pub large: Option<String>,
}
