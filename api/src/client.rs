use crate::wire::{ClubsResponse, PoolResponse, StatsResponse, WireClub, WirePlayer, WireStatLine};
use crate::{
    Club, ClubDirectory, ClubSheet, CrestAssets, Player, PlayerSeasonStats, SeasonSheet, StatLine,
};
use chrono::NaiveDate;
use reqwest::Client;
use std::fmt;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

const MPG_API_BASE: &str = "https://api.mpg.football/api/data";

/// League whose player pool is browsed. Fixed, not configuration.
pub const LEAGUE_ID: &str = "1";
/// Championship season used for the stats endpoint path and sheet lookup.
pub const SEASON: &str = "2022";

/// MPG statistics client backed by the public api.mpg.football endpoints.
#[derive(Debug, Clone)]
pub struct MpgApi {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl Default for MpgApi {
    fn default() -> Self {
        Self {
            client: Client::builder()
                .user_agent("mpgtui/0.1 (terminal roster viewer)")
                .build()
                .unwrap_or_default(),
            base_url: MPG_API_BASE.to_owned(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    Api(reqwest::Error, String),
    Parsing(reqwest::Error, String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Api(e, url) => write!(f, "API error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
        }
    }
}

impl MpgApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at a different host. Used by tests to target a
    /// local mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Fetch the full player pool for a league.
    pub async fn fetch_player_pool(&self, league_id: &str) -> ApiResult<Vec<Player>> {
        let url = format!("{}/championship-players-pool/{league_id}", self.base_url);
        let raw: PoolResponse = self.get(&url).await?;
        Ok(map_pool(raw))
    }

    /// Fetch one player's per-season statistics sheet.
    pub async fn fetch_player_stats(
        &self,
        player_id: &str,
        season: &str,
    ) -> ApiResult<PlayerSeasonStats> {
        let url = format!(
            "{}/championship-player-stats/{player_id}/{season}",
            self.base_url
        );
        let raw: StatsResponse = self.get(&url).await?;
        Ok(map_stats(player_id, raw))
    }

    /// Fetch the entire club directory in one call.
    pub async fn fetch_clubs(&self) -> ApiResult<ClubDirectory> {
        let url = format!("{}/championship-clubs", self.base_url);
        let raw: ClubsResponse = self.get(&url).await?;
        Ok(map_clubs(raw))
    }

    async fn get<T: Default + serde::de::DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?;

        match response.error_for_status() {
            Ok(res) => res
                .json::<T>()
                .await
                .map_err(|e| ApiError::Parsing(e, url.to_owned())),
            Err(e) => {
                if e.status().map(|s| s.is_client_error()).unwrap_or(false) {
                    Ok(T::default())
                } else {
                    Err(ApiError::Api(e, url.to_owned()))
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Mapping: MPG wire types → clean domain types
// ---------------------------------------------------------------------------

fn map_pool(raw: PoolResponse) -> Vec<Player> {
    raw.pool_players
        .unwrap_or_default()
        .iter()
        .filter_map(map_player)
        .collect()
}

/// A pool entry without an id cannot be selected or fetched; skip it.
/// Everything else defaults.
fn map_player(w: &WirePlayer) -> Option<Player> {
    let id = w.id.clone()?;
    Some(Player {
        id,
        first_name: w.first_name.clone(),
        last_name: w.last_name.clone(),
        position: w.position.unwrap_or_default(),
        ultra_position: w.ultra_position.unwrap_or_default(),
        club_id: w.club_id.clone().unwrap_or_default(),
    })
}

fn map_stats(player_id: &str, raw: StatsResponse) -> PlayerSeasonStats {
    let seasons = raw
        .championships
        .unwrap_or_default()
        .into_iter()
        .map(|(season, sheet)| {
            let clubs = sheet
                .clubs
                .unwrap_or_default()
                .into_iter()
                .map(|(club_id, entry)| {
                    let sheet = ClubSheet {
                        join_date: entry.join_date.as_deref().and_then(parse_join_date),
                        stats: entry.stats.map(map_stat_line).unwrap_or_default(),
                    };
                    (club_id, sheet)
                })
                .collect();
            (season, SeasonSheet { clubs })
        })
        .collect();

    PlayerSeasonStats {
        player_id: player_id.to_owned(),
        seasons,
    }
}

fn map_stat_line(w: WireStatLine) -> StatLine {
    StatLine {
        matches_played: w.total_played_matches,
        goals: w.total_goals,
        assists: w.total_goal_assist,
        yellow_cards: w.total_yellow_card,
        red_cards: w.total_red_card,
        average_rating: w.average_rating,
    }
}

/// joinDate arrives as RFC 3339 on some sheets and a bare date on others.
fn parse_join_date(raw: &str) -> Option<NaiveDate> {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()
}

fn map_clubs(raw: ClubsResponse) -> ClubDirectory {
    let clubs = raw
        .championship_clubs
        .unwrap_or_default()
        .into_iter()
        .map(|(club_id, w)| {
            let club = map_club(&club_id, w);
            (club_id, club)
        })
        .collect();
    ClubDirectory { clubs }
}

fn map_club(club_id: &str, w: WireClub) -> Club {
    let crest = w
        .default_assets
        .and_then(|a| a.logo)
        .map(|logo| CrestAssets {
            small: logo.small,
            medium: logo.medium,
            large: logo.large,
        })
        .unwrap_or_default();

    Club {
        id: club_id.to_owned(),
        names: w.name.unwrap_or_default(),
        crest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::{WireClubAssets, WireClubLogo, WireClubSheet, WireSeasonSheet};
    use std::collections::HashMap;

    #[test]
    fn join_date_parses_both_wire_formats() {
        let expected = NaiveDate::from_ymd_opt(2021, 7, 1).unwrap();
        assert_eq!(parse_join_date("2021-07-01T00:00:00Z"), Some(expected));
        assert_eq!(parse_join_date("2021-07-01"), Some(expected));
        assert_eq!(parse_join_date("not a date"), None);
    }

    #[test]
    fn pool_entries_without_id_are_skipped() {
        let raw = PoolResponse {
            pool_players: Some(vec![
                WirePlayer {
                    id: Some("mpg_1".into()),
                    first_name: Some("Lionel".into()),
                    last_name: Some("Messi".into()),
                    position: Some(4),
                    ultra_position: Some(40),
                    club_id: Some("321".into()),
                },
                WirePlayer::default(),
            ]),
        };
        let players = map_pool(raw);
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].id, "mpg_1");
        assert_eq!(players[0].ultra_position, 40);
    }

    #[test]
    fn empty_pool_response_maps_to_empty_list() {
        assert!(map_pool(PoolResponse::default()).is_empty());
    }

    #[test]
    fn stats_mapping_preserves_partial_stat_lines() {
        let mut clubs = HashMap::new();
        clubs.insert(
            "321".to_string(),
            WireClubSheet {
                join_date: Some("2022-08-10".into()),
                stats: Some(WireStatLine {
                    total_played_matches: Some(30),
                    total_goals: Some(21),
                    average_rating: Some(7.845),
                    ..Default::default()
                }),
            },
        );
        let mut championships = HashMap::new();
        championships.insert("2022".to_string(), WireSeasonSheet { clubs: Some(clubs) });

        let stats = map_stats(
            "mpg_1",
            StatsResponse {
                id: Some("mpg_1".into()),
                championships: Some(championships),
            },
        );

        let sheet = stats.club_sheet(SEASON, "321").expect("sheet should map");
        assert_eq!(sheet.join_date, NaiveDate::from_ymd_opt(2022, 8, 10));
        assert_eq!(sheet.stats.matches_played, Some(30));
        assert_eq!(sheet.stats.goals, Some(21));
        assert_eq!(sheet.stats.assists, None);
        assert_eq!(sheet.stats.average_rating, Some(7.845));
        assert!(stats.club_sheet(SEASON, "999").is_none());
    }

    #[test]
    fn club_without_assets_maps_to_empty_crest() {
        let mut name = HashMap::new();
        name.insert("fr-FR".to_string(), "Montpellier".to_string());
        let club = map_club(
            "140",
            WireClub {
                name: Some(name),
                default_assets: None,
            },
        );
        assert_eq!(club.display_name(), Some("Montpellier"));
        assert!(club.crest.small.is_none());

        let bare = map_club("141", WireClub::default());
        assert!(bare.display_name().is_none());
    }

    #[test]
    fn club_asset_chain_maps_when_complete() {
        let club = map_club(
            "149",
            WireClub {
                name: None,
                default_assets: Some(WireClubAssets {
                    logo: Some(WireClubLogo {
                        small: Some("https://example.test/crest-small.png".into()),
                        medium: None,
                        large: None,
                    }),
                }),
            },
        );
        assert_eq!(
            club.crest.small.as_deref(),
            Some("https://example.test/crest-small.png")
        );
    }

    // -----------------------------------------------------------------------
    // HTTP round trips against a mock server
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn fetch_player_pool_decodes_pool_players() {
        let mut server = mockito::Server::new_async().await;
        let client = MpgApi::with_base_url(server.url());

        let json = r#"
            {
              "poolPlayers": [
                {
                  "id": "mpg_championship_player_1",
                  "firstName": "Lionel",
                  "lastName": "Messi",
                  "position": 4,
                  "ultraPosition": 40,
                  "clubId": "321"
                },
                {
                  "id": "mpg_championship_player_2",
                  "lastName": "Neymar",
                  "position": 4,
                  "ultraPosition": 40,
                  "clubId": "149"
                }
              ]
            }
        "#;

        let mock = server
            .mock("GET", "/championship-players-pool/1")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json)
            .create_async()
            .await;

        let players = client.fetch_player_pool(LEAGUE_ID).await.unwrap();
        mock.assert_async().await;

        assert_eq!(players.len(), 2);
        assert_eq!(players[0].full_name(), "Lionel Messi");
        assert_eq!(players[1].first_name, None);
        assert_eq!(players[1].full_name(), " Neymar");
    }

    #[tokio::test]
    async fn fetch_player_stats_handles_missing_average_rating() {
        let mut server = mockito::Server::new_async().await;
        let client = MpgApi::with_base_url(server.url());

        let json = r#"
            {
              "id": "mpg_championship_player_1",
              "championships": {
                "2022": {
                  "clubs": {
                    "321": {
                      "joinDate": "2021-07-01T00:00:00Z",
                      "stats": {
                        "totalPlayedMatches": 25,
                        "totalGoals": 17,
                        "totalGoalAssist": 13,
                        "totalYellowCard": 2,
                        "totalRedCard": 0
                      }
                    }
                  }
                }
              }
            }
        "#;

        let mock = server
            .mock("GET", "/championship-player-stats/mpg_championship_player_1/2022")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json)
            .create_async()
            .await;

        let stats = client
            .fetch_player_stats("mpg_championship_player_1", SEASON)
            .await
            .unwrap();
        mock.assert_async().await;

        let sheet = stats.club_sheet(SEASON, "321").unwrap();
        assert_eq!(sheet.stats.matches_played, Some(25));
        assert_eq!(sheet.stats.red_cards, Some(0));
        assert_eq!(sheet.stats.average_rating, None);
        assert_eq!(crate::fmt_rating(sheet.stats.average_rating), "N/A");
    }

    #[tokio::test]
    async fn fetch_clubs_decodes_directory() {
        let mut server = mockito::Server::new_async().await;
        let client = MpgApi::with_base_url(server.url());

        let json = r#"
            {
              "championshipClubs": {
                "321": {
                  "name": { "fr-FR": "Paris Saint-Germain" },
                  "defaultAssets": {
                    "logo": { "small": "https://example.test/psg-small.png" }
                  }
                },
                "140": {
                  "name": { "fr-FR": "Montpellier" }
                }
              }
            }
        "#;

        let mock = server
            .mock("GET", "/championship-clubs")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json)
            .create_async()
            .await;

        let directory = client.fetch_clubs().await.unwrap();
        mock.assert_async().await;

        assert_eq!(directory.club_name("321"), Some("Paris Saint-Germain"));
        assert_eq!(
            directory.crest_small("321"),
            Some("https://example.test/psg-small.png")
        );
        assert_eq!(directory.crest_small("140"), None);
        assert_eq!(directory.club_name("absent"), None);
    }

    #[tokio::test]
    async fn client_error_status_decodes_as_empty_payload() {
        let mut server = mockito::Server::new_async().await;
        let client = MpgApi::with_base_url(server.url());

        let mock = server
            .mock("GET", "/championship-players-pool/1")
            .with_status(404)
            .create_async()
            .await;

        let players = client.fetch_player_pool(LEAGUE_ID).await.unwrap();
        mock.assert_async().await;
        assert!(players.is_empty());
    }
}
