use crate::app::Screen;
use mpg_api::client::SEASON;
use mpg_api::{ClubDirectory, Player, PlayerSeasonStats, StatLine, fmt_count, fmt_rating};

// ---------------------------------------------------------------------------
// Roster state
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct RosterState {
    /// The full pool, in API order. Replaced wholesale on each fetch.
    pub players: Vec<Player>,
    /// Live search query; the visible list is recomputed on every keystroke.
    pub search: String,
    /// True while the search input has focus.
    pub searching: bool,
    /// Selected index into the filtered view.
    pub selected: usize,
}

impl RosterState {
    /// Store a freshly loaded pool and reset the cursor.
    pub fn load(&mut self, players: Vec<Player>) {
        self.players = players;
        self.selected = 0;
    }

    /// Players whose case-folded "first last" name contains the query.
    pub fn filtered(&self) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| p.matches_query(&self.search))
            .collect()
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search.push(c);
        self.selected = 0;
    }

    pub fn pop_search_char(&mut self) {
        self.search.pop();
        self.selected = 0;
    }

    pub fn navigate_down(&mut self) {
        let max = self.filtered().len().saturating_sub(1);
        if self.selected < max {
            self.selected += 1;
        }
    }

    pub fn navigate_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_player(&self) -> Option<&Player> {
        self.filtered().get(self.selected).copied()
    }
}

// ---------------------------------------------------------------------------
// Detail route + state
// ---------------------------------------------------------------------------

/// Navigation parameters passed from the roster row to the detail screen.
/// Selection itself triggers no fetch; the detail screen issues its own
/// requests on activation.
#[derive(Debug, Clone)]
pub struct PlayerRoute {
    pub player_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: u8,
    pub ultra_position: u8,
    pub club_id: String,
}

impl From<&Player> for PlayerRoute {
    fn from(p: &Player) -> Self {
        Self {
            player_id: p.id.clone(),
            first_name: p.first_name.clone(),
            last_name: p.last_name.clone(),
            position: p.position,
            ultra_position: p.ultra_position,
            club_id: p.club_id.clone(),
        }
    }
}

impl PlayerRoute {
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        )
    }

    pub fn position_label(&self) -> Option<&'static str> {
        mpg_api::ultra_position_label(self.ultra_position)
    }
}

/// Detail screen state. The stats and clubs requests are independent and
/// resolve in any order, each into its own field.
#[derive(Debug, Default)]
pub struct DetailState {
    pub route: Option<PlayerRoute>,
    pub stats: Option<PlayerSeasonStats>,
    pub clubs: Option<ClubDirectory>,
}

impl DetailState {
    /// Activate for a player. Previous data is discarded; re-activation
    /// re-issues both requests from scratch.
    pub fn open(&mut self, route: PlayerRoute) {
        self.route = Some(route);
        self.stats = None;
        self.clubs = None;
    }

    pub fn close(&mut self) {
        self.route = None;
        self.stats = None;
        self.clubs = None;
    }

    /// The stats request gates the whole screen; club loading does not.
    pub fn is_loading(&self) -> bool {
        self.route.is_some() && self.stats.is_none()
    }

    /// Club name via directory lookup; missing directory or entry → N/A.
    pub fn club_name(&self) -> String {
        self.route
            .as_ref()
            .and_then(|r| self.clubs.as_ref()?.club_name(&r.club_id))
            .unwrap_or(mpg_api::NOT_AVAILABLE)
            .to_string()
    }

    /// Crest URL only when the club → assets → logo → small chain resolves.
    pub fn crest_url(&self) -> Option<&str> {
        let route = self.route.as_ref()?;
        self.clubs.as_ref()?.crest_small(&route.club_id)
    }

    fn stat_line(&self) -> Option<&StatLine> {
        let route = self.route.as_ref()?;
        self.stats
            .as_ref()?
            .club_sheet(SEASON, &route.club_id)
            .map(|sheet| &sheet.stats)
    }

    pub fn join_date(&self) -> Option<String> {
        let route = self.route.as_ref()?;
        self.stats
            .as_ref()?
            .club_sheet(SEASON, &route.club_id)?
            .join_date
            .map(|d| d.format("%Y-%m-%d").to_string())
    }

    /// The six stat grid cells, each already carrying its display string.
    pub fn stat_rows(&self) -> [(&'static str, String); 6] {
        let line = self.stat_line().cloned().unwrap_or_default();
        [
            ("Matches", fmt_count(line.matches_played)),
            ("Goals", fmt_count(line.goals)),
            ("Assists", fmt_count(line.assists)),
            ("Yellow cards", fmt_count(line.yellow_cards)),
            ("Red cards", fmt_count(line.red_cards)),
            ("Avg rating", fmt_rating(line.average_rating)),
        ]
    }
}

// ---------------------------------------------------------------------------
// Root app state
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct AppState {
    pub screen: Screen,
    pub previous_screen: Screen,
    pub show_logs: bool,
    pub roster: RosterState,
    pub detail: DetailState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mpg_api::{Club, ClubSheet, CrestAssets, SeasonSheet};
    use std::collections::HashMap;

    fn player(id: &str, first: &str, last: &str, ultra: u8, club: &str) -> Player {
        Player {
            id: id.into(),
            first_name: Some(first.into()),
            last_name: Some(last.into()),
            position: 4,
            ultra_position: ultra,
            club_id: club.into(),
        }
    }

    fn pool() -> Vec<Player> {
        vec![
            player("1", "Lionel", "Messi", 40, "321"),
            player("2", "Kylian", "Mbappé", 40, "321"),
            player("3", "Marco", "Verratti", 31, "321"),
            player("4", "Gianluigi", "Donnarumma", 10, "321"),
        ]
    }

    #[test]
    fn empty_query_returns_full_list_in_order() {
        let mut roster = RosterState::default();
        roster.load(pool());
        let ids: Vec<&str> = roster.filtered().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn filter_is_case_folded_substring_over_first_last() {
        let mut roster = RosterState::default();
        roster.load(pool());
        for c in "MAR".chars() {
            roster.push_search_char(c);
        }
        let names: Vec<String> = roster.filtered().iter().map(|p| p.full_name()).collect();
        assert_eq!(names, vec!["Marco Verratti"]);

        // "ma" also matches inside "Donnarumma".
        roster.pop_search_char();
        let names: Vec<String> = roster.filtered().iter().map(|p| p.full_name()).collect();
        assert_eq!(names, vec!["Marco Verratti", "Gianluigi Donnarumma"]);
    }

    #[test]
    fn search_edits_reset_selection() {
        let mut roster = RosterState::default();
        roster.load(pool());
        roster.navigate_down();
        roster.navigate_down();
        assert_eq!(roster.selected, 2);
        roster.push_search_char('m');
        assert_eq!(roster.selected, 0);
    }

    #[test]
    fn selection_walks_the_filtered_view() {
        let mut roster = RosterState::default();
        roster.load(pool());
        for c in "mbap".chars() {
            roster.push_search_char(c);
        }
        assert_eq!(roster.filtered().len(), 1);
        roster.navigate_down(); // clamped
        let selected = roster.selected_player().expect("one match");
        assert_eq!(selected.id, "2");
    }

    fn route() -> PlayerRoute {
        PlayerRoute {
            player_id: "123".into(),
            first_name: Some("Lionel".into()),
            last_name: Some("Messi".into()),
            position: 4,
            ultra_position: 40,
            club_id: "321".into(),
        }
    }

    fn directory_without_club_321() -> ClubDirectory {
        let mut clubs = HashMap::new();
        let mut names = HashMap::new();
        names.insert("fr-FR".to_string(), "Montpellier".to_string());
        clubs.insert(
            "140".to_string(),
            Club { id: "140".into(), names, crest: CrestAssets::default() },
        );
        ClubDirectory { clubs }
    }

    fn stats_with_rating(rating: Option<f64>) -> PlayerSeasonStats {
        let mut clubs = HashMap::new();
        clubs.insert(
            "321".to_string(),
            ClubSheet {
                join_date: None,
                stats: StatLine {
                    matches_played: Some(30),
                    goals: Some(21),
                    assists: Some(18),
                    yellow_cards: Some(2),
                    red_cards: Some(0),
                    average_rating: rating,
                },
            },
        );
        let mut seasons = HashMap::new();
        seasons.insert(SEASON.to_string(), SeasonSheet { clubs });
        PlayerSeasonStats { player_id: "123".into(), seasons }
    }

    #[test]
    fn pending_stats_gate_the_screen() {
        let mut detail = DetailState::default();
        detail.open(route());
        assert!(detail.is_loading());
        detail.stats = Some(stats_with_rating(Some(7.8)));
        assert!(!detail.is_loading());
    }

    #[test]
    fn unknown_club_renders_sentinel_and_no_crest() {
        let mut detail = DetailState::default();
        detail.open(route());
        detail.clubs = Some(directory_without_club_321());
        assert_eq!(detail.club_name(), "N/A");
        assert!(detail.crest_url().is_none());
    }

    #[test]
    fn club_loading_does_not_gate_and_resolves_independently() {
        let mut detail = DetailState::default();
        detail.open(route());
        detail.stats = Some(stats_with_rating(Some(7.8)));
        // Clubs still outstanding: screen renders, club name falls back.
        assert!(!detail.is_loading());
        assert_eq!(detail.club_name(), "N/A");
    }

    #[test]
    fn missing_rating_renders_sentinel_and_present_rating_rounds() {
        let mut detail = DetailState::default();
        detail.open(route());

        detail.stats = Some(stats_with_rating(None));
        assert_eq!(detail.stat_rows()[5], ("Avg rating", "N/A".to_string()));

        detail.stats = Some(stats_with_rating(Some(7.845)));
        assert_eq!(detail.stat_rows()[5], ("Avg rating", "7.8".to_string()));
        assert_eq!(detail.stat_rows()[0], ("Matches", "30".to_string()));
    }

    #[test]
    fn stats_sheet_missing_for_club_renders_all_sentinels() {
        let mut detail = DetailState::default();
        detail.open(PlayerRoute { club_id: "999".into(), ..route() });
        detail.stats = Some(stats_with_rating(Some(7.8)));
        for (_, value) in detail.stat_rows() {
            assert_eq!(value, "N/A");
        }
    }

    #[test]
    fn reopening_discards_previous_data() {
        let mut detail = DetailState::default();
        detail.open(route());
        detail.stats = Some(stats_with_rating(Some(7.8)));
        detail.clubs = Some(directory_without_club_321());
        detail.open(route());
        assert!(detail.stats.is_none());
        assert!(detail.clubs.is_none());
        assert!(detail.is_loading());
    }
}
