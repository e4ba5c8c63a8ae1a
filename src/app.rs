use crate::state::app_settings::AppSettings;
use crate::state::app_state::{AppState, PlayerRoute};
use log::error;
use mpg_api::{ClubDirectory, Player, PlayerSeasonStats};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Screen {
    #[default]
    PlayerList,
    PlayerDetail,
    Help,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::PlayerList => "Player List",
            Screen::PlayerDetail => "Player Detail",
            Screen::Help => "Help",
        }
    }
}

pub struct App {
    pub settings: AppSettings,
    pub state: AppState,
}

impl App {
    pub fn new() -> Self {
        let settings = AppSettings::load();

        let app = Self {
            state: AppState::new(),
            settings,
        };

        if let Some(level) = app.settings.log_level {
            log::set_max_level(level);
            tui_logger::set_default_level(level);
        }

        app
    }

    // -----------------------------------------------------------------------
    // Network response handlers — called from main_ui_loop
    // -----------------------------------------------------------------------

    pub fn on_pool_loaded(&mut self, players: Vec<Player>) {
        self.state.roster.load(players);
    }

    pub fn on_stats_loaded(&mut self, stats: PlayerSeasonStats) {
        // Ignore a response that outlived its screen.
        if self.state.detail.route.is_some() {
            self.state.detail.stats = Some(stats);
        }
    }

    pub fn on_clubs_loaded(&mut self, clubs: ClubDirectory) {
        if self.state.detail.route.is_some() {
            self.state.detail.clubs = Some(clubs);
        }
    }

    /// Failures are logged and nothing else; screens keep rendering with
    /// whatever data they have.
    pub fn on_error(&mut self, message: String) {
        error!("request failed: {message}");
    }

    // -----------------------------------------------------------------------
    // Navigation — push-style stack with a fixed initial route
    // -----------------------------------------------------------------------

    /// Push the detail screen for the selected roster row. Returns the route
    /// so the caller can issue the two detail requests after releasing the
    /// app lock.
    pub fn open_player_detail(&mut self) -> Option<PlayerRoute> {
        let route = PlayerRoute::from(self.state.roster.selected_player()?);
        self.state.detail.open(route.clone());
        self.update_screen(Screen::PlayerDetail);
        Some(route)
    }

    /// Pop back to the roster.
    pub fn close_player_detail(&mut self) {
        self.state.detail.close();
        self.update_screen(Screen::PlayerList);
    }

    pub fn update_screen(&mut self, next: Screen) {
        if self.state.screen == next {
            return;
        }
        self.state.previous_screen = self.state.screen;
        self.state.screen = next;
    }

    pub fn exit_help(&mut self) {
        if self.state.screen == Screen::Help {
            self.state.screen = self.state.previous_screen;
        }
    }

    pub fn toggle_show_logs(&mut self) {
        self.state.show_logs = !self.state.show_logs;
    }

    pub fn toggle_full_screen(&mut self) {
        self.settings.full_screen = !self.settings.full_screen;
    }
}
