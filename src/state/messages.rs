use crate::state::network::LoadingState;
use crossterm::event::KeyEvent;
use mpg_api::{ClubDirectory, Player, PlayerSeasonStats};

#[derive(Debug, Clone)]
pub enum NetworkRequest {
    LoadPlayerPool,
    LoadPlayerStats { player_id: String },
    LoadClubs,
}

#[derive(Debug)]
pub enum NetworkResponse {
    LoadingStateChanged { loading_state: LoadingState },
    PoolLoaded { players: Vec<Player> },
    StatsLoaded { stats: PlayerSeasonStats },
    ClubsLoaded { clubs: ClubDirectory },
    Error { message: String },
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    KeyPressed(KeyEvent),
    Resize,
    AppStarted,
}
