use crate::app::{App, Screen};
use crate::state::messages::NetworkRequest;
use crossterm::event::KeyCode::Char;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

pub async fn handle_key_bindings(
    key_event: KeyEvent,
    app: &Arc<Mutex<App>>,
    network_requests: &mpsc::Sender<NetworkRequest>,
) {
    let mut guard = app.lock().await;

    // Roster search compose mode swallows printable keys.
    if guard.state.screen == Screen::PlayerList && guard.state.roster.searching {
        match (key_event.code, key_event.modifiers) {
            (Char('c'), KeyModifiers::CONTROL) => {
                crate::cleanup_terminal();
                std::process::exit(0);
            }
            (KeyCode::Esc, _) => guard.state.roster.searching = false,
            (KeyCode::Backspace, _) => guard.state.roster.pop_search_char(),
            (KeyCode::Down, _) => guard.state.roster.navigate_down(),
            (KeyCode::Up, _) => guard.state.roster.navigate_up(),
            (KeyCode::Enter, _) => {
                if let Some(route) = guard.open_player_detail() {
                    drop(guard);
                    request_detail_data(route.player_id, network_requests).await;
                }
            }
            (Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                guard.state.roster.push_search_char(c);
            }
            _ => {}
        }
        return;
    }

    match (guard.state.screen, key_event.code, key_event.modifiers) {
        // Quit
        (_, Char('q'), _) | (_, Char('c'), KeyModifiers::CONTROL) => {
            crate::cleanup_terminal();
            std::process::exit(0);
        }

        (_, Char('?'), _) => guard.update_screen(Screen::Help),
        (Screen::Help, KeyCode::Esc, _) => guard.exit_help(),

        // Roster navigation
        (Screen::PlayerList, Char('/'), _) => guard.state.roster.searching = true,
        (Screen::PlayerList, Char('j') | KeyCode::Down, _) => guard.state.roster.navigate_down(),
        (Screen::PlayerList, Char('k') | KeyCode::Up, _) => guard.state.roster.navigate_up(),
        (Screen::PlayerList, KeyCode::Enter, _) => {
            if let Some(route) = guard.open_player_detail() {
                drop(guard);
                request_detail_data(route.player_id, network_requests).await;
                return;
            }
        }

        // Detail: Esc pops back to the roster
        (Screen::PlayerDetail, KeyCode::Esc | KeyCode::Backspace, _) => {
            guard.close_player_detail();
        }

        // Global
        (_, Char('f'), _) => guard.toggle_full_screen(),
        (_, Char('"'), _) => guard.toggle_show_logs(),

        _ => {}
    }
}

/// Detail activation fires two independent requests; neither orders the
/// other and each resolves into its own piece of state.
async fn request_detail_data(
    player_id: String,
    network_requests: &mpsc::Sender<NetworkRequest>,
) {
    let _ = network_requests
        .send(NetworkRequest::LoadPlayerStats { player_id })
        .await;
    let _ = network_requests.send(NetworkRequest::LoadClubs).await;
}
