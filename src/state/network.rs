use crate::state::messages::{NetworkRequest, NetworkResponse};
use log::{debug, error};
use mpg_api::client::{ApiError, LEAGUE_ID, MpgApi, SEASON};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::mpsc;

const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

#[derive(Debug, Copy, Clone)]
pub struct LoadingState {
    pub is_loading: bool,
    pub spinner_char: char,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self { is_loading: false, spinner_char: ' ' }
    }
}

/// Owns the API client and serves fetch requests from the UI loop.
/// Requests are handled one at a time; failures become Error responses
/// that the UI only logs.
pub struct NetworkWorker {
    client: MpgApi,
    requests: mpsc::Receiver<NetworkRequest>,
    responses: mpsc::Sender<NetworkResponse>,
    is_loading: Arc<AtomicBool>,
}

impl NetworkWorker {
    pub fn new(
        requests: mpsc::Receiver<NetworkRequest>,
        responses: mpsc::Sender<NetworkResponse>,
    ) -> Self {
        Self {
            client: MpgApi::new(),
            requests,
            responses,
            is_loading: Arc::new(AtomicBool::new(false)),
        }
    }

    pub async fn run(mut self) {
        while let Some(request) = self.requests.recv().await {
            self.start_loading_animation().await;

            let result = match request {
                NetworkRequest::LoadPlayerPool => self.handle_load_pool().await,
                NetworkRequest::LoadPlayerStats { player_id } => {
                    self.handle_load_stats(player_id).await
                }
                NetworkRequest::LoadClubs => self.handle_load_clubs().await,
            };

            debug!("network request complete");
            self.stop_loading_animation().await;

            let response = result.unwrap_or_else(|err| NetworkResponse::Error {
                message: err.to_string(),
            });

            if let Err(e) = self.responses.send(response).await {
                error!("Failed to send network response: {e}");
                break;
            }
        }
    }

    async fn handle_load_pool(&self) -> Result<NetworkResponse, ApiError> {
        debug!("loading player pool for league {LEAGUE_ID}");
        let players = self.client.fetch_player_pool(LEAGUE_ID).await?;
        Ok(NetworkResponse::PoolLoaded { players })
    }

    async fn handle_load_stats(&self, player_id: String) -> Result<NetworkResponse, ApiError> {
        debug!("loading stats for player {player_id} season {SEASON}");
        let stats = self.client.fetch_player_stats(&player_id, SEASON).await?;
        Ok(NetworkResponse::StatsLoaded { stats })
    }

    async fn handle_load_clubs(&self) -> Result<NetworkResponse, ApiError> {
        debug!("loading club directory");
        let clubs = self.client.fetch_clubs().await?;
        Ok(NetworkResponse::ClubsLoaded { clubs })
    }

    async fn start_loading_animation(&self) {
        self.is_loading.store(true, Ordering::Relaxed);

        let mut loading_state =
            LoadingState { is_loading: true, spinner_char: SPINNER_CHARS[0] };
        let _ = self
            .responses
            .send(NetworkResponse::LoadingStateChanged { loading_state })
            .await;

        let responses = self.responses.clone();
        let is_loading = self.is_loading.clone();

        tokio::spawn(async move {
            let mut spinner_index = 1;
            let mut interval = tokio::time::interval(Duration::from_millis(33));
            loop {
                interval.tick().await;
                if !is_loading.load(Ordering::Relaxed) {
                    break;
                }
                loading_state.spinner_char = SPINNER_CHARS[spinner_index];
                spinner_index = (spinner_index + 1) % SPINNER_CHARS.len();
                let _ = responses
                    .send(NetworkResponse::LoadingStateChanged { loading_state })
                    .await;
            }
        });
    }

    async fn stop_loading_animation(&self) {
        self.is_loading.store(false, Ordering::Relaxed);
        tokio::time::sleep(Duration::from_millis(15)).await;

        let _ = self
            .responses
            .send(NetworkResponse::LoadingStateChanged {
                loading_state: LoadingState::default(),
            })
            .await;
    }
}
