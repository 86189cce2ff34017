pub mod error;
pub mod handlers;
pub mod routes;

use blockchain::SolanaClient;
use shared::Config;
use std::sync::Arc;

/// Shared state handed to request handlers. The Solana client holds no
/// per-request data, so a single instance serves all requests.
pub struct AppState {
    pub config: Config,
    pub client: Arc<SolanaClient>,
}

impl AppState {
    pub fn new(config: Config, client: Arc<SolanaClient>) -> Self {
        Self { config, client }
    }
}
