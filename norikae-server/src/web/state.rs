//! Application state for the web layer.

use std::sync::Arc;

use crate::network::NetworkClient;

/// Shared application state.
///
/// Holds only the feed client handle. Every request fetches its own network.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Transit feed client
    pub network: Arc<NetworkClient>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: NetworkClient) -> Self {
        Self {
            network: Arc::new(network),
        }
    }
}
