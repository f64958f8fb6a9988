//! Transit network feed client.
//!
//! Fetches the line/station graph from the fantasy-transit JSON feed. The
//! network is fetched fresh for every request; nothing is cached.

mod client;
mod error;

pub use client::{DEFAULT_NETWORK_URL, NetworkClient, NetworkClientConfig};
pub use error::NetworkError;
