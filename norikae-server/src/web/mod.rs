//! Web layer for the pata and norikae demos.
//!
//! Extracts form fields, calls the interleaver or the feed client and
//! resolver, and renders the result as HTML or JSON.

mod dto;
mod error;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use error::{AppError, ResponseFormat};
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
