//! Domain types for the pata and norikae demos.
//!
//! Everything here is created fresh per request and discarded once the
//! response is rendered. Nothing is cached or shared between requests.

mod interleave;
mod network;
mod route;

pub use interleave::{InterleaveRequest, InterleaveResult};
pub use network::{Line, TransitNetwork};
pub use route::{NO_MATCH_LABEL, ResolvedLine, RouteQuery, RouteResult};
