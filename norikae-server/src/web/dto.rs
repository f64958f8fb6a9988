//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{InterleaveRequest, InterleaveResult, RouteQuery, RouteResult};

/// Form fields for the pata page.
///
/// Missing fields are treated as empty strings.
#[derive(Debug, Default, Deserialize)]
pub struct PataRequest {
    #[serde(default)]
    pub a: String,

    #[serde(default)]
    pub b: String,
}

impl From<PataRequest> for InterleaveRequest {
    fn from(req: PataRequest) -> Self {
        InterleaveRequest::new(req.a, req.b)
    }
}

/// Response for the pata page.
#[derive(Debug, Serialize, Deserialize)]
pub struct PataResponse {
    pub a: String,
    pub b: String,
    pub merged: String,
}

impl PataResponse {
    pub fn new(request: InterleaveRequest, result: InterleaveResult) -> Self {
        Self {
            a: request.a,
            b: request.b,
            merged: result.merged,
        }
    }
}

/// Form fields for the norikae page.
#[derive(Debug, Default, Deserialize)]
pub struct NorikaeRequest {
    /// Start station name
    #[serde(default)]
    pub start: String,

    /// Destination station name
    #[serde(default, alias = "destination")]
    pub dest: String,
}

impl From<NorikaeRequest> for RouteQuery {
    fn from(req: NorikaeRequest) -> Self {
        RouteQuery::new(req.start, req.dest)
    }
}

/// A line in the norikae response.
#[derive(Debug, Serialize, Deserialize)]
pub struct LineResult {
    pub name: String,
    pub stations: Vec<String>,

    /// Whether this is the resolved line
    pub is_current: bool,
}

/// Response for the norikae page.
#[derive(Debug, Serialize, Deserialize)]
pub struct NorikaeResponse {
    pub start: String,
    pub destination: String,

    /// Resolved line name, or "no match"
    pub current_line: String,

    /// Whether a line was found
    pub matched: bool,

    /// Every line in the network, in feed order
    pub lines: Vec<LineResult>,
}

impl NorikaeResponse {
    pub fn from_result(result: &RouteResult) -> Self {
        let lines = result
            .network
            .lines()
            .iter()
            .enumerate()
            .map(|(index, line)| LineResult {
                name: line.name.clone(),
                stations: line.stations.clone(),
                is_current: result.is_current(index),
            })
            .collect();

        Self {
            start: result.query.start.clone(),
            destination: result.query.destination.clone(),
            current_line: result.resolved_line.to_string(),
            matched: result.resolved_line.is_match(),
            lines,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
