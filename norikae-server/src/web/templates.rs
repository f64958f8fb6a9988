//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::{InterleaveRequest, InterleaveResult, Line, RouteQuery, RouteResult};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Landing page with both forms.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
    pub details: Option<String>,
}

/// Interleave result page.
#[derive(Template)]
#[template(path = "pata.html")]
pub struct PataTemplate {
    pub a: String,
    pub b: String,
    pub merged: String,
}

impl PataTemplate {
    pub fn new(request: &InterleaveRequest, result: &InterleaveResult) -> Self {
        Self {
            a: request.a.clone(),
            b: request.b.clone(),
            merged: result.merged.clone(),
        }
    }
}

/// Transit network page.
#[derive(Template)]
#[template(path = "norikae.html")]
pub struct NorikaeTemplate {
    pub start: String,
    pub destination: String,
    pub current_line: String,
    pub matched: bool,
    pub lines: Vec<LineView>,
}

impl NorikaeTemplate {
    pub fn from_result(result: &RouteResult) -> Self {
        let lines = result
            .network
            .lines()
            .iter()
            .enumerate()
            .map(|(index, line)| LineView::new(line, &result.query, result.is_current(index)))
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

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Line view model for templates.
#[derive(Debug, Clone)]
pub struct LineView {
    pub name: String,
    pub is_current: bool,
    pub stations: Vec<StationView>,
}

impl LineView {
    fn new(line: &Line, query: &RouteQuery, is_current: bool) -> Self {
        let stations = line
            .stations
            .iter()
            .map(|name| StationView {
                name: name.clone(),
                is_start: query.is_start(name),
                is_destination: query.is_destination(name),
            })
            .collect();

        Self {
            name: line.name.clone(),
            is_current,
            stations,
        }
    }
}

/// Station view model for templates.
#[derive(Debug, Clone)]
pub struct StationView {
    pub name: String,
    pub is_start: bool,
    pub is_destination: bool,
}

impl StationView {
    /// CSS class for highlighting query stations.
    pub fn css_class(&self) -> &'static str {
        match (self.is_start, self.is_destination) {
            (true, true) => "station start destination",
            (true, false) => "station start",
            (false, true) => "station destination",
            (false, false) => "station",
        }
    }
}
