//! HTTP route handlers.

use askama::Template;
use axum::{
    Form, Json, Router,
    extract::State,
    http::HeaderMap,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::domain::{InterleaveRequest, InterleaveResult, RouteQuery, RouteResult};

use super::dto::*;
use super::error::{AppError, ResponseFormat};
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/pata", get(pata).post(pata))
        .route("/norikae", get(norikae).post(norikae))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Landing page with the pata and norikae forms.
async fn index_page() -> Result<Response, AppError> {
    render(&IndexTemplate)
}

/// Interleave the `a` and `b` fields character by character.
///
/// Fields come from the query string on GET and the form body on POST.
async fn pata(headers: HeaderMap, Form(req): Form<PataRequest>) -> Result<Response, AppError> {
    let request: InterleaveRequest = req.into();
    let result = InterleaveResult::from_request(&request);
    debug!(a = %request.a, b = %request.b, merged = %result.merged, "interleaved");

    match ResponseFormat::from_headers(&headers) {
        ResponseFormat::Html => render(&PataTemplate::new(&request, &result)),
        ResponseFormat::Json => Ok(Json(PataResponse::new(request, result)).into_response()),
    }
}

/// Fetch the transit network and find the line serving `start` or `dest`.
async fn norikae(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(req): Form<NorikaeRequest>,
) -> Result<Response, AppError> {
    let format = ResponseFormat::from_headers(&headers);
    let query: RouteQuery = req.into();
    debug!(start = %query.start, destination = %query.destination, "norikae query");

    let network = state
        .network
        .fetch_network()
        .await
        .map_err(|e| AppError::upstream(e, format))?;

    let result = RouteResult::resolve(network, query);
    debug!(line = %result.resolved_line, "resolved current line");

    match format {
        ResponseFormat::Html => render(&NorikaeTemplate::from_result(&result)),
        ResponseFormat::Json => Ok(Json(NorikaeResponse::from_result(&result)).into_response()),
    }
}

/// Render an HTML page.
fn render<T: Template>(template: &T) -> Result<Response, AppError> {
    let html = template.render().map_err(|e| {
        AppError::internal(format!("Template error: {}", e), ResponseFormat::Html)
    })?;
    Ok(Html(html).into_response())
}
