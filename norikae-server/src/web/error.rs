//! Error responses for the web layer.

use askama::Template;
use axum::{
    Json,
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use tracing::{error, warn};

use crate::network::NetworkError;

use super::dto::ErrorResponse;
use super::templates::ErrorTemplate;

/// How a response body is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Html,
    Json,
}

impl ResponseFormat {
    /// HTML if the client accepts it, otherwise JSON.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let accepts_html = headers
            .get(header::ACCEPT)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|accept| accept.contains("text/html"));

        if accepts_html {
            ResponseFormat::Html
        } else {
            ResponseFormat::Json
        }
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// The transit feed could not be fetched or decoded
    Upstream {
        error: NetworkError,
        format: ResponseFormat,
    },
    Internal {
        message: String,
        format: ResponseFormat,
    },
}

impl AppError {
    pub fn upstream(error: NetworkError, format: ResponseFormat) -> Self {
        AppError::Upstream { error, format }
    }

    pub fn internal(message: impl Into<String>, format: ResponseFormat) -> Self {
        AppError::Internal {
            message: message.into(),
            format,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (title, summary, message, details, format) = match self {
            AppError::Upstream { error, format } => {
                warn!(%status, %error, "transit feed failure");
                let title = if error.is_fetch_failure() {
                    "Transit feed unavailable"
                } else {
                    "Transit feed returned invalid data"
                };
                let message = error.to_string();
                let details = match error.body_excerpt() {
                    Some(body) => format!("{message}\n\nFeed response:\n{body}"),
                    None => message.clone(),
                };
                (
                    title,
                    "The transit network could not be loaded.",
                    message,
                    details,
                    format,
                )
            }
            AppError::Internal { message, format } => {
                error!(%status, %message, "internal error");
                (
                    "Something went wrong",
                    "The page could not be rendered.",
                    message.clone(),
                    message,
                    format,
                )
            }
        };

        match format {
            ResponseFormat::Json => (status, Json(ErrorResponse { error: message })).into_response(),
            ResponseFormat::Html => {
                let page = ErrorTemplate {
                    title: title.to_string(),
                    message: summary.to_string(),
                    details: Some(details),
                };
                let body = page
                    .render()
                    .unwrap_or_else(|e| format!("Template error: {}", e));
                (status, Html(body)).into_response()
            }
        }
    }
}
