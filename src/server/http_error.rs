/// Centralized HTTP error responses.
///
/// Every boundary failure goes through `ApiError`, which renders a JSON body
/// with a code, a message and a context.
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The posted body is not a valid arena update (syntax, types, unknown
    /// fields or headings).
    #[error("failed to decode arena update: {0}")]
    MalformedArenaUpdate(#[from] serde_json::Error),
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::MalformedArenaUpdate(_) => "MALFORMED_ARENA_UPDATE",
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            ApiError::MalformedArenaUpdate(e) => Some(format!("line {} column {}", e.line(), e.column())),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            // The game server only distinguishes success from failure.
            ApiError::MalformedArenaUpdate(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        http_error_response(
            self.code(),
            &self.to_string(),
            self.context().as_deref(),
            self.status_code(),
        )
    }
}

/// Returns an HTTP error response with a JSON body.
///
/// # Arguments
/// - `code`: Unique error code.
/// - `message`: Human-readable error message.
/// - `context`: Optional context string.
/// - `status`: HTTP status code.
pub fn http_error_response(
    code: &str,
    message: &str,
    context: Option<&str>,
    status: StatusCode,
) -> HttpResponse {
    let body = json!({
        "error": {
            "code": code,
            "message": message,
            "context": context.unwrap_or(""),
        }
    });
    HttpResponse::build(status).json(body)
}
