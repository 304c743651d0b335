use axum::{
    extract::{rejection::JsonRejection, Request},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use maintenance_core::errors::{Error as CoreError, ErrorKind};
use serde::Serialize;
use thiserror::Error;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// A single failed validation rule on a request field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationDetail {
    pub field: String,
    pub rule: String,
}

impl ValidationDetail {
    pub fn new(field: &str, rule: &str) -> Self {
        Self {
            field: field.to_string(),
            rule: rule.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    /// Request body could not be decoded or failed DTO validation.
    #[error("validation failed")]
    Validation(Vec<ValidationDetail>),
    #[error("{0}")]
    MalformedBody(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody(rejection.body_text())
    }
}

#[derive(Debug, Clone, Serialize)]
struct ErrorBody {
    code: u16,
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    details: Vec<ValidationDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    request_id: Option<String>,
}

pub fn status_for_kind(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
        ErrorKind::AlreadyExists | ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::PreconditionFailed => StatusCode::PRECONDITION_FAILED,
        ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorKind::Forbidden => StatusCode::FORBIDDEN,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            ApiError::Core(e) => {
                let status = status_for_kind(e.kind());
                if status.is_server_error() {
                    tracing::error!("Request failed: {}", e);
                }
                (status, e.to_string(), Vec::new())
            }
            ApiError::Validation(details) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation failed".to_string(),
                details,
            ),
            ApiError::MalformedBody(reason) => {
                (StatusCode::UNPROCESSABLE_ENTITY, reason, Vec::new())
            }
        };
        let body = ErrorBody {
            code: status.as_u16(),
            error,
            details,
            request_id: None,
        };
        let mut response = (status, Json(body.clone())).into_response();
        // Picked up by `attach_request_id` once the request ID is known.
        response.extensions_mut().insert(body);
        response
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Re-renders error bodies produced by [`ApiError`] with the request's
/// `x-request-id`, if it has one.
pub async fn attach_request_id(request: Request, next: Next) -> Response {
    let request_id = request_id(request.headers());
    let response = next.run(request).await;

    let Some(request_id) = request_id else {
        return response;
    };
    let Some(mut body) = response.extensions().get::<ErrorBody>().cloned() else {
        return response;
    };
    body.request_id = Some(request_id);

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(axum::http::header::CONTENT_LENGTH);
    let mut rebuilt = Json(body).into_response();
    *rebuilt.status_mut() = parts.status;
    rebuilt.headers_mut().extend(parts.headers);
    rebuilt
}

fn request_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
