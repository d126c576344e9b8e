use super::*;

/// One entry of Bodhi's `{"status": "error", "errors": [...]}` envelope.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub(super) struct ErrorEntry {
    pub(super) location: &'static str,
    pub(super) name: String,
    pub(super) description: String,
}

impl ErrorEntry {
    pub(super) fn body(name: &str, description: impl Into<String>) -> Self {
        Self {
            location: "body",
            name: name.to_string(),
            description: description.into(),
        }
    }
}

fn error_response(status: StatusCode, errors: Vec<ErrorEntry>) -> Response {
    (
        status,
        Json(serde_json::json!({"status": "error", "errors": errors})),
    )
        .into_response()
}

pub(super) fn bad_request(errors: Vec<ErrorEntry>) -> Response {
    error_response(StatusCode::BAD_REQUEST, errors)
}

pub(super) fn login_required() -> Response {
    error_response(
        StatusCode::FORBIDDEN,
        vec![ErrorEntry {
            location: "cookies",
            name: "user".to_string(),
            description: "Login required".to_string(),
        }],
    )
}

pub(super) fn internal_error(err: anyhow::Error) -> Response {
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        vec![ErrorEntry::body("server", format!("{:#}", err))],
    )
}
