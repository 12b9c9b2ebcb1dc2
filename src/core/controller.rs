use std::sync::Arc;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Configuration,
    pub(crate) catalog: Arc<dyn CatalogService>,
}

impl AppState {
    pub fn new(config: Configuration, catalog: Arc<dyn CatalogService>) -> AppState {
        AppState {
            config,
            catalog,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct ErrorDetail {
    pub detail: String,
}

pub(crate) type ServerError = (StatusCode, Json<ErrorDetail>);

fn server_error(status: StatusCode, detail: &str) -> ServerError {
    (status, Json(ErrorDetail { detail: detail.to_string() }))
}

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    server_error(StatusCode::BAD_REQUEST, format!("{}", err).as_str())
}

// malformed bodies and missing content types are both reported as bad requests
pub fn json_rejection_to_server_error(rejection: JsonRejection) -> ServerError {
    tracing::debug!(status = %rejection.status(), "request body rejected");
    server_error(StatusCode::BAD_REQUEST, rejection.body_text().as_str())
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        tracing::debug!(error = ?err, "request rejected");
        match err {
            CommandError::DuplicateKey { .. } => {
                server_error(StatusCode::BAD_REQUEST, err.message())
            }
            CommandError::NotFound { .. } => {
                server_error(StatusCode::NOT_FOUND, err.message())
            }
            CommandError::Persistence { .. } => {
                server_error(StatusCode::INTERNAL_SERVER_ERROR, err.message())
            }
            CommandError::Runtime { .. } => {
                server_error(StatusCode::INTERNAL_SERVER_ERROR, err.message())
            }
            CommandError::Serialization { .. } => {
                server_error(StatusCode::BAD_REQUEST, err.message())
            }
            CommandError::Validation { .. } => {
                server_error(StatusCode::BAD_REQUEST, err.message())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use crate::core::command::CommandError;
    use crate::core::controller::{json_to_server_error, ServerError};

    #[tokio::test]
    async fn test_should_map_command_errors_to_status() {
        let (status, body) = ServerError::from(CommandError::DuplicateKey { message: "isbn 1 already exists".to_string() });
        assert_eq!(StatusCode::BAD_REQUEST, status);
        assert_eq!("isbn 1 already exists", body.0.detail.as_str());

        let (status, _) = ServerError::from(CommandError::NotFound { message: "missing".to_string() });
        assert_eq!(StatusCode::NOT_FOUND, status);

        let (status, _) = ServerError::from(CommandError::Validation { message: "bad".to_string(), reason_code: None });
        assert_eq!(StatusCode::BAD_REQUEST, status);

        let (status, _) = ServerError::from(CommandError::Persistence { message: "disk".to_string(), reason_code: None });
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status);
    }

    #[tokio::test]
    async fn test_should_map_json_errors_to_bad_request() {
        let err = serde_json::from_str::<Vec<String>>("[1,").expect_err("should fail");
        let (status, body) = json_to_server_error(err);
        assert_eq!(StatusCode::BAD_REQUEST, status);
        assert!(!body.0.detail.is_empty());
    }
}
