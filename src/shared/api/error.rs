use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use crate::shared::{
    api::ApiResponse,
    validation::{FieldError, ValidationErrors},
};

/// Failure taxonomy every handler reports through.
///
/// `UpstreamFailure` and `Internal` carry a `detail` that is written to the log and, in debug
/// builds only, appended to the client message.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    ValidationFailed {
        message: String,
        errors: Vec<FieldError>,
    },

    #[error("{0}")]
    Unauthenticated(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{message}: {detail}")]
    UpstreamFailure { message: String, detail: String },

    #[error("{message}: {detail}")]
    Internal { message: String, detail: String },
}

impl AppError {
    pub fn invalid(field: &str, message: &str) -> Self {
        AppError::ValidationFailed {
            message: message.to_string(),
            errors: vec![FieldError::new(field, message)],
        }
    }

    pub fn not_found(message: &str) -> Self {
        AppError::NotFound(message.to_string())
    }

    pub fn unauthenticated(message: &str) -> Self {
        AppError::Unauthenticated(message.to_string())
    }

    pub fn forbidden(message: &str) -> Self {
        AppError::Forbidden(message.to_string())
    }

    pub fn conflict(message: &str) -> Self {
        AppError::Conflict(message.to_string())
    }

    pub fn upstream(message: &str, detail: impl std::fmt::Display) -> Self {
        AppError::UpstreamFailure {
            message: message.to_string(),
            detail: detail.to_string(),
        }
    }

    pub fn internal(detail: impl std::fmt::Display) -> Self {
        AppError::Internal {
            message: "Internal server error".to_string(),
            detail: detail.to_string(),
        }
    }

    fn client_message(message: &str, detail: &str) -> String {
        if cfg!(debug_assertions) && !detail.is_empty() {
            format!("{message}: {detail}")
        } else {
            message.to_string()
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::ValidationFailed {
            message: "Validation failed".to_string(),
            errors: errors.into_errors(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::UpstreamFailure { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::ValidationFailed { message, errors } => {
                tracing::debug!(fields = errors.len(), "{}", message);
                ApiResponse::validation_failed(message, errors.clone())
            }
            AppError::Unauthenticated(message) => ApiResponse::unauthorized(message),
            AppError::Forbidden(message) => ApiResponse::forbidden(message),
            AppError::NotFound(message) => ApiResponse::not_found(message),
            AppError::Conflict(message) => ApiResponse::conflict(message),
            AppError::UpstreamFailure { message, detail } => {
                tracing::error!(detail = %detail, "{}", message);
                ApiResponse::bad_gateway(&Self::client_message(message, detail))
            }
            AppError::Internal { message, detail } => {
                tracing::error!(detail = %detail, "{}", message);
                ApiResponse::internal_error(&Self::client_message(message, detail))
            }
        }
    }
}
