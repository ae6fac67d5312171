// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Standard success response wrapper
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always true for successful responses
    #[schema(example = true)]
    pub success: bool,
    /// Present on create, update and delete responses
    #[schema(example = "Profile created successfully")]
    pub message: Option<String>,
    /// Response data
    pub data: T,
}

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    /// Human-readable error message
    #[schema(example = "Validation failed")]
    pub message: String,
    /// Only present when input validation failed
    pub errors: Option<Vec<ErrorDetail>>,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// The rejected input field
    #[schema(example = "email")]
    pub field: String,

    /// Why the value was rejected
    #[schema(example = "Please provide a valid email")]
    pub message: String,
}
