use actix_web::HttpResponse;
use serde::Serialize;

use crate::profile::application::services::{ProfileError, Saved};
use crate::shared::api::{ApiResponse, AppError};
use crate::storage::adapter::incoming::map_upload_error;

pub fn map_profile_error(err: ProfileError, not_found_message: &str) -> AppError {
    match err {
        ProfileError::NotFound => AppError::not_found(not_found_message),
        ProfileError::Invalid(errors) => errors.into(),
        ProfileError::Upload(e) => map_upload_error(e),
        ProfileError::Conflict(msg) => AppError::conflict(&msg),
        ProfileError::Contended => {
            AppError::conflict("The profile could not be saved right now, please try again")
        }
        ProfileError::Database(detail) => AppError::internal(detail),
    }
}

/// 201 for a newly created profile, 200 for an update of an existing one.
pub fn saved_response<T: Serialize>(
    saved: Saved<T>,
    created_message: &str,
    updated_message: &str,
) -> HttpResponse {
    match saved {
        Saved::Created(view) => ApiResponse::created(created_message, view),
        Saved::Updated(view) => ApiResponse::success_with_message(updated_message, view),
    }
}
