use crate::admin::application::ports::incoming::AdminError;
use crate::shared::api::AppError;

pub const USER_NOT_FOUND: &str = "User not found";
pub const CONTENT_NOT_FOUND: &str = "Content not found";

pub fn map_admin_error(err: AdminError) -> AppError {
    match err {
        AdminError::UserNotFound => AppError::not_found(USER_NOT_FOUND),
        AdminError::ContentNotFound => AppError::not_found(CONTENT_NOT_FOUND),
        AdminError::Invalid(errors) => errors.into(),
        AdminError::Database(detail) => AppError::internal(detail),
    }
}
