use crate::contact::application::ports::incoming::ContactError;
use crate::shared::api::AppError;

pub fn map_contact_error(err: ContactError) -> AppError {
    match err {
        ContactError::NotFound => AppError::not_found("Contact message not found"),
        ContactError::Invalid(errors) => errors.into(),
        ContactError::Database(detail) => AppError::internal(detail),
    }
}
