// src/shared/api/json_config.rs
use actix_web::web::{JsonConfig, PathConfig, QueryConfig};

use crate::shared::api::AppError;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        AppError::invalid("body", &message).into()
    })
}

pub fn custom_query_config() -> QueryConfig {
    QueryConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        AppError::invalid("query", &message).into()
    })
}

/// Malformed ids in the path can never name an existing resource.
pub fn custom_path_config() -> PathConfig {
    PathConfig::default().error_handler(|_err, _req| AppError::not_found("Resource not found").into())
}
