pub mod body;
pub mod error;
pub mod json_config;
pub mod response;

pub use body::{custom_multipart_config, string_or_number, text_value, JsonOrMultipart};
pub use error::AppError;
pub use response::ApiResponse;
