pub mod multipart;

pub use multipart::{map_upload_error, read_upload, read_uploads};
