pub mod errors;

pub use errors::{map_profile_error, saved_response};
