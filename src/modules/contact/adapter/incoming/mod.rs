pub mod errors;
pub mod web;

pub use errors::map_contact_error;
