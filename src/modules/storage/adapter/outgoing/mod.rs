pub mod gcs_object_storage;

pub use gcs_object_storage::GcsObjectStorage;
