pub mod profile_saver;

pub use profile_saver::{save_profile, save_profile_with_files, ProfileError, SaveMode, Saved};
