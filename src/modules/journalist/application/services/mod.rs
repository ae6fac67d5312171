pub mod journalist_directory_service;
pub mod journalist_profile_service;
pub mod verify_journalist_service;

pub use journalist_directory_service::JournalistDirectoryService;
pub use journalist_profile_service::JournalistProfileService;
pub use verify_journalist_service::VerifyJournalistService;
