pub mod admin_seeder;
pub mod create_user_service;
pub mod fetch_current_user_service;
pub mod login_user_service;
pub mod resolve_caller_service;

pub use admin_seeder::{AdminSeed, AdminSeeder, SeedOutcome};
pub use create_user_service::CreateUserService;
pub use fetch_current_user_service::FetchCurrentUserService;
pub use login_user_service::LoginUserService;
pub use resolve_caller_service::ResolveCallerService;
