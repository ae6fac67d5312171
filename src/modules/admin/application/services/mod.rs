pub mod dashboard_service;
pub mod moderation_service;

pub use dashboard_service::DashboardService;
pub use moderation_service::ModerationService;
