pub mod admin_store_error;
pub mod dashboard_query;
pub mod moderation_store;

pub use admin_store_error::AdminStoreError;
pub use dashboard_query::DashboardQuery;
pub use moderation_store::ModerationStore;
