pub mod dashboard_query_postgres;
pub mod moderation_store_postgres;

pub use dashboard_query_postgres::DashboardQueryPostgres;
pub use moderation_store_postgres::ModerationStorePostgres;
