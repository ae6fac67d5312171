pub use sea_orm_migration::prelude::*;

mod m20250304_105428_create_users_table;
mod m20251006_120000_create_table_artists;
mod m20251006_120100_create_table_venues;
mod m20251006_120200_create_table_journalists;
mod m20251006_120300_create_table_events;
mod m20251006_120400_create_table_news;
mod m20251006_120500_create_table_contacts;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250304_105428_create_users_table::Migration),
            Box::new(m20251006_120000_create_table_artists::Migration),
            Box::new(m20251006_120100_create_table_venues::Migration),
            Box::new(m20251006_120200_create_table_journalists::Migration),
            Box::new(m20251006_120300_create_table_events::Migration),
            Box::new(m20251006_120400_create_table_news::Migration),
            Box::new(m20251006_120500_create_table_contacts::Migration),
        ]
    }
}
