use async_trait::async_trait;
use chrono::NaiveDate;

use super::AdminStoreError;
use crate::admin::application::domain::entities::{ContentKind, RoleCount};
use crate::auth::application::domain::entities::UserView;
use crate::event::application::domain::entities::Event;

/// Read-only aggregates across every table, for the admin dashboard.
#[async_trait]
pub trait DashboardQuery: Send + Sync {
    async fn count_users(&self) -> Result<u64, AdminStoreError>;

    async fn count_active(&self, kind: ContentKind) -> Result<u64, AdminStoreError>;

    async fn count_unread_contacts(&self) -> Result<u64, AdminStoreError>;

    async fn users_by_role(&self) -> Result<Vec<RoleCount>, AdminStoreError>;

    /// Newest accounts first.
    async fn recent_users(&self, limit: u64) -> Result<Vec<UserView>, AdminStoreError>;

    /// Active events on or after `from`, soonest first, joined with their venue.
    async fn upcoming_events(
        &self,
        from: NaiveDate,
        limit: u64,
    ) -> Result<Vec<Event>, AdminStoreError>;
}
