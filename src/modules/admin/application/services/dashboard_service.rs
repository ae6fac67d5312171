use async_trait::async_trait;
use chrono::Utc;

use crate::admin::application::{
    domain::entities::{
        ContentKind, Dashboard, DashboardStats, RECENT_USERS_LIMIT, UPCOMING_EVENTS_LIMIT,
    },
    ports::{
        incoming::{AdminError, DashboardUseCase},
        outgoing::DashboardQuery,
    },
};

pub struct DashboardService<Q>
where
    Q: DashboardQuery,
{
    query: Q,
}

impl<Q> DashboardService<Q>
where
    Q: DashboardQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> DashboardUseCase for DashboardService<Q>
where
    Q: DashboardQuery,
{
    async fn execute(&self) -> Result<Dashboard, AdminError> {
        let today = Utc::now().date_naive();
        let q = &self.query;

        let (
            total_users,
            total_artists,
            total_venues,
            total_news,
            total_events,
            pending_contacts,
            user_stats,
            recent_users,
            upcoming_events,
        ) = tokio::try_join!(
            q.count_users(),
            q.count_active(ContentKind::Artist),
            q.count_active(ContentKind::Venue),
            q.count_active(ContentKind::News),
            q.count_active(ContentKind::Event),
            q.count_unread_contacts(),
            q.users_by_role(),
            q.recent_users(RECENT_USERS_LIMIT),
            q.upcoming_events(today, UPCOMING_EVENTS_LIMIT),
        )?;

        Ok(Dashboard {
            stats: DashboardStats {
                total_users,
                total_artists,
                total_venues,
                total_news,
                total_events,
                pending_contacts,
            },
            user_stats,
            recent_users,
            upcoming_events,
        })
    }
}
