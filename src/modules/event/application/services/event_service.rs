use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Caller, Role, UserId};
use crate::event::application::{
    domain::entities::{Event, EventInput},
    ports::{
        incoming::{
            CreateEventUseCase, DeleteEventUseCase, EventError, GetEventUseCase, UpdateEventUseCase,
        },
        outgoing::{EventRepository, VenueLookup},
    },
};

/// Event writes and single-event reads.
pub struct EventService<R, V>
where
    R: EventRepository,
    V: VenueLookup,
{
    repo: R,
    venues: V,
}

impl<R, V> EventService<R, V>
where
    R: EventRepository,
    V: VenueLookup,
{
    pub fn new(repo: R, venues: V) -> Self {
        Self { repo, venues }
    }

    /// Loads the event and checks that `caller` hosts it. Admins may act on any event.
    async fn owned_event(&self, caller: Caller, id: Uuid) -> Result<Event, EventError> {
        let event = self.repo.find_by_id(id).await?.ok_or(EventError::NotFound)?;

        if caller.role == Role::Admin {
            return Ok(event);
        }

        match self.venues.find_by_owner(caller.user_id).await? {
            Some(venue) if venue.id == event.venue_id => Ok(event),
            _ => Err(EventError::NotOwner),
        }
    }
}

#[async_trait]
impl<R, V> CreateEventUseCase for EventService<R, V>
where
    R: EventRepository,
    V: VenueLookup,
{
    async fn execute(&self, owner: UserId, input: EventInput) -> Result<Event, EventError> {
        let venue = self
            .venues
            .find_by_owner(owner)
            .await?
            .ok_or(EventError::VenueProfileMissing)?;

        let new = input.into_new(&venue, Utc::now().date_naive())?;

        let mut event = self.repo.insert(new).await?;
        tracing::info!(
            event_id = %event.id,
            venue_id = %venue.id,
            color = %event.color,
            "Event created"
        );

        event.venue = Some(venue);
        Ok(event)
    }
}

#[async_trait]
impl<R, V> GetEventUseCase for EventService<R, V>
where
    R: EventRepository,
    V: VenueLookup,
{
    async fn execute(&self, id: Uuid) -> Result<Event, EventError> {
        self.repo.find_by_id(id).await?.ok_or(EventError::NotFound)
    }
}

#[async_trait]
impl<R, V> UpdateEventUseCase for EventService<R, V>
where
    R: EventRepository,
    V: VenueLookup,
{
    async fn execute(&self, caller: Caller, id: Uuid, input: EventInput) -> Result<Event, EventError> {
        let mut event = self.owned_event(caller, id).await?;

        let changes = input.into_changes(Utc::now().date_naive())?;
        changes.apply_to(&mut event);

        Ok(self.repo.update(event).await?)
    }
}

#[async_trait]
impl<R, V> DeleteEventUseCase for EventService<R, V>
where
    R: EventRepository,
    V: VenueLookup,
{
    async fn execute(&self, caller: Caller, id: Uuid) -> Result<(), EventError> {
        self.owned_event(caller, id).await?;

        if !self.repo.soft_delete(id).await? {
            return Err(EventError::NotFound);
        }

        tracing::info!(event_id = %id, by = %caller.user_id, "Event deactivated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::application::domain::entities::{
        fixtures::{event, event_venue},
        EventVenue, NewEvent,
    };
    use crate::event::application::ports::outgoing::EventStoreError;
    use crate::shared::domain::{assignment::event_color, City};
    use chrono::{Duration, NaiveDate};
    use std::collections::HashMap;
    use std::sync::Mutex;

    // ========================================================================
    // Mocks
    // ========================================================================

    #[derive(Default)]
    struct InMemoryEvents {
        events: Mutex<HashMap<Uuid, Event>>,
    }

    #[async_trait]
    impl EventRepository for InMemoryEvents {
        async fn insert(&self, new: NewEvent) -> Result<Event, EventStoreError> {
            let mut events = self.events.lock().unwrap();
            let sequence = events.values().filter(|e| e.venue_id == new.venue_id).count() as u64;
            let now = Utc::now();
            let event = Event {
                id: Uuid::new_v4(),
                venue_id: new.venue_id,
                artist_band_name: new.artist_band_name,
                time: new.time,
                date: new.date,
                description: new.description,
                city: new.city,
                color: event_color(sequence).to_string(),
                sequence: sequence as u32,
                is_active: true,
                created_at: now,
                updated_at: now,
                venue: None,
            };
            events.insert(event.id, event.clone());
            Ok(event)
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>, EventStoreError> {
            Ok(self.events.lock().unwrap().get(&id).cloned())
        }

        async fn update(&self, event: Event) -> Result<Event, EventStoreError> {
            self.events.lock().unwrap().insert(event.id, event.clone());
            Ok(event)
        }

        async fn soft_delete(&self, id: Uuid) -> Result<bool, EventStoreError> {
            Ok(self
                .events
                .lock()
                .unwrap()
                .get_mut(&id)
                .map(|e| e.is_active = false)
                .is_some())
        }
    }

    struct MockVenues {
        by_owner: HashMap<UserId, EventVenue>,
    }

    #[async_trait]
    impl VenueLookup for MockVenues {
        async fn find_by_owner(&self, owner: UserId) -> Result<Option<EventVenue>, EventStoreError> {
            Ok(self.by_owner.get(&owner).cloned())
        }
    }

    fn caller(user_id: UserId, role: Role) -> Caller {
        Caller {
            user_id,
            role,
            is_verified: true,
        }
    }

    fn tomorrow() -> String {
        (Utc::now().date_naive() + Duration::days(1)).to_string()
    }

    fn input(name: &str) -> EventInput {
        EventInput {
            artist_band_name: Some(name.into()),
            time: Some("8pm".into()),
            date: Some(tomorrow()),
            description: None,
        }
    }

    fn service(owner: UserId, venue: EventVenue) -> EventService<InMemoryEvents, MockVenues> {
        EventService::new(
            InMemoryEvents::default(),
            MockVenues {
                by_owner: HashMap::from([(owner, venue)]),
            },
        )
    }

    // ========================================================================
    // Create
    // ========================================================================

    #[tokio::test]
    async fn colors_cycle_per_venue() {
        // Arrange
        let owner = UserId::from(Uuid::new_v4());
        let svc = service(owner, event_venue(City::NewOrleans));

        // Act
        let mut colors = Vec::new();
        for i in 0..11 {
            let event = CreateEventUseCase::execute(&svc, owner, input(&format!("Band {i}")))
                .await
                .unwrap();
            colors.push(event.color);
        }

        // Assert
        assert_eq!(colors[0], "#0000FF");
        assert_eq!(colors[1], "#008000");
        assert_eq!(colors[9], "#000000");
        assert_eq!(colors[10], "#0000FF");
    }

    #[tokio::test]
    async fn event_snapshots_venue_city() {
        let owner = UserId::from(Uuid::new_v4());
        let svc = service(owner, event_venue(City::Pensacola));

        let event = CreateEventUseCase::execute(&svc, owner, input("Galactic")).await.unwrap();

        assert_eq!(event.city, City::Pensacola);
        assert_eq!(event.venue.unwrap().venue_name, "Saenger Theatre");
    }

    #[tokio::test]
    async fn create_without_venue_profile_fails() {
        let svc = service(UserId::from(Uuid::new_v4()), event_venue(City::Mobile));

        let result =
            CreateEventUseCase::execute(&svc, UserId::from(Uuid::new_v4()), input("Galactic")).await;

        assert!(matches!(result, Err(EventError::VenueProfileMissing)));
    }

    #[tokio::test]
    async fn create_rejects_past_date() {
        let owner = UserId::from(Uuid::new_v4());
        let svc = service(owner, event_venue(City::Mobile));
        let mut past = input("Galactic");
        past.date = Some("2001-01-01".into());

        let result = CreateEventUseCase::execute(&svc, owner, past).await;

        assert!(matches!(result, Err(EventError::Invalid(e)) if e.has_field("date")));
    }

    // ========================================================================
    // Update / Delete
    // ========================================================================

    #[tokio::test]
    async fn other_venue_cannot_update() {
        let owner = UserId::from(Uuid::new_v4());
        let intruder = UserId::from(Uuid::new_v4());
        let venue = event_venue(City::Mobile);
        let svc = EventService::new(
            InMemoryEvents::default(),
            MockVenues {
                by_owner: HashMap::from([(owner, venue.clone()), (intruder, event_venue(City::Mobile))]),
            },
        );
        let existing = event(&venue, NaiveDate::from_ymd_opt(2030, 1, 1).unwrap());
        svc.repo.update(existing.clone()).await.unwrap();

        let result = UpdateEventUseCase::execute(
            &svc,
            caller(intruder, Role::Venue),
            existing.id,
            EventInput::default(),
        )
        .await;

        assert!(matches!(result, Err(EventError::NotOwner)));
    }

    #[tokio::test]
    async fn admin_may_update_any_event() {
        let owner = UserId::from(Uuid::new_v4());
        let venue = event_venue(City::Mobile);
        let svc = service(owner, venue.clone());
        let existing = event(&venue, NaiveDate::from_ymd_opt(2030, 1, 1).unwrap());
        svc.repo.update(existing.clone()).await.unwrap();

        let updated = UpdateEventUseCase::execute(
            &svc,
            caller(UserId::from(Uuid::new_v4()), Role::Admin),
            existing.id,
            EventInput {
                description: Some("Moved indoors".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.description.as_deref(), Some("Moved indoors"));
        assert_eq!(updated.color, existing.color);
    }

    #[tokio::test]
    async fn delete_is_soft() {
        let owner = UserId::from(Uuid::new_v4());
        let venue = event_venue(City::Mobile);
        let svc = service(owner, venue.clone());
        let existing = event(&venue, NaiveDate::from_ymd_opt(2030, 1, 1).unwrap());
        svc.repo.update(existing.clone()).await.unwrap();

        DeleteEventUseCase::execute(&svc, caller(owner, Role::Venue), existing.id)
            .await
            .unwrap();

        let stored = GetEventUseCase::execute(&svc, existing.id).await.unwrap();
        assert!(!stored.is_active);
    }

    #[tokio::test]
    async fn delete_unknown_event_is_not_found() {
        let owner = UserId::from(Uuid::new_v4());
        let svc = service(owner, event_venue(City::Mobile));

        let result = DeleteEventUseCase::execute(&svc, caller(owner, Role::Venue), Uuid::new_v4()).await;

        assert!(matches!(result, Err(EventError::NotFound)));
    }
}
