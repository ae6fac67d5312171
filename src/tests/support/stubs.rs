//! Default wiring for `TestAppStateBuilder`. Every use case answers with a
//! store error so a test that forgets to override one sees a 500 rather than
//! a panic inside the actix worker.

use async_trait::async_trait;
use std::collections::HashMap;
use uuid::Uuid;

use crate::admin::application::domain::entities::{ContentEntry, ContentKind, Dashboard, UserFilter};
use crate::admin::application::ports::incoming::{
    AdminError, ContentList, DashboardUseCase, DeleteUserUseCase, ListContentUseCase,
    ListUsersUseCase, ToggleContentUseCase, UserList, VerifyUserUseCase,
};
use crate::artist::application::domain::entities::Artist;
use crate::artist::application::ports::incoming::{
    DeleteArtistProfileUseCase, GetArtistUseCase, GetOwnArtistProfileUseCase, ListArtistsUseCase,
    SaveArtistProfileCommand, SaveArtistProfileUseCase,
};
use crate::auth::application::domain::entities::{Caller, Role, UserId, UserView};
use crate::auth::application::ports::incoming::use_cases::{
    CreateUserError, FetchCurrentUserUseCase, FetchUserError, LoginError, LoginOutput,
    LoginRequest, LoginUserUseCase, RegisterUserCommand, RegisterUserUseCase, RegistrationError,
    RegistrationOutput, ResolveCallerError, ResolveCallerUseCase,
};
use crate::contact::application::domain::entities::{Contact, ContactInput};
use crate::contact::application::ports::incoming::{
    ContactError, ContactMailboxUseCase, DeleteContactUseCase, ListContactsUseCase, Mailbox,
    MailboxFilter, MarkContactReadUseCase, SubmitContactUseCase,
};
use crate::event::application::domain::entities::{Event, EventInput};
use crate::event::application::ports::incoming::{
    CreateEventUseCase, DeleteEventUseCase, EventError, GetEventUseCase, ListEventsUseCase,
    MyEventsUseCase, UpcomingEventsUseCase, UpdateEventUseCase,
};
use crate::journalist::application::domain::entities::Journalist;
use crate::journalist::application::ports::incoming::{
    DeleteJournalistProfileUseCase, GetJournalistUseCase, GetOwnJournalistProfileUseCase,
    ListJournalistsUseCase, SaveJournalistProfileCommand, SaveJournalistProfileUseCase,
    VerifyJournalistUseCase,
};
use crate::news::application::domain::entities::{LocationFilter, News};
use crate::news::application::ports::incoming::{
    CreateNewsCommand, CreateNewsUseCase, DeleteNewsUseCase, GetNewsUseCase, ListNewsUseCase,
    MyNewsUseCase, NewsError, UpdateNewsCommand, UpdateNewsUseCase,
};
use crate::profile::application::services::{ProfileError, SaveMode, Saved};
use crate::shared::domain::{City, Genre};
use crate::shared::pagination::PageRequest;
use crate::venue::application::domain::entities::{CalendarEntry, ShowInput, Venue};
use crate::venue::application::ports::incoming::{
    AddShowUseCase, DeleteVenueProfileUseCase, GetOwnVenueProfileUseCase, GetVenueUseCase,
    ListVenuesUseCase, SaveVenueProfileCommand, SaveVenueProfileUseCase, VenueCalendarUseCase,
};

const NOT_WIRED: &str = "use case not configured for this test";

/// Stands in for every use case the test does not care about.
pub struct Unconfigured;

// ============================================================================
// Auth
// ============================================================================

#[async_trait]
impl RegisterUserUseCase for Unconfigured {
    async fn register(
        &self,
        _command: RegisterUserCommand,
    ) -> Result<RegistrationOutput, RegistrationError> {
        Err(CreateUserError::RepositoryError(NOT_WIRED.into()).into())
    }
}

#[async_trait]
impl LoginUserUseCase for Unconfigured {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginOutput, LoginError> {
        Err(LoginError::QueryError(NOT_WIRED.into()))
    }
}

#[async_trait]
impl FetchCurrentUserUseCase for Unconfigured {
    async fn execute(&self, _user_id: UserId) -> Result<UserView, FetchUserError> {
        Err(FetchUserError::QueryError(NOT_WIRED.into()))
    }
}

/// Resolves only the accounts registered through `with_caller`.
#[derive(Default)]
pub struct KnownCallers {
    callers: HashMap<Uuid, Role>,
}

impl KnownCallers {
    pub fn insert(&mut self, user_id: Uuid, role: Role) {
        self.callers.insert(user_id, role);
    }

    pub fn is_empty(&self) -> bool {
        self.callers.is_empty()
    }
}

#[async_trait]
impl ResolveCallerUseCase for KnownCallers {
    async fn execute(&self, user_id: UserId) -> Result<Caller, ResolveCallerError> {
        self.callers
            .get(&user_id.value())
            .map(|role| Caller {
                user_id,
                role: *role,
                is_verified: true,
            })
            .ok_or(ResolveCallerError::UnknownAccount)
    }
}

// ============================================================================
// Profiles
// ============================================================================

#[async_trait]
impl SaveArtistProfileUseCase for Unconfigured {
    async fn execute(
        &self,
        _command: SaveArtistProfileCommand,
        _mode: SaveMode,
    ) -> Result<Saved<Artist>, ProfileError> {
        Err(ProfileError::Database(NOT_WIRED.into()))
    }
}

#[async_trait]
impl GetOwnArtistProfileUseCase for Unconfigured {
    async fn execute(&self, _owner: UserId) -> Result<Artist, ProfileError> {
        Err(ProfileError::Database(NOT_WIRED.into()))
    }
}

#[async_trait]
impl DeleteArtistProfileUseCase for Unconfigured {
    async fn execute(&self, _owner: UserId) -> Result<(), ProfileError> {
        Err(ProfileError::Database(NOT_WIRED.into()))
    }
}

#[async_trait]
impl ListArtistsUseCase for Unconfigured {
    async fn execute(&self, _genre: Option<Genre>) -> Result<Vec<Artist>, ProfileError> {
        Err(ProfileError::Database(NOT_WIRED.into()))
    }
}

#[async_trait]
impl GetArtistUseCase for Unconfigured {
    async fn execute(&self, _id: Uuid) -> Result<Artist, ProfileError> {
        Err(ProfileError::Database(NOT_WIRED.into()))
    }
}

#[async_trait]
impl SaveVenueProfileUseCase for Unconfigured {
    async fn execute(
        &self,
        _command: SaveVenueProfileCommand,
        _mode: SaveMode,
    ) -> Result<Saved<Venue>, ProfileError> {
        Err(ProfileError::Database(NOT_WIRED.into()))
    }
}

#[async_trait]
impl GetOwnVenueProfileUseCase for Unconfigured {
    async fn execute(&self, _owner: UserId) -> Result<Venue, ProfileError> {
        Err(ProfileError::Database(NOT_WIRED.into()))
    }
}

#[async_trait]
impl DeleteVenueProfileUseCase for Unconfigured {
    async fn execute(&self, _owner: UserId) -> Result<(), ProfileError> {
        Err(ProfileError::Database(NOT_WIRED.into()))
    }
}

#[async_trait]
impl AddShowUseCase for Unconfigured {
    async fn execute(&self, _owner: UserId, _input: ShowInput) -> Result<Venue, ProfileError> {
        Err(ProfileError::Database(NOT_WIRED.into()))
    }
}

#[async_trait]
impl ListVenuesUseCase for Unconfigured {
    async fn execute(&self, _city: City) -> Result<Vec<Venue>, ProfileError> {
        Err(ProfileError::Database(NOT_WIRED.into()))
    }
}

#[async_trait]
impl GetVenueUseCase for Unconfigured {
    async fn execute(&self, _id: Uuid) -> Result<Venue, ProfileError> {
        Err(ProfileError::Database(NOT_WIRED.into()))
    }
}

#[async_trait]
impl VenueCalendarUseCase for Unconfigured {
    async fn execute(&self, _city: City) -> Result<Vec<CalendarEntry>, ProfileError> {
        Err(ProfileError::Database(NOT_WIRED.into()))
    }
}

#[async_trait]
impl SaveJournalistProfileUseCase for Unconfigured {
    async fn execute(
        &self,
        _command: SaveJournalistProfileCommand,
        _mode: SaveMode,
    ) -> Result<Saved<Journalist>, ProfileError> {
        Err(ProfileError::Database(NOT_WIRED.into()))
    }
}

#[async_trait]
impl GetOwnJournalistProfileUseCase for Unconfigured {
    async fn execute(&self, _owner: UserId) -> Result<Journalist, ProfileError> {
        Err(ProfileError::Database(NOT_WIRED.into()))
    }
}

#[async_trait]
impl DeleteJournalistProfileUseCase for Unconfigured {
    async fn execute(&self, _owner: UserId) -> Result<(), ProfileError> {
        Err(ProfileError::Database(NOT_WIRED.into()))
    }
}

#[async_trait]
impl ListJournalistsUseCase for Unconfigured {
    async fn execute(&self) -> Result<Vec<Journalist>, ProfileError> {
        Err(ProfileError::Database(NOT_WIRED.into()))
    }
}

#[async_trait]
impl GetJournalistUseCase for Unconfigured {
    async fn execute(&self, _id: Uuid) -> Result<Journalist, ProfileError> {
        Err(ProfileError::Database(NOT_WIRED.into()))
    }
}

#[async_trait]
impl VerifyJournalistUseCase for Unconfigured {
    async fn execute(&self, _id: Uuid) -> Result<Journalist, ProfileError> {
        Err(ProfileError::Database(NOT_WIRED.into()))
    }
}

// ============================================================================
// Events and news
// ============================================================================

#[async_trait]
impl CreateEventUseCase for Unconfigured {
    async fn execute(&self, _owner: UserId, _input: EventInput) -> Result<Event, EventError> {
        Err(EventError::Database(NOT_WIRED.into()))
    }
}

#[async_trait]
impl GetEventUseCase for Unconfigured {
    async fn execute(&self, _id: Uuid) -> Result<Event, EventError> {
        Err(EventError::Database(NOT_WIRED.into()))
    }
}

#[async_trait]
impl UpdateEventUseCase for Unconfigured {
    async fn execute(&self, _caller: Caller, _id: Uuid, _input: EventInput) -> Result<Event, EventError> {
        Err(EventError::Database(NOT_WIRED.into()))
    }
}

#[async_trait]
impl DeleteEventUseCase for Unconfigured {
    async fn execute(&self, _caller: Caller, _id: Uuid) -> Result<(), EventError> {
        Err(EventError::Database(NOT_WIRED.into()))
    }
}

#[async_trait]
impl ListEventsUseCase for Unconfigured {
    async fn execute(&self, _city: City) -> Result<Vec<Event>, EventError> {
        Err(EventError::Database(NOT_WIRED.into()))
    }
}

#[async_trait]
impl UpcomingEventsUseCase for Unconfigured {
    async fn execute(&self, _limit: u64) -> Result<Vec<Event>, EventError> {
        Err(EventError::Database(NOT_WIRED.into()))
    }
}

#[async_trait]
impl MyEventsUseCase for Unconfigured {
    async fn execute(&self, _owner: UserId) -> Result<Vec<Event>, EventError> {
        Err(EventError::Database(NOT_WIRED.into()))
    }
}

#[async_trait]
impl CreateNewsUseCase for Unconfigured {
    async fn execute(&self, _command: CreateNewsCommand) -> Result<News, NewsError> {
        Err(NewsError::Database(NOT_WIRED.into()))
    }
}

#[async_trait]
impl UpdateNewsUseCase for Unconfigured {
    async fn execute(&self, _command: UpdateNewsCommand) -> Result<News, NewsError> {
        Err(NewsError::Database(NOT_WIRED.into()))
    }
}

#[async_trait]
impl DeleteNewsUseCase for Unconfigured {
    async fn execute(&self, _caller: Caller, _id: Uuid) -> Result<(), NewsError> {
        Err(NewsError::Database(NOT_WIRED.into()))
    }
}

#[async_trait]
impl GetNewsUseCase for Unconfigured {
    async fn execute(&self, _id: Uuid) -> Result<News, NewsError> {
        Err(NewsError::Database(NOT_WIRED.into()))
    }
}

#[async_trait]
impl ListNewsUseCase for Unconfigured {
    async fn execute(&self, _filter: LocationFilter) -> Result<Vec<News>, NewsError> {
        Err(NewsError::Database(NOT_WIRED.into()))
    }
}

#[async_trait]
impl MyNewsUseCase for Unconfigured {
    async fn execute(&self, _author: UserId) -> Result<Vec<News>, NewsError> {
        Err(NewsError::Database(NOT_WIRED.into()))
    }
}

// ============================================================================
// Contact and admin
// ============================================================================

#[async_trait]
impl SubmitContactUseCase for Unconfigured {
    async fn execute(&self, _input: ContactInput) -> Result<Contact, ContactError> {
        Err(ContactError::Database(NOT_WIRED.into()))
    }
}

#[async_trait]
impl ListContactsUseCase for Unconfigured {
    async fn execute(&self) -> Result<Vec<Contact>, ContactError> {
        Err(ContactError::Database(NOT_WIRED.into()))
    }
}

#[async_trait]
impl ContactMailboxUseCase for Unconfigured {
    async fn execute(&self, _filter: MailboxFilter) -> Result<Mailbox, ContactError> {
        Err(ContactError::Database(NOT_WIRED.into()))
    }
}

#[async_trait]
impl MarkContactReadUseCase for Unconfigured {
    async fn execute(&self, _id: Uuid) -> Result<Contact, ContactError> {
        Err(ContactError::Database(NOT_WIRED.into()))
    }
}

#[async_trait]
impl DeleteContactUseCase for Unconfigured {
    async fn execute(&self, _id: Uuid) -> Result<(), ContactError> {
        Err(ContactError::Database(NOT_WIRED.into()))
    }
}

#[async_trait]
impl DashboardUseCase for Unconfigured {
    async fn execute(&self) -> Result<Dashboard, AdminError> {
        Err(AdminError::Database(NOT_WIRED.into()))
    }
}

#[async_trait]
impl ListUsersUseCase for Unconfigured {
    async fn execute(&self, _filter: UserFilter) -> Result<UserList, AdminError> {
        Err(AdminError::Database(NOT_WIRED.into()))
    }
}

#[async_trait]
impl VerifyUserUseCase for Unconfigured {
    async fn execute(&self, _id: Uuid) -> Result<UserView, AdminError> {
        Err(AdminError::Database(NOT_WIRED.into()))
    }
}

#[async_trait]
impl DeleteUserUseCase for Unconfigured {
    async fn execute(&self, _id: Uuid) -> Result<(), AdminError> {
        Err(AdminError::Database(NOT_WIRED.into()))
    }
}

#[async_trait]
impl ListContentUseCase for Unconfigured {
    async fn execute(&self, _kind: ContentKind, _page: PageRequest) -> Result<ContentList, AdminError> {
        Err(AdminError::Database(NOT_WIRED.into()))
    }
}

#[async_trait]
impl ToggleContentUseCase for Unconfigured {
    async fn execute(
        &self,
        _kind: ContentKind,
        _id: Uuid,
        _active: Option<bool>,
    ) -> Result<ContentEntry, AdminError> {
        Err(AdminError::Database(NOT_WIRED.into()))
    }
}
