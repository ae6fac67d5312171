use actix_web::web;
use std::sync::Arc;
use uuid::Uuid;

use crate::admin::application::AdminUseCases;
use crate::artist::application::ArtistUseCases;
use crate::auth::application::domain::entities::Role;
use crate::auth::application::AuthUseCases;
use crate::contact::application::ContactUseCases;
use crate::event::application::EventUseCases;
use crate::journalist::application::JournalistUseCases;
use crate::news::application::NewsUseCases;
use crate::tests::support::stubs::{KnownCallers, Unconfigured};
use crate::venue::application::VenueUseCases;
use crate::AppState;

/// Builds an `AppState` where every use case is [`Unconfigured`] until a test
/// swaps in the one it exercises.
pub struct TestAppStateBuilder {
    callers: KnownCallers,
    auth: AuthUseCases,
    artist: ArtistUseCases,
    venue: VenueUseCases,
    journalist: JournalistUseCases,
    event: EventUseCases,
    news: NewsUseCases,
    contact: ContactUseCases,
    admin: AdminUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let stub = Arc::new(Unconfigured);
        Self {
            callers: KnownCallers::default(),
            auth: AuthUseCases {
                register: stub.clone(),
                login: stub.clone(),
                current_user: stub.clone(),
                resolve_caller: Arc::new(KnownCallers::default()),
            },
            artist: ArtistUseCases {
                save: stub.clone(),
                my_profile: stub.clone(),
                delete: stub.clone(),
                list: stub.clone(),
                get: stub.clone(),
            },
            venue: VenueUseCases {
                save: stub.clone(),
                my_profile: stub.clone(),
                delete: stub.clone(),
                add_show: stub.clone(),
                list: stub.clone(),
                get: stub.clone(),
                calendar: stub.clone(),
            },
            journalist: JournalistUseCases {
                save: stub.clone(),
                my_profile: stub.clone(),
                delete: stub.clone(),
                list: stub.clone(),
                get: stub.clone(),
                verify: stub.clone(),
            },
            event: EventUseCases {
                create: stub.clone(),
                get: stub.clone(),
                update: stub.clone(),
                delete: stub.clone(),
                list: stub.clone(),
                upcoming: stub.clone(),
                my_events: stub.clone(),
            },
            news: NewsUseCases {
                create: stub.clone(),
                get: stub.clone(),
                update: stub.clone(),
                delete: stub.clone(),
                list: stub.clone(),
                my_news: stub.clone(),
            },
            contact: ContactUseCases {
                submit: stub.clone(),
                list: stub.clone(),
                mailbox: stub.clone(),
                mark_read: stub.clone(),
                delete: stub.clone(),
            },
            admin: AdminUseCases {
                dashboard: stub.clone(),
                list_users: stub.clone(),
                verify_user: stub.clone(),
                delete_user: stub.clone(),
                list_content: stub.clone(),
                toggle_content: stub,
            },
        }
    }
}

impl TestAppStateBuilder {
    /// Registers a verified account that the auth extractor will resolve.
    pub fn with_caller(mut self, user_id: Uuid, role: Role) -> Self {
        self.callers.insert(user_id, role);
        self
    }

    /// Overrides auth use cases. Callers registered with `with_caller` still
    /// win over a `resolve_caller` set here.
    pub fn with_auth(mut self, configure: impl FnOnce(&mut AuthUseCases)) -> Self {
        configure(&mut self.auth);
        self
    }

    pub fn with_artist(mut self, configure: impl FnOnce(&mut ArtistUseCases)) -> Self {
        configure(&mut self.artist);
        self
    }

    pub fn with_venue(mut self, configure: impl FnOnce(&mut VenueUseCases)) -> Self {
        configure(&mut self.venue);
        self
    }

    pub fn with_journalist(mut self, configure: impl FnOnce(&mut JournalistUseCases)) -> Self {
        configure(&mut self.journalist);
        self
    }

    pub fn with_event(mut self, configure: impl FnOnce(&mut EventUseCases)) -> Self {
        configure(&mut self.event);
        self
    }

    pub fn with_news(mut self, configure: impl FnOnce(&mut NewsUseCases)) -> Self {
        configure(&mut self.news);
        self
    }

    pub fn with_contact(mut self, configure: impl FnOnce(&mut ContactUseCases)) -> Self {
        configure(&mut self.contact);
        self
    }

    pub fn with_admin(mut self, configure: impl FnOnce(&mut AdminUseCases)) -> Self {
        configure(&mut self.admin);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let mut auth = self.auth;
        if !self.callers.is_empty() {
            auth.resolve_caller = Arc::new(self.callers);
        }

        web::Data::new(AppState {
            auth,
            artist: self.artist,
            venue: self.venue,
            journalist: self.journalist,
            event: self.event,
            news: self.news,
            contact: self.contact,
            admin: self.admin,
        })
    }
}
