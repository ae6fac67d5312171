pub mod api;
mod config;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::admin;
pub use modules::artist;
pub use modules::auth;
pub use modules::contact;
pub use modules::email;
pub use modules::event;
pub use modules::journalist;
pub use modules::news;
pub use modules::profile;
pub use modules::storage;
pub use modules::venue;

use crate::admin::adapter::outgoing::{DashboardQueryPostgres, ModerationStorePostgres};
use crate::admin::application::{
    services::{DashboardService, ModerationService},
    AdminUseCases,
};
use crate::artist::adapter::outgoing::{ArtistQueryPostgres, ArtistRepositoryPostgres};
use crate::artist::application::{
    services::{ArtistDirectoryService, ArtistProfileService},
    ArtistUseCases,
};
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres};
use crate::auth::application::orchestrator::user_registration::UserRegistrationOrchestrator;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider, UserRepository};
use crate::auth::application::services::{
    AdminSeeder, CreateUserService, FetchCurrentUserService, LoginUserService,
    ResolveCallerService, SeedOutcome,
};
use crate::auth::application::AuthUseCases;
use crate::config::{AppConfig, EmailTransport};
use crate::contact::adapter::outgoing::ContactRepositoryPostgres;
use crate::contact::application::{services::ContactService, ContactUseCases};
use crate::email::adapter::outgoing::{LogEmailSender, SmtpEmailSender};
use crate::email::application::ports::outgoing::{EmailSender, VerificationNotifier};
use crate::email::application::services::VerificationEmailService;
use crate::event::adapter::outgoing::{EventQueryPostgres, EventRepositoryPostgres, VenueLookupPostgres};
use crate::event::application::{
    services::{EventListingService, EventService},
    EventUseCases,
};
use crate::journalist::adapter::outgoing::{JournalistQueryPostgres, JournalistRepositoryPostgres};
use crate::journalist::application::{
    services::{JournalistDirectoryService, JournalistProfileService, VerifyJournalistService},
    JournalistUseCases,
};
use crate::news::adapter::outgoing::{NewsQueryPostgres, NewsRepositoryPostgres};
use crate::news::application::{
    services::{NewsListingService, NewsService},
    NewsUseCases,
};
use crate::shared::api::custom_multipart_config;
use crate::shared::api::json_config::{custom_json_config, custom_path_config, custom_query_config};
use crate::storage::adapter::outgoing::GcsObjectStorage;
use crate::storage::application::services::MediaUploader;
use crate::venue::adapter::outgoing::{VenueQueryPostgres, VenueRepositoryPostgres};
use crate::venue::application::{
    services::{VenueDirectoryService, VenueProfileService},
    VenueUseCases,
};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub artist: ArtistUseCases,
    pub venue: VenueUseCases,
    pub journalist: JournalistUseCases,
    pub event: EventUseCases,
    pub news: NewsUseCases,
    pub contact: ContactUseCases,
    pub admin: AdminUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().context("Invalid configuration")?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("Failed to run migrations")?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);

    let jwt_service = JwtTokenService::new(JwtConfig::from_env().context("Invalid JWT configuration")?);
    let token_provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);

    let hasher: Arc<dyn PasswordHasher + Send + Sync> = Arc::new(
        Argon2Hasher::from_env().context("Invalid Argon2 configuration")?,
    );

    seed_admin(&config, &db_arc, Arc::clone(&hasher)).await?;

    let state = build_state(&config, &db_arc, hasher, Arc::clone(&token_provider))?;
    let db_for_server = Arc::clone(&db_arc);

    info!(%server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(custom_path_config())
            .app_data(custom_multipart_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
async fn seed_admin(
    config: &AppConfig,
    db: &Arc<DatabaseConnection>,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
) -> anyhow::Result<()> {
    let Some(seed) = &config.admin_seed else {
        return Ok(());
    };

    let seeder = AdminSeeder::new(
        UserQueryPostgres::new(Arc::clone(db)),
        UserRepositoryPostgres::new(Arc::clone(db)),
        hasher,
    );

    match seeder.ensure_admin(seed).await.context("Admin seeding failed")? {
        SeedOutcome::Created => info!(email = %seed.email, "Admin account created"),
        SeedOutcome::AlreadyPresent => info!(email = %seed.email, "Admin account already present"),
    }
    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn email_sender(config: &AppConfig) -> anyhow::Result<Arc<dyn EmailSender + Send + Sync>> {
    let sender: Arc<dyn EmailSender + Send + Sync> = match &config.email_transport {
        EmailTransport::Smtp {
            server,
            username,
            password,
        } => Arc::new(
            SmtpEmailSender::new(server, username, password, &config.email_from)
                .context("Failed to configure SMTP transport")?,
        ),
        EmailTransport::Local { host, port } => {
            Arc::new(SmtpEmailSender::new_local(host, *port, &config.email_from))
        }
        EmailTransport::Log => {
            tracing::warn!("Outgoing email is only logged");
            Arc::new(LogEmailSender::new())
        }
    };
    Ok(sender)
}

#[cfg(not(tarpaulin_include))]
fn build_state(
    config: &AppConfig,
    db: &Arc<DatabaseConnection>,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
) -> anyhow::Result<AppState> {
    let user_query = UserQueryPostgres::new(Arc::clone(db));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(db));

    let notifier: Arc<dyn VerificationNotifier + Send + Sync> =
        Arc::new(VerificationEmailService::new(email_sender(config)?));
    let user_repo_arc: Arc<dyn UserRepository + Send + Sync> = Arc::new(user_repo.clone());

    let create_user = CreateUserService::new(user_query.clone(), user_repo, Arc::clone(&hasher));
    let register = UserRegistrationOrchestrator::new(
        Arc::new(create_user),
        user_repo_arc,
        notifier,
        Arc::clone(&token_provider),
    );

    let auth = AuthUseCases {
        register: Arc::new(register),
        login: Arc::new(LoginUserService::new(
            user_query.clone(),
            hasher,
            token_provider,
        )),
        current_user: Arc::new(FetchCurrentUserService::new(user_query.clone())),
        resolve_caller: Arc::new(ResolveCallerService::new(user_query)),
    };

    let storage = GcsObjectStorage::new(
        config.storage_bucket.clone(),
        config.storage_public_base_url.clone(),
    );
    let uploader = MediaUploader::new(Arc::new(storage));

    let artist_profiles = Arc::new(ArtistProfileService::new(
        ArtistRepositoryPostgres::new(Arc::clone(db)),
        uploader.clone(),
    ));
    let artist_directory = Arc::new(ArtistDirectoryService::new(ArtistQueryPostgres::new(Arc::clone(db))));
    let artist = ArtistUseCases {
        save: artist_profiles.clone(),
        my_profile: artist_profiles.clone(),
        delete: artist_profiles,
        list: artist_directory.clone(),
        get: artist_directory,
    };

    let venue_profiles = Arc::new(VenueProfileService::new(
        VenueRepositoryPostgres::new(Arc::clone(db)),
        uploader.clone(),
    ));
    let venue_directory = Arc::new(VenueDirectoryService::new(VenueQueryPostgres::new(Arc::clone(db))));
    let venue = VenueUseCases {
        save: venue_profiles.clone(),
        my_profile: venue_profiles.clone(),
        delete: venue_profiles.clone(),
        add_show: venue_profiles,
        list: venue_directory.clone(),
        get: venue_directory.clone(),
        calendar: venue_directory,
    };

    let journalist_profiles = Arc::new(JournalistProfileService::new(
        JournalistRepositoryPostgres::new(Arc::clone(db)),
        uploader.clone(),
    ));
    let journalist_directory = Arc::new(JournalistDirectoryService::new(
        JournalistQueryPostgres::new(Arc::clone(db)),
    ));
    let journalist = JournalistUseCases {
        save: journalist_profiles.clone(),
        my_profile: journalist_profiles.clone(),
        delete: journalist_profiles,
        list: journalist_directory.clone(),
        get: journalist_directory,
        verify: Arc::new(VerifyJournalistService::new(JournalistRepositoryPostgres::new(
            Arc::clone(db),
        ))),
    };

    let events = Arc::new(EventService::new(
        EventRepositoryPostgres::new(Arc::clone(db)),
        VenueLookupPostgres::new(Arc::clone(db)),
    ));
    let event_listing = Arc::new(EventListingService::new(
        EventQueryPostgres::new(Arc::clone(db)),
        VenueLookupPostgres::new(Arc::clone(db)),
    ));
    let event = EventUseCases {
        create: events.clone(),
        get: events.clone(),
        update: events.clone(),
        delete: events,
        list: event_listing.clone(),
        upcoming: event_listing.clone(),
        my_events: event_listing,
    };

    let stories = Arc::new(NewsService::new(
        NewsRepositoryPostgres::new(Arc::clone(db)),
        uploader,
    ));
    let news_listing = Arc::new(NewsListingService::new(NewsQueryPostgres::new(Arc::clone(db))));
    let news = NewsUseCases {
        create: stories.clone(),
        get: stories.clone(),
        update: stories.clone(),
        delete: stories,
        list: news_listing.clone(),
        my_news: news_listing,
    };

    let contacts = Arc::new(ContactService::new(ContactRepositoryPostgres::new(Arc::clone(db))));
    let contact = ContactUseCases {
        submit: contacts.clone(),
        list: contacts.clone(),
        mailbox: contacts.clone(),
        mark_read: contacts.clone(),
        delete: contacts,
    };

    let dashboard = Arc::new(DashboardService::new(DashboardQueryPostgres::new(Arc::clone(db))));
    let moderation = Arc::new(ModerationService::new(ModerationStorePostgres::new(Arc::clone(db))));
    let admin = AdminUseCases {
        dashboard,
        list_users: moderation.clone(),
        verify_user: moderation.clone(),
        delete_user: moderation.clone(),
        list_content: moderation.clone(),
        toggle_content: moderation,
    };

    Ok(AppState {
        auth,
        artist,
        venue,
        journalist,
        event,
        news,
        contact,
        admin,
    })
}

/// Literal paths are registered ahead of `{id}` patterns that would otherwise capture them.
#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::admin::adapter::incoming::web::routes as admin_routes;
    use crate::artist::adapter::incoming::web::routes as artist_routes;
    use crate::auth::adapter::incoming::web::routes as auth_routes;
    use crate::contact::adapter::incoming::web::routes as contact_routes;
    use crate::event::adapter::incoming::web::routes as event_routes;
    use crate::journalist::adapter::incoming::web::routes as journalist_routes;
    use crate::news::adapter::incoming::web::routes as news_routes;
    use crate::venue::adapter::incoming::web::routes as venue_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(auth_routes::register_user_handler);
    cfg.service(auth_routes::login_user_handler);
    cfg.service(auth_routes::get_current_user_handler);
    // Artists
    cfg.service(artist_routes::get_my_artist_profile_handler);
    cfg.service(artist_routes::upsert_artist_profile_handler);
    cfg.service(artist_routes::update_artist_profile_handler);
    cfg.service(artist_routes::delete_artist_profile_handler);
    cfg.service(artist_routes::list_artists_handler);
    cfg.service(artist_routes::get_artist_handler);
    // Venues
    cfg.service(venue_routes::get_my_venue_profile_handler);
    cfg.service(venue_routes::upsert_venue_profile_handler);
    cfg.service(venue_routes::update_venue_profile_handler);
    cfg.service(venue_routes::delete_venue_profile_handler);
    cfg.service(venue_routes::add_show_handler);
    cfg.service(venue_routes::venue_calendar_handler);
    cfg.service(venue_routes::list_venues_handler);
    cfg.service(venue_routes::get_venue_handler);
    // Journalists
    cfg.service(journalist_routes::get_my_journalist_profile_handler);
    cfg.service(journalist_routes::upsert_journalist_profile_handler);
    cfg.service(journalist_routes::update_journalist_profile_handler);
    cfg.service(journalist_routes::delete_journalist_profile_handler);
    cfg.service(journalist_routes::list_journalists_handler);
    cfg.service(journalist_routes::verify_journalist_handler);
    cfg.service(journalist_routes::get_journalist_handler);
    // Events
    cfg.service(event_routes::upcoming_events_handler);
    cfg.service(event_routes::my_events_handler);
    cfg.service(event_routes::list_events_handler);
    cfg.service(event_routes::create_event_handler);
    cfg.service(event_routes::get_event_handler);
    cfg.service(event_routes::update_event_handler);
    cfg.service(event_routes::delete_event_handler);
    // News
    cfg.service(news_routes::my_news_handler);
    cfg.service(news_routes::list_news_handler);
    cfg.service(news_routes::create_news_handler);
    cfg.service(news_routes::get_news_handler);
    cfg.service(news_routes::update_news_handler);
    cfg.service(news_routes::delete_news_handler);
    // Contact
    cfg.service(contact_routes::submit_contact_handler);
    cfg.service(contact_routes::list_contacts_handler);
    // Admin
    cfg.service(admin_routes::dashboard_handler);
    cfg.service(admin_routes::settings_handler);
    cfg.service(contact_routes::mailbox_handler);
    cfg.service(contact_routes::mark_contact_read_handler);
    cfg.service(contact_routes::delete_contact_handler);
    cfg.service(admin_routes::list_users_handler);
    cfg.service(admin_routes::verify_user_handler);
    cfg.service(admin_routes::delete_user_handler);
    cfg.service(admin_routes::list_content_handler);
    cfg.service(admin_routes::toggle_content_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
