use async_trait::async_trait;
use email_address::EmailAddress;
use regex::Regex;
use std::sync::LazyLock;

use crate::{
    auth::application::domain::entities::{Role, User, UserView},
    shared::{
        domain::{City, Genre},
        validation::ValidationErrors,
    },
};

static USERNAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("username pattern is valid"));

pub const MIN_PASSWORD_LEN: usize = 6;

//
// ──────────────────────────────────────────────────────────
// Register User Command
// ──────────────────────────────────────────────────────────
//

/// Raw registration fields as they arrive from the client.
#[derive(Debug, Clone, Default)]
pub struct RegisterUserInput {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub genre: Option<String>,
    pub home_city: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    username: String,
    email: String,
    password: String,
    role: Role,
    genre: Option<Genre>,
    home_city: Option<City>,
}

impl RegisterUserCommand {
    pub fn new(input: RegisterUserInput) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let username = input.username.map(|u| u.trim().to_string()).unwrap_or_default();
        let username_len = username.chars().count();
        if !(3..=30).contains(&username_len) {
            errors.add("username", "Username must be between 3 and 30 characters");
        } else if !USERNAME_PATTERN.is_match(&username) {
            errors.add(
                "username",
                "Username can only contain letters, numbers, and underscores",
            );
        }

        let email = input
            .email
            .map(|e| e.trim().to_lowercase())
            .unwrap_or_default();
        errors.ensure(
            EmailAddress::is_valid(&email),
            "email",
            "Please provide a valid email",
        );

        let password = input.password.unwrap_or_default();
        errors.ensure(
            password.chars().count() >= MIN_PASSWORD_LEN,
            "password",
            "Password must be at least 6 characters",
        );

        let role = input
            .role
            .as_deref()
            .and_then(Role::parse)
            .filter(Role::is_self_registrable);
        if role.is_none() {
            errors.add("userType", "Invalid user type");
        }

        let genre = match input.genre.as_deref().map(str::trim).filter(|g| !g.is_empty()) {
            Some(raw) => match Genre::parse(raw) {
                Some(genre) => Some(genre),
                None => {
                    errors.add("genre", "Invalid genre");
                    None
                }
            },
            None => None,
        };

        let home_city = match input
            .home_city
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
        {
            Some(raw) => match City::parse(raw) {
                Some(city) => Some(city),
                None => {
                    errors.add("homeCity", "Invalid city");
                    None
                }
            },
            None => None,
        };

        match role {
            Some(Role::Artist) if genre.is_none() && !errors.has_field("genre") => {
                errors.add("genre", "Genre is required for artists");
            }
            Some(Role::Venue | Role::Journalist)
                if home_city.is_none() && !errors.has_field("homeCity") =>
            {
                errors.add(
                    "homeCity",
                    "Home city is required for venues and journalists",
                );
            }
            _ => {}
        }

        errors.into_result()?;

        let role = role.unwrap_or(Role::Fan);
        Ok(Self {
            username,
            email,
            password,
            role,
            // Only artists carry a genre
            genre: genre.filter(|_| role == Role::Artist),
            home_city,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn genre(&self) -> Option<Genre> {
        self.genre
    }

    pub fn home_city(&self) -> Option<City> {
        self.home_city
    }
}

//
// ──────────────────────────────────────────────────────────
// Create User (account row only)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateUserError {
    #[error("Username already taken")]
    UsernameTaken,

    #[error("Email already registered")]
    EmailTaken,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateUserUseCase: Send + Sync {
    async fn execute(&self, command: &RegisterUserCommand) -> Result<User, CreateUserError>;
}

//
// ──────────────────────────────────────────────────────────
// Register User (account + notification + token)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct RegistrationOutput {
    pub token: String,
    pub user: UserView,
    pub message: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegistrationError {
    #[error(transparent)]
    CreateUser(#[from] CreateUserError),

    #[error("Verification email could not be sent: {0}")]
    VerificationEmailFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
}

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn register(
        &self,
        command: RegisterUserCommand,
    ) -> Result<RegistrationOutput, RegistrationError>;
}
