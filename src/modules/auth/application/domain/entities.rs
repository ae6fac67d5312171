use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::shared::domain::{City, Genre};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<UserId> for Uuid {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Fan,
    Artist,
    Venue,
    Journalist,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Fan => "fan",
            Role::Artist => "artist",
            Role::Venue => "venue",
            Role::Journalist => "journalist",
            Role::Admin => "admin",
        }
    }

    pub fn parse(raw: &str) -> Option<Role> {
        match raw.trim().to_lowercase().as_str() {
            "fan" => Some(Role::Fan),
            "artist" => Some(Role::Artist),
            "venue" => Some(Role::Venue),
            "journalist" => Some(Role::Journalist),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    /// Admin passes every role gate.
    pub fn permits(&self, allowed: &[Role]) -> bool {
        *self == Role::Admin || allowed.contains(self)
    }

    pub fn is_self_registrable(&self) -> bool {
        !matches!(self, Role::Admin)
    }

    /// Artists, venues and journalists ask the team to verify them after registering.
    pub fn requests_verification(&self) -> bool {
        matches!(self, Role::Artist | Role::Venue | Role::Journalist)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Fan => "Fan",
            Role::Artist => "Artist",
            Role::Venue => "Venue",
            Role::Journalist => "Journalist",
            Role::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub genre: Option<Genre>,
    pub home_city: Option<City>,
    pub is_active: bool,
    pub is_verified: bool,
    pub verification_requested: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Account data safe to hand to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<Genre>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_city: Option<City>,
    pub is_active: bool,
    pub is_verified: bool,
    pub verification_requested: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role,
            genre: user.genre,
            home_city: user.home_city,
            is_active: user.is_active,
            is_verified: user.is_verified,
            verification_requested: user.verification_requested,
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        UserView::from(&user)
    }
}

/// The account behind an authenticated request, loaded fresh on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub user_id: UserId,
    pub role: Role,
    pub is_verified: bool,
}
