use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Role, User, UserId};
use crate::shared::domain::{City, Genre};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub genre: Option<String>,
    pub home_city: Option<String>,
    pub is_active: bool,
    pub is_verified: bool,
    pub verification_requested: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    /// Fails only for a role the application does not know, which means the row was written
    /// outside of it.
    pub fn to_user(self) -> Result<User, String> {
        let role = Role::parse(&self.role)
            .ok_or_else(|| format!("Unknown role '{}' on user {}", self.role, self.id))?;

        Ok(User {
            id: UserId::from(self.id),
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            role,
            genre: self.genre.as_deref().and_then(Genre::parse),
            home_city: self.home_city.as_deref().and_then(City::parse),
            is_active: self.is_active,
            is_verified: self.is_verified,
            verification_requested: self.verification_requested,
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use chrono::Utc;
        use sea_orm::ActiveValue::Set;

        if !insert {
            // Only update updated_at on UPDATE, not INSERT
            self.updated_at = Set(Utc::now().into());
        }

        Ok(self)
    }
}
