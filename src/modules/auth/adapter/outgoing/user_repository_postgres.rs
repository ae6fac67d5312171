use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::users::{ActiveModel as UserActiveModel, Entity as UserEntity};
use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::outgoing::{NewUser, UserRepository, UserRepositoryError};
use crate::shared::db::is_unique_violation;

pub const EMAIL_UNIQUE_INDEX: &str = "idx_users_email_unique";
pub const USERNAME_UNIQUE_INDEX: &str = "idx_users_username_unique";

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(user.username),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            role: Set(user.role.as_str().to_string()),
            genre: Set(user.genre.map(|g| g.as_str().to_string())),
            home_city: Set(user.home_city.map(|c| c.as_str().to_string())),
            is_active: Set(true),
            is_verified: Set(user.is_verified),
            verification_requested: Set(user.verification_requested),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e, Some(EMAIL_UNIQUE_INDEX)) {
                UserRepositoryError::EmailTaken
            } else if is_unique_violation(&e, Some(USERNAME_UNIQUE_INDEX)) {
                UserRepositoryError::UsernameTaken
            } else {
                UserRepositoryError::DatabaseError(e.to_string())
            }
        })?;

        inserted.to_user().map_err(UserRepositoryError::DatabaseError)
    }

    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError> {
        let result = UserEntity::delete_by_id(user_id.value())
            .exec(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }

        Ok(())
    }
}
