use sea_orm::entity::prelude::*;

use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::auth::application::domain::entities::UserId;
use crate::news::application::domain::entities::{News, NewsAuthor};
use crate::shared::domain::City;
use crate::storage::application::domain::entities::StoredFile;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "news")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub location: String,
    pub credit: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub photos: Json,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_news(self, author: Option<users::Model>) -> Result<News, String> {
        let location = City::parse(&self.location)
            .ok_or_else(|| format!("Unknown location '{}' on news {}", self.location, self.id))?;

        let photos: Vec<StoredFile> =
            serde_json::from_value(self.photos).map_err(|e| format!("Invalid photos: {e}"))?;

        Ok(News {
            id: self.id,
            author_id: UserId::from(self.author_id),
            title: self.title,
            description: self.description,
            location,
            credit: self.credit,
            photos,
            is_active: self.is_active,
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
            author: author.map(|user| NewsAuthor {
                id: UserId::from(user.id),
                username: user.username,
                email: user.email,
            }),
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "users::Entity",
        from = "Column::AuthorId",
        to = "users::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Users,
}

impl Related<users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
