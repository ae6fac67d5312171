use sea_orm::entity::prelude::*;

use crate::artist::application::domain::entities::Artist;
use crate::auth::application::domain::entities::UserId;
use crate::shared::domain::Genre;
use crate::storage::application::domain::entities::StoredFile;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "artists")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub name: String,
    pub city: String,
    pub genre: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub biography: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub photos: Json,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub audio_track: Option<Json>,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_artist(self) -> Result<Artist, String> {
        let genre = Genre::parse(&self.genre)
            .ok_or_else(|| format!("Unknown genre '{}' on artist {}", self.genre, self.id))?;

        let photos: Vec<StoredFile> =
            serde_json::from_value(self.photos).map_err(|e| format!("Invalid photos: {e}"))?;

        let audio_track = self
            .audio_track
            .filter(|v| !v.is_null())
            .map(serde_json::from_value::<StoredFile>)
            .transpose()
            .map_err(|e| format!("Invalid audio track: {e}"))?;

        Ok(Artist {
            id: self.id,
            user_id: UserId::from(self.user_id),
            name: self.name,
            city: self.city,
            genre,
            biography: self.biography,
            photos,
            audio_track,
            is_active: self.is_active,
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Users,
}

impl Related<crate::auth::adapter::outgoing::sea_orm_entity::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
