use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::UserId;
use crate::journalist::application::domain::entities::Journalist;
use crate::shared::domain::CoverageArea;
use crate::storage::application::domain::entities::StoredFile;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "journalists")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub full_name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub profile_photo: Option<Json>,
    #[sea_orm(column_type = "JsonBinary")]
    pub areas_of_coverage: Json,
    pub is_verified: bool,
    pub verified_at: Option<DateTimeWithTimeZone>,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_journalist(self) -> Result<Journalist, String> {
        let profile_photo = self
            .profile_photo
            .filter(|v| !v.is_null())
            .map(serde_json::from_value::<StoredFile>)
            .transpose()
            .map_err(|e| format!("Invalid profile photo on journalist {}: {e}", self.id))?;

        let areas_of_coverage: Vec<CoverageArea> = serde_json::from_value(self.areas_of_coverage)
            .map_err(|e| format!("Invalid areas of coverage on journalist {}: {e}", self.id))?;

        Ok(Journalist {
            id: self.id,
            user_id: UserId::from(self.user_id),
            full_name: self.full_name,
            bio: self.bio,
            profile_photo,
            areas_of_coverage,
            is_verified: self.is_verified,
            verified_at: self.verified_at.map(|t| t.with_timezone(&chrono::Utc)),
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
