use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::UserId;
use crate::shared::domain::City;
use crate::storage::application::domain::entities::StoredFile;
use crate::venue::application::domain::entities::{Show, Venue};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "venues")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub venue_name: String,
    pub city: String,
    pub address: String,
    pub seating_capacity: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub biography: Option<String>,
    pub open_hours: String,
    pub open_days: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub photos: Json,
    pub registration_order: i32,
    pub registration_city: String,
    pub color_code: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub shows: Json,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_venue(self) -> Result<Venue, String> {
        let city = City::parse(&self.city)
            .ok_or_else(|| format!("Unknown city '{}' on venue {}", self.city, self.id))?;

        let photos: Vec<StoredFile> =
            serde_json::from_value(self.photos).map_err(|e| format!("Invalid photos: {e}"))?;
        let shows: Vec<Show> =
            serde_json::from_value(self.shows).map_err(|e| format!("Invalid shows: {e}"))?;

        Ok(Venue {
            id: self.id,
            user_id: UserId::from(self.user_id),
            venue_name: self.venue_name,
            city,
            address: self.address,
            seating_capacity: u32::try_from(self.seating_capacity).unwrap_or_default(),
            biography: self.biography,
            open_hours: self.open_hours,
            open_days: self.open_days,
            photos,
            registration_order: u32::try_from(self.registration_order).unwrap_or_default(),
            color_code: self.color_code,
            shows,
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
