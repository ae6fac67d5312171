use sea_orm::entity::prelude::*;

use crate::event::application::domain::entities::{Event, EventVenue};
use crate::shared::domain::City;
use crate::venue::adapter::outgoing::sea_orm_entity::venues;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub venue_id: Uuid,
    pub artist_band_name: String,
    pub time: String,
    pub date: Date,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub city: String,
    pub color: String,
    pub sequence: i32,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_event(self, venue: Option<venues::Model>) -> Result<Event, String> {
        let city = City::parse(&self.city)
            .ok_or_else(|| format!("Unknown city '{}' on event {}", self.city, self.id))?;

        Ok(Event {
            id: self.id,
            venue_id: self.venue_id,
            artist_band_name: self.artist_band_name,
            time: self.time,
            date: self.date,
            description: self.description,
            city,
            color: self.color,
            sequence: self.sequence.max(0) as u32,
            is_active: self.is_active,
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
            venue: venue.map(to_event_venue).transpose()?,
        })
    }
}

pub fn to_event_venue(venue: venues::Model) -> Result<EventVenue, String> {
    let city = City::parse(&venue.city)
        .ok_or_else(|| format!("Unknown city '{}' on venue {}", venue.city, venue.id))?;

    Ok(EventVenue {
        id: venue.id,
        venue_name: venue.venue_name,
        city,
        address: venue.address,
        seating_capacity: venue.seating_capacity.max(0) as u32,
    })
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "venues::Entity",
        from = "Column::VenueId",
        to = "venues::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Venues,
}

impl Related<venues::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Venues.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
