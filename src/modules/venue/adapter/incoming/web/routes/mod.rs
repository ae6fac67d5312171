mod directory;
mod profile;
mod shows;

pub use directory::{
    get_venue_handler, list_venues_handler, VenueListQuery, __path_get_venue_handler,
    __path_list_venues_handler,
};
pub use profile::{
    delete_venue_profile_handler, get_my_venue_profile_handler, update_venue_profile_handler,
    upsert_venue_profile_handler, VenueProfileForm, VenueProfileRequest,
    __path_update_venue_profile_handler, __path_upsert_venue_profile_handler,
};
pub use shows::{
    add_show_handler, venue_calendar_handler, AddShowRequest, CalendarQuery,
    __path_add_show_handler, __path_venue_calendar_handler,
};
