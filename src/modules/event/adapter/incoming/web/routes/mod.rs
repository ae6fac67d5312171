mod events;
mod listing;

pub use events::{
    create_event_handler, delete_event_handler, get_event_handler, update_event_handler,
    EventRequest, __path_create_event_handler, __path_delete_event_handler,
    __path_get_event_handler, __path_update_event_handler,
};
pub use listing::{
    list_events_handler, my_events_handler, upcoming_events_handler, EventListQuery,
    UpcomingQuery, __path_list_events_handler, __path_my_events_handler,
    __path_upcoming_events_handler,
};
