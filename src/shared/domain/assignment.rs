//! Colour and order rules applied when venues and events are created.
//!
//! Both are pure functions of a count read from the store just before the insert. The unique
//! indexes on `(registration_city, registration_order)` and `(venue_id, sequence)` turn a stale count into a
//! conflict that callers retry.

/// Venue colours by 1-based registration order within a city.
pub const VENUE_PALETTE: [&str; 10] = [
    "Blue", "Green", "Red", "Purple", "Orange", "Yellow", "Pink", "Brown", "White", "Black",
];

/// Assigned to every venue registered after the palette runs out.
pub const VENUE_FALLBACK_COLOR: &str = "Gray";

/// Event colours, cycling by the number of events the venue already has.
pub const EVENT_PALETTE: [&str; 10] = [
    "#0000FF", "#008000", "#FF0000", "#800080", "#FFA500", "#FFFF00", "#FFC0CB", "#A52A2A",
    "#FFFFFF", "#000000",
];

/// Order of the next venue in a city that already holds `venues_in_city` venues.
pub fn next_registration_order(venues_in_city: u64) -> u64 {
    venues_in_city + 1
}

pub fn venue_color(registration_order: u64) -> &'static str {
    match registration_order {
        1..=10 => VENUE_PALETTE[(registration_order - 1) as usize],
        _ => VENUE_FALLBACK_COLOR,
    }
}

pub fn event_color(events_for_venue: u64) -> &'static str {
    EVENT_PALETTE[(events_for_venue % EVENT_PALETTE.len() as u64) as usize]
}
