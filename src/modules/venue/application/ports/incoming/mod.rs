pub mod use_cases;

pub use use_cases::{
    AddShowUseCase, DeleteVenueProfileUseCase, GetOwnVenueProfileUseCase, GetVenueUseCase,
    ListVenuesUseCase, SaveVenueProfileCommand, SaveVenueProfileUseCase, VenueCalendarUseCase,
};
