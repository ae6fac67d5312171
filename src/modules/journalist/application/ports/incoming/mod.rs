pub mod use_cases;

pub use use_cases::{
    DeleteJournalistProfileUseCase, GetJournalistUseCase, GetOwnJournalistProfileUseCase,
    ListJournalistsUseCase, SaveJournalistProfileCommand, SaveJournalistProfileUseCase,
    VerifyJournalistUseCase,
};
