pub mod use_cases;

pub use use_cases::{
    CreateNewsCommand, CreateNewsUseCase, DeleteNewsUseCase, GetNewsUseCase, ListNewsUseCase,
    MyNewsUseCase, NewsError, UpdateNewsCommand, UpdateNewsUseCase,
};
