pub mod domain;
pub mod journalist_use_cases;
pub mod ports;
pub mod services;

pub use journalist_use_cases::JournalistUseCases;
