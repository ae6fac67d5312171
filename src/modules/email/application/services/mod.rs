pub mod verification_email_service;

pub use verification_email_service::VerificationEmailService;
