pub mod email_sender;
pub mod verification_notifier;

pub use email_sender::{EmailError, EmailSender};
pub use verification_notifier::{VerificationNotifier, VerificationRecipient};
