pub mod use_cases;

pub use use_cases::{
    ContactError, ContactMailboxUseCase, DeleteContactUseCase, ListContactsUseCase, Mailbox,
    MailboxFilter, MarkContactReadUseCase, SubmitContactUseCase,
};
