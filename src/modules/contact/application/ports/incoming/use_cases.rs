use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::contact::application::{
    domain::entities::{Contact, ContactInput},
    ports::outgoing::ContactStoreError,
};
use crate::shared::pagination::{PageInfo, PageRequest};
use crate::shared::validation::ValidationErrors;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactError {
    #[error("Contact message not found")]
    NotFound,

    #[error("Validation failed")]
    Invalid(ValidationErrors),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<ContactStoreError> for ContactError {
    fn from(err: ContactStoreError) -> Self {
        match err {
            ContactStoreError::Database(msg) => ContactError::Database(msg),
        }
    }
}

impl From<ValidationErrors> for ContactError {
    fn from(errors: ValidationErrors) -> Self {
        ContactError::Invalid(errors)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MailboxFilter {
    pub read: Option<bool>,
    pub page: PageRequest,
}

/// One page of the admin mailbox.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Mailbox {
    pub contacts: Vec<Contact>,
    pub unread_count: u64,
    pub pagination: PageInfo,
}

#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    async fn execute(&self, input: ContactInput) -> Result<Contact, ContactError>;
}

#[async_trait]
pub trait ListContactsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Contact>, ContactError>;
}

#[async_trait]
pub trait ContactMailboxUseCase: Send + Sync {
    async fn execute(&self, filter: MailboxFilter) -> Result<Mailbox, ContactError>;
}

#[async_trait]
pub trait MarkContactReadUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<Contact, ContactError>;
}

#[async_trait]
pub trait DeleteContactUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), ContactError>;
}
