use std::sync::Arc;

use crate::contact::application::ports::incoming::{
    ContactMailboxUseCase, DeleteContactUseCase, ListContactsUseCase, MarkContactReadUseCase,
    SubmitContactUseCase,
};

#[derive(Clone)]
pub struct ContactUseCases {
    pub submit: Arc<dyn SubmitContactUseCase + Send + Sync>,
    pub list: Arc<dyn ListContactsUseCase + Send + Sync>,
    pub mailbox: Arc<dyn ContactMailboxUseCase + Send + Sync>,
    pub mark_read: Arc<dyn MarkContactReadUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteContactUseCase + Send + Sync>,
}
