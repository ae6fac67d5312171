use async_trait::async_trait;
use uuid::Uuid;

use crate::contact::application::{
    domain::entities::{Contact, ContactInput},
    ports::{
        incoming::{
            ContactError, ContactMailboxUseCase, DeleteContactUseCase, ListContactsUseCase,
            Mailbox, MailboxFilter, MarkContactReadUseCase, SubmitContactUseCase,
        },
        outgoing::ContactRepository,
    },
};
use crate::shared::pagination::PageInfo;

pub struct ContactService<R>
where
    R: ContactRepository,
{
    repo: R,
}

impl<R> ContactService<R>
where
    R: ContactRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> SubmitContactUseCase for ContactService<R>
where
    R: ContactRepository,
{
    async fn execute(&self, input: ContactInput) -> Result<Contact, ContactError> {
        let new = input.into_new()?;
        let contact = self.repo.insert(new).await?;

        tracing::info!(contact_id = %contact.id, "Contact message received");
        Ok(contact)
    }
}

#[async_trait]
impl<R> ListContactsUseCase for ContactService<R>
where
    R: ContactRepository,
{
    async fn execute(&self) -> Result<Vec<Contact>, ContactError> {
        Ok(self.repo.list_all().await?)
    }
}

#[async_trait]
impl<R> ContactMailboxUseCase for ContactService<R>
where
    R: ContactRepository,
{
    async fn execute(&self, filter: MailboxFilter) -> Result<Mailbox, ContactError> {
        let (page, unread_count) = tokio::try_join!(
            self.repo.list_page(filter.read, filter.page),
            self.repo.count_unread(),
        )?;

        Ok(Mailbox {
            pagination: PageInfo::new(filter.page, page.total),
            contacts: page.items,
            unread_count,
        })
    }
}

#[async_trait]
impl<R> MarkContactReadUseCase for ContactService<R>
where
    R: ContactRepository,
{
    async fn execute(&self, id: Uuid) -> Result<Contact, ContactError> {
        self.repo.mark_read(id).await?.ok_or(ContactError::NotFound)
    }
}

#[async_trait]
impl<R> DeleteContactUseCase for ContactService<R>
where
    R: ContactRepository,
{
    async fn execute(&self, id: Uuid) -> Result<(), ContactError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(ContactError::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::application::{
        domain::entities::{fixtures::contact, NewContact},
        ports::outgoing::ContactStoreError,
    };
    use crate::shared::pagination::{Page, PageRequest};
    use chrono::Utc;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryContacts {
        // Newest last; listings reverse it.
        messages: Mutex<Vec<Contact>>,
    }

    impl InMemoryContacts {
        fn with(messages: Vec<Contact>) -> Self {
            Self {
                messages: Mutex::new(messages),
            }
        }
    }

    #[async_trait]
    impl ContactRepository for InMemoryContacts {
        async fn insert(&self, new: NewContact) -> Result<Contact, ContactStoreError> {
            let now = Utc::now();
            let stored = Contact {
                id: Uuid::new_v4(),
                email: new.email,
                subject: new.subject,
                message: new.message,
                is_read: false,
                created_at: now,
                updated_at: now,
            };
            self.messages.lock().unwrap().push(stored.clone());
            Ok(stored)
        }

        async fn list_all(&self) -> Result<Vec<Contact>, ContactStoreError> {
            Ok(self.messages.lock().unwrap().iter().rev().cloned().collect())
        }

        async fn list_page(
            &self,
            read: Option<bool>,
            page: PageRequest,
        ) -> Result<Page<Contact>, ContactStoreError> {
            let matching: Vec<_> = self
                .messages
                .lock()
                .unwrap()
                .iter()
                .rev()
                .filter(|c| read.map_or(true, |r| c.is_read == r))
                .cloned()
                .collect();
            Ok(Page {
                total: matching.len() as u64,
                items: matching
                    .into_iter()
                    .skip(page.offset() as usize)
                    .take(page.limit() as usize)
                    .collect(),
            })
        }

        async fn count_unread(&self) -> Result<u64, ContactStoreError> {
            Ok(self.messages.lock().unwrap().iter().filter(|c| !c.is_read).count() as u64)
        }

        async fn mark_read(&self, id: Uuid) -> Result<Option<Contact>, ContactStoreError> {
            let mut messages = self.messages.lock().unwrap();
            Ok(messages.iter_mut().find(|c| c.id == id).map(|c| {
                c.is_read = true;
                c.clone()
            }))
        }

        async fn delete(&self, id: Uuid) -> Result<bool, ContactStoreError> {
            let mut messages = self.messages.lock().unwrap();
            let before = messages.len();
            messages.retain(|c| c.id != id);
            Ok(messages.len() < before)
        }
    }

    #[tokio::test]
    async fn submit_stores_unread_message() {
        let svc = ContactService::new(InMemoryContacts::default());

        let stored = SubmitContactUseCase::execute(
            &svc,
            ContactInput {
                email: Some("Fan@Example.com".into()),
                subject: Some("Hello".into()),
                message: Some("Love the calendar".into()),
            },
        )
        .await
        .unwrap();

        assert!(!stored.is_read);
        assert_eq!(stored.email, "fan@example.com");
    }

    #[tokio::test]
    async fn invalid_submission_is_not_stored() {
        let svc = ContactService::new(InMemoryContacts::default());

        let result = SubmitContactUseCase::execute(&svc, ContactInput::default()).await;

        assert!(matches!(result, Err(ContactError::Invalid(_))));
        assert!(svc.repo.messages.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn mailbox_pages_and_counts_unread() {
        // Arrange
        let messages: Vec<_> = (0..12).map(|i| contact(i % 3 == 0)).collect();
        let svc = ContactService::new(InMemoryContacts::with(messages));

        // Act
        let mailbox = ContactMailboxUseCase::execute(
            &svc,
            MailboxFilter {
                read: Some(false),
                page: PageRequest::new(Some(2), Some(5)),
            },
        )
        .await
        .unwrap();

        // Assert
        assert_eq!(mailbox.unread_count, 8);
        assert_eq!(mailbox.pagination.total, 8);
        assert_eq!(mailbox.pagination.pages, 2);
        assert_eq!(mailbox.contacts.len(), 3);
        assert!(mailbox.contacts.iter().all(|c| !c.is_read));
    }

    #[tokio::test]
    async fn mark_read_and_delete_report_unknown_ids() {
        let existing = contact(false);
        let svc = ContactService::new(InMemoryContacts::with(vec![existing.clone()]));

        let read = MarkContactReadUseCase::execute(&svc, existing.id).await.unwrap();
        assert!(read.is_read);

        let missing = MarkContactReadUseCase::execute(&svc, Uuid::new_v4()).await;
        assert!(matches!(missing, Err(ContactError::NotFound)));

        DeleteContactUseCase::execute(&svc, existing.id).await.unwrap();
        let again = DeleteContactUseCase::execute(&svc, existing.id).await;
        assert!(matches!(again, Err(ContactError::NotFound)));
    }
}
