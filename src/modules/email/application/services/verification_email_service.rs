use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::email::application::ports::outgoing::{
    EmailError, EmailSender, VerificationNotifier, VerificationRecipient,
};

pub const VERIFICATION_INBOX: &str = "thegulfcoastmusic@gmail.com";

#[derive(Clone)]
pub struct VerificationEmailService {
    sender: Arc<dyn EmailSender + Send + Sync>,
}

impl fmt::Debug for VerificationEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerificationEmailService")
            .field("sender", &"<dyn EmailSender>")
            .finish()
    }
}

impl VerificationEmailService {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>) -> Self {
        Self { sender }
    }

    pub fn subject_for(account_kind: &str) -> String {
        format!("Gulf Coast Music - {account_kind} Verification")
    }

    pub fn body_for(account_kind: &str) -> String {
        format!(
            r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #333;">Gulf Coast Music Verification</h2>
  <p>Hello, please email {VERIFICATION_INBOX} to request verification as a Gulf Coast {account_kind}.</p>
  <p>Thank you for registering with Gulf Coast Music!</p>
  <br>
  <p>Best regards,<br>Gulf Coast Music Team</p>
</div>"#
        )
    }
}

#[async_trait]
impl VerificationNotifier for VerificationEmailService {
    async fn notify_verification_request(
        &self,
        recipient: &VerificationRecipient,
    ) -> Result<(), EmailError> {
        let subject = Self::subject_for(&recipient.account_kind);
        let body = Self::body_for(&recipient.account_kind);

        self.sender
            .send_email(&recipient.email, &subject, &body)
            .await
            .inspect(|_| {
                tracing::info!(
                    username = %recipient.username,
                    kind = %recipient.account_kind,
                    "Verification request email sent"
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::{mock, predicate::*};

    mock! {
        pub EmailSenderMock {}
        #[async_trait]
        impl EmailSender for EmailSenderMock {
            async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), EmailError>;
        }
    }

    fn recipient(kind: &str) -> VerificationRecipient {
        VerificationRecipient {
            email: "owner@bluebird.com".into(),
            username: "bluebird".into(),
            account_kind: kind.into(),
        }
    }

    #[tokio::test]
    async fn sends_role_specific_subject_and_body() {
        // Arrange
        let mut sender = MockEmailSenderMock::new();
        sender
            .expect_send_email()
            .with(
                eq("owner@bluebird.com"),
                eq("Gulf Coast Music - Venue Verification"),
                function(|body: &str| {
                    body.contains("request verification as a Gulf Coast Venue.")
                        && body.contains(VERIFICATION_INBOX)
                }),
            )
            .times(1)
            .returning(|_, _, _| Ok(()));

        let service = VerificationEmailService::new(Arc::new(sender));

        // Act
        let result = service
            .notify_verification_request(&recipient("Venue"))
            .await;

        // Assert
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn propagates_transport_failure() {
        let mut sender = MockEmailSenderMock::new();
        sender
            .expect_send_email()
            .returning(|_, _, _| Err(EmailError::Transport("connection refused".into())));

        let service = VerificationEmailService::new(Arc::new(sender));

        let result = service
            .notify_verification_request(&recipient("Artist"))
            .await;

        assert_eq!(
            result,
            Err(EmailError::Transport("connection refused".into()))
        );
    }

    #[test]
    fn debug_hides_sender() {
        let sender = Arc::new(MockEmailSenderMock::new()) as Arc<dyn EmailSender + Send + Sync>;
        let service = VerificationEmailService::new(sender);

        assert_eq!(
            format!("{:?}", service),
            "VerificationEmailService { sender: \"<dyn EmailSender>\" }"
        );
    }
}
