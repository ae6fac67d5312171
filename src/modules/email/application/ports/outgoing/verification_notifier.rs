use async_trait::async_trait;

use super::email_sender::EmailError;

/// Who receives a verification-request email and which account kind they registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationRecipient {
    pub email: String,
    pub username: String,
    /// Capitalised account kind, e.g. "Artist".
    pub account_kind: String,
}

#[async_trait]
pub trait VerificationNotifier: Send + Sync {
    async fn notify_verification_request(
        &self,
        recipient: &VerificationRecipient,
    ) -> Result<(), EmailError>;
}
