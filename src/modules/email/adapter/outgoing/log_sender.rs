use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::email::application::ports::outgoing::{EmailError, EmailSender};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Keeps messages in memory and logs them instead of delivering. Used when no SMTP transport is
/// configured.
#[derive(Clone, Default)]
pub struct LogEmailSender {
    sent: Arc<Mutex<Vec<SentEmail>>>,
}

impl LogEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent_emails(&self) -> Vec<SentEmail> {
        self.sent
            .lock()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl EmailSender for LogEmailSender {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), EmailError> {
        tracing::info!(to = %to, subject = %subject, "Email captured by log transport");

        let mut sent = self
            .sent
            .lock()
            .map_err(|e| EmailError::Transport(e.to_string()))?;
        sent.push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}
