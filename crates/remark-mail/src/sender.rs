use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::info;

use remark_types::models::AuthenticationCodeEmail;

use crate::MailError;

/// Strategy for actually delivering an authentication email.
/// Implementations can call a provider API, log, or record for tests.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, email: &AuthenticationCodeEmail) -> Result<(), MailError>;
}

/// Sender that only writes to `tracing`. Used when no provider is configured.
pub struct LogEmailSender {
    base_url: String,
}

impl LogEmailSender {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }
}

#[async_trait]
impl EmailSender for LogEmailSender {
    async fn send(&self, email: &AuthenticationCodeEmail) -> Result<(), MailError> {
        // Development only: the link is the credential.
        info!(
            to = %email.email_address,
            "Authentication link: {}/userauthentication/{}",
            self.base_url,
            email.code,
        );
        Ok(())
    }
}

/// Records every email it is asked to send.
#[derive(Clone, Default)]
pub struct MockEmailSender {
    sent: Arc<Mutex<Vec<AuthenticationCodeEmail>>>,
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent_emails(&self) -> Vec<AuthenticationCodeEmail> {
        self.sent.lock().map(|sent| sent.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send(&self, email: &AuthenticationCodeEmail) -> Result<(), MailError> {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(email.clone());
        }
        Ok(())
    }
}
