//! Mail provider abstraction
//!
//! The HTTP layer drives the upstream mail account through this
//! narrow interface so it can be tested against a fake without real
//! network access. The production implementation is [`ProtonClient`].

mod proton;

pub use proton::ProtonClient;

use anyhow::Result;
use async_trait::async_trait;

/// Authenticated handle to a remote mail account. Owned by a single
/// request and invalidated with [`MailProvider::logout`] before the
/// request completes.
#[derive(Debug, Clone)]
pub struct Session {
    pub uid: String,
    pub access_token: String,
}

/// The provider's view of a mail item, reduced to the fields this
/// service reads.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: String,
    pub subject: String,
}

#[async_trait]
pub trait MailProvider: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<Session>;
    async fn list_unread(
        &self,
        session: &Session,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<Message>>;
    async fn mark_read(&self, session: &Session, message_id: &str) -> Result<()>;
    async fn logout(&self, session: &Session) -> Result<()>;
}
