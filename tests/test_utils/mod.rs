//! Test utilities for integration tests
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use anyhow::Result;
use async_trait::async_trait;
use axum::{Router, body::Body};

use proton_api_service::api::AppState;
use proton_api_service::api::app;
use proton_api_service::core::AppConfig;
use proton_api_service::mail::{MailProvider, Message, Session};

/// Scriptable in-memory mail provider. Each test constructs one with
/// the upstream behavior it needs and can assert on the recorded
/// logout calls afterwards.
#[derive(Default)]
pub struct FakeMail {
    pub login_error: Option<String>,
    pub list_error: Option<String>,
    pub messages: Vec<Message>,
    pub fail_mark_read: HashSet<String>,
    pub logouts: AtomicUsize,
}

impl FakeMail {
    pub fn with_messages(messages: Vec<Message>) -> Self {
        Self {
            messages,
            ..Self::default()
        }
    }

    pub fn logout_count(&self) -> usize {
        self.logouts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MailProvider for FakeMail {
    async fn login(&self, email: &str, _password: &str) -> Result<Session> {
        if let Some(err) = &self.login_error {
            anyhow::bail!("{}", err);
        }
        Ok(Session {
            uid: format!("uid-{}", email),
            access_token: "test-token".to_string(),
        })
    }

    async fn list_unread(
        &self,
        _session: &Session,
        _page: u32,
        _page_size: u32,
    ) -> Result<Vec<Message>> {
        if let Some(err) = &self.list_error {
            anyhow::bail!("{}", err);
        }
        Ok(self.messages.clone())
    }

    async fn mark_read(&self, _session: &Session, message_id: &str) -> Result<()> {
        if self.fail_mark_read.contains(message_id) {
            anyhow::bail!("upstream rejected update for {}", message_id);
        }
        Ok(())
    }

    async fn logout(&self, _session: &Session) -> Result<()> {
        self.logouts.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

pub fn message(id: &str, subject: &str) -> Message {
    Message {
        id: id.to_string(),
        subject: subject.to_string(),
    }
}

/// Creates a test application router backed by the given fake
/// provider. Keep a clone of the `Arc` to inspect the fake after the
/// request completes.
pub fn test_app(mail: Arc<FakeMail>) -> Router {
    let app_config = AppConfig {
        proton_api_url: String::from("http://localhost:0"),
        proton_app_version: String::from("test-app@0.0.0"),
        upstream_timeout_secs: 5,
    };
    let app_state = AppState::new(mail, app_config);
    app(Arc::new(RwLock::new(app_state)))
}

/// Read a response body into a string
pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
