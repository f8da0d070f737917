//! Proton API client for logging in, listing unread mail, and marking
//! messages read
//!
//! Speaks the small subset of the Proton REST API this service needs.
//! The SRP handshake and message encryption live upstream; this
//! client only drives the HTTP endpoints. The base URL and app
//! version are constructor parameters so tests can point it at a mock
//! server.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{MailProvider, Message, Session};

#[derive(Debug, Serialize)]
struct AuthRequest<'a> {
    #[serde(rename = "Username")]
    username: &'a str,
    #[serde(rename = "Password")]
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct AuthResponse {
    #[serde(rename = "UID")]
    uid: String,
    #[serde(rename = "AccessToken")]
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct ListMessagesResponse {
    #[serde(rename = "Messages")]
    messages: Option<Vec<MessageResponse>>,
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Subject")]
    subject: String,
}

#[derive(Debug, Serialize)]
struct MarkReadRequest<'a> {
    #[serde(rename = "IDs")]
    ids: Vec<&'a str>,
}

pub struct ProtonClient {
    http: Client,
    base_url: String,
    app_version: String,
}

impl ProtonClient {
    /// Build a client against `base_url`, identifying itself with
    /// `app_version` and applying `timeout_secs` to every upstream
    /// call.
    pub fn new(base_url: &str, app_version: &str, timeout_secs: u64) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            app_version: app_version.to_string(),
        }
    }
}

#[async_trait]
impl MailProvider for ProtonClient {
    async fn login(&self, email: &str, password: &str) -> Result<Session> {
        let url = format!("{}/auth/v4", self.base_url);
        let res = self
            .http
            .post(&url)
            .header("x-pm-appversion", &self.app_version)
            .json(&AuthRequest {
                username: email,
                password,
            })
            .send()
            .await?;
        let status = res.status();
        let text = res.text().await.unwrap_or_default();
        if !status.is_success() {
            anyhow::bail!("auth request failed: {} ({})", status, text);
        }
        let auth: AuthResponse = serde_json::from_str(&text)?;
        Ok(Session {
            uid: auth.uid,
            access_token: auth.access_token,
        })
    }

    async fn list_unread(
        &self,
        session: &Session,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<Message>> {
        let url = format!(
            "{}/mail/v4/messages?Page={}&PageSize={}&Unread=1",
            self.base_url, page, page_size
        );
        let res = self
            .http
            .get(&url)
            .header("x-pm-appversion", &self.app_version)
            .header("x-pm-uid", &session.uid)
            .bearer_auth(&session.access_token)
            .send()
            .await?;
        let status = res.status();
        let text = res.text().await.unwrap_or_default();
        if !status.is_success() {
            anyhow::bail!("unread fetch failed: {} ({})", status, text);
        }
        let body: ListMessagesResponse = serde_json::from_str(&text)?;
        let messages = body
            .messages
            .unwrap_or_default()
            .into_iter()
            .map(|msg| Message {
                id: msg.id,
                subject: msg.subject,
            })
            .collect();
        Ok(messages)
    }

    async fn mark_read(&self, session: &Session, message_id: &str) -> Result<()> {
        let url = format!("{}/mail/v4/messages/read", self.base_url);
        let res = self
            .http
            .put(&url)
            .header("x-pm-appversion", &self.app_version)
            .header("x-pm-uid", &session.uid)
            .bearer_auth(&session.access_token)
            .json(&MarkReadRequest {
                ids: vec![message_id],
            })
            .send()
            .await?;
        let status = res.status();
        if !status.is_success() {
            let text = res.text().await.unwrap_or_default();
            anyhow::bail!("mark read failed: {} ({})", status, text);
        }
        Ok(())
    }

    async fn logout(&self, session: &Session) -> Result<()> {
        let url = format!("{}/auth/v4", self.base_url);
        let res = self
            .http
            .delete(&url)
            .header("x-pm-appversion", &self.app_version)
            .header("x-pm-uid", &session.uid)
            .bearer_auth(&session.access_token)
            .send()
            .await?;
        let status = res.status();
        if !status.is_success() {
            let text = res.text().await.unwrap_or_default();
            anyhow::bail!("auth delete failed: {} ({})", status, text);
        }
        Ok(())
    }
}
