//! Public types for the mail check API
use serde::{Deserialize, Serialize};

/// Credentials supplied per request. Never persisted and the password
/// must never be logged or echoed back.
#[derive(Deserialize)]
pub struct EmailAccount {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct CheckEmailsRequest {
    pub account: EmailAccount,
}

#[derive(Serialize, Deserialize)]
pub struct CheckEmailsResponse {
    pub success: bool,
    pub message: String,
    pub email_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}
