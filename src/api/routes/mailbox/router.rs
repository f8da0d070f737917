//! Router for the mail check API

use std::sync::{Arc, RwLock};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::{Router, extract::State};

use super::public;
use crate::api::state::AppState;
use crate::mail::{MailProvider, Session};

type SharedState = Arc<RwLock<AppState>>;

// Single page fetched from the upstream per request
const PAGE: u32 = 0;
const PAGE_SIZE: u32 = 50;

/// Log into the account, mark every unread message as read, and
/// report a summary.
///
/// Business failures (rejected credentials, upstream errors) are
/// reported in the payload with `success: false`, not as HTTP errors.
/// Only an undecodable body produces a non-200 status, so callers
/// must inspect the `success` field and `errors` list.
async fn check_emails_handler(State(state): State<SharedState>, body: String) -> Response {
    // Parse the raw body instead of using the `Json` extractor so
    // missing fields are a 400 rather than a 422
    let req: public::CheckEmailsRequest = match serde_json::from_str(&body) {
        Ok(req) => req,
        Err(_) => return (StatusCode::BAD_REQUEST, "Invalid JSON").into_response(),
    };

    let mail = state.read().unwrap().mail.clone();
    let email = req.account.email;

    tracing::info!("Checking emails for: {}", email);

    let session = match mail.login(&email, &req.account.password).await {
        Ok(session) => session,
        Err(err) => {
            tracing::error!("Login failed for {}: {}", email, err);
            return Json(public::CheckEmailsResponse {
                success: false,
                message: format!("Login failed: {}", err),
                email_count: 0,
                errors: None,
            })
            .into_response();
        }
    };

    let outcome = process_unread(mail.as_ref(), &session).await;

    // The session is invalidated on every path once login succeeded,
    // including a failed fetch. Its own failure is logged, never
    // surfaced.
    if let Err(err) = mail.logout(&session).await {
        tracing::warn!("Failed to invalidate session {}: {}", session.uid, err);
    }

    let response = match outcome {
        Ok((processed, errors)) => public::CheckEmailsResponse {
            success: true,
            message: format!("Successfully processed {} messages", processed),
            email_count: processed,
            errors: if errors.is_empty() { None } else { Some(errors) },
        },
        Err(err) => {
            tracing::error!("Failed to get messages: {}", err);
            public::CheckEmailsResponse {
                success: false,
                message: format!("Failed to get messages: {}", err),
                email_count: 0,
                errors: None,
            }
        }
    };

    Json(response).into_response()
}

/// Fetch the unread page and mark each message read in the order
/// received. A per-message failure is recorded and the loop moves on;
/// only the fetch itself is fatal to the request.
async fn process_unread(
    mail: &dyn MailProvider,
    session: &Session,
) -> Result<(i64, Vec<String>), anyhow::Error> {
    let messages = mail.list_unread(session, PAGE, PAGE_SIZE).await?;

    tracing::info!("Found {} unread messages", messages.len());

    let mut processed = 0;
    let mut errors = Vec::new();

    for message in messages {
        if let Err(err) = mail.mark_read(session, &message.id).await {
            errors.push(format!("Failed to mark message as read: {}", err));
            continue;
        }
        processed += 1;

        tracing::info!("Processed: {}", message.subject);
    }

    Ok((processed, errors))
}

/// Create the mail check router
pub fn router() -> Router<SharedState> {
    Router::new().route("/check-emails", axum::routing::post(check_emails_handler))
}
