use std::sync::Arc;

use crate::core::AppConfig;
use crate::mail::MailProvider;

pub struct AppState {
    // Provider handle shared by all requests. Sessions are not: each
    // request logs in and out on its own.
    pub mail: Arc<dyn MailProvider>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(mail: Arc<dyn MailProvider>, config: AppConfig) -> Self {
        Self { mail, config }
    }
}
