use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub proton_api_url: String,
    pub proton_app_version: String,
    pub upstream_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let proton_api_url = env::var("PROTON_API_URL")
            .unwrap_or_else(|_| "https://mail.proton.me/api".to_string());
        let proton_app_version =
            env::var("PROTON_APP_VERSION").unwrap_or_else(|_| "web-mail@4.0.0".to_string());
        let upstream_timeout_secs = env::var("PROTON_TIMEOUT_SECS")
            .ok()
            .and_then(|secs| secs.parse().ok())
            .unwrap_or(30);

        Self {
            proton_api_url,
            proton_app_version,
            upstream_timeout_secs,
        }
    }
}
