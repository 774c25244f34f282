//! Application configuration.

/// Environment-supplied configuration for the app core.
///
/// The bot application URL is injected by the embedding frontend (it comes
/// from the deployment environment); a missing value surfaces as a
/// `ShareError` when a share link is requested, never as a panic.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Public URL of the host bot mini-app, used to compose share links.
    pub bot_app_url: Option<String>,
}

impl AppConfig {
    /// Configuration with a known bot application URL.
    pub fn with_bot_app_url(bot_app_url: impl Into<String>) -> Self {
        Self {
            bot_app_url: Some(bot_app_url.into()),
        }
    }
}
