//! Host platform interface.
//!
//! The mini-app shell (clipboard, dialogs, app lifecycle) is an external
//! collaborator; the core only ever talks to this trait. The production
//! handler is thin glue over the host SDK and lives with the frontend.

use async_trait::async_trait;

use crate::errors::PlatformError;

/// Host-shell operations the core may request.
#[async_trait]
pub trait PlatformEffects: Send + Sync {
    /// Put `text` on the host clipboard.
    async fn copy_to_clipboard(&self, text: &str) -> Result<(), PlatformError>;

    /// Show a confirm dialog; resolves to the user's choice.
    async fn confirm(&self, message: &str) -> bool;

    /// Ask the host shell to close the mini-app.
    fn close_app(&self);
}
