//! Share-deck workflow.
//!
//! A deck is shared by a deep link into the host bot. The first invocation
//! acquires a stable share id from the catalog API; once one is known, each
//! invocation composes the link, puts it on the clipboard, and offers to
//! close the app so the user can pick a recipient.

use futures_signals::signal::{Mutable, Signal};
use tracing::warn;

use memodeck_core::effects::{CatalogApi, PlatformEffects};
use memodeck_core::errors::ShareError;

use crate::config::AppConfig;

/// Message shown after the share link lands on the clipboard.
const LINK_COPIED_MESSAGE: &str = "The link has been copied to your clipboard. \
     Close the app, then choose who you'd like to share it with. 😊";

/// Deep link that opens a shared deck inside the host bot.
///
/// Trailing slashes on the bot URL are dropped so the query string attaches
/// cleanly.
#[must_use]
pub fn share_link(bot_url: &str, share_id: &str) -> String {
    format!("{}?startapp={}", bot_url.trim_end_matches('/'), share_id)
}

/// Observable state of the share flow for one deck.
pub struct ShareDeckState {
    deck_id: i64,
    share_id: Mutable<Option<String>>,
    is_loading: Mutable<bool>,
}

impl ShareDeckState {
    /// State for `deck_id`, seeded with a share id when the deck has been
    /// shared before.
    pub fn new(deck_id: i64, default_share_id: Option<String>) -> Self {
        Self {
            deck_id,
            share_id: Mutable::new(default_share_id),
            is_loading: Mutable::new(false),
        }
    }

    /// The known share id, if any.
    #[must_use]
    pub fn share_id(&self) -> Option<String> {
        self.share_id.get_cloned()
    }

    /// Whether a share-id request is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading.get()
    }

    /// Signal of the loading flag, for spinner rendering.
    pub fn is_loading_signal(&self) -> impl Signal<Item = bool> {
        self.is_loading.signal()
    }

    /// Advance the share flow one step.
    ///
    /// With a known share id: compose the link, put it on the clipboard,
    /// and close the app when the user confirms. Without one: request an id
    /// from the catalog API and keep it for the next invocation.
    /// Invocations while a request is in flight are ignored.
    pub async fn share(
        &self,
        api: &dyn CatalogApi,
        platform: &dyn PlatformEffects,
        config: &AppConfig,
    ) -> Result<(), ShareError> {
        if let Some(share_id) = self.share_id.get_cloned() {
            let bot_url = config
                .bot_app_url
                .as_deref()
                .ok_or(ShareError::MissingBotUrl)?;
            let link = share_link(bot_url, &share_id);
            platform.copy_to_clipboard(&link).await?;
            if platform.confirm(LINK_COPIED_MESSAGE).await {
                platform.close_app();
            }
            return Ok(());
        }

        if self.is_loading.get() {
            return Ok(());
        }
        self.is_loading.set(true);
        let result = api.share_deck(self.deck_id).await;
        self.is_loading.set(false);

        match result {
            Ok(response) => {
                self.share_id.set(Some(response.share_id));
                Ok(())
            }
            Err(error) => {
                warn!(deck_id = self.deck_id, %error, "share request failed");
                Err(error.into())
            }
        }
    }
}
