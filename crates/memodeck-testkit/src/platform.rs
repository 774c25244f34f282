//! Recording host-shell handler.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use memodeck_core::effects::PlatformEffects;
use memodeck_core::errors::PlatformError;

/// Host shell that records every interaction.
pub struct RecordingPlatform {
    clipboard: Mutex<Vec<String>>,
    confirmations: Mutex<Vec<String>>,
    confirm_answer: AtomicBool,
    fail_clipboard: AtomicBool,
    close_calls: AtomicUsize,
}

impl Default for RecordingPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingPlatform {
    /// Platform that answers `false` to every confirm dialog.
    pub fn new() -> Self {
        Self {
            clipboard: Mutex::new(Vec::new()),
            confirmations: Mutex::new(Vec::new()),
            confirm_answer: AtomicBool::new(false),
            fail_clipboard: AtomicBool::new(false),
            close_calls: AtomicUsize::new(0),
        }
    }

    /// Script the confirm-dialog answer.
    pub fn with_confirm_answer(self, answer: bool) -> Self {
        self.confirm_answer.store(answer, Ordering::SeqCst);
        self
    }

    /// Make every clipboard write fail.
    pub fn with_broken_clipboard(self) -> Self {
        self.fail_clipboard.store(true, Ordering::SeqCst);
        self
    }

    /// Texts written to the clipboard, oldest first.
    pub fn copied_texts(&self) -> Vec<String> {
        self.clipboard.lock().clone()
    }

    /// Messages shown in confirm dialogs, oldest first.
    pub fn confirm_messages(&self) -> Vec<String> {
        self.confirmations.lock().clone()
    }

    /// Number of close requests so far.
    pub fn close_calls(&self) -> usize {
        self.close_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlatformEffects for RecordingPlatform {
    async fn copy_to_clipboard(&self, text: &str) -> Result<(), PlatformError> {
        if self.fail_clipboard.load(Ordering::SeqCst) {
            return Err(PlatformError::Clipboard("denied".to_string()));
        }
        self.clipboard.lock().push(text.to_string());
        Ok(())
    }

    async fn confirm(&self, message: &str) -> bool {
        self.confirmations.lock().push(message.to_string());
        self.confirm_answer.load(Ordering::SeqCst)
    }

    fn close_app(&self) {
        self.close_calls.fetch_add(1, Ordering::SeqCst);
    }
}
