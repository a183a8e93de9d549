//! Clipboard access for copying generated text.

use arboard::Clipboard;
use parking_lot::Mutex;
use std::time::Duration;
use thiserror::Error;

/// Errors from clipboard writes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClipboardError {
    /// No clipboard could be opened (headless session, missing display).
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    /// The clipboard rejected the write.
    #[error("Failed to set clipboard text: {0}")]
    Write(String),
}

/// Capability to place text on a clipboard.
pub trait ClipboardWriter: Send + Sync {
    /// Write `text` verbatim.
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Handler for the system clipboard.
///
/// The underlying handle is opened on first use so that a session without a
/// clipboard can still run the generator.
///
/// On X11 and Wayland the copied text is served by this process and vanishes
/// when it exits. A short-lived process should use [`SystemClipboard::holding`].
pub struct SystemClipboard {
    clipboard: Mutex<Option<Clipboard>>,
    hold: Option<Duration>,
}

impl SystemClipboard {
    /// Create a new clipboard handler.
    pub fn new() -> Self {
        Self {
            clipboard: Mutex::new(None),
            hold: None,
        }
    }

    /// Clipboard whose writes block, on Linux, until another application
    /// takes ownership of the clipboard or `hold` elapses. Elsewhere the
    /// system keeps the text after exit and writes return immediately.
    pub fn holding(hold: Duration) -> Self {
        Self {
            clipboard: Mutex::new(None),
            hold: Some(hold),
        }
    }

    /// How long a write keeps serving the text, if it blocks at all.
    pub fn hold(&self) -> Option<Duration> {
        if cfg!(target_os = "linux") {
            self.hold
        } else {
            None
        }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut slot = self.clipboard.lock();
        if slot.is_none() {
            let clipboard =
                Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            *slot = Some(clipboard);
        }

        let Some(clipboard) = slot.as_mut() else {
            return Err(ClipboardError::Unavailable("not initialized".to_string()));
        };

        let written = match self.hold {
            Some(hold) => set_text_held(clipboard, text, hold),
            None => clipboard.set_text(text.to_string()),
        };

        match written {
            Ok(()) => Ok(()),
            Err(e) => {
                // A broken handle is dropped so the next copy reopens it.
                *slot = None;
                Err(ClipboardError::Write(e.to_string()))
            }
        }
    }
}

#[cfg(target_os = "linux")]
fn set_text_held(clipboard: &mut Clipboard, text: &str, hold: Duration) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;
    use std::time::Instant;

    clipboard
        .set()
        .wait_until(Instant::now() + hold)
        .text(text.to_string())
}

#[cfg(not(target_os = "linux"))]
fn set_text_held(clipboard: &mut Clipboard, text: &str, _hold: Duration) -> Result<(), arboard::Error> {
    clipboard.set_text(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_clipboard_never_blocks() {
        assert_eq!(SystemClipboard::new().hold(), None);
    }

    #[test]
    fn holding_clipboard_blocks_only_on_linux() {
        let clipboard = SystemClipboard::holding(Duration::from_secs(15));
        if cfg!(target_os = "linux") {
            assert_eq!(clipboard.hold(), Some(Duration::from_secs(15)));
        } else {
            assert_eq!(clipboard.hold(), None);
        }
    }
}
