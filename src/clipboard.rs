//! Host clipboard access.
//!
//! The dashboard only ever writes literal command text. Writes go through
//! [`ClipboardWriter`] so the copy control can be driven without a display
//! server in tests.

use crate::errors::{BloatkillError, Result};

/// Something that accepts text for the system clipboard.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The platform clipboard, opened lazily on first use.
///
/// The handle is kept alive after a successful write; on X11 and Wayland the
/// copied text disappears once the owning handle is dropped.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard> {
        if self.handle.is_none() {
            let clipboard = arboard::Clipboard::new().map_err(unavailable)?;
            self.handle = Some(clipboard);
        }
        self.handle.as_mut().ok_or_else(|| BloatkillError::ClipboardUnavailable {
            details: "clipboard handle missing".to_string(),
        })
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let result = self.handle()?.set_text(text.to_owned()).map_err(unavailable);
        if result.is_err() {
            // A broken handle stays broken; reopen on the next attempt.
            self.handle = None;
        }
        result
    }
}

fn unavailable(err: arboard::Error) -> BloatkillError {
    BloatkillError::ClipboardUnavailable {
        details: err.to_string(),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Records writes, or refuses them all.
    #[derive(Default)]
    pub struct MemoryClipboard {
        pub contents: Vec<String>,
        pub deny: bool,
    }

    impl MemoryClipboard {
        pub fn denying() -> Self {
            Self {
                contents: Vec::new(),
                deny: true,
            }
        }
    }

    impl ClipboardWriter for MemoryClipboard {
        fn write_text(&mut self, text: &str) -> Result<()> {
            if self.deny {
                return Err(BloatkillError::ClipboardUnavailable {
                    details: "denied".to_string(),
                });
            }
            self.contents.push(text.to_string());
            Ok(())
        }
    }
}
