use arboard::Clipboard;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(#[from] arboard::Error);

pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard, opened on first use and kept alive so the
/// selection survives on X11.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new()?,
        };
        let result = clipboard.set_text(text.to_owned());
        self.inner = Some(clipboard);
        result.map_err(ClipboardError::from)
    }
}
