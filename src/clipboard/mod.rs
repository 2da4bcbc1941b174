//! Copying the displayed conversation to the system clipboard.

use anyhow::{Context, Result, bail};
use arboard::Clipboard;

use crate::models::{Conversation, format_transcript};

/// Largest transcript we hand to the clipboard (10MB)
const MAX_CLIPBOARD_SIZE: usize = 10 * 1024 * 1024;

/// Destination for copied text (the system clipboard, or a fake in tests)
trait ClipboardSink {
    fn set_text(&mut self, text: String) -> Result<()>;
}

struct SystemClipboard(Clipboard);

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: String) -> Result<()> {
        self.0.set_text(text).context("Failed to set clipboard contents")
    }
}

fn transcript_for_clipboard(conversation: &Conversation) -> Result<String> {
    let text = format_transcript(conversation);
    if text.is_empty() {
        bail!("Conversation has no messages to copy");
    }
    if text.len() > MAX_CLIPBOARD_SIZE {
        bail!(
            "Conversation too large for clipboard ({} bytes, max {})",
            text.len(),
            MAX_CLIPBOARD_SIZE
        );
    }
    Ok(text)
}

/// Validate and format first, then open the sink and write to it. The sink is
/// only opened for a conversation that can actually be copied.
fn copy_with<S, F>(conversation: &Conversation, open: F) -> Result<S>
where
    S: ClipboardSink,
    F: FnOnce() -> Result<S>,
{
    let text = transcript_for_clipboard(conversation)?;
    let mut sink = open()?;
    sink.set_text(text)?;
    Ok(sink)
}

/// Copy a conversation, formatted as in `transcript-viewer show`, to the
/// system clipboard.
///
/// # Errors
///
/// Fails for empty or oversized conversations (checked before the clipboard is
/// touched) and when no system clipboard is available, e.g. over SSH without a
/// display server.
pub fn copy_conversation(conversation: &Conversation) -> Result<()> {
    copy_with(conversation, || {
        let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        Ok(SystemClipboard(clipboard))
    })?;
    Ok(())
}
