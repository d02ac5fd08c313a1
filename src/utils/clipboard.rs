// SPDX-License-Identifier: MIT

//! System clipboard access.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy text to the system clipboard.
///
/// Returns an error when the clipboard is unavailable, e.g. in a headless
/// session; callers surface it to the user instead of propagating.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access system clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to copy text to clipboard")?;
    Ok(())
}
