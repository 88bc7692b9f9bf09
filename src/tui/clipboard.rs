// Clipboard access
//
// Thin wrapper over arboard so callers deal in one Result.

use anyhow::{Context, Result};

pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("Clipboard unavailable")?;
    clipboard
        .set_text(text.to_string())
        .context("Failed to write clipboard")?;
    Ok(())
}
