use arboard::Clipboard;

pub struct SystemClipboard;

impl SystemClipboard {
    /// Writes the given text to the system clipboard.
    ///
    /// Best-effort: the caller may show the error, but the generation
    /// workflow never depends on the outcome.
    pub fn copy_text(text: &str) -> Result<(), String> {
        match Clipboard::new() {
            Ok(mut clipboard) => clipboard.set_text(text.to_string()).map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        }
    }
}
