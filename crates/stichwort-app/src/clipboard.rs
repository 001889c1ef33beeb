use arboard::Clipboard;
use stichwort_core::word::WordInfo;

/// Copy the root transcription and audio link after a successful
/// lookup. A missing clipboard is logged, never fatal.
pub fn copy_pronunciation(info: &WordInfo) {
    let payload = format!("{} {}", info.root_ipa, info.root_pronunciation_url);
    match Clipboard::new().and_then(|mut clipboard| clipboard.set_text(payload)) {
        Ok(()) => {}
        Err(err) => tracing::warn!("clipboard unavailable: {err}"),
    }
}
