// src/gui/actions/copy.rs
use std::time::Instant;

use crate::{
    board::Notice,
    clipboard::{self, Clipboard, ClipboardError, CopyResult},
    config::consts::MSG_COPY_FAILED,
    gui::app::App,
};

/// System clipboard opened at startup; `None` when the platform refused.
struct SystemClipboard<'a>(Option<&'a mut arboard::Clipboard>);

impl Clipboard for SystemClipboard<'_> {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        match self.0.as_mut() {
            Some(cb) => cb.set_text(text).map_err(|e| ClipboardError(e.to_string())),
            None => Err(ClipboardError(s!("no system clipboard"))),
        }
    }
}

pub fn copy(app: &mut App, card_ix: usize) {
    let Some(card) = app.rendered.cards().get(card_ix) else {
        logd!("Copy: Clicked, but card {} is gone", card_ix);
        return;
    };
    let deal_id = card.deal_id.clone();
    let code = card.copy.code().map(String::from);

    let mut cb = SystemClipboard(app.clipboard.as_mut());
    match clipboard::copy_code(&deal_id, code.as_deref(), &mut cb, &mut app.feedback, Instant::now()) {
        CopyResult::Copied => app.status("Code copied to clipboard"),
        CopyResult::Failed { code } => {
            app.notice = Some(Notice::error(join!(MSG_COPY_FAILED, &code)));
        }
        CopyResult::Unavailable => logd!("Copy: {} has no code", deal_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::CopyFeedback;
    use std::time::Duration;

    #[test]
    fn missing_system_clipboard_takes_fallback() {
        let mut fb = CopyFeedback::new(Duration::from_millis(1800));
        let now = Instant::now();
        let r = clipboard::copy_code("d1", Some("SAVE10"), &mut SystemClipboard(None), &mut fb, now);
        assert_eq!(r, CopyResult::Failed { code: s!("SAVE10") });
        assert!(!fb.is_acknowledged("d1", now));
    }
}
