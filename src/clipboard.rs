// src/clipboard.rs
//
// The clipboard is the one user-facing operation that can fail, so it sits
// behind a small trait. The GUI hands text to egui; the CLI has no
// clipboard and always takes the fallback path (show the code).

use std::time::{Duration, Instant};
use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Always refuses; callers fall back to showing the code.
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError(s!("no clipboard in this frontend")))
    }
}

/// Result of pressing a copy-code button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CopyResult {
    Copied,
    /// Clipboard refused; the caller must show the code to the user.
    Failed { code: String },
    /// Button is disabled (no code).
    Unavailable,
}

/// Per-card "Copied!" acknowledgments with their revert deadlines.
#[derive(Clone, Debug)]
pub struct CopyFeedback {
    hold: Duration,
    until: HashMap<String, Instant>,
}

impl CopyFeedback {
    pub fn new(hold: Duration) -> Self {
        Self { hold, until: HashMap::new() }
    }

    pub fn acknowledge(&mut self, deal_id: &str, now: Instant) {
        self.until.insert(s!(deal_id), now + self.hold);
    }

    pub fn is_acknowledged(&self, deal_id: &str, now: Instant) -> bool {
        self.until.get(deal_id).is_some_and(|&t| now < t)
    }

    /// Drop expired entries; returns the time until the next one expires.
    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        self.until.retain(|_, t| now < *t);
        self.until.values().map(|t| t.duration_since(now)).min()
    }

    pub fn forget_all(&mut self) {
        self.until.clear();
    }
}

/// Copy `code` for card `deal_id`, acknowledging on success.
pub fn copy_code(
    deal_id: &str,
    code: Option<&str>,
    clipboard: &mut dyn Clipboard,
    feedback: &mut CopyFeedback,
    now: Instant,
) -> CopyResult {
    let Some(code) = code else {
        return CopyResult::Unavailable;
    };
    match clipboard.write_text(code) {
        Ok(()) => {
            feedback.acknowledge(deal_id, now);
            logd!("Copy: {} copied", deal_id);
            CopyResult::Copied
        }
        Err(e) => {
            logw!("Copy: {} failed: {}", deal_id, e);
            CopyResult::Failed { code: s!(code) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recording(Vec<String>);
    impl Clipboard for Recording {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.0.push(s!(text));
            Ok(())
        }
    }

    #[test]
    fn copy_then_revert_after_hold() {
        let mut cb = Recording::default();
        let mut fb = CopyFeedback::new(Duration::from_millis(1800));
        let t0 = Instant::now();

        let r = copy_code("d1", Some("SAVE10"), &mut cb, &mut fb, t0);
        assert_eq!(r, CopyResult::Copied);
        assert_eq!(cb.0, vec!["SAVE10"]);
        assert!(fb.is_acknowledged("d1", t0 + Duration::from_millis(1799)));
        assert!(!fb.is_acknowledged("d1", t0 + Duration::from_millis(1800)));
        assert_eq!(fb.tick(t0 + Duration::from_millis(800)), Some(Duration::from_millis(1000)));
        assert_eq!(fb.tick(t0 + Duration::from_secs(2)), None);
    }

    #[test]
    fn failure_returns_code() {
        let mut fb = CopyFeedback::new(Duration::from_millis(10));
        let now = Instant::now();
        let r = copy_code("d2", Some("FLAT50"), &mut NoClipboard, &mut fb, now);
        assert_eq!(r, CopyResult::Failed { code: s!("FLAT50") });
        assert!(!fb.is_acknowledged("d2", now));
    }

    #[test]
    fn no_code_is_unavailable() {
        let mut cb = Recording::default();
        let mut fb = CopyFeedback::new(Duration::from_millis(10));
        assert_eq!(copy_code("d3", None, &mut cb, &mut fb, Instant::now()), CopyResult::Unavailable);
        assert!(cb.0.is_empty());
    }
}
