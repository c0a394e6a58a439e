// src/board/form.rs
//
// Quick-add form → Deal. Blank means empty after trimming.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::config::consts::*;
use crate::core::deal::{is_none_code, Deal, Origin};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuickAddForm {
    pub title: String,
    pub store: String,
    pub category: String,
    pub code: String,
    pub url: String,
    pub image: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("A title is required")]
    MissingTitle,
    #[error("A deal URL is required")]
    MissingUrl,
}

fn or_default(v: &str, default: &str) -> String {
    let t = v.trim();
    if t.is_empty() { s!(default) } else { s!(t) }
}

/// `local-<millis>`, bumped until no deal in `taken` uses it.
pub fn fresh_local_id(now: DateTime<Utc>, taken: &[Deal]) -> String {
    let mut ms = now.timestamp_millis();
    loop {
        let id = format!("{LOCAL_ID_PREFIX}{ms}");
        if !taken.iter().any(|d| d.id == id) {
            return id;
        }
        ms += 1;
    }
}

impl QuickAddForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Build a local deal stamped with `now`.
    ///
    /// `taken` is checked so two submissions in the same millisecond still get
    /// distinct ids.
    pub fn build(&self, now: DateTime<Utc>, taken: &[Deal]) -> Result<Deal, FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::MissingTitle);
        }
        let url = self.url.trim();
        if url.is_empty() {
            return Err(FormError::MissingUrl);
        }

        let code = self.code.trim();
        let image = self.image.trim();

        Ok(Deal {
            id: fresh_local_id(now, taken),
            title: s!(title),
            store: or_default(&self.store, DEFAULT_STORE),
            category: or_default(&self.category, DEFAULT_CATEGORY),
            code: if is_none_code(code) { None } else { Some(s!(code)) },
            url: s!(url),
            image: if image.is_empty() { None } else { Some(s!(image)) },
            meta: s!(LOCAL_META),
            date: now.format("%Y-%m-%d").to_string(),
            origin: Origin::Local,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap()
    }

    #[test]
    fn title_and_url_only_gets_defaults() {
        let form = QuickAddForm {
            title: s!("Noise cancelling earbuds"),
            url: s!("https://amazon.in/dp/B0X"),
            ..Default::default()
        };
        let d = form.build(at(), &[]).unwrap();
        assert_eq!(d.id, format!("local-{}", at().timestamp_millis()));
        assert_eq!(d.store, "Other");
        assert_eq!(d.category, "others");
        assert_eq!(d.code, None);
        assert_eq!(serde_json::to_value(&d).unwrap()["code"], "NONE");
        assert_eq!(d.meta, "Added locally");
        assert_eq!(d.date, "2026-10-18");
        assert_eq!(d.image, None);
        assert!(d.is_local());
    }

    #[test]
    fn fields_are_trimmed() {
        let form = QuickAddForm {
            title: s!("  Kettle "),
            store: s!(" Croma "),
            category: s!(" home "),
            code: s!(" BREW20 "),
            url: s!(" https://croma.example/k "),
            image: s!("  "),
        };
        let d = form.build(at(), &[]).unwrap();
        assert_eq!(d.title, "Kettle");
        assert_eq!(d.store, "Croma");
        assert_eq!(d.category, "home");
        assert_eq!(d.coupon(), Some("BREW20"));
        assert_eq!(d.url, "https://croma.example/k");
        assert_eq!(d.image, None);
    }

    #[test]
    fn required_fields() {
        let mut form = QuickAddForm { url: s!("https://x"), ..Default::default() };
        assert_eq!(form.build(at(), &[]), Err(FormError::MissingTitle));
        form.title = s!("T");
        form.url = s!("   ");
        assert_eq!(form.build(at(), &[]), Err(FormError::MissingUrl));
    }

    #[test]
    fn ids_never_collide() {
        let form = QuickAddForm { title: s!("A"), url: s!("https://x"), ..Default::default() };
        let first = form.build(at(), &[]).unwrap();
        let second = form.build(at(), std::slice::from_ref(&first)).unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(second.id, format!("local-{}", at().timestamp_millis() + 1));
    }

    #[test]
    fn reset_clears_everything() {
        let mut form = QuickAddForm { title: s!("A"), code: s!("B"), ..Default::default() };
        form.reset();
        assert_eq!(form, QuickAddForm::default());
    }
}
