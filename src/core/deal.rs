// src/core/deal.rs
//
// The Deal record and its boundary coercion.
//
// Deals arrive from two places: the remote feed (loose JSON written by hand)
// and the local store (JSON we wrote ourselves). Both go through
// `parse_records`, which turns each element into a strict `Deal`, fills the
// documented defaults, and skips (with a warning) anything without a title
// or URL. `Origin` is stamped here and never serialized.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::consts::{DEFAULT_CATEGORY, LOCAL_ID_PREFIX, NONE_CODE, REMOTE_ID_PREFIX};
use crate::error::{Error, Result};

/// Which list a deal entered the board through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Origin {
    Local,
    #[default]
    Remote,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub store: String,
    #[serde(default = "default_category")]
    pub category: String,
    /// `None` is written as the `"NONE"` sentinel.
    #[serde(default, with = "code_sentinel")]
    pub code: Option<String>,
    pub url: String,
    /// `None` is written as an empty string.
    #[serde(default, with = "blank_as_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub meta: String,
    #[serde(default)]
    pub date: String,
    #[serde(skip)]
    pub origin: Origin,
}

fn default_category() -> String {
    s!(DEFAULT_CATEGORY)
}

/// True for codes that mean "no code": blank or `NONE` in any case.
pub fn is_none_code(code: &str) -> bool {
    let c = code.trim();
    c.is_empty() || c.eq_ignore_ascii_case(NONE_CODE)
}

impl Deal {
    pub fn is_local(&self) -> bool {
        self.origin == Origin::Local
    }

    /// The copyable code, if there is one.
    pub fn coupon(&self) -> Option<&str> {
        self.code.as_deref().filter(|c| !is_none_code(c))
    }

    /// `"store • meta"` card label.
    pub fn label(&self) -> String {
        format!("{} • {}", self.store, self.meta)
    }

    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }

    /// `needle` must already be lower-cased.
    pub fn mentions(&self, needle: &str) -> bool {
        lc!(self.title).contains(needle)
            || lc!(self.meta).contains(needle)
            || lc!(self.store).contains(needle)
    }

    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    /// Coerce one loosely-typed JSON element into a `Deal`.
    ///
    /// `position` is the element's index in its array; it names records
    /// that carry no `id`.
    pub fn from_value(v: &Value, position: usize, origin: Origin) -> Result<Deal> {
        let obj = v
            .as_object()
            .ok_or_else(|| Error::InvalidDeal(format!("record {position} is not an object")))?;

        let field = |name: &str| -> Option<String> {
            match obj.get(name)? {
                Value::String(s) => Some(s.trim().to_string()),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                _ => None,
            }
        };
        let required = |name: &str| -> Result<String> {
            field(name)
                .filter(|s| !s.is_empty())
                .ok_or_else(|| Error::InvalidDeal(format!("record {position} has no {name}")))
        };

        let title = required("title")?;
        let url = required("url")?;

        let id = field("id").filter(|s| !s.is_empty()).unwrap_or_else(|| match origin {
            Origin::Remote => format!("{REMOTE_ID_PREFIX}{position}"),
            Origin::Local => format!("{LOCAL_ID_PREFIX}{position}"),
        });

        Ok(Deal {
            id,
            title,
            store: field("store").unwrap_or_default(),
            category: field("category").filter(|s| !s.is_empty()).unwrap_or_else(default_category),
            code: field("code").filter(|c| !is_none_code(c)),
            url,
            image: field("image").filter(|s| !s.is_empty()),
            meta: field("meta").unwrap_or_default(),
            date: field("date").unwrap_or_default(),
            origin,
        })
    }
}

/// Parse a JSON array of deal records, skipping invalid elements.
///
/// Fails only when the text is not JSON or not an array.
pub fn parse_records(text: &str, origin: Origin) -> Result<Vec<Deal>> {
    let root: Value = serde_json::from_str(text)?;
    let Value::Array(items) = root else {
        return Err(Error::InvalidDeal(s!("expected a JSON array of deals")));
    };

    let mut deals = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        match Deal::from_value(item, i, origin) {
            Ok(d) => deals.push(d),
            Err(e) => logw!("Deals: Skipping {:?} {}", origin, e),
        }
    }
    Ok(deals)
}

mod code_sentinel {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::is_none_code;
    use crate::config::consts::NONE_CODE;

    pub fn serialize<S: Serializer>(code: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(code.as_deref().unwrap_or(NONE_CODE))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        Ok(raw.filter(|c| !is_none_code(c)))
    }
}

mod blank_as_none {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(v: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(v.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        Ok(raw.filter(|s| !s.trim().is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coerces_defaults() {
        let v = json!({ "title": " USB hub ", "url": "https://a.example/x" });
        let d = Deal::from_value(&v, 4, Origin::Remote).unwrap();
        assert_eq!(d.id, "deal-4");
        assert_eq!(d.title, "USB hub");
        assert_eq!(d.category, "others");
        assert_eq!(d.code, None);
        assert_eq!(d.image, None);
        assert_eq!(d.store, "");
        assert_eq!(d.origin, Origin::Remote);
    }

    #[test]
    fn none_sentinel_any_case() {
        for code in ["NONE", "none", "None", "  ", ""] {
            let v = json!({ "title": "t", "url": "u", "code": code });
            let d = Deal::from_value(&v, 0, Origin::Remote).unwrap();
            assert_eq!(d.coupon(), None, "code {code:?}");
        }
        let v = json!({ "title": "t", "url": "u", "code": "SAVE10" });
        assert_eq!(Deal::from_value(&v, 0, Origin::Remote).unwrap().coupon(), Some("SAVE10"));
    }

    #[test]
    fn missing_required_fields_rejected() {
        assert!(Deal::from_value(&json!({ "url": "u" }), 0, Origin::Remote).is_err());
        assert!(Deal::from_value(&json!({ "title": "t", "url": "  " }), 0, Origin::Remote).is_err());
        assert!(Deal::from_value(&json!("just a string"), 0, Origin::Remote).is_err());
    }

    #[test]
    fn parse_records_skips_bad_elements() {
        let text = r#"[
            {"title":"A","url":"https://a"},
            {"title":"no url"},
            42,
            {"id":"x9","title":"B","url":"https://b","price":199}
        ]"#;
        let deals = parse_records(text, Origin::Remote).unwrap();
        let ids: Vec<&str> = deals.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["deal-0", "x9"]);
    }

    #[test]
    fn parse_records_rejects_non_array() {
        assert!(parse_records(r#"{"title":"A"}"#, Origin::Remote).is_err());
        assert!(parse_records("not json", Origin::Remote).is_err());
    }

    #[test]
    fn serializes_sentinels() {
        let d = Deal::from_value(&json!({ "id": "local-1", "title": "t", "url": "u" }), 0, Origin::Local)
            .unwrap();
        let v = serde_json::to_value(&d).unwrap();
        assert_eq!(v["code"], "NONE");
        assert_eq!(v["image"], "");
        assert!(v.get("origin").is_none());
    }

    #[test]
    fn label_and_search() {
        let d = Deal::from_value(
            &json!({ "title": "Braided cable", "url": "u", "store": "Amazon", "meta": "USB-C 2m" }),
            0,
            Origin::Remote,
        )
        .unwrap();
        assert_eq!(d.label(), "Amazon • USB-C 2m");
        assert!(d.mentions("usb"));
        assert!(d.mentions("amazon"));
        assert!(!d.mentions("hdmi"));
    }
}
