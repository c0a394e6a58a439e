// src/config/options.rs
//
// Runtime options: where deals come from, where local deals live, and the
// affiliate placeholders. Loaded from a `key = value` file; every key is
// optional and unknown keys are ignored.

use std::{fs, path::{Path, PathBuf}};

use url::Url;

use super::consts::*;
use crate::core::affiliate::AffiliateRule;

/// Where the remote deal list is read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DealSource {
    /// Base URL (the feed file is resolved against it) or a direct `.json` URL.
    Http(Url),
    /// Local file, or a directory holding `deals.json`.
    File(PathBuf),
}

impl DealSource {
    /// `http://` / `https://` → Http, anything else → File.
    pub fn parse(text: &str) -> Result<Self, url::ParseError> {
        let t = text.trim();
        let lower = t.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(DealSource::Http(Url::parse(t)?))
        } else {
            Ok(DealSource::File(PathBuf::from(t)))
        }
    }

    pub fn describe(&self) -> String {
        match self {
            DealSource::Http(u) => u.to_string(),
            DealSource::File(p) => p.display().to_string(),
        }
    }
}

impl Default for DealSource {
    fn default() -> Self {
        DealSource::File(PathBuf::from(DEALS_JSON))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub source: DealSource,
    pub store_dir: PathBuf,
    pub placeholder_image: String,
    pub affiliate: Vec<AffiliateRule>,
    pub copy_ack_ms: u64,
    pub http_timeout_secs: u64,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            source: DealSource::default(),
            store_dir: PathBuf::from(STORE_DIR),
            placeholder_image: s!(PLACEHOLDER_IMAGE),
            affiliate: AffiliateRule::defaults(),
            copy_ack_ms: COPY_ACK_MS,
            http_timeout_secs: HTTP_TIMEOUT_SECS,
        }
    }
}

impl AppOptions {
    /// Read options from `path`. A missing or unreadable file yields defaults.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            logd!("Config: {} not found, using defaults", path.display());
            return Self::default();
        }
        match fs::read_to_string(path) {
            Ok(text) => {
                let opts = Self::parse(&text);
                logf!("Config: Loaded {}", path.display());
                opts
            }
            Err(e) => {
                loge!("Config: Could not read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn parse(text: &str) -> Self {
        let mut opts = Self::default();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') { continue; }
            let Some(eq) = line.find('=') else {
                logw!("Config: Ignoring line without '=': {}", line);
                continue;
            };
            let key = line[..eq].trim();
            let val = line[eq + 1..].trim();
            opts.apply(key, val);
        }
        opts
    }

    fn apply(&mut self, key: &str, val: &str) {
        match key {
            "source" => match DealSource::parse(val) {
                Ok(src) => self.source = src,
                Err(e) => logw!("Config: Bad source {:?}: {}", val, e),
            },
            "store_dir" => self.store_dir = PathBuf::from(val),
            "placeholder_image" => self.placeholder_image = s!(val),
            "amazon_tag" => self.set_affiliate_value(AMAZON_HOST, val),
            "flipkart_tag" => self.set_affiliate_value(FLIPKART_HOST, val),
            "copy_ack_ms" => match val.parse() {
                Ok(ms) => self.copy_ack_ms = ms,
                Err(_) => logw!("Config: copy_ack_ms is not a number: {}", val),
            },
            "http_timeout_secs" => match val.parse() {
                Ok(secs) => self.http_timeout_secs = secs,
                Err(_) => logw!("Config: http_timeout_secs is not a number: {}", val),
            },
            other => logd!("Config: Unknown key {}", other),
        }
    }

    fn set_affiliate_value(&mut self, host: &str, value: &str) {
        if let Some(rule) = self.affiliate.iter_mut().find(|r| r.host_contains == host) {
            rule.value = s!(value);
        }
    }

    pub fn store_file(&self) -> PathBuf {
        self.store_dir.join(join!(LOCAL_DEALS_KEY, ".json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_overrides_and_ignores_unknown() {
        let text = "\
# deal board
source = https://example.org/site/
store_dir = /tmp/deals
amazon_tag = mytag-21
copy_ack_ms = 500
colour = green
not a pair
";
        let o = AppOptions::parse(text);
        assert_eq!(o.source, DealSource::Http(Url::parse("https://example.org/site/").unwrap()));
        assert_eq!(o.store_dir, PathBuf::from("/tmp/deals"));
        assert_eq!(o.copy_ack_ms, 500);
        let amazon = o.affiliate.iter().find(|r| r.host_contains == "amazon").unwrap();
        assert_eq!(amazon.value, "mytag-21");
        let flip = o.affiliate.iter().find(|r| r.host_contains == "flipkart").unwrap();
        assert_eq!(flip.value, FLIPKART_PLACEHOLDER);
        assert_eq!(o.http_timeout_secs, HTTP_TIMEOUT_SECS);
    }

    #[test]
    fn bad_numbers_keep_defaults() {
        let o = AppOptions::parse("copy_ack_ms = soon\nhttp_timeout_secs=-3");
        assert_eq!(o.copy_ack_ms, COPY_ACK_MS);
        assert_eq!(o.http_timeout_secs, HTTP_TIMEOUT_SECS);
    }

    #[test]
    fn source_kinds() {
        assert!(matches!(DealSource::parse("HTTPS://x.org/deals.json"), Ok(DealSource::Http(_))));
        assert_eq!(
            DealSource::parse(" data/deals.json ").unwrap(),
            DealSource::File(PathBuf::from("data/deals.json"))
        );
    }

    #[test]
    fn store_file_uses_namespace() {
        let mut o = AppOptions::default();
        o.store_dir = PathBuf::from("s");
        assert_eq!(o.store_file(), PathBuf::from("s").join("localDeals_v1.json"));
    }
}
