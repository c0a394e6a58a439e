// src/core/net.rs
//
// Feed fetching. HTTP sources get a cache-busting `t=<unix millis>` query
// parameter so a reload is never answered from a stale cache; file sources
// are read straight from disk.

use std::{fs, path::PathBuf, time::Duration};

use url::Url;

use crate::config::consts::{CACHE_BUST_PARAM, DEALS_JSON, USER_AGENT};
use crate::config::options::DealSource;
use crate::error::{Error, Result};

/// The feed file `base` points at, without the cache buster.
pub fn feed_location(base: &Url) -> Result<Url> {
    if base.path().to_ascii_lowercase().ends_with(".json") {
        Ok(base.clone())
    } else if base.path().ends_with('/') {
        Ok(base.join(DEALS_JSON)?)
    } else {
        let mut dir = base.clone();
        dir.set_path(&join!(base.path(), "/"));
        Ok(dir.join(DEALS_JSON)?)
    }
}

/// Resolve the feed file against `base` and stamp the cache buster.
pub fn feed_url(base: &Url, now_ms: i64) -> Result<Url> {
    let mut url = feed_location(base)?;
    url.query_pairs_mut()
        .append_pair(CACHE_BUST_PARAM, &now_ms.to_string());
    Ok(url)
}

/// Local feed path; a directory means `<dir>/deals.json`.
pub fn feed_path(path: &PathBuf) -> PathBuf {
    if path.is_dir() { path.join(DEALS_JSON) } else { path.clone() }
}

pub fn http_get(url: &Url, timeout: Duration) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?;
    let resp = client.get(url.clone()).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(Error::Http(format!("{} {}", status, url)));
    }
    Ok(resp.text()?)
}

/// Raw feed text from `source`.
pub fn fetch_text(source: &DealSource, timeout: Duration, now_ms: i64) -> Result<String> {
    match source {
        DealSource::Http(base) => {
            let url = feed_url(base, now_ms)?;
            logd!("Net: GET {}", url);
            http_get(&url, timeout)
        }
        DealSource::File(path) => {
            let p = feed_path(path);
            logd!("Net: Read {}", p.display());
            Ok(fs::read_to_string(p)?)
        }
    }
}
