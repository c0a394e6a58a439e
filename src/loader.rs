// src/loader.rs
//
// Startup load of the remote feed. Failures never reach the user: they are
// logged and the board carries on with an empty remote list.

use std::time::Duration;

use chrono::Utc;

use crate::{
    config::options::{AppOptions, DealSource},
    core::{deal::{self, Deal, Origin}, net},
    error::Result,
    progress::Progress,
};

/// Fetch and coerce the remote feed. Errors propagate.
pub fn try_fetch_deals(source: &DealSource, timeout: Duration, now_ms: i64) -> Result<Vec<Deal>> {
    let text = net::fetch_text(source, timeout, now_ms)?;
    deal::parse_records(&text, Origin::Remote)
}

/// Fetch the remote feed, degrading to an empty list on any failure.
pub fn fetch_deals(opts: &AppOptions, progress: Option<&mut dyn Progress>) -> Vec<Deal> {
    let mut null = crate::progress::NullProgress;
    let prog: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    let src = opts.source.describe();
    prog.begin(&src);
    logf!("Load: Begin source={}", src);

    let timeout = Duration::from_secs(opts.http_timeout_secs);
    let deals = match try_fetch_deals(&opts.source, timeout, Utc::now().timestamp_millis()) {
        Ok(deals) => {
            logf!("Load: OK {} deal(s) from {}", deals.len(), src);
            deals
        }
        Err(e) => {
            logw!("Load: Could not fetch {}: {}", src, e);
            prog.log("Could not load deals feed");
            Vec::new()
        }
    };

    prog.finish(deals.len());
    deals
}
