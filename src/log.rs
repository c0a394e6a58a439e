// src/log.rs
//
// Append-only file logger. Lines look like `[00:00:01.250][WARN] message`,
// where the timestamp is the time elapsed since the first log call.
// Threshold comes from DEAL_BOARD_LOG (debug|info|warn|error), default info.
// Lines logged before `init` are held in memory and written out by `init`.
// Logging never fails the caller: I/O errors are dropped.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use crate::config::consts::{LOG_ENV, LOG_FILE};

/// Lines kept while the log file is still unknown; oldest dropped first.
const EARLY_CAP: usize = 512;

static LOG_LOCK: Mutex<()> = Mutex::new(());
static START: OnceLock<Instant> = OnceLock::new();
static LOG_PATH: Mutex<Option<PathBuf>> = Mutex::new(None);
static EARLY: Mutex<Vec<String>> = Mutex::new(Vec::new());
static THRESHOLD: OnceLock<Level> = OnceLock::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    pub fn parse(s: &str) -> Option<Level> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Level::Debug),
            "info" => Some(Level::Info),
            "warn" | "warning" => Some(Level::Warn),
            "error" => Some(Level::Error),
            _ => None,
        }
    }
}

/// Point the logger at `<dir>/debug.log` and flush anything logged so far.
pub fn init(dir: &Path) {
    let _ = fs::create_dir_all(dir);
    let path = dir.join(LOG_FILE);

    if let Ok(_guard) = LOG_LOCK.lock() {
        if let Ok(mut p) = LOG_PATH.lock() {
            *p = Some(path.clone());
        }
        let early = EARLY.lock().map(|mut b| std::mem::take(&mut *b)).unwrap_or_default();
        if !early.is_empty() {
            append(&path, &early.concat());
        }
    }
    start();
}

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn log_path() -> Option<PathBuf> {
    LOG_PATH.lock().ok().and_then(|p| p.clone())
}

fn hold_early(buf: &mut Vec<String>, line: String) {
    if buf.len() >= EARLY_CAP {
        buf.remove(0);
    }
    buf.push(line);
}

fn append(path: &Path, text: &str) {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            let _ = fs::create_dir_all(parent);
        }
    }
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let _ = file.write_all(text.as_bytes());
    }
}

fn threshold() -> Level {
    *THRESHOLD.get_or_init(|| {
        std::env::var(LOG_ENV)
            .ok()
            .and_then(|v| Level::parse(&v))
            .unwrap_or(Level::Info)
    })
}

pub fn enabled(level: Level) -> bool {
    level >= threshold()
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

pub fn format_line(elapsed_ms: u128, level: Level, msg: &str) -> String {
    format!("[{}][{}] {msg}\n", fmt_elapsed(elapsed_ms), level.as_str())
}

/// Internal logging function; use the macros.
pub fn write_log(level: Level, msg: &str) {
    if !enabled(level) {
        return;
    }
    let line = format_line(start().elapsed().as_millis(), level, msg);

    if let Ok(_guard) = LOG_LOCK.lock() {
        match log_path() {
            Some(path) => append(&path, &line),
            None => {
                if let Ok(mut buf) = EARLY.lock() {
                    hold_early(&mut buf, line);
                }
            }
        }
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Info, &format!($($arg)*))
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Debug, &format!($($arg)*))
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Warn, &format!($($arg)*))
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Error, &format!($($arg)*))
    };
}
