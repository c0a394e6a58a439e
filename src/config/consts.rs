// src/config/consts.rs

// Remote feed
pub const DEALS_JSON: &str = "deals.json";
pub const CACHE_BUST_PARAM: &str = "t";
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = concat!("deal_board/", env!("CARGO_PKG_VERSION"));

// Local store
pub const STORE_DIR: &str = ".store";
pub const LOCAL_DEALS_KEY: &str = "localDeals_v1";
pub const LOCAL_ID_PREFIX: &str = "local-";
pub const REMOTE_ID_PREFIX: &str = "deal-";

// Logging
pub const LOG_FILE: &str = "debug.log";
pub const LOG_ENV: &str = "DEAL_BOARD_LOG";

// Config file
pub const CONFIG_FILE: &str = "deal_board.cfg";

// Deal fields
pub const NONE_CODE: &str = "NONE";
pub const DEFAULT_STORE: &str = "Other";
pub const DEFAULT_CATEGORY: &str = "others";
pub const LOCAL_META: &str = "Added locally";
pub const PLACEHOLDER_IMAGE: &str = "placeholder.png";
pub const IMAGE_ALT_FALLBACK: &str = "deal image";

// Category filter buttons, in display order after "all"
pub const ALL_CATEGORIES: &str = "all";
pub const KNOWN_CATEGORIES: &[&str] = &["electronics", "fashion", "home", "beauty", "others"];

// Affiliate placeholders
pub const AMAZON_HOST: &str = "amazon";
pub const AMAZON_PARAM: &str = "tag";
pub const AMAZON_PLACEHOLDER: &str = "YOUR_AFFIL_TAG";
pub const FLIPKART_HOST: &str = "flipkart";
pub const FLIPKART_PARAM: &str = "affid";
pub const FLIPKART_PLACEHOLDER: &str = "YOUR_FLIP_TAG";

// Copy-code button
pub const COPY_ACK_MS: u64 = 1800;
pub const COPY_LABEL: &str = "Copy Code";
pub const COPIED_LABEL: &str = "Copied!";
pub const NO_CODE_LABEL: &str = "No Code";
pub const OPEN_DEAL_LABEL: &str = "Open deal";

// User-facing messages
pub const MSG_NO_DEALS: &str = "No deals yet. Edit deals.json to add deals.";
pub const MSG_NOTHING_LOADED: &str =
    "No deals found — edit deals.json in your repository to publish deals.";
pub const MSG_ADDED_LOCALLY: &str =
    "Added locally. To publish, add this deal into your repo file deals.json.";
pub const MSG_CONFIRM_CLEAR: &str = "Clear local saved deals?";
pub const MSG_COPY_FAILED: &str =
    "Copy failed — your system may block clipboard access. Code: ";
