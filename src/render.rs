// src/render.rs
//
// Deals → card view models. Front ends paint these; nothing here knows about
// egui or terminals. An empty input always becomes a single placeholder
// message, never an empty card list.

use std::{path::PathBuf, time::Instant};

use url::Url;

use crate::clipboard::CopyFeedback;
use crate::config::{consts::*, options::DealSource};
use crate::core::{affiliate::{self, AffiliateRule}, deal::Deal, net};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CopyAction {
    Enabled { code: String },
    Disabled,
}

impl CopyAction {
    pub fn for_deal(deal: &Deal) -> Self {
        match deal.coupon() {
            Some(code) => CopyAction::Enabled { code: s!(code) },
            None => CopyAction::Disabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, CopyAction::Enabled { .. })
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            CopyAction::Enabled { code } => Some(code),
            CopyAction::Disabled => None,
        }
    }

    /// Resting label, before any click.
    pub fn label(&self) -> &'static str {
        match self {
            CopyAction::Enabled { .. } => COPY_LABEL,
            CopyAction::Disabled => NO_CODE_LABEL,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub deal_id: String,
    pub title: String,
    pub image_uri: String,
    pub image_alt: String,
    /// `"store • meta"`
    pub label: String,
    /// Affiliate-tagged destination
    pub open_href: String,
    pub copy: CopyAction,
}

impl CardView {
    /// Copy button text right now ("Copied!" while acknowledged).
    pub fn copy_label(&self, feedback: &CopyFeedback, now: Instant) -> &'static str {
        if self.copy.is_enabled() && feedback.is_acknowledged(&self.deal_id, now) {
            COPIED_LABEL
        } else {
            self.copy.label()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rendered {
    Placeholder(String),
    Cards(Vec<CardView>),
}

impl Rendered {
    pub fn cards(&self) -> &[CardView] {
        match self {
            Rendered::Cards(c) => c,
            Rendered::Placeholder(_) => &[],
        }
    }
}

/// Where relative image references in deal records point to: next to the
/// feed file, whether that is served over HTTP or read from disk.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ImageBase {
    #[default]
    Unresolved,
    Url(Url),
    Dir(PathBuf),
}

impl ImageBase {
    pub fn for_source(source: &DealSource) -> Self {
        match source {
            DealSource::Http(base) => match net::feed_location(base) {
                Ok(feed) => ImageBase::Url(feed),
                Err(e) => {
                    logw!("Render: No image base for {}: {}", base, e);
                    ImageBase::Unresolved
                }
            },
            DealSource::File(path) => match net::feed_path(path).parent() {
                Some(dir) => ImageBase::Dir(dir.to_path_buf()),
                None => ImageBase::Unresolved,
            },
        }
    }

    /// Absolute references (any scheme, or an absolute path) pass through.
    pub fn resolve(&self, raw: &str) -> String {
        if raw.contains("://") || raw.starts_with("data:") || raw.starts_with('/') {
            return s!(raw);
        }
        match self {
            ImageBase::Url(feed) => feed.join(raw).map(|u| u.to_string()).unwrap_or_else(|_| s!(raw)),
            ImageBase::Dir(dir) => dir.join(raw).display().to_string(),
            ImageBase::Unresolved => s!(raw),
        }
    }
}

pub struct Renderer<'a> {
    pub affiliate: &'a [AffiliateRule],
    pub placeholder_image: &'a str,
    pub image_base: ImageBase,
}

impl<'a> Renderer<'a> {
    pub fn new(affiliate: &'a [AffiliateRule], placeholder_image: &'a str) -> Self {
        Self { affiliate, placeholder_image, image_base: ImageBase::Unresolved }
    }

    pub fn with_image_base(mut self, image_base: ImageBase) -> Self {
        self.image_base = image_base;
        self
    }

    pub fn card(&self, deal: &Deal) -> CardView {
        CardView {
            deal_id: deal.id.clone(),
            title: deal.title.clone(),
            image_uri: match &deal.image {
                Some(raw) => self.image_base.resolve(raw),
                None => s!(self.placeholder_image),
            },
            image_alt: if deal.title.is_empty() { s!(IMAGE_ALT_FALLBACK) } else { deal.title.clone() },
            label: deal.label(),
            open_href: affiliate::attach_affiliate(&deal.url, self.affiliate),
            copy: CopyAction::for_deal(deal),
        }
    }

    /// Full replacement of the previous output.
    pub fn render<'d>(&self, deals: impl IntoIterator<Item = &'d Deal>, empty_msg: &str) -> Rendered {
        let cards: Vec<CardView> = deals.into_iter().map(|d| self.card(d)).collect();
        if cards.is_empty() {
            Rendered::Placeholder(s!(empty_msg))
        } else {
            Rendered::Cards(cards)
        }
    }
}
