// src/board/mod.rs
//
// The board controller: owns the remote snapshot, the local deals and the
// active filter, and reacts to one event at a time.
//
// Each handler takes the current board by value and returns the next board
// plus an `Outcome` telling the frontend whether to re-render and what to
// show the user. The working list is always rebuilt from scratch as
// local (most recent first) followed by remote; it is never patched.

pub mod form;

use chrono::{DateTime, Utc};

use crate::{
    config::consts::{MSG_ADDED_LOCALLY, MSG_NO_DEALS, MSG_NOTHING_LOADED},
    core::{
        deal::{Deal, Origin},
        filter::{CategoryFilter, DealView, Query},
    },
    render::{Rendered, Renderer},
    store::LocalStore,
};

use form::QuickAddForm;

#[derive(Clone, Debug)]
pub enum Event {
    /// Remote feed arrived (possibly empty after a failed fetch).
    Loaded(Vec<Deal>),
    SelectCategory(CategoryFilter),
    Search(String),
    Add(QuickAddForm),
    /// "Clear local deals"; `confirmed` is the answer to the prompt.
    ClearLocal { confirmed: bool },
}

/// What the frontend should redraw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Render {
    /// Nothing visible changed.
    Keep,
    /// First paint after loading.
    Initial,
    /// Re-run filters and repaint.
    Deals,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A message the user must acknowledge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, text: text.into() }
    }
    pub fn error(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, text: text.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub render: Render,
    pub notice: Option<Notice>,
    /// Clear the quick-add form fields.
    pub reset_form: bool,
}

impl Outcome {
    fn keep() -> Self {
        Self { render: Render::Keep, notice: None, reset_form: false }
    }
    fn render(render: Render) -> Self {
        Self { render, notice: None, reset_form: false }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Board {
    remote: Vec<Deal>,
    local: Vec<Deal>,
    working: Vec<Deal>,
    category: CategoryFilter,
    query: Query,
    loaded: bool,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch one event to its handler.
    pub fn handle(
        self,
        event: Event,
        store: &mut dyn LocalStore,
        now: DateTime<Utc>,
    ) -> (Board, Outcome) {
        match event {
            Event::Loaded(remote) => self.on_loaded(remote, store),
            Event::SelectCategory(c) => self.on_select_category(c),
            Event::Search(q) => self.on_search(&q),
            Event::Add(form) => self.on_add(&form, store, now),
            Event::ClearLocal { confirmed } => self.on_clear_local(confirmed, store),
        }
    }

    pub fn on_loaded(mut self, remote: Vec<Deal>, store: &mut dyn LocalStore) -> (Board, Outcome) {
        self.remote = remote.into_iter().map(|d| d.with_origin(Origin::Remote)).collect();
        self.local = store.load();
        self.loaded = true;

        let clashes = self.remote.iter().filter(|r| self.local.iter().any(|l| l.id == r.id)).count();
        if clashes > 0 {
            logw!("Board: {} remote id(s) also used by local deals", clashes);
        }

        self.rebuild();
        logf!(
            "Board: Loaded remote={} local={} working={}",
            self.remote.len(),
            self.local.len(),
            self.working.len()
        );
        (self, Outcome::render(Render::Initial))
    }

    pub fn on_select_category(mut self, category: CategoryFilter) -> (Board, Outcome) {
        if category == self.category {
            return (self, Outcome::keep());
        }
        logd!("Board: Category → {}", category.key());
        self.category = category;
        (self, Outcome::render(Render::Deals))
    }

    pub fn on_search(mut self, raw: &str) -> (Board, Outcome) {
        let query = Query::new(raw);
        if query == self.query {
            return (self, Outcome::keep());
        }
        self.query = query;
        (self, Outcome::render(Render::Deals))
    }

    pub fn on_add(
        mut self,
        form: &QuickAddForm,
        store: &mut dyn LocalStore,
        now: DateTime<Utc>,
    ) -> (Board, Outcome) {
        let deal = match form.build(now, &self.working) {
            Ok(d) => d,
            Err(e) => {
                logd!("Board: Add rejected: {}", e);
                return (self, Outcome { notice: Some(Notice::error(e.to_string())), ..Outcome::keep() });
            }
        };
        let id = deal.id.clone();

        // In-memory list is authoritative; unsaved deals stay until restart.
        let notice = match store.prepend(deal.clone()) {
            Ok(_) => Notice::info(MSG_ADDED_LOCALLY),
            Err(e) => {
                loge!("Board: Could not persist {}: {}", id, e);
                Notice::error(format!("Added for this session only; saving failed: {e}"))
            }
        };
        self.local.insert(0, deal);
        self.rebuild();
        logf!("Board: Added {} (local={})", id, self.local.len());

        (self, Outcome { render: Render::Deals, notice: Some(notice), reset_form: true })
    }

    pub fn on_clear_local(mut self, confirmed: bool, store: &mut dyn LocalStore) -> (Board, Outcome) {
        if !confirmed {
            return (self, Outcome::keep());
        }
        let notice = match store.clear() {
            Ok(()) => None,
            Err(e) => {
                loge!("Board: Could not clear local store: {}", e);
                Some(Notice::error(format!("Could not clear saved deals: {e}")))
            }
        };
        let dropped = self.local.len();
        self.local.clear();
        self.rebuild();
        logf!("Board: Cleared {} local deal(s)", dropped);

        (self, Outcome { render: Render::Deals, notice, reset_form: false })
    }

    fn rebuild(&mut self) {
        self.working = self.local.iter().chain(self.remote.iter()).cloned().collect();
    }

    /* ---------- read side ---------- */

    pub fn working(&self) -> &[Deal] { &self.working }
    pub fn remote(&self) -> &[Deal] { &self.remote }
    pub fn local(&self) -> &[Deal] { &self.local }
    pub fn category(&self) -> &CategoryFilter { &self.category }
    pub fn query(&self) -> &Query { &self.query }
    pub fn is_loaded(&self) -> bool { self.loaded }

    /// Working list after category + search.
    pub fn view(&self) -> DealView<'_> {
        DealView::new(&self.working, &self.category, &self.query)
    }

    /// Card list for `render`; `Keep` is treated like `Deals`.
    pub fn render(&self, renderer: &Renderer, render: Render) -> Rendered {
        let empty_msg = match render {
            Render::Initial if self.working.is_empty() => MSG_NOTHING_LOADED,
            _ => MSG_NO_DEALS,
        };
        renderer.render(self.view().iter(), empty_msg)
    }
}
