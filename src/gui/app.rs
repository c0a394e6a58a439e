// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

use chrono::Utc;
use eframe::egui;

use crate::{
    board::{Board, Event, Notice, Outcome, Render},
    clipboard::CopyFeedback,
    config::state::AppState,
    core::{deal::Deal, filter::category_keys},
    render::{ImageBase, Rendered, Renderer},
    store::{FileStore, LocalStore},
};

use super::{actions, components};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Deal Board",
        options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            let mut app = App::new(state);
            actions::load(&mut app, Some(cc.egui_ctx.clone()));
            Ok(Box::new(app))
        }),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub board: Board,
    pub store: Box<dyn LocalStore>,

    // last paint instruction, recomputed on every board event
    pub rendered: Rendered,
    pub categories: Vec<String>,

    // copy-code acknowledgments ("Copied!")
    pub feedback: CopyFeedback,
    pub clipboard: Option<arboard::Clipboard>,

    // blocking notice (add result, copy fallback, errors)
    pub notice: Option<Notice>,

    // status/progress (loader thread writes here)
    pub status: Arc<Mutex<String>>,
    pub pending: Arc<Mutex<Option<Vec<Deal>>>>,
    pub running: bool,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let store = FileStore::new(state.options.store_file());
        logf!("Init: store={}, source={}", store.path().display(), state.options.source.describe());
        Self::with_store(state, Box::new(store))
    }

    pub fn with_store(state: AppState, store: Box<dyn LocalStore>) -> Self {
        let feedback = CopyFeedback::new(Duration::from_millis(state.options.copy_ack_ms));
        let clipboard = match arboard::Clipboard::new() {
            Ok(cb) => Some(cb),
            Err(e) => {
                logw!("Init: No system clipboard: {}", e);
                None
            }
        };
        Self {
            state,
            board: Board::new(),
            store,
            rendered: Rendered::Cards(Vec::new()),
            categories: category_keys(&[]),
            feedback,
            clipboard,
            notice: None,
            status: Arc::new(Mutex::new(s!("Idle"))),
            pending: Arc::new(Mutex::new(None)),
            running: false,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    #[inline]
    pub fn blocked(&self) -> bool {
        self.notice.is_some() || self.state.gui.confirm_clear
    }

    /// Run one board event and apply its outcome.
    pub fn dispatch(&mut self, event: Event) {
        let board = std::mem::take(&mut self.board);
        let (next, outcome) = board.handle(event, self.store.as_mut(), Utc::now());
        self.board = next;
        self.apply(outcome);
    }

    fn apply(&mut self, outcome: Outcome) {
        if outcome.render != Render::Keep {
            self.rebuild_view(outcome.render);
        }
        if outcome.reset_form {
            self.state.gui.form.reset();
        }
        if let Some(n) = outcome.notice {
            self.notice = Some(n);
        }
    }

    /// Recompute cards from the board's working list and the active filter.
    pub fn rebuild_view(&mut self, render: Render) {
        let opts = &self.state.options;
        let renderer = Renderer::new(&opts.affiliate, &opts.placeholder_image)
            .with_image_base(ImageBase::for_source(&opts.source));
        self.rendered = self.board.render(&renderer, render);
        self.categories = category_keys(self.board.working());
        self.feedback.forget_all();

        let shown = self.rendered.cards().len();
        self.status(format!("Showing {} of {} deal(s)", shown, self.board.working().len()));
    }

    /// Hand over a finished background load, if any.
    fn poll_load(&mut self) {
        if !self.running {
            return;
        }
        let done = self.pending.lock().ok().and_then(|mut p| p.take());
        if let Some(remote) = done {
            self.running = false;
            self.dispatch(Event::Loaded(remote));
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();

        let enabled = !self.blocked();

        egui::TopBottomPanel::top("filters").show(ctx, |ui| {
            ui.add_enabled_ui(enabled, |ui| components::filter_bar::draw(ui, self));
        });

        if self.state.gui.show_form {
            egui::SidePanel::right("quick_add")
                .resizable(false)
                .min_width(260.0)
                .show(ctx, |ui| {
                    ui.add_enabled_ui(enabled, |ui| components::quick_add::draw(ui, self));
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(enabled, |ui| components::deal_grid::draw(ui, self));
        });

        components::dialogs::draw(ctx, self);

        // Revert "Copied!" labels on time
        if let Some(wait) = self.feedback.tick(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}
