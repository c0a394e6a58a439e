// tests/board_flow.rs
//
// End-to-end page session without a UI: feed on disk, local deals in a
// scratch store directory, events through the board.

use std::fs;
use std::path::Path;

use chrono::{TimeZone, Utc};
use deal_board::board::{form::QuickAddForm, Board, Event, NoticeLevel, Render};
use deal_board::config::consts::{MSG_ADDED_LOCALLY, MSG_NOTHING_LOADED};
use deal_board::config::options::{AppOptions, DealSource};
use deal_board::core::filter::CategoryFilter;
use deal_board::loader;
use deal_board::render::{CopyAction, Rendered, Renderer};
use deal_board::store::{FileStore, LocalStore};

const FEED: &str = r#"[
  {"id":"d1","title":"Anker USB-C hub","store":"Amazon","category":"electronics",
   "code":"HUB10","url":"https://www.amazon.in/dp/B0HUB","image":"","meta":"7-in-1","date":"2026-10-01"},
  {"id":"d2","title":"Cotton kurta","store":"Myntra","category":"Fashion",
   "code":"NONE","url":"https://www.myntra.com/k/1","image":"https://img.example/k.jpg","meta":"Flat 60%","date":"2026-10-02"},
  {"id":"d3","title":"Air fryer","store":"Flipkart","category":"home",
   "url":"https://www.flipkart.com/af/p/itm9?pid=AF","meta":"usb-free cooking","date":"2026-10-03"},
  {"title":"broken record without url"}
]"#;

fn options(dir: &Path) -> AppOptions {
    fs::write(dir.join("deals.json"), FEED).unwrap();
    let mut opts = AppOptions::default();
    opts.source = DealSource::File(dir.to_path_buf());
    opts.store_dir = dir.join(".store");
    opts
}

fn start(opts: &AppOptions) -> (Board, FileStore) {
    let mut store = FileStore::new(opts.store_file());
    let remote = loader::fetch_deals(opts, None);
    let (board, out) = Board::new().handle(Event::Loaded(remote), &mut store, Utc::now());
    assert_eq!(out.render, Render::Initial);
    (board, store)
}

fn ids(board: &Board) -> Vec<String> {
    board.view().iter().map(|d| d.id.clone()).collect()
}

#[test]
fn loads_valid_records_and_skips_broken_ones() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options(dir.path());
    let (board, _) = start(&opts);
    assert_eq!(ids(&board), vec!["d1", "d2", "d3"]);
}

#[test]
fn search_usb_matches_title_meta_store() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options(dir.path());
    let (board, mut store) = start(&opts);
    let (board, _) = board.handle(Event::Search("USB".into()), &mut store, Utc::now());
    assert_eq!(ids(&board), vec!["d1", "d3"]);
}

#[test]
fn rendered_cards_follow_copy_and_affiliate_rules() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options(dir.path());
    let (board, _) = start(&opts);
    let renderer = Renderer::new(&opts.affiliate, &opts.placeholder_image);

    let out = board.render(&renderer, Render::Initial);
    let cards = out.cards();
    assert_eq!(cards.len(), 3);

    assert_eq!(cards[0].copy, CopyAction::Enabled { code: "HUB10".into() });
    assert_eq!(cards[0].open_href, "https://www.amazon.in/dp/B0HUB?tag=YOUR_AFFIL_TAG");
    assert_eq!(cards[0].image_uri, "placeholder.png");

    assert_eq!(cards[1].copy, CopyAction::Disabled);
    assert_eq!(cards[1].open_href, "https://www.myntra.com/k/1");
    assert_eq!(cards[1].image_uri, "https://img.example/k.jpg");

    assert_eq!(cards[2].copy, CopyAction::Disabled);
    assert_eq!(cards[2].open_href, "https://www.flipkart.com/af/p/itm9?pid=AF&affid=YOUR_FLIP_TAG");
}

#[test]
fn quick_add_persists_and_comes_back_first() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options(dir.path());
    let (board, mut store) = start(&opts);

    let when = Utc.with_ymd_and_hms(2026, 10, 18, 8, 0, 0).unwrap();
    let form = QuickAddForm {
        title: "Mechanical keyboard".into(),
        url: "https://www.amazon.in/dp/KB".into(),
        code: "KEYS15".into(),
        ..Default::default()
    };
    let (_, out) = board.handle(Event::Add(form), &mut store, when);
    assert_eq!(out.notice.unwrap().text, MSG_ADDED_LOCALLY);
    assert!(opts.store_file().exists());

    // "reload the page"
    let (board, _) = start(&opts);
    let renderer = Renderer::new(&opts.affiliate, &opts.placeholder_image);
    let out = board.render(&renderer, Render::Initial);
    let first = &out.cards()[0];
    assert_eq!(first.deal_id, format!("local-{}", when.timestamp_millis()));
    assert_eq!(first.label, "Other • Added locally");
    assert_eq!(first.copy.code(), Some("KEYS15"));
    assert_eq!(board.working()[0].date, "2026-10-18");
    assert_eq!(board.working()[0].category, "others");
}

#[test]
fn clear_local_keeps_remote() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options(dir.path());
    let (board, mut store) = start(&opts);

    let form = QuickAddForm { title: "Mine".into(), url: "https://x.example".into(), ..Default::default() };
    let (board, _) = board.handle(Event::Add(form), &mut store, Utc::now());
    assert_eq!(board.working().len(), 4);

    let (board, _) = board.handle(Event::ClearLocal { confirmed: true }, &mut store, Utc::now());
    assert_eq!(ids(&board), vec!["d1", "d2", "d3"]);
    assert!(store.load().is_empty());
    assert!(!opts.store_file().exists());
}

#[test]
fn category_filter_case_insensitive_through_board() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options(dir.path());
    let (board, mut store) = start(&opts);
    let (board, _) = board.handle(
        Event::SelectCategory(CategoryFilter::from_key("fashion")),
        &mut store,
        Utc::now(),
    );
    assert_eq!(ids(&board), vec!["d2"]);
}

#[test]
fn unreachable_feed_shows_only_local_deals() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = AppOptions::default();
    opts.source = DealSource::File(dir.path().join("missing.json"));
    opts.store_dir = dir.path().join(".store");

    let (board, _) = start(&opts);
    let renderer = Renderer::new(&opts.affiliate, &opts.placeholder_image);
    assert_eq!(
        board.render(&renderer, Render::Initial),
        Rendered::Placeholder(MSG_NOTHING_LOADED.into())
    );

    let mut store = FileStore::new(opts.store_file());
    let form = QuickAddForm { title: "Offline".into(), url: "https://x.example".into(), ..Default::default() };
    let (board, _) = board.handle(Event::Add(form), &mut store, Utc::now());
    assert_eq!(board.working().len(), 1);
    assert!(board.working()[0].is_local());
}

#[test]
fn remote_record_with_local_looking_id_survives_clear() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = AppOptions::default();
    fs::write(
        dir.path().join("deals.json"),
        r#"[{"id":"local-42","title":"Feed deal","store":"Croma","url":"https://croma.example/1"}]"#,
    )
    .unwrap();
    opts.source = DealSource::File(dir.path().join("deals.json"));
    opts.store_dir = dir.path().join(".store");

    let (board, mut store) = start(&opts);
    let form = QuickAddForm { title: "Mine".into(), url: "https://x.example".into(), ..Default::default() };
    let (board, _) = board.handle(Event::Add(form), &mut store, Utc::now());
    let (board, _) = board.handle(Event::ClearLocal { confirmed: true }, &mut store, Utc::now());

    assert_eq!(ids(&board), vec!["local-42"]);
    assert!(!board.working()[0].is_local());
}

#[test]
fn unreadable_store_is_not_overwritten_by_add() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options(dir.path());
    fs::create_dir_all(&opts.store_dir).unwrap();
    let broken = r#"[{"id":"local-1","title":"Keep me","url":"https://a.example"},
                     {"id":"local-2","title":"Me too","url":"https://b.example"},]"#;
    fs::write(opts.store_file(), broken).unwrap();

    let (board, mut store) = start(&opts);
    assert_eq!(ids(&board), vec!["d1", "d2", "d3"]);

    let form = QuickAddForm { title: "New".into(), url: "https://x.example".into(), ..Default::default() };
    let (board, out) = board.handle(Event::Add(form), &mut store, Utc::now());

    let notice = out.notice.unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_ne!(notice.text, MSG_ADDED_LOCALLY);
    assert_eq!(fs::read_to_string(opts.store_file()).unwrap(), broken);
    assert_eq!(board.working()[0].title, "New");
}
