// tests/config_file.rs
use std::fs;
use std::path::PathBuf;

use deal_board::config::options::{AppOptions, DealSource};
use deal_board::core::affiliate::attach_affiliate;

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let opts = AppOptions::load(&dir.path().join("deal_board.cfg"));
    assert_eq!(opts, AppOptions::default());
}

#[test]
fn file_values_reach_the_rewriter() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("deal_board.cfg");
    fs::write(
        &cfg,
        "source = ./feeds\nflipkart_tag = fk-real\n# amazon_tag = commented-out\nplaceholder_image = img/none.png\n",
    )
    .unwrap();

    let opts = AppOptions::load(&cfg);
    assert_eq!(opts.source, DealSource::File(PathBuf::from("./feeds")));
    assert_eq!(opts.placeholder_image, "img/none.png");
    assert_eq!(
        attach_affiliate("https://www.flipkart.com/p", &opts.affiliate),
        "https://www.flipkart.com/p?affid=fk-real"
    );
    assert_eq!(
        attach_affiliate("https://www.amazon.com/p", &opts.affiliate),
        "https://www.amazon.com/p?tag=YOUR_AFFIL_TAG"
    );
}
