// src/cli.rs
//
// Terminal front end over the same board the GUI drives.
//   deal-board-cli list --category electronics --search usb
//   deal-board-cli add --title "USB hub" --url https://amazon.in/dp/B0 --code HUB10
//   deal-board-cli copy local-1760780000000
//   deal-board-cli clear --yes

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    time::{Duration, Instant},
};

use chrono::Utc;
use clap::{Parser, Subcommand};
use color_eyre::eyre::{eyre, Result};

use crate::{
    board::{form::QuickAddForm, Board, Event, NoticeLevel, Outcome, Render},
    clipboard::{self, CopyFeedback, CopyResult, NoClipboard},
    config::{
        consts::{CONFIG_FILE, MSG_CONFIRM_CLEAR, MSG_COPY_FAILED},
        options::{AppOptions, DealSource},
    },
    core::filter::{category_keys, CategoryFilter},
    loader,
    progress::Progress,
    render::{ImageBase, Rendered, Renderer},
    store::{FileStore, LocalStore, MemoryStore},
};

#[derive(Debug, Parser)]
#[command(name = "deal-board-cli", version, about = "Browse and manage deals from a deals.json feed")]
pub struct Cli {
    /// Config file (key = value lines)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Feed location: base URL, direct .json URL, file or directory
    #[arg(long, global = true)]
    pub source: Option<String>,

    /// Directory for local deals and the log file
    #[arg(long, global = true)]
    pub store_dir: Option<PathBuf>,

    /// Keep local deals in memory only for this run
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the deal cards, optionally filtered
    List {
        #[arg(long, default_value = "all")]
        category: String,
        #[arg(long)]
        search: Option<String>,
    },
    /// Save a deal locally (title and url are required)
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        url: String,
        #[arg(long, default_value = "")]
        store: String,
        #[arg(long, default_value = "")]
        category: String,
        #[arg(long, default_value = "")]
        code: String,
        #[arg(long, default_value = "")]
        image: String,
    },
    /// Show the coupon code of a deal
    Copy { id: String },
    /// Remove every locally saved deal
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// List category filter keys
    Categories,
}

struct CliProgress;

impl Progress for CliProgress {
    fn begin(&mut self, source: &str) { eprintln!("Loading deals from {source}…"); }
    fn log(&mut self, msg: &str) { eprintln!("{msg}"); }
    fn finish(&mut self, loaded: usize) { eprintln!("Loaded {loaded} remote deal(s)"); }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let opts = resolve_options(&cli)?;
    crate::log::init(&opts.store_dir);
    logf!("CLI: {:?}", cli.command);

    let mut store: Box<dyn LocalStore> = if cli.ephemeral {
        Box::new(MemoryStore::default())
    } else {
        Box::new(FileStore::new(opts.store_file()))
    };

    let remote = loader::fetch_deals(&opts, Some(&mut CliProgress));
    let (board, _) = Board::new().handle(Event::Loaded(remote), store.as_mut(), Utc::now());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(cli.command, board, store.as_mut(), &opts, &mut out, &mut io::stdin().lock())
}

/// CLI flags override the config file, which overrides defaults.
pub fn resolve_options(cli: &Cli) -> Result<AppOptions> {
    let cfg = cli.config.clone().unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    let mut opts = AppOptions::load(&cfg);
    if let Some(src) = &cli.source {
        opts.source = DealSource::parse(src).map_err(|e| eyre!("bad --source {src:?}: {e}"))?;
    }
    if let Some(dir) = &cli.store_dir {
        opts.store_dir = dir.clone();
    }
    Ok(opts)
}

/// Run one command against a loaded board.
pub fn execute(
    command: Command,
    board: Board,
    store: &mut dyn LocalStore,
    opts: &AppOptions,
    out: &mut dyn Write,
    input: &mut dyn BufRead,
) -> Result<()> {
    let renderer = Renderer::new(&opts.affiliate, &opts.placeholder_image)
        .with_image_base(ImageBase::for_source(&opts.source));
    let now = Utc::now();

    match command {
        Command::List { category, search } => {
            let (board, _) = board.handle(Event::SelectCategory(CategoryFilter::from_key(&category)), store, now);
            let (board, _) = board.handle(Event::Search(search.unwrap_or_default()), store, now);
            print_rendered(&board.render(&renderer, Render::Initial), out)?;
        }
        Command::Add { title, url, store: shop, category, code, image } => {
            let form = QuickAddForm { title, store: shop, category, code, url, image };
            let (board, outcome) = board.handle(Event::Add(form), store, now);
            report(&outcome, out)?;
            if outcome.render == Render::Keep {
                return Err(eyre!("deal was not added"));
            }
            print_rendered(&board.render(&renderer, outcome.render), out)?;
        }
        Command::Copy { id } => {
            let deal = board
                .working()
                .iter()
                .find(|d| d.id == id)
                .ok_or_else(|| eyre!("no deal with id {id}"))?;
            let card = renderer.card(deal);
            let mut feedback = CopyFeedback::new(Duration::from_millis(opts.copy_ack_ms));
            match clipboard::copy_code(&card.deal_id, card.copy.code(), &mut NoClipboard, &mut feedback, Instant::now()) {
                CopyResult::Copied => writeln!(out, "Copied!")?,
                CopyResult::Failed { code } => writeln!(out, "{MSG_COPY_FAILED}{code}")?,
                CopyResult::Unavailable => writeln!(out, "{}", card.copy.label())?,
            }
        }
        Command::Clear { yes } => {
            let confirmed = yes || confirm(MSG_CONFIRM_CLEAR, out, input)?;
            let (board, outcome) = board.handle(Event::ClearLocal { confirmed }, store, now);
            report(&outcome, out)?;
            if confirmed {
                writeln!(out, "Local deals cleared; {} remote deal(s) remain.", board.working().len())?;
            } else {
                writeln!(out, "Nothing cleared.")?;
            }
        }
        Command::Categories => {
            for key in category_keys(board.working()) {
                writeln!(out, "{key}")?;
            }
        }
    }
    Ok(())
}

fn confirm(question: &str, out: &mut dyn Write, input: &mut dyn BufRead) -> Result<bool> {
    write!(out, "{question} [y/N] ")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

fn report(outcome: &Outcome, out: &mut dyn Write) -> io::Result<()> {
    if let Some(n) = &outcome.notice {
        match n.level {
            NoticeLevel::Info => writeln!(out, "{}", n.text)?,
            NoticeLevel::Error => writeln!(out, "Error: {}", n.text)?,
        }
    }
    Ok(())
}

pub fn print_rendered(rendered: &Rendered, out: &mut dyn Write) -> io::Result<()> {
    match rendered {
        Rendered::Placeholder(msg) => writeln!(out, "{msg}"),
        Rendered::Cards(cards) => {
            for c in cards {
                writeln!(out, "[{}] {}", c.deal_id, c.title)?;
                writeln!(out, "    {}", c.label)?;
                writeln!(out, "    open: {}", c.open_href)?;
                match c.copy.code() {
                    Some(code) => writeln!(out, "    code: {code}")?,
                    None => writeln!(out, "    code: ({})", c.copy.label())?,
                }
            }
            Ok(())
        }
    }
}
