//! # CLI Layer
//!
//! One possible front end for lessonbook. This is the only place that knows
//! about the terminal: it reads lines, prints messages and lists, sets up
//! logging, and decides the exit code.
//!
//! Given trailing words, the binary runs them as one command line and exits.
//! Otherwise it starts an interactive session reading one command per line
//! until `exit` or end of input.

use super::render::{lesson_rows, person_rows, print_error, print_list, print_messages, ViewState};
use super::setup::Cli;
use clap::Parser;
use directories::ProjectDirs;
use lessonbook::api::{CmdResult, Logic};
use lessonbook::commands::UiUpdate;
use lessonbook::config::UserPrefs;
use lessonbook::error::Result;
use lessonbook::manager::ModelManager;
use lessonbook::model::RecordKind;
use lessonbook::store::fs::FileStore;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

struct AppContext {
    logic: Logic<FileStore>,
    view: ViewState,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;
    match cli.one_shot() {
        Some(line) => {
            handle_line(&mut ctx, &line)?;
            Ok(())
        }
        None => repl(&mut ctx),
    }
}

fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    ProjectDirs::from("com", "lessonbook", "lessonbook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "could not determine a data directory; pass --data-dir",
            )
            .into()
        })
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let dir = data_dir(cli)?;
    info!(dir = %dir.display(), "using data directory");

    let prefs = UserPrefs::load(&dir).unwrap_or_else(|e| {
        warn!(error = %e, "could not read preferences, using defaults");
        UserPrefs::default()
    });
    let model = ModelManager::open(FileStore::new(dir.clone()))?;
    let view = ViewState {
        highlight: prefs.highlight,
        ..ViewState::default()
    };

    Ok(AppContext {
        logic: Logic::new(model, prefs, Some(dir)),
        view,
    })
}

fn repl(ctx: &mut AppContext) -> Result<()> {
    println!("Welcome to lessonbook. Type `help` to see the available commands.");
    render_active_list(ctx);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match handle_line(ctx, &line) {
            Ok(true) => return Ok(()),
            Ok(false) => {}
            Err(e) => print_error(&e),
        }
    }
}

/// Runs one line and shows its outcome. Returns true when the session should end.
fn handle_line(ctx: &mut AppContext, line: &str) -> Result<bool> {
    let result = ctx.logic.execute(line)?;
    print_messages(&result.messages);
    Ok(apply_updates(ctx, &result))
}

fn apply_updates(ctx: &mut AppContext, result: &CmdResult) -> bool {
    let mut relist = false;
    for update in &result.updates {
        match *update {
            UiUpdate::ModelChanged | UiUpdate::ListingUnitChanged(_) => {
                ctx.view.sorted = false;
                ctx.view.selected = None;
                relist = true;
            }
            UiUpdate::SortRequested(_) => {
                ctx.view.sorted = true;
                relist = true;
            }
            UiUpdate::SelectionChanged(index) => {
                ctx.view.selected = Some(index);
                relist = true;
            }
            UiUpdate::HighlightToggled(on) => ctx.view.highlight = on,
            UiUpdate::FontSizeChanged(size) => {
                info!(%size, "font size preference changed");
            }
            UiUpdate::Exit => return true,
        }
    }
    if relist {
        render_active_list(ctx);
    }
    false
}

fn render_active_list(ctx: &AppContext) {
    let model = ctx.logic.model();
    let unit = model.listing().current();
    let rows = match model.active_kind() {
        RecordKind::Person => person_rows(model.visible_persons(), ctx.view.sorted),
        RecordKind::Lesson => lesson_rows(model.visible_lessons(), ctx.view.sorted),
    };
    print_list(unit, &rows, &ctx.view);
}
