//! `lifeforms`: terminal front end for the Wonderful Life Forms catalog.
//!
//! # Usage
//!
//! ```text
//! lifeforms
//! lifeforms --database ~/games/wonder_lifeforms.db
//! lifeforms --config lifeforms.toml --padded
//! ```

mod app;
mod settings;
mod ui;

use std::{
  fs::OpenOptions,
  io,
  path::{Path, PathBuf},
  sync::Mutex,
  time::Duration,
};

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use crossterm::{
  event::{self, Event, KeyEventKind},
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use lifeforms_core::{grid::CellPadding, store::LifeformStore};
use lifeforms_store_sqlite::SqliteStore;
use ratatui::{Terminal, backend::CrosstermBackend};
use settings::Settings;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "lifeforms", version, about = "Catalog your Wonderful Life Forms")]
struct Args {
  /// Path to a TOML settings file (default: ./lifeforms.toml if present).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// SQLite database file.
  #[arg(short, long, value_name = "FILE")]
  database: Option<PathBuf>,

  /// File that log output is appended to.
  #[arg(long, value_name = "FILE")]
  log_file: Option<PathBuf>,

  /// Pad grid cells with spaces.
  #[arg(long)]
  padded: bool,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  let args = Args::parse();

  // Flags override the settings file, which overrides defaults.
  let mut settings = Settings::load(args.config.as_deref())?;
  if let Some(database) = args.database {
    settings.database = database;
  }
  if let Some(log_file) = args.log_file {
    settings.log_file = log_file;
  }
  settings.padded_cells |= args.padded;

  init_tracing(&settings.log_file)?;

  // Nothing is drawn unless the database opens.
  let store = SqliteStore::open(&settings.database).with_context(|| {
    format!("could not open your database {}", settings.database.display())
  })?;

  let padding = if settings.padded_cells {
    CellPadding::Spaced
  } else {
    CellPadding::None
  };
  let mut app = App::new(store, settings.catalog, padding);
  app.refresh();

  // Set up the terminal.
  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  // Run the event loop; restore terminal even on error.
  let run_result = run_event_loop(&mut terminal, &mut app);

  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  let close_result = app.into_store().close().context("closing database");
  run_result.and(close_result)
}

/// Send tracing output to `path`; the terminal belongs to the UI.
fn init_tracing(path: &Path) -> Result<()> {
  let file = OpenOptions::new()
    .create(true)
    .append(true)
    .open(path)
    .with_context(|| format!("opening log file {}", path.display()))?;

  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_ansi(false)
    .with_writer(Mutex::new(file))
    .init();
  Ok(())
}

// ─── Event loop ───────────────────────────────────────────────────────────────

fn run_event_loop<S: LifeformStore>(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  app: &mut App<S>,
) -> Result<()> {
  loop {
    terminal.draw(|f| ui::draw(f, app)).context("drawing frame")?;

    if !event::poll(Duration::from_millis(250)).context("polling events")? {
      continue;
    }

    match event::read().context("reading event")? {
      Event::Key(key) if key.kind == KeyEventKind::Press => {
        if !app.handle_key(key) {
          break;
        }
      }
      Event::Resize(_, _) => {
        // Terminal will redraw on next iteration.
      }
      _ => {}
    }
  }

  Ok(())
}
