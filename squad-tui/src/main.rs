//! Squad Builder TUI entry point.

use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use squad_core::{AppConfig, FileStore};
use squad_tui::app::AppState;
use squad_tui::worker::{self, WorkerCommand, WorkerResponse};
use squad_tui::{input, logging, ui};

#[derive(Parser, Debug)]
#[command(name = "squad-tui", version, about = "Build an eleven-player squad in the terminal")]
struct Args {
    /// Config file (default: <config dir>/squad-builder/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Roster location: a JSON file path or an http(s) URL
    #[arg(long)]
    roster: Option<String>,

    /// Directory holding the saved squad
    #[arg(long)]
    state_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = AppConfig::load(args.config.as_deref()).context("Failed to load config")?;
    if let Some(roster) = args.roster {
        config.roster = roster;
    }
    if let Some(dir) = args.state_dir {
        config.state_dir = Some(dir);
    }

    logging::init(&config.log_file(), &config.log_level)?;
    tracing::info!(roster = %config.roster, state_dir = %config.state_dir().display(), "starting squad-tui");

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Saved squad is restored before the roster arrives.
    let store = FileStore::new(config.state_dir());
    let mut app = AppState::new(Box::new(store));

    // Worker channels
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let (resp_tx, resp_rx) = mpsc::channel();
    let worker_handle =
        worker::spawn_worker(cmd_rx, resp_tx).context("Failed to spawn roster worker")?;
    cmd_tx
        .send(WorkerCommand::LoadRoster {
            source: config.roster_source(),
        })
        .context("Roster worker exited early")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app, &resp_rx);

    // Shutdown worker
    let _ = cmd_tx.send(WorkerCommand::Shutdown);
    let _ = worker_handle.join();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!(squad = app.squad.len(), "exiting squad-tui");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    worker_rx: &Receiver<WorkerResponse>,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Drain worker responses (non-blocking)
        while let Ok(resp) = worker_rx.try_recv() {
            handle_worker_response(app, resp);
        }

        // 3. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}

fn handle_worker_response(app: &mut AppState, resp: WorkerResponse) {
    match resp {
        WorkerResponse::RosterLoaded { roster } => app.on_roster_loaded(Ok(roster)),
        WorkerResponse::RosterFailed { error } => app.on_roster_loaded(Err(error)),
    }
}
