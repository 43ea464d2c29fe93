use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use flexi_logger::{FileSpec, Logger, LoggerHandle};
use fritanga_royale::config::{GameConfig, MoveRule};
use fritanga_royale::game::Game;
use fritanga_royale::tui::{app::AppState, controller};
use ratatui::prelude::*;
use std::error::Error;
use std::io::{self, IsTerminal, Stdout};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "fritanga", version, about = "Shrinking-grid elimination game for the terminal")]
struct Cli {
    /// Seed for starting positions (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Side length of the starting grid
    #[arg(long, default_value_t = 5)]
    grid_size: usize,

    /// Only accept one-step moves
    #[arg(long, default_value_t = false)]
    adjacent_moves: bool,

    /// Write logs to this file; logging is off when omitted
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level filter, RUST_LOG takes precedence
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn setup_logging(cli: &Cli) -> Result<Option<LoggerHandle>, Box<dyn Error>> {
    let Some(path) = cli.log_file.as_ref() else {
        return Ok(None);
    };
    // The alternate screen owns stdout/stderr, so logs only ever go to a file.
    let handle = Logger::try_with_env_or_str(&cli.log_level)?
        .log_to_file(FileSpec::try_from(path.clone())?)
        .append()
        .format(flexi_logger::opt_format)
        .start()?;
    Ok(Some(handle))
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let _logger = setup_logging(&cli)?;

    let rule = if cli.adjacent_moves { MoveRule::Adjacent } else { MoveRule::Anywhere };
    let config = GameConfig::default().with_grid_size(cli.grid_size).with_move_rule(rule);
    let game = match cli.seed {
        Some(seed) => Game::with_seed(config, seed)?,
        None => Game::new(config)?,
    };
    log::info!("fritanga {} starting", fritanga_royale::VERSION);

    if !io::stdout().is_terminal() {
        println!(
            "fritanga TUI requires a real terminal (TTY).\nRun in Terminal and press Esc to quit. Version: {}",
            fritanga_royale::VERSION
        );
        return Ok(());
    }
    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = AppState::new(game);

    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res?;
    Ok(())
}
