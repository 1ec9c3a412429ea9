use anchor_menu::app::App;
use anchor_menu::config::Config;
use anchor_menu::trigger::{Locale, Trigger};
use anchor_menu::view::theme::Theme;
use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{poll as event_poll, read as event_read, DisableMouseCapture, EnableMouseCapture},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::{self, stdout},
    path::{Path, PathBuf},
    sync::Mutex,
    time::Duration,
};
use tracing_subscriber::EnvFilter;

/// Terminal popup menus anchored to three trigger buttons
#[derive(Parser, Debug)]
#[command(name = "anchor-menu")]
#[command(about = "Popup menus anchored to fixed trigger buttons", long_about = None)]
#[command(version)]
struct Args {
    /// Path to a JSON configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// File to write logs to (stdout belongs to the UI)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Language of the menu labels (en, ru)
    #[arg(long, value_name = "LOCALE")]
    locale: Option<Locale>,

    /// Open the menu of a trigger on startup (top-left, top-center, top-right)
    #[arg(long, value_name = "TRIGGER")]
    open: Option<Trigger>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,

    /// Print the configuration JSON Schema and exit
    #[arg(long)]
    dump_schema: bool,
}

/// Raw mode, alternate screen and mouse capture, restored on drop
struct TerminalGuard;

impl TerminalGuard {
    fn acquire() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = TerminalGuard;
        stdout().execute(EnterAlternateScreen)?;
        stdout().execute(EnableMouseCapture)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = stdout().execute(DisableMouseCapture);
        let _ = stdout().execute(LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

fn init_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("Failed to open log file {:?}", log_file))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("anchor_menu=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("anchor-menu").join("config.json"))
}

fn load_config(args: &Args) -> Result<Config> {
    let path = match &args.config {
        Some(path) => Some(path.clone()),
        None => default_config_path().filter(|path| path.exists()),
    };

    let mut config = match path {
        Some(path) => {
            let config = Config::load_from_file(&path)
                .with_context(|| format!("Failed to load config from {:?}", path))?;
            tracing::info!("Loaded config from {:?}", path);
            config
        }
        None => Config::default(),
    };

    if let Some(locale) = args.locale {
        config.locale = locale;
    }
    Ok(config)
}

fn load_theme(config: &Config) -> Result<Theme> {
    match &config.theme {
        Some(path) => Theme::from_file(path)
            .with_context(|| format!("Failed to load theme from {:?}", path)),
        None => Ok(Theme::dark()),
    }
}

fn run_event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| app.render(frame))?;

        if event_poll(Duration::from_millis(100))? {
            app.handle_event(event_read()?);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.dump_schema {
        println!("{}", serde_json::to_string_pretty(&Config::json_schema())?);
        return Ok(());
    }

    let log_file = args
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("anchor-menu.log"));
    init_tracing(&log_file)?;

    let config = load_config(&args)?;
    if args.dump_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }
    let theme = load_theme(&config)?;

    let guard = TerminalGuard::acquire().context("Failed to set up the terminal")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;
    let size = terminal.size()?;

    let mut app = App::new(config, theme, size.width, size.height);
    app.mount();
    if let Some(trigger) = args.open {
        app.toggle(trigger);
    }
    tracing::info!("anchor-menu started ({}x{})", size.width, size.height);

    let result = run_event_loop(&mut terminal, &mut app);

    app.unmount();
    drop(guard);
    tracing::info!("anchor-menu exited");
    result
}
