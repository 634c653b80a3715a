mod app;
mod config;
mod keybinds;
mod ui;

use anyhow::{anyhow, Context};
use app::App;
use config::Config;
use directories::ProjectDirs;
use ratatui::crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers,
};
use ratatui::crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use stemma_view_slack::SlackConversationsApi;
use tracing_subscriber::EnvFilter;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "stemma", "stemma-view")
}

fn get_config_path() -> PathBuf {
    if let Some(proj_dirs) = project_dirs() {
        proj_dirs.config_dir().join("config.toml")
    } else {
        PathBuf::from("config/default.toml")
    }
}

fn get_log_dir() -> PathBuf {
    if let Some(proj_dirs) = project_dirs() {
        proj_dirs.data_local_dir().to_path_buf()
    } else {
        PathBuf::from("logs")
    }
}

/// Logs go to a file; stdout belongs to the terminal UI.
fn init_logging() -> anyhow::Result<PathBuf> {
    let dir = get_log_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("creating log directory {}", dir.display()))?;
    let path = dir.join("stemma-view.log");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(path)
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let resource_key = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow!("usage: stemma-view <table resource key>"))?;

    let mut config = Config::load_or_default(&get_config_path());
    config.apply_env_overrides();

    let log_path = init_logging()?;
    tracing::info!(resource_key = %resource_key, log = %log_path.display(), "Starting stemma-view");

    let base_url = config
        .api
        .base_url()
        .with_context(|| format!("invalid api.base_url {:?}", config.api.base_url))?;
    let api = SlackConversationsApi::with_timeouts(
        &base_url,
        config.api.connect_timeout(),
        config.api.timeout(),
    )?;

    let rt = tokio::runtime::Runtime::new()?;
    let _guard = rt.enter();

    let mut app = App::new(config, resource_key, Arc::new(api));
    app.init();

    let mut terminal = ratatui::init();
    ratatui::crossterm::execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;

    let result = run(&mut terminal, &mut app);

    let _ = ratatui::crossterm::execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    ratatui::restore();

    result
}

fn run(terminal: &mut ratatui::DefaultTerminal, app: &mut App) -> anyhow::Result<()> {
    let tick = Duration::from_millis(app.config.ui.tick_millis);

    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(tick)? {
            let event = event::read()?;

            if let Event::Key(key) = &event {
                if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    break;
                }
            }

            match app.handle_event(event) {
                Ok(true) => break,
                Ok(false) => {}
                Err(e) => tracing::warn!("Failed to handle terminal event: {e}"),
            }
        }

        app.process_async_events();

        if app.should_quit {
            break;
        }
    }

    tracing::info!("Shutting down stemma-view");
    Ok(())
}
