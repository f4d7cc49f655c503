pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod report;
pub mod ui;

#[cfg(test)]
mod test_support;

use std::io::{self, IsTerminal, Stdout};

use anyhow::{Context, Result};
use app::events::{AppEvent, spawn_input_task};
use app::services::{Services, StartupTarget};
use app::state::AppState;
use cli::Cli;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use domain::weather::Location;
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

pub async fn run(cli: Cli) -> Result<()> {
    init_tracing(&cli);
    cli.validate()?;

    if cli.one_shot {
        return run_one_shot(&cli).await;
    }

    let mut terminal = setup_terminal()?;
    let result = run_inner(&mut terminal, cli).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn run_inner(terminal: &mut Terminal<CrosstermBackend<Stdout>>, cli: Cli) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(256);
    let input_stream = spawn_input_task();
    tokio::pin!(input_stream);
    let mut app = AppState::new(Services::from_cli(&cli), StartupTarget::from_cli(&cli));
    app.viewport_width = terminal.size()?.width;

    tx.send(AppEvent::Bootstrap).await?;

    while app.running {
        tokio::select! {
            maybe_input = input_stream.next() => {
                if let Some(input) = maybe_input {
                    app.handle_event(AppEvent::Input(input), &tx, &cli).await?;
                }
            }
            maybe_event = rx.recv() => {
                if let Some(event) = maybe_event {
                    app.handle_event(event, &tx, &cli).await?;
                }
            }
        }

        terminal.draw(|frame| ui::render(frame, &app))?;
    }

    Ok(())
}

async fn run_one_shot(cli: &Cli) -> Result<()> {
    let services = Services::from_cli(cli);
    let location = resolve_location(&services, StartupTarget::from_cli(cli)).await?;

    services.weather.fetch_weather(location.clone()).await;
    if let Some(err) = services.weather.error() {
        anyhow::bail!(err);
    }
    let data = services
        .weather
        .weather_data()
        .context("forecast response was empty")?;

    print!("{}", report::render_report(&location, &data));
    Ok(())
}

async fn resolve_location(services: &Services, target: StartupTarget) -> Result<Location> {
    match target {
        StartupTarget::Coordinates(location) => Ok(location),
        StartupTarget::City(city) => {
            services.search.search_now(&city).await;
            services
                .search
                .results()
                .into_iter()
                .next()
                .context(app::search::NO_RESULTS_MESSAGE)
        }
        StartupTarget::Detect => services.locator.get_user_location().await,
    }
}

/// Installs the tracing subscriber. In interactive mode logs are only written
/// when stderr is redirected, so the alternate screen stays clean.
fn init_tracing(cli: &Cli) {
    if !cli.one_shot && io::stderr().is_terminal() {
        return;
    }
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn install_panic_hook() {
    let existing = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        existing(panic);
    }));
}
