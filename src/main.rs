use glance::config::fetch_config;
use glance::fetcher::YahooProvider;
use glance::logging;
use glance::models::INSTRUMENTS;
use glance::scheduler::Scheduler;
use glance::session::SystemClock;
use glance::tls::build_tls_config;
use glance::tui::event::{spawn_event_reader, update};
use glance::tui::{App, ChannelSink, Tui, render, restore_terminal, setup_terminal};
use glance::{GlanceError, Result};
use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let app_config = fetch_config()?;

    logging::init(&app_config.log_file)?;
    logging::install_panic_hook();

    let provider = YahooProvider::new(&app_config.provider, build_tls_config()?)?;
    info!(provider = %app_config.provider.base_url, "starting market-glance");

    let (tx, mut rx) = mpsc::unbounded_channel();
    let scheduler = Scheduler::new(
        INSTRUMENTS,
        provider,
        SystemClock,
        ChannelSink::new(tx.clone()),
    );

    let (width, height) = crossterm::terminal::size()
        .map_err(|e| GlanceError::Io(format!("failed to read terminal size: {e}")))?;
    let mut app = App::new(&INSTRUMENTS, Rect::new(0, 0, width, height));

    let mut terminal = setup_terminal()?;
    spawn_event_reader(tx);

    let result = run_overlay(&mut terminal, &mut app, &mut rx, scheduler.run()).await;

    restore_terminal(&mut terminal)?;
    info!("market-glance closed");
    result
}

/// Drives rendering and the refresh loop on the same task until the user
/// closes the panel.
async fn run_overlay(
    terminal: &mut Tui,
    app: &mut App,
    rx: &mut mpsc::UnboundedReceiver<glance::tui::Message>,
    refresh: impl Future<Output = ()>,
) -> Result<()> {
    tokio::pin!(refresh);

    loop {
        terminal
            .draw(|frame| render(frame, app))
            .map_err(|e| GlanceError::Io(format!("failed to draw frame: {e}")))?;

        tokio::select! {
            () = &mut refresh => break,
            message = rx.recv() => match message {
                Some(message) => update(app, message),
                None => break,
            },
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
