use carbon_tracker::adapters::SystemClipboard;
use carbon_tracker::app::{App, AppMessage};
use carbon_tracker::cli::{parse_args, run_cli_command};
use carbon_tracker::config::AppConfig;
use carbon_tracker::logging::{init_logging, LogTarget};
use carbon_tracker::terminal::{setup_panic_hook, TerminalManager};
use carbon_tracker::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle --version / --help before any initialization
    if run_cli_command(parse_args(std::env::args())) {
        return Ok(());
    }

    color_eyre::install()?;

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let config = AppConfig::load()?;
    if let LogTarget::File(path) = init_logging(&config) {
        info!(log_file = %path.display(), "carbon-tracker starting");
    }

    let mut manager = TerminalManager::new()?;
    let size = manager.size()?;

    let mut app = App::new(config, Arc::new(SystemClipboard::new()));
    app.update_terminal_dimensions(size.width, size.height);

    let result = run_app(manager.terminal(), &mut app).await;

    app.shutdown();
    manager.restore();
    info!("carbon-tracker exiting");

    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Create async event stream for keyboard input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();
    let frame_interval = app.config.frame_interval;

    loop {
        // Draw the UI only when needed
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &*app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(frame_interval);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Resize(width, height))) => {
                        app.update_terminal_dimensions(width, height);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        debug!(error = %e, "terminal event error");
                    }
                    // Input closed
                    None => app.quit(),
                }
            }

            // Share results and counter frames from background tasks
            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
