// salut - Terminal greeting picker
//
// A full-screen terminal UI showing a fixed list of salutation words.
// Activating a word emits a salute notification; the greeting list stores
// it as the selected message and the display follows on the next frame.
//
// Architecture:
// - Greeting list (ratatui): owns the salutations and the selected message
// - Greeting items: render one word each and emit the salute event
// - Event system: an mpsc channel carries salutes back to the container
// - Logging: captured into an in-memory buffer for the logs panel

mod cli;
mod config;
mod events;
mod logging;
mod tui;

use anyhow::Result;
use config::{Config, LogRotation};
use logging::{LogBuffer, TuiLogLayer};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config --show, --reset, --edit, --path)
    // If a command was handled, exit early
    if cli::handle_cli() {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    // Create log buffer for the logs panel
    let log_buffer = LogBuffer::new();

    // Initialize tracing with the TUI capture layer so log lines never
    // write through the alternate screen. File logging is optional and
    // uses a non-blocking writer with rotation.
    //
    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("salut={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // The guard must be kept alive for the duration of the program to ensure logs flush
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> =
        if config.logging.file_enabled {
            match std::fs::create_dir_all(&config.logging.file_dir) {
                Ok(()) => {
                    let file_appender = match config.logging.file_rotation {
                        LogRotation::Hourly => tracing_appender::rolling::hourly(
                            &config.logging.file_dir,
                            &config.logging.file_prefix,
                        ),
                        LogRotation::Daily => tracing_appender::rolling::daily(
                            &config.logging.file_dir,
                            &config.logging.file_prefix,
                        ),
                        LogRotation::Never => tracing_appender::rolling::never(
                            &config.logging.file_dir,
                            &config.logging.file_prefix,
                        ),
                    };

                    // Writes happen in a background thread
                    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

                    tracing_subscriber::registry()
                        .with(filter)
                        .with(TuiLogLayer::new(log_buffer.clone()))
                        .with(
                            tracing_subscriber::fmt::layer()
                                .json()
                                .with_writer(non_blocking)
                                .with_ansi(false),
                        )
                        .init();

                    Some(guard)
                }
                Err(e) => {
                    eprintln!(
                        "Warning: Could not create log directory {:?}: {}",
                        config.logging.file_dir, e
                    );
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(TuiLogLayer::new(log_buffer.clone()))
                        .init();
                    None
                }
            }
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(TuiLogLayer::new(log_buffer.clone()))
                .init();
            None
        };

    // The salute channel: greeting items send on it when activated, the
    // event loop delivers received salutes back to the greeting list.
    // Bounded so a wedged loop exerts backpressure instead of growing.
    let (salute_tx, salute_rx) = mpsc::channel(64);

    tracing::debug!("Configured salutations: {:?}", config.salutations);

    // Mount the greeting list as the root view and run until quit
    tui::run_tui(config, log_buffer, salute_tx, salute_rx).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
