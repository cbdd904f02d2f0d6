//! Tracing initialization for the desktop shell.

use amora_infrastructure::paths::AmoraPaths;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Initializes stderr + daily-rolling-file logging.
///
/// Returns the appender guard; dropping it stops the background writer, so
/// the caller must hold it for the lifetime of the process.
pub fn init() -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match AmoraPaths::logs_dir() {
        Ok(logs_dir) => {
            let appender = tracing_appender::rolling::daily(logs_dir, "amora-desktop.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .with(fmt::layer().with_writer(writer).with_ansi(false))
                .init();

            Some(guard)
        }
        Err(err) => {
            // No config dir: stderr-only logging still beats none.
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
            tracing::warn!("log directory unavailable: {}", err);
            None
        }
    }
}
