//! tracing setup
//!
//! Headless commands log to stderr. The interactive wizard owns the terminal,
//! so it writes to a daily rolling file instead.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Keeps the file writer alive; logs stop flushing once dropped
pub struct LoggingGuard {
    _guard: WorkerGuard,
}

/// `RUST_LOG` wins over the level picked on the command line
fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
}

/// Plain text logs on stderr
pub fn init_stderr(directive: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(directive))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Rolling file logs under `log_dir`, falling back to the temp directory
pub fn init_file(log_dir: &Path, directive: &str) -> Option<LoggingGuard> {
    let log_dir = std::fs::create_dir_all(log_dir)
        .map(|_| log_dir.to_path_buf())
        .or_else(|_| -> std::io::Result<PathBuf> {
            let dir = std::env::temp_dir().join("rsvp").join("logs");
            std::fs::create_dir_all(&dir)?;
            Ok(dir)
        })
        .ok()?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "rsvp.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let subscriber = tracing_subscriber::registry()
        .with(build_filter(directive))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        );

    if subscriber.try_init().is_err() {
        return None;
    }

    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        tracing::error!(panic = %panic_info, "panic");
        previous(panic_info);
    }));

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");

    Some(LoggingGuard { _guard: guard })
}
