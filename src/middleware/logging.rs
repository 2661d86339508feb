use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Setup logging with console output and an optional rotating JSON log file.
///
/// `LOG_LEVEL` sets the default filter (overridden by `RUST_LOG`); `LOG_FILE`
/// names the file, and an empty value turns file output off.
pub fn setup_logging() {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_file = std::env::var("LOG_FILE").unwrap_or_else(|_| "logs/users-api.log".to_string());

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .compact();

    let file_layer = file_appender(&log_file).map(|appender| {
        fmt::layer()
            .with_writer(appender)
            .with_target(true)
            .with_ansi(false)
            .json()
    });

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)))
        .with(console_layer)
        .with(file_layer)
        .init();

    tracing::info!("Logging initialized with level: {}", log_level);
}

fn file_appender(log_file: &str) -> Option<RollingFileAppender> {
    if log_file.is_empty() {
        return None;
    }

    let path = Path::new(log_file);
    let directory = path.parent().unwrap_or(Path::new("logs"));
    let file_name = path.file_name()?;

    std::fs::create_dir_all(directory).ok();

    Some(RollingFileAppender::new(Rotation::DAILY, directory, file_name))
}
