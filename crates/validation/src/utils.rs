use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{InitError, Rotation},
};
use tracing_subscriber::{
    filter::ParseError, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

use crate::config::LoggingConfig;

const CRATES: &[&str] = &["types", "validation"];

#[derive(Debug, thiserror::Error)]
pub enum LoggingInitError {
    #[error("invalid RUST_LOG: {0}")]
    InvalidLevel(String),
    #[error("invalid log directive: {0}")]
    Directive(#[from] ParseError),
    #[error("failed to create file log appender: {0}")]
    Appender(#[from] InitError),
}

/// Installs the global subscriber. Keep the returned guard alive for the lifetime of the process,
/// buffered events are flushed when it drops.
pub fn init_tracing(config: &LoggingConfig) -> Result<WorkerGuard, LoggingInitError> {
    let format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_thread_ids(false)
        .with_target(true)
        .compact();

    let log_level = match std::env::var("RUST_LOG") {
        Ok(level) => level.parse().map_err(|_| LoggingInitError::InvalidLevel(level))?,
        Err(_) => tracing::Level::INFO,
    };

    let (writer, guard) = match config {
        LoggingConfig::Console => tracing_appender::non_blocking(std::io::stdout()),
        LoggingConfig::File { dir_path, file_name } => {
            let file_appender = tracing_appender::rolling::Builder::new()
                .filename_prefix(file_name)
                .max_log_files(14)
                .rotation(Rotation::DAILY)
                .build(dir_path)?;
            tracing_appender::non_blocking(file_appender)
        }
    };

    let layer = tracing_subscriber::fmt::layer()
        .event_format(format)
        .with_writer(writer)
        .with_filter(crate_filter(log_level)?);

    tracing_subscriber::registry().with(layer).init();
    Ok(guard)
}

fn crate_filter(crates_level: tracing::Level) -> Result<EnvFilter, ParseError> {
    let mut env_filter = EnvFilter::new("info");

    for crate_name in CRATES {
        env_filter =
            env_filter.add_directive(format!("aegis_{crate_name}={crates_level}").parse()?);
    }

    Ok(env_filter)
}
