mod config;

pub use config::{LogFormat, LoggingConfig};

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. Logs go to stderr so that command
/// output on stdout stays clean.
pub fn init_tracing(config: &LoggingConfig) -> crate::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };

    installed.map_err(|e| crate::SchemeGuardError::LoggingError(e.to_string()))?;

    tracing::debug!(format = ?config.format, "Tracing initialized");
    Ok(())
}
