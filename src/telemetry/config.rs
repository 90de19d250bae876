/// Output format for log events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// Filter used when `RUST_LOG` is not set
    pub default_filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            default_filter: "schemeguard=info".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        let format = std::env::var("SCHEMEGUARD_LOG_FORMAT")
            .map(|v| parse_format(&v))
            .unwrap_or(LogFormat::Text);

        let default_filter = std::env::var("SCHEMEGUARD_LOG")
            .unwrap_or_else(|_| "schemeguard=info".to_string());

        Self {
            format,
            default_filter,
        }
    }

    /// Raise the default filter to debug (`--verbose`)
    pub fn verbose(mut self) -> Self {
        self.default_filter = "schemeguard=debug".to_string();
        self
    }
}

fn parse_format(value: &str) -> LogFormat {
    match value.trim().to_ascii_lowercase().as_str() {
        "json" => LogFormat::Json,
        _ => LogFormat::Text,
    }
}
