//! Logging setup and the injectable research logger
//!
//! The responder never reaches for a global logger on its own: it is handed a
//! [`ResearchLog`] at construction. [`TargetLogger`] forwards to the `log`
//! facade, and [`init_logging`] installs the env_logger backend once at
//! program start.

use std::io::Write;

use log::{Level, Record};

use crate::LoggingConfig;
use crate::utils::constants::LOGGER_NAME;

/// Sink for the two log lines the responder emits
pub trait ResearchLog {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Forwards research log lines to the `log` facade under a fixed target
#[derive(Debug, Clone, Copy)]
pub struct TargetLogger {
    target: &'static str,
}

impl TargetLogger {
    #[must_use]
    pub fn new(target: &'static str) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &'static str {
        self.target
    }

    fn emit(&self, level: Level, message: &str) {
        log::logger().log(
            &Record::builder()
                .target(self.target)
                .level(level)
                .module_path_static(Some(module_path!()))
                .args(format_args!("{message}"))
                .build(),
        );
    }
}

impl Default for TargetLogger {
    fn default() -> Self {
        Self::new(LOGGER_NAME)
    }
}

impl ResearchLog for TargetLogger {
    fn info(&self, message: &str) {
        self.emit(Level::Info, message);
    }

    fn error(&self, message: &str) {
        self.emit(Level::Error, message);
    }
}

/// Level names as they appear in the log stream
pub fn level_name(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARNING",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

/// Render one log line: `{timestamp} - {target} - {LEVEL} - {message}`
pub fn format_line(timestamp: &str, target: &str, level: Level, message: &str) -> String {
    format!("{timestamp} - {target} - {} - {message}", level_name(level))
}

/// Install the env_logger backend writing to stderr
///
/// `RUST_LOG` takes precedence over `config.level`. Calling this twice is not
/// an error; the second call is a no-op.
pub fn init_logging(config: &LoggingConfig) {
    let timestamp_format = config.timestamp_format.clone();

    let result = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.level.as_str()),
    )
    .target(env_logger::Target::Stderr)
    .format(move |buf, record| {
        let timestamp = chrono::Local::now().format(&timestamp_format).to_string();
        writeln!(
            buf,
            "{}",
            format_line(
                &timestamp,
                record.target(),
                record.level(),
                &record.args().to_string()
            )
        )
    })
    .try_init();

    if let Err(e) = result {
        tracing::debug!("Logger already initialized: {}", e);
    }
}
