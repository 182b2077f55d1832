//! Logging system configuration and initialization
//!
//! Console logs go to stderr so that stdout carries nothing but the
//! grading report. File output is optional and rolls daily.

use anyhow::{Context, Result, anyhow};
use chrono::Utc;
use tracing::{debug, info};
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, time::FormatTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

pub use crate::infrastructure::config::LoggingConfig;

const LOG_FILE_PREFIX: &str = "html-grader.log";

/// UTC timestamps with millisecond precision
struct UtcTimeFormatter;

impl FormatTime for UtcTimeFormatter {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ"))
    }
}

/// Build the filter. `RUST_LOG` wins over the configured level.
///
/// Dependency chatter (HTTP stack, HTML tokenizer, selector engine) stays at
/// `warn` unless the configured level asks for trace output.
pub fn build_env_filter(level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let mut filter = EnvFilter::try_new(level)
        .with_context(|| format!("Invalid log level: {level}"))?;

    if !level.to_lowercase().contains("trace") {
        let quiet = [
            "reqwest=warn",
            "hyper=warn",
            "h2=warn",
            "html5ever=warn",
            "selectors=warn",
        ];
        for directive in quiet {
            filter = filter.add_directive(directive.parse()?);
        }
    }

    Ok(filter)
}

/// Initialize logging with the given configuration.
///
/// With file output enabled the returned guard must be held until exit;
/// dropping it flushes and stops the background writer.
pub fn init_logging_with_config(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    if !config.console_output && config.log_dir.is_none() {
        return Err(anyhow!("No logging output configured"));
    }

    let env_filter = build_env_filter(&config.level)?;

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();
    let mut file_guard = None;

    if config.console_output {
        let console = fmt::Layer::new()
            .with_writer(std::io::stderr)
            .with_timer(UtcTimeFormatter)
            .with_target(false);
        layers.push(if config.json_format {
            console.json().boxed()
        } else {
            console.boxed()
        });
    }

    if let Some(log_dir) = &config.log_dir {
        std::fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

        let (file_writer, guard) = non_blocking(rolling::daily(log_dir, LOG_FILE_PREFIX));
        file_guard = Some(guard);

        let file = fmt::Layer::new()
            .with_writer(file_writer)
            .with_timer(UtcTimeFormatter)
            .with_target(true)
            .with_ansi(false);
        layers.push(if config.json_format {
            file.json().boxed()
        } else {
            file.boxed()
        });
    }

    Registry::default()
        .with(layers)
        .with(env_filter)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    debug!("Logging system initialized");
    info!("Log level: {}", config.level);
    if let Some(log_dir) = &config.log_dir {
        info!("Log directory: {:?}", log_dir);
    }

    Ok(file_guard)
}
