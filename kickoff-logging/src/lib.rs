//! Tracing initialization for kickoff
//!
//! Diagnostic logs are kept apart from the menu's own output: by default they
//! go to stderr at `warn`, so an interactive session stays clean.
//!
//! Environment variables:
//! - `RUST_LOG` - filter directives, e.g. `debug` or `kickoff_core=info`
//! - `RUST_LOG_FORMAT` - `pretty` (default), `compact` or `json`
//! - `LOG_OUTPUT` - `console` (default), `file` or `both`
//! - `LOG_FILE_PATH` - log file location, default `<tmp>/kickoff.log`,
//!   rotated daily

use std::env;
use std::path::{Path, PathBuf};

use kickoff_core::error::{KickoffError, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::{self, writer::BoxMakeWriter, writer::MakeWriterExt},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Compact,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            "compact" => LogFormat::Compact,
            _ => LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    Console,
    File,
    Both,
}

impl LogOutput {
    fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "file" => LogOutput::File,
            "both" => LogOutput::Both,
            _ => LogOutput::Console,
        }
    }
}

/// Logging settings resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub filter: String,
    pub format: LogFormat,
    pub output: LogOutput,
    pub file_path: PathBuf,
}

impl LogSettings {
    /// Read settings from the environment, using `default_filter` when
    /// `RUST_LOG` is unset.
    pub fn from_env(default_filter: &str) -> Self {
        Self::from_lookup(default_filter, |key| env::var(key).ok())
    }

    fn from_lookup(default_filter: &str, lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            filter: lookup("RUST_LOG").unwrap_or_else(|| default_filter.to_string()),
            format: LogFormat::parse(&lookup("RUST_LOG_FORMAT").unwrap_or_default()),
            output: LogOutput::parse(&lookup("LOG_OUTPUT").unwrap_or_default()),
            file_path: lookup("LOG_FILE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| env::temp_dir().join("kickoff.log")),
        }
    }
}

/// Initialize the global subscriber from the environment.
///
/// The returned guard flushes file output on drop and must be held for the
/// life of the program.
pub fn init(default_filter: &str) -> Result<Option<WorkerGuard>> {
    init_with(&LogSettings::from_env(default_filter))
}

pub fn init_with(settings: &LogSettings) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_new(&settings.filter).map_err(|e| {
        KickoffError::Config(format!("Invalid log filter '{}': {e}", settings.filter))
    })?;

    let mut guard = None;
    let writer = match settings.output {
        LogOutput::Console => BoxMakeWriter::new(std::io::stderr),
        LogOutput::File => {
            let (file, file_guard) = file_writer(&settings.file_path);
            guard = Some(file_guard);
            BoxMakeWriter::new(file)
        }
        LogOutput::Both => {
            let (file, file_guard) = file_writer(&settings.file_path);
            guard = Some(file_guard);
            BoxMakeWriter::new(std::io::stderr.and(file))
        }
    };
    let ansi = settings.output == LogOutput::Console;

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = match settings.format {
        LogFormat::Json => registry
            .with(fmt::layer().with_ansi(false).json().with_writer(writer))
            .try_init(),
        LogFormat::Compact => registry
            .with(fmt::layer().with_ansi(ansi).compact().with_writer(writer))
            .try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_ansi(ansi).pretty().with_writer(writer))
            .try_init(),
    };
    result.map_err(|e| KickoffError::Internal(format!("Failed to initialize tracing: {e}")))?;

    Ok(guard)
}

fn file_writer(path: &Path) -> (tracing_appender::non_blocking::NonBlocking, WorkerGuard) {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(env::temp_dir);
    let file_name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| "kickoff.log".into());
    let appender = tracing_appender::rolling::daily(dir, file_name);
    tracing_appender::non_blocking(appender)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> LogSettings {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        LogSettings::from_lookup("warn", |key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let s = settings(&[]);
        assert_eq!(s.filter, "warn");
        assert_eq!(s.format, LogFormat::Pretty);
        assert_eq!(s.output, LogOutput::Console);
        assert!(s.file_path.ends_with("kickoff.log"));
    }

    #[test]
    fn test_environment_overrides() {
        let s = settings(&[
            ("RUST_LOG", "kickoff_core=debug"),
            ("RUST_LOG_FORMAT", "JSON"),
            ("LOG_OUTPUT", "both"),
            ("LOG_FILE_PATH", "/var/log/kickoff/run.log"),
        ]);
        assert_eq!(s.filter, "kickoff_core=debug");
        assert_eq!(s.format, LogFormat::Json);
        assert_eq!(s.output, LogOutput::Both);
        assert_eq!(s.file_path, PathBuf::from("/var/log/kickoff/run.log"));
    }

    #[test]
    fn test_unknown_values_fall_back() {
        let s = settings(&[("RUST_LOG_FORMAT", "fancy"), ("LOG_OUTPUT", "syslog")]);
        assert_eq!(s.format, LogFormat::Pretty);
        assert_eq!(s.output, LogOutput::Console);
    }

    #[test]
    fn test_invalid_filter_is_rejected() {
        let mut s = settings(&[]);
        s.filter = "kickoff=verbose".to_string();
        assert!(matches!(init_with(&s), Err(KickoffError::Config(_))));
    }

    #[test]
    fn test_second_init_returns_error() {
        // Only one global subscriber per process; a repeat must not panic.
        let s = settings(&[]);
        let _ = init_with(&s);
        assert!(init_with(&s).is_err());
    }
}
