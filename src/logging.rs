//! Log file setup.
//!
//! Every run appends to a plain-text log file, one event per line:
//!
//! ```text
//! 16-10-2026 14:03:27 - DEBUG - sys is built-in.
//! ```
//!
//! The file is opened in append mode and never truncated or rotated.
//! An optional stderr layer mirrors events when `--debug` is given.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{prelude::*, EnvFilter, Layer};

use crate::error::{LaunchpadError, Result};

/// Timestamp format used for every log line.
pub const LOG_DATE_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Separator written at the start of each run.
pub const RUN_SEPARATOR: &str =
    "*******************************************************************************************************";

/// `<date> <time> - <LEVEL> - <message>` line format.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogLineFormat;

impl<S, N> FormatEvent<S, N> for LogLineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(
            writer,
            "{} - {} - ",
            Local::now().format(LOG_DATE_FORMAT),
            level_name(event.metadata().level())
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Level names as they appear in the log file.
pub fn level_name(level: &Level) -> &'static str {
    match *level {
        Level::TRACE => "TRACE",
        Level::DEBUG => "DEBUG",
        Level::INFO => "INFO",
        Level::WARN => "WARNING",
        Level::ERROR => "ERROR",
    }
}

/// Open the log file for appending, creating it if needed.
pub fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LaunchpadError::LogFile {
            path: path.to_path_buf(),
            source,
        })
}

/// Build the file layer that writes [`LogLineFormat`] lines to `file`.
pub fn file_layer<S>(file: File) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
{
    tracing_subscriber::fmt::layer()
        .event_format(LogLineFormat)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .with_filter(EnvFilter::new("launchpad=debug"))
}

/// Initialize the global subscriber.
///
/// The file layer always records at DEBUG. The stderr layer is enabled by
/// `debug`, or by `RUST_LOG` when that is set.
pub fn init(log_file: &Path, debug: bool) -> Result<()> {
    let file = open_log_file(log_file)?;

    let stderr_filter = if debug {
        Some(EnvFilter::new("launchpad=debug"))
    } else {
        EnvFilter::try_from_default_env().ok()
    };
    let stderr_layer = stderr_filter.map(|filter| {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_filter(filter)
    });

    tracing_subscriber::registry()
        .with(file_layer(file))
        .with(stderr_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {}", e))?;

    tracing::debug!("{}", RUN_SEPARATOR);
    tracing::debug!("Started launchpad.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn log_with_file<F: FnOnce()>(path: &Path, f: F) {
        let file = open_log_file(path).unwrap();
        let subscriber = tracing_subscriber::registry().with(file_layer(file));
        tracing::subscriber::with_default(subscriber, f);
    }

    #[test]
    fn level_names_match_log_format() {
        assert_eq!(level_name(&Level::DEBUG), "DEBUG");
        assert_eq!(level_name(&Level::WARN), "WARNING");
        assert_eq!(level_name(&Level::ERROR), "ERROR");
    }

    #[test]
    fn writes_formatted_lines() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("app.log");

        log_with_file(&path, || {
            tracing::debug!("sys is built-in.");
            tracing::error!("Failed to install foo: boom");
        });

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" - DEBUG - sys is built-in."));
        assert!(lines[1].ends_with(" - ERROR - Failed to install foo: boom"));

        // "DD-MM-YYYY HH:MM:SS" is 19 characters.
        let stamp = &lines[0][..19];
        assert!(chrono::NaiveDateTime::parse_from_str(stamp, LOG_DATE_FORMAT).is_ok());
    }

    #[test]
    fn appends_across_runs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("app.log");
        fs::write(&path, "previous run\n").unwrap();

        log_with_file(&path, || tracing::debug!("second run"));

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("previous run\n"));
        assert!(content.contains("second run"));
    }

    #[test]
    fn open_log_file_reports_path_on_failure() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing-dir").join("app.log");
        let err = open_log_file(&path).unwrap_err();
        assert!(matches!(err, LaunchpadError::LogFile { .. }));
        assert!(err.to_string().contains("missing-dir"));
    }
}
