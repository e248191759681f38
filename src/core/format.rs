//! Line formatting pipeline
//!
//! Each transport owns one [`LineFormatter`], built from its config and the
//! logger's label set. The formatter is a pure function from record to
//! rendered line:
//!
//! ```text
//! <timestamp> [<label>] <<level>> <message>
//! ```
//!
//! Transports configured without `colorize` get the message with all ANSI
//! escapes stripped, so plain sinks (files shipped to aggregators, dumb
//! terminals) never see escape sequences.

use super::record::LogRecord;
use super::settings::TransportConfig;
use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

/// CSI escape sequences as produced by terminal styling libraries.
static ANSI_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*[A-Za-z]").expect("Invalid ANSI regex"));

/// Remove all ANSI escape sequences from a string.
#[must_use]
pub fn strip_ansi(s: &str) -> String {
    ANSI_REGEX.replace_all(s, "").into_owned()
}

/// Timestamp format for rendered lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TimestampFormat {
    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,

    /// RFC 3339 with timezone offset: `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Custom strftime format
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }
}

/// Renders log records into output lines for one transport
#[derive(Debug, Clone)]
pub struct LineFormatter {
    label: String,
    colorize: bool,
    timestamp_format: TimestampFormat,
}

impl LineFormatter {
    /// Build the formatter for a transport config and label set.
    ///
    /// Multiple labels render comma-joined inside one bracket pair.
    #[must_use]
    pub fn new(config: &TransportConfig, labels: &[String]) -> Self {
        Self {
            label: labels.join(","),
            colorize: config.colorize,
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Set the timestamp format for this formatter
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Render a record into a single output line. Pure; no side effects.
    #[must_use]
    pub fn format(&self, record: &LogRecord) -> String {
        let message = if self.colorize {
            record.message.clone()
        } else {
            strip_ansi(&record.message)
        };

        format!(
            "{} [{}] <{}> {}",
            self.timestamp_format.format(&record.timestamp),
            self.label,
            record.level,
            message
        )
    }
}
