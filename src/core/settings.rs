//! Logger settings: transport configurations and their defaults
//!
//! A `Settings` value is an ordered list of transport configs. Order matters
//! only in that transports are instantiated and written to in the order
//! given; there is no other identity.

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Supported transport kinds
///
/// A closed set: anything else fails at the settings boundary with
/// [`LoggerError::UnsupportedTransport`], before any log call is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportKind {
    Console,
    FileRotator,
}

impl TransportKind {
    /// All supported transport kinds, exposed so callers can validate
    /// their own settings against the supported set.
    pub const ALL: [TransportKind; 2] = [TransportKind::Console, TransportKind::FileRotator];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportKind::Console => "console",
            TransportKind::FileRotator => "file_rotator",
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransportKind {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "console" => Ok(TransportKind::Console),
            "file_rotator" => Ok(TransportKind::FileRotator),
            other => Err(LoggerError::unsupported_transport(other)),
        }
    }
}

/// Rotation options for the file-rotator transport
///
/// Field names follow the external settings schema (`datePattern`,
/// `zippedArchive`), so a JSON settings document round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RotatorConfig {
    /// Target filename; `%DATE%` is replaced by the formatted current date
    pub filename: String,
    /// Directory the rotated files are written into
    pub dirname: PathBuf,
    /// Date pattern using `YYYY`/`MM`/`DD`/`HH`/`mm`/`ss` tokens
    pub date_pattern: String,
    /// Gzip files left behind by a rotation
    pub zipped_archive: bool,
}

impl Default for RotatorConfig {
    fn default() -> Self {
        Self {
            filename: "log-%DATE%.log".to_string(),
            dirname: PathBuf::from("./logs"),
            date_pattern: "YYYY-MM-DD".to_string(),
            zipped_archive: true,
        }
    }
}

/// Configuration for a single transport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportConfig {
    #[serde(rename = "type")]
    pub kind: TransportKind,
    /// Minimum severity this transport accepts; `Info` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<LogLevel>,
    #[serde(default)]
    pub colorize: bool,
    /// Rotator-specific options, ignored by the console transport
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<RotatorConfig>,
}

impl TransportConfig {
    /// Console transport config with the transport-level defaults
    #[must_use]
    pub fn console() -> Self {
        Self {
            kind: TransportKind::Console,
            level: None,
            colorize: false,
            config: None,
        }
    }

    /// File-rotator transport config with the given rotation options
    #[must_use]
    pub fn file_rotator(config: RotatorConfig) -> Self {
        Self {
            kind: TransportKind::FileRotator,
            level: None,
            colorize: false,
            config: Some(config),
        }
    }

    /// Set the minimum severity level
    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = Some(level);
        self
    }

    /// Set whether messages pass through with their ANSI styling intact
    #[must_use]
    pub fn with_colorize(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }
}

/// Ordered transport configurations for one logger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub transports: Vec<TransportConfig>,
}

impl Default for Settings {
    /// One colorized console transport and one colorized daily file rotator
    /// with gzip archiving into `./logs`, both at the most verbose level.
    fn default() -> Self {
        Self {
            transports: vec![
                TransportConfig::console()
                    .with_level(LogLevel::Silly)
                    .with_colorize(true),
                TransportConfig::file_rotator(RotatorConfig::default())
                    .with_level(LogLevel::Silly)
                    .with_colorize(true),
            ],
        }
    }
}

impl Settings {
    #[must_use]
    pub fn new(transports: Vec<TransportConfig>) -> Self {
        Self { transports }
    }

    /// Parse settings from a JSON document
    ///
    /// The transport type is validated through [`TransportKind::from_str`]
    /// after deserialization, so an unrecognized type is distinguishable
    /// from malformed JSON.
    ///
    /// # Errors
    ///
    /// Fails with [`LoggerError::JsonError`] on malformed JSON and with
    /// [`LoggerError::UnsupportedTransport`] on an unrecognized transport
    /// type.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let raw: RawSettings = serde_json::from_str(s)?;
        let mut transports = Vec::with_capacity(raw.transports.len());
        for transport in raw.transports {
            transports.push(TransportConfig {
                kind: transport.kind.parse()?,
                level: transport.level,
                colorize: transport.colorize,
                config: transport.config,
            });
        }
        Ok(Self { transports })
    }
}

/// Wire form of a transport config with the type still unvalidated
#[derive(Deserialize)]
struct RawTransportConfig {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    level: Option<LogLevel>,
    #[serde(default)]
    colorize: bool,
    #[serde(default)]
    config: Option<RotatorConfig>,
}

#[derive(Deserialize)]
struct RawSettings {
    transports: Vec<RawTransportConfig>,
}
