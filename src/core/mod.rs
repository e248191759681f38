//! Core logger types and traits

pub mod error;
pub mod format;
pub mod log_level;
pub mod logger;
pub mod record;
pub mod settings;
pub mod transport;

pub use error::{LoggerError, Result};
pub use format::{strip_ansi, LineFormatter, TimestampFormat};
pub use log_level::LogLevel;
pub use logger::{ErrorDetail, Labels, Logger, SyntaxExtra};
pub use record::LogRecord;
pub use settings::{RotatorConfig, Settings, TransportConfig, TransportKind};
pub use transport::Transport;
