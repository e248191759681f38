//! Transport trait for log output destinations

use super::{error::Result, log_level::LogLevel, record::LogRecord};

pub trait Transport: Send + Sync {
    fn log(&mut self, record: &LogRecord) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
    /// Minimum severity this transport accepts
    fn level(&self) -> LogLevel;
}
