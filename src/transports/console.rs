//! Console transport implementation

use crate::core::{LineFormatter, LogLevel, LogRecord, Result, Transport, TransportConfig};

pub struct ConsoleTransport {
    level: LogLevel,
    formatter: LineFormatter,
}

impl ConsoleTransport {
    /// Build a console transport from its config and formatting pipeline.
    ///
    /// A missing `level` defaults to `info`.
    #[must_use]
    pub fn new(config: &TransportConfig, formatter: LineFormatter) -> Self {
        Self {
            level: config.level.unwrap_or_default(),
            formatter,
        }
    }
}

impl Transport for ConsoleTransport {
    fn log(&mut self, record: &LogRecord) -> Result<()> {
        let line = self.formatter.format(record);

        // Route error records to stderr, everything else to stdout
        match record.level {
            LogLevel::Error => eprintln!("{}", line),
            _ => println!("{}", line),
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        use std::io::Write;
        // Flush both stdout and stderr since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }

    fn level(&self) -> LogLevel {
        self.level
    }
}
