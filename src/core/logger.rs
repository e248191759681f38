//! Main logger facade
//!
//! A [`Logger`] owns one transport per configured entry in its [`Settings`]
//! and fans each record out to every transport whose level permits it.
//! Logging calls are synchronous fire-and-forget: a failing transport is
//! reported on stderr and never stops the fan-out to the others.

use super::{
    error::Result,
    log_level::LogLevel,
    record::LogRecord,
    settings::Settings,
    transport::Transport,
};
use crate::highlight::{self, HighlightSettings};
use crate::transports::build_transport;
use parking_lot::RwLock;

/// Ordered label set identifying a logger's context
///
/// Accepted anywhere labels are taken, from a single string or a sequence.
#[derive(Debug, Clone, Default)]
pub struct Labels(Vec<String>);

impl Labels {
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for Labels {
    fn from(label: &str) -> Self {
        Labels(vec![label.to_string()])
    }
}

impl From<String> for Labels {
    fn from(label: String) -> Self {
        Labels(vec![label])
    }
}

impl From<Vec<String>> for Labels {
    fn from(labels: Vec<String>) -> Self {
        Labels(labels)
    }
}

impl From<Vec<&str>> for Labels {
    fn from(labels: Vec<&str>) -> Self {
        Labels(labels.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for Labels {
    fn from(labels: &[&str]) -> Self {
        Labels(labels.iter().map(|s| s.to_string()).collect())
    }
}

/// What to log at `error` severity
///
/// Explicit variants instead of runtime shape inspection: a plain message,
/// or an error with its cause chain (the closest analogue of a stack trace).
#[derive(Debug, Clone)]
pub enum ErrorDetail {
    Message(String),
    /// Top-level error message followed by its source chain, outermost first
    Chain(Vec<String>),
}

impl ErrorDetail {
    /// Capture an error together with its full `source()` chain.
    #[must_use]
    pub fn from_error(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut chain = vec![err.to_string()];
        let mut current = err.source();
        while let Some(source) = current {
            chain.push(source.to_string());
            current = source.source();
        }
        ErrorDetail::Chain(chain)
    }

    /// Render for output: the chain when causes exist, else the bare message.
    fn render(&self) -> String {
        match self {
            ErrorDetail::Message(message) => message.clone(),
            ErrorDetail::Chain(chain) => {
                let mut out = chain.first().cloned().unwrap_or_default();
                for cause in chain.iter().skip(1) {
                    out.push_str("\n  caused by: ");
                    out.push_str(cause);
                }
                out
            }
        }
    }
}

impl From<&str> for ErrorDetail {
    fn from(message: &str) -> Self {
        ErrorDetail::Message(message.to_string())
    }
}

impl From<String> for ErrorDetail {
    fn from(message: String) -> Self {
        ErrorDetail::Message(message)
    }
}

/// Prefix and postfix wrapped around a highlighted message
#[derive(Debug, Clone, Default)]
pub struct SyntaxExtra {
    pub prefix: String,
    pub postfix: String,
}

impl SyntaxExtra {
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn postfix(mut self, postfix: impl Into<String>) -> Self {
        self.postfix = postfix.into();
        self
    }
}

pub struct Logger {
    labels: Vec<String>,
    settings: Settings,
    transports: RwLock<Vec<Box<dyn Transport>>>,
}

impl Logger {
    /// Construct a logger from a label set and transport settings.
    ///
    /// One transport is instantiated per config entry, in order. The
    /// file-rotator variant creates its target directory and file as a side
    /// effect.
    ///
    /// # Errors
    ///
    /// Fails fast if any transport cannot be constructed.
    pub fn new(labels: impl Into<Labels>, settings: Settings) -> Result<Self> {
        let labels = labels.into().into_vec();

        let mut transports: Vec<Box<dyn Transport>> = Vec::with_capacity(settings.transports.len());
        for config in &settings.transports {
            transports.push(build_transport(config, &labels)?);
        }

        Ok(Self {
            labels,
            settings,
            transports: RwLock::new(transports),
        })
    }

    /// Construct a logger with the default settings: console plus daily
    /// gzip-archived file rotation into `./logs`, both at `silly`.
    pub fn with_defaults(labels: impl Into<Labels>) -> Result<Self> {
        Self::new(labels, Settings::default())
    }

    /// Derive a child logger with `label` appended to this logger's labels.
    ///
    /// Returns a new facade built from the same settings; this logger and
    /// its transports are untouched. The child instantiates its own
    /// transports, so file-rotator side effects repeat.
    pub fn add_label(&self, label: impl Into<String>) -> Result<Logger> {
        let mut labels = self.labels.clone();
        labels.push(label.into());
        Logger::new(labels, self.settings.clone())
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Log a message at the given level, fanning out to every transport
    /// whose configured level permits it.
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        let record = LogRecord::new(level, message.into());

        let mut transports = self.transports.write();
        for transport in transports.iter_mut() {
            if record.level < transport.level() {
                continue;
            }
            if let Err(e) = transport.log(&record) {
                eprintln!(
                    "[LOGGER ERROR] Transport '{}' failed: {}",
                    transport.name(),
                    e
                );
            }
        }
    }

    pub fn flush(&self) -> Result<()> {
        let mut transports = self.transports.write();
        for transport in transports.iter_mut() {
            transport.flush()?;
        }
        Ok(())
    }

    #[inline]
    pub fn silly(&self, message: impl Into<String>) {
        self.log(LogLevel::Silly, message);
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn verbose(&self, message: impl Into<String>) {
        self.log(LogLevel::Verbose, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    /// Log at `error` severity.
    ///
    /// An [`ErrorDetail::Chain`] (built via [`ErrorDetail::from_error`])
    /// renders the full cause chain when sources exist, else just the
    /// message; plain strings are logged as-is.
    pub fn error(&self, detail: impl Into<ErrorDetail>) {
        self.log(LogLevel::Error, detail.into().render());
    }

    /// Log a description and an error as two separate emissions, in order.
    pub fn exception(&self, description: impl Into<String>, err: impl Into<ErrorDetail>) {
        self.error(description.into());
        self.error(err);
    }

    /// Syntax-highlight `message` and log it at `level`.
    ///
    /// `settings` is a language name or a [`HighlightOptions`] value merged
    /// into the defaults. The composed line is
    /// `"{prefix} {highlighted} {postfix}"` with surrounding whitespace
    /// trimmed.
    ///
    /// # Errors
    ///
    /// Fails with [`LoggerError::UnsupportedHighlightSettings`] when the
    /// settings name a language with no grammar; nothing is emitted then.
    ///
    /// [`HighlightOptions`]: crate::highlight::HighlightOptions
    /// [`LoggerError::UnsupportedHighlightSettings`]: super::error::LoggerError::UnsupportedHighlightSettings
    pub fn syntax(
        &self,
        level: LogLevel,
        settings: impl Into<HighlightSettings>,
        message: &str,
        extra: SyntaxExtra,
    ) -> Result<()> {
        let highlighted = highlight::highlight(message, &settings.into())?;
        let composed = format!("{} {} {}", extra.prefix, highlighted, extra.postfix);
        self.log(level, composed.trim());
        Ok(())
    }

    pub fn silly_syntax(
        &self,
        settings: impl Into<HighlightSettings>,
        message: &str,
        extra: SyntaxExtra,
    ) -> Result<()> {
        self.syntax(LogLevel::Silly, settings, message, extra)
    }

    pub fn debug_syntax(
        &self,
        settings: impl Into<HighlightSettings>,
        message: &str,
        extra: SyntaxExtra,
    ) -> Result<()> {
        self.syntax(LogLevel::Debug, settings, message, extra)
    }

    pub fn verbose_syntax(
        &self,
        settings: impl Into<HighlightSettings>,
        message: &str,
        extra: SyntaxExtra,
    ) -> Result<()> {
        self.syntax(LogLevel::Verbose, settings, message, extra)
    }

    pub fn info_syntax(
        &self,
        settings: impl Into<HighlightSettings>,
        message: &str,
        extra: SyntaxExtra,
    ) -> Result<()> {
        self.syntax(LogLevel::Info, settings, message, extra)
    }

    pub fn warn_syntax(
        &self,
        settings: impl Into<HighlightSettings>,
        message: &str,
        extra: SyntaxExtra,
    ) -> Result<()> {
        self.syntax(LogLevel::Warn, settings, message, extra)
    }

    pub fn error_syntax(
        &self,
        settings: impl Into<HighlightSettings>,
        message: &str,
        extra: SyntaxExtra,
    ) -> Result<()> {
        self.syntax(LogLevel::Error, settings, message, extra)
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        // Best effort flush so buffered file writes survive shutdown
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("connection refused")]
    struct Inner;

    #[derive(Debug, thiserror::Error)]
    #[error("request failed")]
    struct Outer(#[source] Inner);

    #[test]
    fn test_error_detail_from_plain_message() {
        let detail: ErrorDetail = "something broke".into();
        assert_eq!(detail.render(), "something broke");
    }

    #[test]
    fn test_error_detail_chain_rendering() {
        let detail = ErrorDetail::from_error(&Outer(Inner));
        assert_eq!(detail.render(), "request failed\n  caused by: connection refused");
    }

    #[test]
    fn test_error_detail_without_sources() {
        let detail = ErrorDetail::from_error(&Inner);
        assert_eq!(detail.render(), "connection refused");
    }

    #[test]
    fn test_labels_from_single_and_sequence() {
        let single: Labels = "api".into();
        assert_eq!(single.into_vec(), vec!["api".to_string()]);

        let many: Labels = vec!["api", "auth"].into();
        assert_eq!(many.into_vec(), vec!["api".to_string(), "auth".to_string()]);
    }

    #[test]
    fn test_syntax_extra_builder() {
        let extra = SyntaxExtra::default().prefix(">>").postfix("<<");
        assert_eq!(extra.prefix, ">>");
        assert_eq!(extra.postfix, "<<");
    }
}
