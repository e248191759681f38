//! # Fanlog
//!
//! A labeled multi-transport logger: one facade, many sinks.
//!
//! ## Features
//!
//! - **Multiple Transports**: console and date-rotating file sinks, each with
//!   its own severity floor
//! - **Uniform Lines**: `<timestamp> [<label>] <<level>> <message>` on every
//!   transport, with optional ANSI stripping for plain sinks
//! - **Labeled Contexts**: derive child loggers with `add_label` without
//!   touching the parent
//! - **Highlighted Snippets**: log code with regex-driven syntax highlighting
//!
//! ## Example
//!
//! ```no_run
//! use fanlog::prelude::*;
//!
//! let logger = Logger::with_defaults("api").expect("logger construction");
//! logger.info("server started");
//! logger.info_syntax("javascript", "const a = 1;", SyntaxExtra::default()).unwrap();
//!
//! let child = logger.add_label("auth").expect("child logger");
//! child.warn("token expiring");
//! ```

pub mod core;
pub mod highlight;
pub mod transports;

pub mod prelude {
    pub use crate::core::{
        strip_ansi, ErrorDetail, Labels, LineFormatter, LogLevel, LogRecord, Logger, LoggerError,
        Result, RotatorConfig, Settings, SyntaxExtra, TimestampFormat, Transport, TransportConfig,
        TransportKind,
    };
    pub use crate::highlight::{HighlightOptions, HighlightSettings};
    pub use crate::transports::{ConsoleTransport, RotatingFileTransport};
}

// `self::` disambiguates the local module from the `core` crate
pub use self::core::{
    strip_ansi, ErrorDetail, Labels, LineFormatter, LogLevel, LogRecord, Logger, LoggerError,
    Result, RotatorConfig, Settings, SyntaxExtra, TimestampFormat, Transport, TransportConfig,
    TransportKind,
};
pub use self::highlight::{HighlightOptions, HighlightSettings};
pub use self::transports::{ConsoleTransport, RotatingFileTransport};
