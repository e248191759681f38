//! Transport implementations and the factory dispatching on transport kind

pub mod console;
pub mod rotating_file;

pub use console::ConsoleTransport;
pub use rotating_file::{date_pattern_to_strftime, RotatingFileTransport};

// Re-export the trait alongside its implementations
pub use crate::core::Transport;

use crate::core::{LineFormatter, Result, TransportConfig, TransportKind};

/// Build the transport for a config entry, pairing it with its formatting
/// pipeline. Dispatch is exhaustive over [`TransportKind`], so every kind
/// reaches its own factory.
pub fn build_transport(
    config: &TransportConfig,
    labels: &[String],
) -> Result<Box<dyn Transport>> {
    let formatter = LineFormatter::new(config, labels);

    match config.kind {
        TransportKind::Console => Ok(Box::new(ConsoleTransport::new(config, formatter))),
        TransportKind::FileRotator => Ok(Box::new(RotatingFileTransport::new(config, formatter)?)),
    }
}
