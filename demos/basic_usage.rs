//! Basic usage: labeled logging across console and rotating file transports

use colored::Colorize;
use fanlog::prelude::*;

fn main() -> Result<()> {
    // Default settings: console + daily gzip-archived files under ./logs,
    // both at the most verbose level
    let logger = Logger::with_defaults("api")?;

    logger.silly("fine-grained trace detail");
    logger.debug("cache warmed");
    logger.verbose("request headers parsed");
    logger.info("server started on port 8080");
    logger.warn("connection pool at 90% capacity");

    // Pre-styled messages pass through on colorized transports and are
    // stripped on plain ones
    logger.info(format!("deploy {} finished", "v2.4.1".green().bold()));

    // Errors render their full cause chain
    let io_err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
    logger.error(ErrorDetail::from_error(&io_err));
    logger.exception("while flushing session store", ErrorDetail::from_error(&io_err));

    // Child loggers append a label without touching the parent
    let auth = logger.add_label("auth")?;
    auth.info("token validated");

    // Custom settings: a single console transport that strips ANSI
    let quiet = Logger::new(
        "worker",
        Settings::new(vec![TransportConfig::console().with_level(LogLevel::Warn)]),
    )?;
    quiet.info("this is filtered out");
    quiet.warn("this reaches the console");

    logger.flush()?;
    Ok(())
}
