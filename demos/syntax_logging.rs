//! Syntax-highlighted logging: code snippets with language grammars

use fanlog::prelude::*;

fn main() -> Result<()> {
    // Console only; colorize keeps the highlighting intact on the terminal
    let logger = Logger::new(
        "repl",
        Settings::new(vec![TransportConfig::console()
            .with_level(LogLevel::Silly)
            .with_colorize(true)]),
    )?;

    // Language by name
    logger.info_syntax("javascript", "const total = items.length; // count", SyntaxExtra::default())?;
    logger.debug_syntax("sql", "SELECT id FROM users WHERE active = 1", SyntaxExtra::default())?;

    // Full options with a prefix/postfix wrapper
    let options = HighlightOptions::new().with_language("rust");
    logger.warn_syntax(
        options,
        "let retries = 3;",
        SyntaxExtra::default().prefix("slow path:").postfix("(check backoff)"),
    )?;

    // An unknown language is rejected before anything is emitted
    if let Err(e) = logger.info_syntax("cobol", "MOVE A TO B", SyntaxExtra::default()) {
        logger.warn(format!("highlighting refused: {}", e));
    }

    logger.flush()?;
    Ok(())
}
