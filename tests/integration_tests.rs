//! Integration tests for the logger facade
//!
//! These tests verify:
//! - Transport construction per settings entry
//! - The rendered line format
//! - Per-transport level floors
//! - error/exception/syntax convenience methods
//! - Child logger derivation
//! - ANSI stripping for non-colorized transports

use fanlog::core::settings::{RotatorConfig, Settings, TransportConfig, TransportKind};
use fanlog::core::log_level::LogLevel;
use fanlog::core::logger::{ErrorDetail, Logger, SyntaxExtra};
use fanlog::core::error::LoggerError;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn file_only_settings(dir: &Path, filename: &str, level: LogLevel, colorize: bool) -> Settings {
    Settings::new(vec![TransportConfig::file_rotator(RotatorConfig {
        filename: filename.to_string(),
        dirname: dir.to_path_buf(),
        date_pattern: "YYYY-MM-DD".to_string(),
        zipped_archive: false,
    })
    .with_level(level)
    .with_colorize(colorize)])
}

/// Find the file a rotator wrote, without recomputing its date stamp.
fn written_file(dir: &Path, prefix: &str) -> PathBuf {
    fs::read_dir(dir)
        .expect("Failed to read log dir")
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .find(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with(prefix))
        })
        .expect("No log file written")
}

#[test]
fn test_console_only_logger_constructs() {
    let settings = Settings::new(vec![TransportConfig::console().with_level(LogLevel::Silly)]);
    let logger = Logger::new("api", settings).expect("Failed to construct logger");
    logger.info("console only");
}

#[test]
fn test_file_rotator_only_logger_constructs() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let settings = file_only_settings(temp_dir.path(), "only-%DATE%.log", LogLevel::Silly, false);
    let logger = Logger::new("api", settings).expect("Failed to construct logger");
    logger.info("file only");
}

#[test]
fn test_unrecognized_transport_type_fails_before_any_log_call() {
    // An unknown type never survives the settings boundary, and it fails
    // with its own error kind rather than a generic parse error
    let err = Settings::from_json_str(
        r#"{ "transports": [ { "type": "syslog", "colorize": false } ] }"#,
    )
    .unwrap_err();
    assert!(matches!(err, LoggerError::UnsupportedTransport { .. }));

    let err = "syslog".parse::<TransportKind>().unwrap_err();
    assert!(matches!(err, LoggerError::UnsupportedTransport { .. }));
}

#[test]
fn test_line_format() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let settings = file_only_settings(temp_dir.path(), "fmt-%DATE%.log", LogLevel::Silly, false);
    let logger = Logger::new("api", settings).expect("Failed to construct logger");

    logger.info("server started");
    logger.flush().expect("Failed to flush");

    let content = fs::read_to_string(written_file(temp_dir.path(), "fmt-")).unwrap();
    let line = content.lines().next().expect("No line written");

    // <timestamp> [<label>] <<level>> <message>
    let rest = line
        .split_once(" [api] <info> ")
        .expect("Line should contain label and level sections");
    assert!(rest.0.ends_with('Z'), "ISO 8601 timestamp expected");
    assert!(rest.0.contains('T'));
    assert_eq!(rest.1, "server started");
}

#[test]
fn test_per_transport_level_floor() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut transports = file_only_settings(
        temp_dir.path(),
        "strict-%DATE%.log",
        LogLevel::Warn,
        false,
    )
    .transports;
    transports.extend(
        file_only_settings(temp_dir.path(), "loose-%DATE%.log", LogLevel::Silly, false).transports,
    );

    let logger = Logger::new("api", Settings::new(transports)).expect("Failed to construct logger");
    logger.info("routine");
    logger.error("broken");
    logger.flush().expect("Failed to flush");

    let strict = fs::read_to_string(written_file(temp_dir.path(), "strict-")).unwrap();
    let loose = fs::read_to_string(written_file(temp_dir.path(), "loose-")).unwrap();

    assert!(!strict.contains("routine"), "warn transport must drop info");
    assert!(strict.contains("broken"));
    assert!(loose.contains("routine"));
    assert!(loose.contains("broken"));
}

#[derive(Debug, thiserror::Error)]
#[error("connection refused")]
struct Inner;

#[derive(Debug, thiserror::Error)]
#[error("request failed")]
struct Outer(#[source] Inner);

#[test]
fn test_error_logs_cause_chain_when_present() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let settings = file_only_settings(temp_dir.path(), "err-%DATE%.log", LogLevel::Silly, false);
    let logger = Logger::new("api", settings).expect("Failed to construct logger");

    logger.error(ErrorDetail::from_error(&Outer(Inner)));
    logger.flush().expect("Failed to flush");

    let content = fs::read_to_string(written_file(temp_dir.path(), "err-")).unwrap();
    // Records are sanitized to one line; the chain arrives with escaped newlines
    assert!(content.contains("request failed\\n  caused by: connection refused"));
}

#[test]
fn test_error_logs_plain_message_without_chain() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let settings = file_only_settings(temp_dir.path(), "plain-%DATE%.log", LogLevel::Silly, false);
    let logger = Logger::new("api", settings).expect("Failed to construct logger");

    logger.error(ErrorDetail::from_error(&Inner));
    logger.error("just a message");
    logger.flush().expect("Failed to flush");

    let content = fs::read_to_string(written_file(temp_dir.path(), "plain-")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("<error> connection refused"));
    assert!(lines[1].ends_with("<error> just a message"));
}

#[test]
fn test_exception_emits_description_then_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let settings = file_only_settings(temp_dir.path(), "exc-%DATE%.log", LogLevel::Silly, false);
    let logger = Logger::new("api", settings).expect("Failed to construct logger");

    logger.exception("while fetching profile", ErrorDetail::from_error(&Inner));
    logger.flush().expect("Failed to flush");

    let content = fs::read_to_string(written_file(temp_dir.path(), "exc-")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2, "exception must produce two emissions");
    assert!(lines[0].contains("<error> while fetching profile"));
    assert!(lines[1].contains("<error> connection refused"));
}

#[test]
fn test_syntax_logs_one_highlighted_record() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    // colorize: true so the highlighting survives into the file
    let settings = file_only_settings(temp_dir.path(), "syn-%DATE%.log", LogLevel::Silly, true);
    let logger = Logger::new("api", settings).expect("Failed to construct logger");

    logger
        .syntax(LogLevel::Info, "javascript", "const a = 1;", SyntaxExtra::default())
        .expect("syntax should accept a known language");
    logger.flush().expect("Failed to flush");

    let content = fs::read_to_string(written_file(temp_dir.path(), "syn-")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("<info>"));
    assert!(lines[0].contains('\u{1b}'), "highlighting should add ANSI styling");
}

#[test]
fn test_syntax_prefix_postfix_and_trim() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let settings = file_only_settings(temp_dir.path(), "pre-%DATE%.log", LogLevel::Silly, false);
    let logger = Logger::new("api", settings).expect("Failed to construct logger");

    logger
        .info_syntax(
            "javascript",
            "const a = 1;",
            SyntaxExtra::default().prefix("snippet:"),
        )
        .expect("syntax should succeed");
    logger.flush().expect("Failed to flush");

    let content = fs::read_to_string(written_file(temp_dir.path(), "pre-")).unwrap();
    let line = content.lines().next().unwrap();
    // Empty postfix is trimmed away; no trailing space survives
    assert!(line.contains("<info> snippet: const a = 1;"));
    assert!(!line.ends_with(' '));
}

#[test]
fn test_syntax_unknown_language_fails_and_emits_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let settings = file_only_settings(temp_dir.path(), "bad-%DATE%.log", LogLevel::Silly, false);
    let logger = Logger::new("api", settings).expect("Failed to construct logger");

    let err = logger
        .syntax(LogLevel::Info, "cobol", "MOVE A TO B", SyntaxExtra::default())
        .unwrap_err();
    assert!(matches!(err, LoggerError::UnsupportedHighlightSettings { .. }));
    logger.flush().expect("Failed to flush");

    let content = fs::read_to_string(written_file(temp_dir.path(), "bad-")).unwrap();
    assert!(content.is_empty(), "failed syntax call must not emit");
}

#[test]
fn test_add_label_derives_child_without_touching_parent() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let settings = file_only_settings(temp_dir.path(), "lbl-%DATE%.log", LogLevel::Silly, false);
    let parent = Logger::new("api", settings).expect("Failed to construct logger");

    let child = parent.add_label("auth").expect("Failed to derive child");

    assert_eq!(parent.labels(), ["api"]);
    assert_eq!(child.labels(), ["api", "auth"]);

    parent.info("from parent");
    child.info("from child");
    parent.flush().expect("Failed to flush");
    child.flush().expect("Failed to flush");

    let content = fs::read_to_string(written_file(temp_dir.path(), "lbl-")).unwrap();
    assert!(content.contains("[api] <info> from parent"));
    assert!(content.contains("[api,auth] <info> from child"));
}

#[test]
fn test_colorize_false_output_has_no_ansi() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let settings = file_only_settings(temp_dir.path(), "noc-%DATE%.log", LogLevel::Silly, false);
    let logger = Logger::new("api", settings).expect("Failed to construct logger");

    logger.info("\u{1b}[31malready styled\u{1b}[0m");
    logger
        .info_syntax("javascript", "const a = 1;", SyntaxExtra::default())
        .expect("syntax should succeed");
    logger.flush().expect("Failed to flush");

    let content = fs::read_to_string(written_file(temp_dir.path(), "noc-")).unwrap();
    assert!(!content.contains('\u{1b}'), "stripped transport must never emit ANSI");
    assert!(content.contains("already styled"));
    assert!(content.contains("const a = 1;"));
}

#[test]
fn test_colorize_true_passes_styling_through() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let settings = file_only_settings(temp_dir.path(), "col-%DATE%.log", LogLevel::Silly, true);
    let logger = Logger::new("api", settings).expect("Failed to construct logger");

    logger.info("\u{1b}[31malready styled\u{1b}[0m");
    logger.flush().expect("Failed to flush");

    let content = fs::read_to_string(written_file(temp_dir.path(), "col-")).unwrap();
    assert!(content.contains("\u{1b}[31malready styled\u{1b}[0m"));
}

#[test]
fn test_all_leveled_helpers_reach_a_verbose_transport() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let settings = file_only_settings(temp_dir.path(), "lvl-%DATE%.log", LogLevel::Silly, false);
    let logger = Logger::new("api", settings).expect("Failed to construct logger");

    logger.silly("s");
    logger.debug("d");
    logger.verbose("v");
    logger.info("i");
    logger.warn("w");
    logger.error("e");
    logger.flush().expect("Failed to flush");

    let content = fs::read_to_string(written_file(temp_dir.path(), "lvl-")).unwrap();
    for level in ["silly", "debug", "verbose", "info", "warn", "error"] {
        assert!(
            content.contains(&format!("<{}>", level)),
            "missing level {}",
            level
        );
    }
    assert_eq!(content.lines().count(), 6);
}

#[test]
fn test_settings_order_matches_transport_order() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut transports =
        file_only_settings(temp_dir.path(), "a-%DATE%.log", LogLevel::Silly, false).transports;
    transports.push(TransportConfig::console().with_level(LogLevel::Error));

    // Mixed console + file settings construct fine and file still receives
    let logger = Logger::new("api", Settings::new(transports)).expect("Failed to construct logger");
    logger.info("ordered");
    logger.flush().expect("Failed to flush");

    let content = fs::read_to_string(written_file(temp_dir.path(), "a-")).unwrap();
    assert!(content.contains("ordered"));
}
