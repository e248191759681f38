//! Regex-driven syntax highlighting for logged code snippets
//!
//! Token classes are matched in priority order (comments, then strings,
//! numbers, keywords) with overlap suppression, and the winning spans are
//! wrapped in ANSI color codes back-to-front so earlier replacements never
//! shift later offsets.

pub mod grammar;

use crate::core::error::{LoggerError, Result};
use grammar::Grammar;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Double- or single-quoted string literals.
static STRING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""[^"]*"|'[^']*'"#).expect("Invalid string regex"));

/// Integer and decimal literals.
static NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b-?\d+(?:\.\d+)?\b").expect("Invalid number regex"));

static SLASH_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"//[^\n]*").expect("Invalid comment regex"));

static DASH_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--[^\n]*").expect("Invalid comment regex"));

static HASH_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[^\n]*").expect("Invalid comment regex"));

/// One keyword alternation per grammar, compiled once.
static KEYWORD_REGEXES: LazyLock<HashMap<&'static str, Regex>> = LazyLock::new(|| {
    grammar::GRAMMARS
        .iter()
        .map(|g| {
            let alternation = g
                .keywords
                .iter()
                .map(|k| regex::escape(k))
                .collect::<Vec<_>>()
                .join("|");
            let pattern = if g.case_insensitive {
                format!(r"(?i)\b(?:{})\b", alternation)
            } else {
                format!(r"\b(?:{})\b", alternation)
            };
            (
                g.name,
                Regex::new(&pattern).expect("Invalid keyword regex"),
            )
        })
        .collect()
});

fn comment_regex(prefix: &str) -> Option<&'static Regex> {
    match prefix {
        "//" => Some(&SLASH_COMMENT_REGEX),
        "--" => Some(&DASH_COMMENT_REGEX),
        "#" => Some(&HASH_COMMENT_REGEX),
        _ => None,
    }
}

/// How to highlight: a bare language name, or full options.
///
/// A closed set of settings shapes; anything a caller can construct is
/// well-formed, and only an unknown language name can fail at runtime.
#[derive(Debug, Clone)]
pub enum HighlightSettings {
    Language(String),
    Options(HighlightOptions),
}

impl From<&str> for HighlightSettings {
    fn from(language: &str) -> Self {
        HighlightSettings::Language(language.to_string())
    }
}

impl From<String> for HighlightSettings {
    fn from(language: String) -> Self {
        HighlightSettings::Language(language)
    }
}

impl From<HighlightOptions> for HighlightSettings {
    fn from(options: HighlightOptions) -> Self {
        HighlightSettings::Options(options)
    }
}

/// Highlight options; unset fields keep their defaults
#[derive(Debug, Clone, Default)]
pub struct HighlightOptions {
    /// Language to highlight as; `None` passes the message through untouched
    pub language: Option<String>,
}

impl HighlightOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

impl HighlightSettings {
    /// Merge into effective options: a bare language name overrides the
    /// default options' language, everything else keeps its default.
    fn resolve(&self) -> HighlightOptions {
        match self {
            HighlightSettings::Language(language) => {
                HighlightOptions::default().with_language(language.clone())
            }
            HighlightSettings::Options(options) => options.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenClass {
    Comment,
    Str,
    Number,
    Keyword,
}

impl TokenClass {
    fn fg_ansi(self) -> &'static str {
        match self {
            TokenClass::Comment => "\x1b[90m",
            TokenClass::Str => "\x1b[32m",
            TokenClass::Number => "\x1b[33m",
            TokenClass::Keyword => "\x1b[34m",
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Span {
    start: usize,
    end: usize,
}

impl Span {
    const fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

struct Match {
    span: Span,
    text: String,
    class: TokenClass,
}

fn overlaps_any(span: &Span, matches: &[Match]) -> bool {
    matches.iter().any(|m| span.overlaps(&m.span))
}

fn collect(regex: &Regex, class: TokenClass, message: &str, matches: &mut Vec<Match>) {
    for m in regex.find_iter(message) {
        let span = Span {
            start: m.start(),
            end: m.end(),
        };
        if !overlaps_any(&span, matches) {
            matches.push(Match {
                span,
                text: m.as_str().to_string(),
                class,
            });
        }
    }
}

fn apply_grammar(message: &str, grammar: &Grammar) -> String {
    let mut matches: Vec<Match> = Vec::new();

    if let Some(regex) = grammar.line_comment.and_then(comment_regex) {
        collect(regex, TokenClass::Comment, message, &mut matches);
    }
    collect(&STRING_REGEX, TokenClass::Str, message, &mut matches);
    collect(&NUMBER_REGEX, TokenClass::Number, message, &mut matches);

    if let Some(regex) = KEYWORD_REGEXES.get(grammar.name) {
        collect(regex, TokenClass::Keyword, message, &mut matches);
    }

    // Replace back-to-front so span offsets stay valid
    matches.sort_by(|a, b| b.span.start.cmp(&a.span.start));

    let mut result = message.to_string();
    for m in matches {
        let replacement = format!("{}{}\x1b[0m", m.class.fg_ansi(), m.text);
        result.replace_range(m.span.start..m.span.end, &replacement);
    }

    result
}

/// Highlight `message` according to `settings`.
///
/// # Errors
///
/// Fails with [`LoggerError::UnsupportedHighlightSettings`] when the
/// settings name a language with no grammar.
pub fn highlight(message: &str, settings: &HighlightSettings) -> Result<String> {
    let options = settings.resolve();

    let Some(language) = options.language.as_deref() else {
        return Ok(message.to_string());
    };

    let grammar = grammar::lookup(language).ok_or_else(|| {
        LoggerError::unsupported_highlight(format!("unknown language '{}'", language))
    })?;

    Ok(apply_grammar(message, grammar))
}
