//! Language grammars for the highlighter
//!
//! A grammar is deliberately small: a keyword list plus a line-comment
//! prefix. String and number tokens are shared across languages, so that is
//! enough to make a logged snippet readable.

pub struct Grammar {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub keywords: &'static [&'static str],
    pub line_comment: Option<&'static str>,
    /// Keywords match regardless of case (SQL convention)
    pub case_insensitive: bool,
}

pub const GRAMMARS: &[Grammar] = &[
    Grammar {
        name: "javascript",
        aliases: &["js"],
        keywords: &[
            "async", "await", "break", "case", "catch", "class", "const", "continue", "default",
            "delete", "do", "else", "export", "extends", "false", "finally", "for", "function",
            "if", "import", "in", "instanceof", "let", "new", "null", "of", "return", "static",
            "switch", "this", "throw", "true", "try", "typeof", "undefined", "var", "while",
            "yield",
        ],
        line_comment: Some("//"),
        case_insensitive: false,
    },
    Grammar {
        name: "typescript",
        aliases: &["ts"],
        keywords: &[
            "any", "as", "async", "await", "boolean", "break", "case", "catch", "class", "const",
            "continue", "declare", "default", "else", "enum", "export", "extends", "false", "for",
            "function", "if", "implements", "import", "in", "interface", "let", "namespace",
            "never", "new", "null", "number", "of", "private", "public", "readonly", "return",
            "static", "string", "switch", "this", "throw", "true", "try", "type", "typeof",
            "undefined", "unknown", "var", "void", "while",
        ],
        line_comment: Some("//"),
        case_insensitive: false,
    },
    Grammar {
        name: "rust",
        aliases: &["rs"],
        keywords: &[
            "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
            "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod",
            "move", "mut", "pub", "ref", "return", "self", "static", "struct", "super", "trait",
            "true", "type", "unsafe", "use", "where", "while",
        ],
        line_comment: Some("//"),
        case_insensitive: false,
    },
    Grammar {
        name: "json",
        aliases: &[],
        keywords: &["true", "false", "null"],
        line_comment: None,
        case_insensitive: false,
    },
    Grammar {
        name: "sql",
        aliases: &[],
        keywords: &[
            "alter", "and", "as", "asc", "between", "by", "create", "delete", "desc", "distinct",
            "drop", "exists", "from", "group", "having", "in", "index", "inner", "insert", "into",
            "is", "join", "left", "like", "limit", "not", "null", "on", "or", "order", "outer",
            "primary", "right", "select", "set", "table", "union", "update", "values", "where",
        ],
        line_comment: Some("--"),
        case_insensitive: true,
    },
    Grammar {
        name: "bash",
        aliases: &["sh", "shell"],
        keywords: &[
            "case", "do", "done", "elif", "else", "esac", "exit", "export", "fi", "for",
            "function", "if", "in", "local", "return", "then", "until", "while",
        ],
        line_comment: Some("#"),
        case_insensitive: false,
    },
];

/// Resolve a language name or alias to its grammar.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static Grammar> {
    let wanted = name.to_lowercase();
    GRAMMARS
        .iter()
        .find(|g| g.name == wanted || g.aliases.contains(&wanted.as_str()))
}
