use memchr::memchr_iter;

/// Word characters for whole-word rule matching, `\b`-style: `[A-Za-z0-9_]`.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

#[inline]
pub fn is_ident_char(c: char) -> bool {
    is_word_char(c) || c == '$'
}

#[inline]
pub fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

/// A trimmed line whose first character closes a block or a list.
#[inline]
pub fn starts_with_closer(line: &str) -> bool {
    matches!(line.as_bytes().first(), Some(b'}' | b']'))
}

#[inline]
pub fn is_line_comment(line: &str) -> bool {
    line.starts_with("//")
}

#[inline]
pub fn count_byte(line: &str, needle: u8) -> usize {
    memchr_iter(needle, line.as_bytes()).count()
}

/// First words that mark a line as statement-like for semicolon inference.
pub const STATEMENT_KEYWORDS: &[&str] = &[
    "const", "let", "var", "return", "import", "export", "console",
];

/// Words that must never be mistaken for a call path by the bare-argument
/// heuristic; wrapping `import "mod"` or `return "x"` would change meaning.
pub const RESERVED_WORDS: &[&str] = &[
    "const", "let", "var", "return", "import", "export", "if", "else", "for", "while", "function",
];
