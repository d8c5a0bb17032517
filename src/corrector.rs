use crate::classify::{RESERVED_WORDS, is_ident_char, is_ident_start, is_quote, is_word_char};
use crate::log::Logger;
use crate::options::Options;

/// A declared `(typo, fix)` pair applied via whole-word substitution.
/// Patterns are expected to be identifier-like; boundaries are non-word
/// characters or line edges. A rule whose sides are equal is an identity
/// rule: skipped, never logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectionRule {
    pub typo: String,
    pub fix: String,
}

impl CorrectionRule {
    pub fn new(typo: impl Into<String>, fix: impl Into<String>) -> Self {
        Self {
            typo: typo.into(),
            fix: fix.into(),
        }
    }
}

/// Built-in dictionary in its fixed application order. Later rules see the
/// line as rewritten by earlier ones; the order is part of the contract.
const DEFAULT_RULES: &[(&str, &str)] = &[
    ("quest", "const"),
    ("cnst", "const"),
    ("let", "let"),
    ("var", "var"),
    ("fucntion", "function"),
    ("functio", "function"),
    ("fn", "function"),
    ("consol", "console"),
    ("console", "console"),
    ("log", "log"),
    ("retrun", "return"),
    ("retun", "return"),
    ("iff", "if"),
    ("esle", "else"),
    ("wihle", "while"),
    ("forr", "for"),
];

/// Token pass over one raw line: ordered whole-word substitutions, then the
/// bare call-argument fix. Emits one edit per rule that fired on this line,
/// however many occurrences it replaced.
pub(crate) fn correct_line(
    line: &str,
    line_no: usize,
    opts: &Options,
    log: &mut Logger,
) -> String {
    let mut out = line.to_string();
    if opts.fix_typos {
        let rules = DEFAULT_RULES.iter().copied().chain(
            opts.extra_rules
                .iter()
                .map(|r| (r.typo.as_str(), r.fix.as_str())),
        );
        for (typo, fix) in rules {
            if typo == fix {
                continue; // identity rule
            }
            if let Some(replaced) = replace_word(&out, typo, fix) {
                out = replaced;
                log.push(line_no, format!("Fixed typo '{}' → '{}'", typo, fix));
            }
        }
    }
    if opts.fix_bare_call_argument
        && let Some((wrapped, path)) = wrap_bare_argument(&out)
    {
        out = wrapped;
        log.push(line_no, format!("Fixed {} parenthesis", path));
    }
    out
}

/// Whole-word replacement of `word` across `line`. Returns `None` when no
/// occurrence matched, so callers log real changes only.
fn replace_word(line: &str, word: &str, with: &str) -> Option<String> {
    if word.is_empty() {
        return None;
    }
    let mut buf = String::new();
    let mut replaced = false;
    let mut last = 0;
    let mut from = 0;
    while let Some(rel) = line[from..].find(word) {
        let at = from + rel;
        let end = at + word.len();
        let left_ok = line[..at]
            .chars()
            .next_back()
            .map(|c| !is_word_char(c))
            .unwrap_or(true);
        let right_ok = line[end..]
            .chars()
            .next()
            .map(|c| !is_word_char(c))
            .unwrap_or(true);
        if left_ok && right_ok {
            buf.push_str(&line[last..at]);
            buf.push_str(with);
            last = end;
            replaced = true;
        }
        from = end;
    }
    if !replaced {
        return None;
    }
    buf.push_str(&line[last..]);
    Some(buf)
}

/// `name "arg"` with no parenthesis anywhere on the line becomes
/// `name("arg")`. The opening quote is the first one on the line that
/// follows an identifier path across whitespace, wherever that sequence
/// sits; the wrapped span runs through the line's last quote and the gap
/// after the call path is dropped. Returns the rewritten line and the path
/// for the log message.
fn wrap_bare_argument(line: &str) -> Option<(String, String)> {
    if line.contains('(') {
        return None;
    }
    let last = line.rfind(is_quote)?;
    for (q, _) in line.char_indices().filter(|&(_, c)| is_quote(c)) {
        if last < q + 2 {
            break; // need content between two quote marks
        }
        let before = &line[..q];
        let head = before.trim_end();
        if head.is_empty() || head.len() == before.len() {
            continue; // the argument must follow the path across whitespace
        }
        let Some(start) = trailing_path_start(head) else {
            continue;
        };
        let path = &head[start..];
        if RESERVED_WORDS.contains(&path) {
            continue;
        }
        let mut fixed = String::with_capacity(line.len() + 2);
        fixed.push_str(head);
        fixed.push('(');
        fixed.push_str(&line[q..=last]);
        fixed.push(')');
        fixed.push_str(&line[last + 1..]);
        return Some((fixed, path.to_string()));
    }
    None
}

/// Byte offset where the trailing dotted identifier path of `head` begins,
/// if its tail is one.
fn trailing_path_start(head: &str) -> Option<usize> {
    let mut start = head.len();
    for (i, c) in head.char_indices().rev() {
        if is_ident_char(c) || c == '.' {
            start = i;
        } else {
            break;
        }
    }
    if start == head.len() {
        return None;
    }
    let path = &head[start..];
    if path.starts_with('.') || path.ends_with('.') {
        return None;
    }
    let segments_ok = path.split('.').all(|seg| {
        seg.chars().next().map(is_ident_start).unwrap_or(false) && seg.chars().all(is_ident_char)
    });
    if segments_ok { Some(start) } else { None }
}
