use crate::classify::{STATEMENT_KEYWORDS, count_byte, is_line_comment, starts_with_closer};
use crate::log::Logger;
use crate::options::Options;

/// Nesting depth inferred from the running brace balance. Unsigned and
/// saturating, so the floor at zero holds at every step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub(crate) struct Depth(usize);

impl Depth {
    pub(crate) const ZERO: Depth = Depth(0);

    pub(crate) fn level(self) -> usize {
        self.0
    }

    /// One level out, floor zero. Applied before indenting a line that
    /// starts with a closer so it aligns with its opener.
    fn close_one(self) -> Depth {
        Depth(self.0.saturating_sub(1))
    }

    /// Fold a finished line's own brace balance into the depth seen by the
    /// following lines.
    fn after_line(self, line: &str) -> Depth {
        let opens = count_byte(line, b'{');
        let closes = count_byte(line, b'}');
        Depth((self.0 + opens).saturating_sub(closes))
    }
}

/// Transient working state for one line of the statement pass.
pub(crate) struct LineRecord<'a> {
    raw: &'a str,
    trimmed: &'a str,
    number: usize,
}

impl<'a> LineRecord<'a> {
    pub(crate) fn new(raw: &'a str, number: usize) -> Self {
        Self {
            raw,
            trimmed: raw.trim(),
            number,
        }
    }
}

/// One step of the forward pass: returns the emitted line and the depth for
/// the next line. Blank lines pass through empty, untouched and unlogged.
pub(crate) fn repair_line(
    rec: &LineRecord<'_>,
    depth: Depth,
    opts: &Options,
    log: &mut Logger,
) -> (String, Depth) {
    if rec.trimmed.is_empty() {
        return (String::new(), depth);
    }

    let depth = if starts_with_closer(rec.trimmed) {
        depth.close_one()
    } else {
        depth
    };

    let mut line = rec.trimmed.to_string();

    // One missing ')' per line; lines opening a block are multi-line
    // constructs and left alone.
    if opts.balance_parens
        && count_byte(&line, b'(') > count_byte(&line, b')')
        && !line.contains('{')
    {
        line.push(')');
        log.push(rec.number, "Added missing ')'");
    }

    if opts.insert_semicolons && needs_semicolon(&line) {
        line.push(';');
        log.push(rec.number, "Added missing semicolon");
    }

    let emitted = if opts.reindent {
        let mut s = " ".repeat(opts.indent_width * depth.level());
        s.push_str(&line);
        s
    } else {
        let lead = &rec.raw[..rec.raw.len() - rec.raw.trim_start().len()];
        let mut s = String::with_capacity(lead.len() + line.len());
        s.push_str(lead);
        s.push_str(&line);
        s
    };

    let next = depth.after_line(&line);
    (emitted, next)
}

/// Statement-like lines missing a terminator get one: first word in the
/// fixed keyword set, or an `=` anywhere, or a trailing `)`.
fn needs_semicolon(line: &str) -> bool {
    if matches!(
        line.as_bytes().last(),
        Some(b';' | b'{' | b'}' | b'[' | b',')
    ) {
        return false;
    }
    if is_line_comment(line) {
        return false;
    }
    let first = line.split_whitespace().next().unwrap_or("");
    STATEMENT_KEYWORDS.contains(&first) || line.contains('=') || line.ends_with(')')
}

/// Forward pass over corrected lines. Returns the repaired lines (with any
/// terminal closers appended) and the depth left open after the last input
/// line.
pub(crate) fn repair_lines<'a, I>(
    lines: I,
    opts: &Options,
    log: &mut Logger,
) -> (Vec<String>, Depth)
where
    I: IntoIterator<Item = &'a str>,
{
    let mut fixed = Vec::new();
    let mut depth = Depth::ZERO;
    for (idx, raw) in lines.into_iter().enumerate() {
        let rec = LineRecord::new(raw, idx + 1);
        let (line, next) = repair_line(&rec, depth, opts, log);
        fixed.push(line);
        depth = next;
    }
    if opts.close_open_blocks {
        close_open_blocks(depth, opts, log, &mut fixed);
    }
    (fixed, depth)
}

/// Terminal completion: one `}` line per still-open block, each one level
/// shallower than the last, each logged individually.
pub(crate) fn close_open_blocks(
    depth: Depth,
    opts: &Options,
    log: &mut Logger,
    fixed: &mut Vec<String>,
) {
    for level in (0..depth.level()).rev() {
        let mut line = " ".repeat(opts.indent_width * level);
        line.push('}');
        fixed.push(line);
        log.push_eof("Added missing '}'");
    }
}
