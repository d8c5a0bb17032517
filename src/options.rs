use crate::corrector::CorrectionRule;

#[derive(Clone, Debug)]
pub struct Options {
    /// Spaces emitted per nesting level when reindenting.
    pub indent_width: usize,
    /// Apply whole-word typo substitutions from the built-in dictionary.
    /// Substitution sees raw text only: a typo-looking token inside a string
    /// literal or comment is rewritten too.
    pub fix_typos: bool,
    /// Wrap a bare quoted call argument in parentheses, like
    /// `console.log "hi"` -> `console.log("hi")`.
    pub fix_bare_call_argument: bool,
    /// Append a single `)` on lines that open more parentheses than they
    /// close (and open no block).
    pub balance_parens: bool,
    /// Append `;` to statement-like lines that lack a terminator.
    pub insert_semicolons: bool,
    /// Rewrite each line's leading whitespace from the inferred nesting
    /// depth. When disabled, lines keep their original indentation
    /// (whitespace-only lines are still normalized to empty).
    pub reindent: bool,
    /// Close still-open `{` blocks with trailing `}` lines at end of input.
    pub close_open_blocks: bool,
    /// Extra correction rules applied after the built-in dictionary, in the
    /// order given. Identity rules are skipped.
    pub extra_rules: Vec<CorrectionRule>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            indent_width: 2,
            fix_typos: true,
            fix_bare_call_argument: true,
            balance_parens: true,
            insert_semicolons: true,
            reindent: true,
            close_open_blocks: true,
            extra_rules: Vec::new(),
        }
    }
}
