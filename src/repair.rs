use std::io::Write;

use crate::corrector;
use crate::error::RepairError;
use crate::log::{Logger, RepairLogEntry, render_changes};
use crate::options::Options;
use crate::statement;

/// Result of a full repair pass: the fixed code plus a human-readable
/// description of every edit.
///
/// `changes` is never empty. When the input needed no work it holds the
/// single placeholder entry `"No changes made."`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RepairOutcome {
    pub code: String,
    pub changes: Vec<String>,
}

#[cfg(feature = "serde")]
impl RepairOutcome {
    /// Pretty-printed JSON report of the outcome.
    pub fn to_json_pretty(&self) -> Result<String, RepairError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Runs both passes over `code` and returns the repaired text.
///
/// The token pass visits every line first, so its log entries always come
/// before the statement pass entries.
pub(crate) fn run_repair(code: &str, opts: &Options, log: &mut Logger) -> String {
    let mut corrected: Vec<String> = Vec::new();
    for (idx, raw) in code.split('\n').enumerate() {
        corrected.push(corrector::correct_line(raw, idx + 1, opts, log));
    }
    let (fixed, _) = statement::repair_lines(corrected.iter().map(String::as_str), opts, log);
    fixed.join("\n")
}

/// Repairs `code` with default [`Options`] and returns the fixed text.
///
/// This is the cheapest entry point: no edit log is collected.
///
/// ```
/// let fixed = scriptrepair::repair_to_string("quest x = 1");
/// assert_eq!(fixed, "const x = 1;");
/// ```
pub fn repair_to_string(code: &str) -> String {
    repair_to_string_with_options(code, &Options::default())
}

/// Repairs `code` with explicit [`Options`] and returns the fixed text.
pub fn repair_to_string_with_options(code: &str, opts: &Options) -> String {
    let mut log = Logger::disabled();
    run_repair(code, opts, &mut log)
}

/// Repairs `code` and returns the fixed text together with the structured
/// edit log. The log is empty when nothing changed; use [`repair`] if you
/// want the rendered placeholder instead.
pub fn repair_to_string_with_log(code: &str, opts: &Options) -> (String, Vec<RepairLogEntry>) {
    let mut log = Logger::enabled();
    let fixed = run_repair(code, opts, &mut log);
    (fixed, log.into_entries())
}

/// Repairs `code` with default [`Options`] and returns a [`RepairOutcome`].
///
/// ```
/// let out = scriptrepair::repair("quest x = 1");
/// assert_eq!(out.code, "const x = 1;");
/// assert_eq!(
///     out.changes,
///     vec![
///         "Line 1: Fixed typo 'quest' → 'const'".to_string(),
///         "Line 1: Added missing semicolon".to_string(),
///     ],
/// );
/// ```
pub fn repair(code: &str) -> RepairOutcome {
    repair_with_options(code, &Options::default())
}

/// Repairs `code` with explicit [`Options`] and returns a [`RepairOutcome`].
pub fn repair_with_options(code: &str, opts: &Options) -> RepairOutcome {
    let (fixed, entries) = repair_to_string_with_log(code, opts);
    RepairOutcome {
        code: fixed,
        changes: render_changes(&entries),
    }
}

/// Repairs `code` and writes the fixed text to `out`.
pub fn repair_to_writer<W: Write>(
    code: &str,
    opts: &Options,
    out: &mut W,
) -> Result<(), RepairError> {
    let mut log = Logger::disabled();
    let fixed = run_repair(code, opts, &mut log);
    out.write_all(fixed.as_bytes())?;
    Ok(())
}
