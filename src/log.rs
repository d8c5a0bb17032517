use std::fmt;

/// Placeholder change reported when a pass completed without touching the
/// input. Guarantees the rendered change list is never empty.
pub const NO_CHANGES: &str = "No changes made.";

/// One logged, line-attributed change applied during a repair pass.
/// Entries are append-only: once recorded they are never removed or
/// rewritten, and they keep the order their triggering condition was
/// detected in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairLogEntry {
    /// 1-based input line, or `None` for repairs applied past the last line
    /// (terminal brace completion).
    pub line: Option<usize>,
    pub message: String,
}

impl fmt::Display for RepairLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(n) => write!(f, "Line {}: {}", n, self.message),
            None => write!(f, "End of file: {}", self.message),
        }
    }
}

/// Append-only edit collector threaded through both passes. Disabled loggers
/// drop entries so log-free callers skip the bookkeeping; the text repairs
/// themselves are applied either way.
#[derive(Debug, Default)]
pub(crate) struct Logger {
    enable: bool,
    entries: Vec<RepairLogEntry>,
}

impl Logger {
    pub(crate) fn enabled() -> Self {
        Logger {
            enable: true,
            entries: Vec::new(),
        }
    }

    pub(crate) fn disabled() -> Self {
        Logger::default()
    }

    #[inline]
    pub(crate) fn push(&mut self, line: usize, message: impl Into<String>) {
        if self.enable {
            self.entries.push(RepairLogEntry {
                line: Some(line),
                message: message.into(),
            });
        }
    }

    #[inline]
    pub(crate) fn push_eof(&mut self, message: impl Into<String>) {
        if self.enable {
            self.entries.push(RepairLogEntry {
                line: None,
                message: message.into(),
            });
        }
    }

    pub(crate) fn entries(&self) -> &[RepairLogEntry] {
        &self.entries
    }

    pub(crate) fn take_entries(&mut self) -> Vec<RepairLogEntry> {
        std::mem::take(&mut self.entries)
    }

    pub(crate) fn into_entries(self) -> Vec<RepairLogEntry> {
        self.entries
    }
}

/// Render entries as the user-facing change list, substituting the
/// [`NO_CHANGES`] placeholder when nothing was logged.
pub(crate) fn render_changes(entries: &[RepairLogEntry]) -> Vec<String> {
    if entries.is_empty() {
        vec![NO_CHANGES.to_string()]
    } else {
        entries.iter().map(ToString::to_string).collect()
    }
}
