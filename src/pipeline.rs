//! Optional collaborators around the core repair pass.
//!
//! A [`Pipeline`] runs up to three stages: an external rewrite service, the
//! heuristic repair itself, and an external formatter. The repair stage is
//! total, and collaborator failures never abort the run. A failed rewrite is
//! surfaced on [`PipelineOutcome::rewrite_error`] and the original text
//! proceeds; a failed format is surfaced on [`PipelineOutcome::warning`] and
//! the repaired text is kept.

use thiserror::Error;

use crate::options::Options;
use crate::repair::repair_with_options;

/// Error from an external rewrite service.
#[derive(Debug, Error)]
#[error("rewrite service failed: {0}")]
pub struct RewriteError(pub String);

/// Error from an external formatter.
#[derive(Debug, Error)]
#[error("formatter failed: {0}")]
pub struct FormatError(pub String);

/// Something that can propose a rewritten version of the input, for example
/// a model-backed suggestion service.
pub trait RewriteService {
    fn rewrite(&self, code: &str) -> Result<String, RewriteError>;
}

impl<F> RewriteService for F
where
    F: Fn(&str) -> Result<String, RewriteError>,
{
    fn rewrite(&self, code: &str) -> Result<String, RewriteError> {
        self(code)
    }
}

/// Something that can pretty-print already-repaired code.
pub trait Formatter {
    fn format(&self, code: &str) -> Result<String, FormatError>;
}

impl<F> Formatter for F
where
    F: Fn(&str) -> Result<String, FormatError>,
{
    fn format(&self, code: &str) -> Result<String, FormatError> {
        self(code)
    }
}

/// Result of a [`Pipeline`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutcome {
    /// Final text, formatted when a formatter was configured and succeeded.
    pub code: String,
    /// Rendered edit log from the repair stage, never empty.
    pub changes: Vec<String>,
    /// Set when the rewrite stage failed; the repair then ran on the
    /// original input.
    pub rewrite_error: Option<String>,
    /// Set when the format stage failed; `code` then holds the unformatted
    /// repair output.
    pub warning: Option<String>,
}

/// Rewrite, repair, format.
///
/// ```
/// use scriptrepair::Options;
/// use scriptrepair::pipeline::{FormatError, Pipeline};
///
/// let pipe = Pipeline::new(Options::default())
///     .with_formatter(|code: &str| -> Result<String, FormatError> {
///         Ok(format!("{code}\n"))
///     });
/// let out = pipe.run("quest x = 1");
/// assert_eq!(out.code, "const x = 1;\n");
/// assert!(out.warning.is_none());
/// ```
pub struct Pipeline {
    opts: Options,
    rewrite: Option<Box<dyn RewriteService>>,
    formatter: Option<Box<dyn Formatter>>,
}

impl Pipeline {
    pub fn new(opts: Options) -> Self {
        Self {
            opts,
            rewrite: None,
            formatter: None,
        }
    }

    pub fn with_rewrite(mut self, svc: impl RewriteService + 'static) -> Self {
        self.rewrite = Some(Box::new(svc));
        self
    }

    pub fn with_formatter(mut self, fmt: impl Formatter + 'static) -> Self {
        self.formatter = Some(Box::new(fmt));
        self
    }

    /// Runs the configured stages over `code`. Never fails: collaborator
    /// errors are downgraded into the outcome fields.
    pub fn run(&self, code: &str) -> PipelineOutcome {
        let mut rewrite_error = None;
        let input = match &self.rewrite {
            Some(svc) => match svc.rewrite(code) {
                Ok(rewritten) => rewritten,
                Err(err) => {
                    rewrite_error = Some(err.to_string());
                    code.to_string()
                }
            },
            None => code.to_string(),
        };

        let repaired = repair_with_options(&input, &self.opts);

        let (code, warning) = match &self.formatter {
            Some(fmt) => match fmt.format(&repaired.code) {
                Ok(formatted) => (formatted, None),
                Err(err) => (repaired.code, Some(err.to_string())),
            },
            None => (repaired.code, None),
        };

        PipelineOutcome {
            code,
            changes: repaired.changes,
            rewrite_error,
            warning,
        }
    }
}
