//! Heuristic lexical repair for almost-valid script code.
//!
//! `scriptrepair` takes curly-brace, semicolon-terminated code that is
//! nearly right and makes it runnable: keyword typos are corrected,
//! unbalanced `(` and `{` are closed, statements get their missing
//! semicolons, and every line is re-indented from the inferred block depth.
//! Every edit is logged in a human-readable form.
//!
//! The repair is line-oriented and total: any input produces output, and no
//! entry point returns an error for malformed code. It never parses the
//! language, so quoted strings and line comments are rewritten like any
//! other text. That trade-off keeps the pass cheap and predictable; use
//! [`Options`] to narrow which rules run.
//!
//! # Examples
//!
//! ```
//! let out = scriptrepair::repair("quest x = 1\nconsole.log(x");
//! assert_eq!(out.code, "const x = 1;\nconsole.log(x);");
//! assert_eq!(
//!     out.changes,
//!     vec![
//!         "Line 1: Fixed typo 'quest' → 'const'".to_string(),
//!         "Line 1: Added missing semicolon".to_string(),
//!         "Line 2: Added missing ')'".to_string(),
//!         "Line 2: Added missing semicolon".to_string(),
//!     ],
//! );
//! ```
//!
//! Extra correction rules cascade after the built-ins:
//!
//! ```
//! use scriptrepair::{CorrectionRule, Options};
//!
//! let mut opts = Options::default();
//! opts.extra_rules.push(CorrectionRule::new("pritn", "print"));
//! let fixed = scriptrepair::repair_to_string_with_options("pritn(1)", &opts);
//! assert_eq!(fixed, "print(1);");
//! ```
//!
//! Chunked input goes through [`StreamRepairer`] (or the one-shot
//! [`repair_chunks_to_string`]); the concatenated output is byte-identical
//! to the batch entry points.
//!
//! # Feature flags
//!
//! * `serde` (default): `Serialize`/`Deserialize` on [`RepairOutcome`] and
//!   the `--json` report in the CLI.

mod classify;
pub mod cli;
mod corrector;
pub mod error;
mod log;
pub mod options;
pub mod pipeline;
mod repair;
mod statement;
pub mod stream;

pub use corrector::CorrectionRule;
pub use error::RepairError;
pub use log::{NO_CHANGES, RepairLogEntry};
pub use options::Options;
pub use pipeline::{Pipeline, PipelineOutcome};
pub use repair::{
    RepairOutcome, repair, repair_to_string, repair_to_string_with_log,
    repair_to_string_with_options, repair_to_writer, repair_with_options,
};
pub use stream::{StreamRepairer, repair_chunks_to_string};

#[cfg(test)]
mod tests;
