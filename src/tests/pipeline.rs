use super::*;

use crate::pipeline::{FormatError, Formatter, RewriteError, RewriteService};

struct CannedRewrite(&'static str);

impl RewriteService for CannedRewrite {
    fn rewrite(&self, _code: &str) -> Result<String, RewriteError> {
        Ok(self.0.to_string())
    }
}

struct OfflineRewrite;

impl RewriteService for OfflineRewrite {
    fn rewrite(&self, _code: &str) -> Result<String, RewriteError> {
        Err(RewriteError("model unreachable".to_string()))
    }
}

struct TrailingNewlineFormatter;

impl Formatter for TrailingNewlineFormatter {
    fn format(&self, code: &str) -> Result<String, FormatError> {
        Ok(format!("{}\n", code))
    }
}

struct BrokenFormatter;

impl Formatter for BrokenFormatter {
    fn format(&self, _code: &str) -> Result<String, FormatError> {
        Err(FormatError("printer crashed".to_string()))
    }
}

#[test]
fn bare_pipeline_matches_direct_repair() {
    let out = Pipeline::new(Options::default()).run("quest x = 1");
    let direct = crate::repair("quest x = 1");
    assert_eq!(out.code, direct.code);
    assert_eq!(out.changes, direct.changes);
    assert!(out.rewrite_error.is_none());
    assert!(out.warning.is_none());
}

#[test]
fn rewrite_output_feeds_the_repair() {
    let pipe = Pipeline::new(Options::default()).with_rewrite(CannedRewrite("let total = 0"));
    let out = pipe.run("quest x = 1");
    assert_eq!(out.code, "let total = 0;");
    assert_eq!(out.changes, vec!["Line 1: Added missing semicolon".to_string()]);
    assert!(out.rewrite_error.is_none());
}

#[test]
fn failed_rewrite_repairs_the_original() {
    let pipe = Pipeline::new(Options::default()).with_rewrite(OfflineRewrite);
    let out = pipe.run("quest x = 1");
    assert_eq!(out.code, "const x = 1;");
    assert_eq!(
        out.rewrite_error.as_deref(),
        Some("rewrite service failed: model unreachable"),
    );
    assert!(out.warning.is_none());
}

#[test]
fn formatter_success_replaces_code() {
    let pipe = Pipeline::new(Options::default()).with_formatter(TrailingNewlineFormatter);
    let out = pipe.run("quest x = 1");
    assert_eq!(out.code, "const x = 1;\n");
    assert!(out.warning.is_none());
}

#[test]
fn failed_format_keeps_repaired_text() {
    let pipe = Pipeline::new(Options::default()).with_formatter(BrokenFormatter);
    let out = pipe.run("quest x = 1");
    assert_eq!(out.code, "const x = 1;");
    assert_eq!(out.warning.as_deref(), Some("formatter failed: printer crashed"));
    assert!(out.rewrite_error.is_none());
}

#[test]
fn both_failures_surface_together() {
    let pipe = Pipeline::new(Options::default())
        .with_rewrite(OfflineRewrite)
        .with_formatter(BrokenFormatter);
    let out = pipe.run("doStuff");
    assert_eq!(out.code, "doStuff");
    assert!(out.rewrite_error.is_some());
    assert!(out.warning.is_some());
    assert_eq!(out.changes, vec![crate::NO_CHANGES.to_string()]);
}

#[test]
fn closures_serve_as_collaborators() {
    let pipe = Pipeline::new(Options::default())
        .with_rewrite(|code: &str| -> Result<String, RewriteError> {
            Ok(code.replace("VALUE", "42"))
        })
        .with_formatter(|code: &str| -> Result<String, FormatError> {
            Ok(code.to_ascii_lowercase())
        });
    let out = pipe.run("quest x = VALUE");
    assert_eq!(out.code, "const x = 42;");
}
