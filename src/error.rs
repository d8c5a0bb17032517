use thiserror::Error;

/// Failures at the edges of the crate. The repair passes themselves are
/// total: they always produce output, so only writer sinks and report
/// encoding can fail.
#[derive(Debug, Error)]
pub enum RepairError {
    #[error("write error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "serde")]
    #[error("report encoding error: {0}")]
    Report(#[from] serde_json::Error),
}
