//! Progress reporting hooks.

/// Observer driven by the migrator: one `advance` per catalog entry visited
/// and one `finish` when an operation completes. It has no influence on
/// control flow.
pub trait ProgressSink {
    /// Called once before iteration with the expected number of steps
    fn start(&self, _total: u64) {}

    fn advance(&self);

    fn finish(&self, message: &str);
}

/// Sink used when progress reporting is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn advance(&self) {}

    fn finish(&self, _message: &str) {}
}
