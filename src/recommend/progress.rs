//! Progress reporting around long scoring passes

use std::ops::ControlFlow;

/// Observer invoked periodically while candidates are scored
///
/// Returning `ControlFlow::Break` from `on_progress` cancels the pass.
pub trait ProgressHook {
    /// Called after every `progress_interval` scored candidates
    fn on_progress(&mut self, scored: usize, total: usize) -> ControlFlow<()>;

    /// Called once when the pass ends, whether it completed or not
    fn on_finish(&mut self, _scored: usize, _total: usize) {}
}

/// Hook that ignores progress and never cancels
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressHook for NoProgress {
    fn on_progress(&mut self, _scored: usize, _total: usize) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

impl<F> ProgressHook for F
where
    F: FnMut(usize, usize) -> ControlFlow<()>,
{
    fn on_progress(&mut self, scored: usize, total: usize) -> ControlFlow<()> {
        self(scored, total)
    }
}
