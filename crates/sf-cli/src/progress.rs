//! Terminal progress bar for migration runs

use indicatif::{ProgressBar, ProgressStyle};
use sf_migrate::ProgressSink;
use std::cell::RefCell;

/// Progress sink backed by an indicatif bar. A fresh bar is drawn for each
/// operation, so `recreate` shows the revert pass and the upgrade pass.
#[derive(Default)]
pub(crate) struct BarProgress {
    bar: RefCell<Option<ProgressBar>>,
}

impl BarProgress {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

impl ProgressSink for BarProgress {
    fn start(&self, total: u64) {
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        if let Some(previous) = self.bar.replace(Some(bar)) {
            previous.finish_and_clear();
        }
    }

    fn advance(&self) {
        if let Some(bar) = self.bar.borrow().as_ref() {
            bar.inc(1);
        }
    }

    fn finish(&self, message: &str) {
        if let Some(bar) = self.bar.borrow_mut().take() {
            bar.finish_with_message(message.to_string());
        }
    }
}

impl Drop for BarProgress {
    fn drop(&mut self) {
        if let Some(bar) = self.bar.get_mut().take() {
            bar.abandon();
        }
    }
}
