// Terminal progress display for extraction runs

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use linkex_scanner::{ProgressSink, ProgressTask};
use std::io::{self, Write};

const BAR_TEMPLATE: &str = "{spinner:.cyan} [{bar:30.cyan/blue}] {percent:>3}% {msg}";

/// One indicatif bar per URL, stacked in a `MultiProgress`
#[derive(Debug, Clone)]
pub struct BarProgress {
    multi: MultiProgress,
}

impl BarProgress {
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr())
    }

    /// Tracks progress without drawing anything
    pub fn hidden() -> Self {
        Self::with_draw_target(ProgressDrawTarget::hidden())
    }

    fn with_draw_target(target: ProgressDrawTarget) -> Self {
        Self {
            multi: MultiProgress::with_draw_target(target),
        }
    }

    /// Stderr writer that clears the bars around each write so log lines
    /// are not overdrawn
    pub fn log_writer(&self) -> BarLogWriter {
        BarLogWriter {
            multi: self.multi.clone(),
        }
    }
}

pub struct BarLogWriter {
    multi: MultiProgress,
}

impl Write for BarLogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.multi.suspend(|| io::stderr().write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

impl Default for BarProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for BarProgress {
    fn add_task(&self, label: &str) -> Box<dyn ProgressTask> {
        let pb = self.multi.add(ProgressBar::new(100));
        pb.set_style(bar_style());
        pb.set_message(label.to_string());
        Box::new(BarTask { pb })
    }
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template(BAR_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-")
}

struct BarTask {
    pb: ProgressBar,
}

impl ProgressTask for BarTask {
    fn increment(&self, percent: u64) {
        self.pb.inc(percent);
        if self.pb.position() >= self.pb.length().unwrap_or(100) {
            self.pb.finish();
        }
    }
}
