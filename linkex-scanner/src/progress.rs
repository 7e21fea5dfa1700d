/// Receives one task per URL taken on by the extractor
pub trait ProgressSink: Send + Sync {
    fn add_task(&self, label: &str) -> Box<dyn ProgressTask>;
}

/// Progress of a single URL, measured in percent (0-100)
pub trait ProgressTask: Send + Sync {
    fn increment(&self, percent: u64);
}
