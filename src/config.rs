/// User-facing options with sensible defaults and builder chaining.
#[derive(Clone, Debug)]
pub struct AnalyzerOptions {
    pub chunk_size: usize,   // posts per parallel work unit
    pub workers: usize,      // worker-pool size / tasks in flight per wave
    pub progress: bool,      // show progress bars
    pub progress_label: Option<String>, // optional label prefix for progress bars
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            chunk_size: 96,
            workers: 8,
            progress: true,
            progress_label: None,
        }
    }
}

impl AnalyzerOptions {
    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size.max(1);
        self
    }
    pub fn with_workers(mut self, n: usize) -> Self {
        self.workers = n.max(1);
        self
    }
    pub fn with_progress(mut self, yes: bool) -> Self {
        self.progress = yes;
        self
    }
    pub fn with_progress_label(mut self, label: impl Into<String>) -> Self {
        self.progress_label = Some(label.into());
        self
    }
}
