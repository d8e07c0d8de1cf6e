use serde::{Deserialize, Serialize};

/// Configuration for class extraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Maximum file size to read (in bytes)
    /// Larger files are refused by the file entry points
    pub max_source_size: usize,

    /// Leave `static` members out of the descriptors
    pub skip_static_fields: bool,

    /// Enable parallel extraction (for `extract_files`)
    pub parallel: bool,

    /// Number of parallel workers (None = rayon default)
    pub parallel_workers: Option<usize>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_source_size: 10 * 1024 * 1024, // 10 MB
            skip_static_fields: false,
            parallel: false,
            parallel_workers: None,
        }
    }
}

impl ExtractorConfig {
    /// Create config that keeps only instance members
    pub fn instance_only() -> Self {
        Self {
            skip_static_fields: true,
            ..Default::default()
        }
    }

    /// Enable parallel extraction
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the worker count used in parallel mode
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.parallel_workers = Some(workers);
        self
    }

    /// Set maximum source size
    pub fn with_max_source_size(mut self, size: usize) -> Self {
        self.max_source_size = size;
        self
    }
}
