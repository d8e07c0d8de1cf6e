use crate::{
    config::ExtractorConfig,
    entities::ClassDescriptor,
    errors::{ExtractError, ExtractResult},
    extraction::Extraction,
    metrics::ExtractionMetrics,
};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Classes extracted from one file on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileExtraction {
    /// Path to the source file
    pub file_path: PathBuf,

    /// Classes found in the file, in source order
    pub classes: Vec<ClassDescriptor>,

    /// Scan counters for this file
    pub metrics: ExtractionMetrics,

    /// Time taken to extract this file
    #[serde(with = "duration_serde")]
    pub extract_time: Duration,

    /// Number of lines in the file
    pub line_count: usize,

    /// File size in bytes
    pub byte_count: usize,
}

// Helper module for serializing Duration
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (duration.as_millis() as u64).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis: u64 = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

impl FileExtraction {
    /// Total number of data members across all classes
    pub fn field_count(&self) -> usize {
        self.classes.iter().map(|c| c.fields.len()).sum()
    }
}

/// Aggregate result of extracting a set of files
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectExtraction {
    /// Files that were extracted successfully
    pub files: Vec<FileExtraction>,

    /// Files that could not be read (path, error message)
    pub failed_files: Vec<(PathBuf, String)>,
}

impl ProjectExtraction {
    /// Total number of files processed (success + failure)
    pub fn total_files(&self) -> usize {
        self.files.len() + self.failed_files.len()
    }

    /// Total number of classes across all files
    pub fn total_classes(&self) -> usize {
        self.files.iter().map(|f| f.classes.len()).sum()
    }

    /// Success rate (0.0 to 1.0)
    pub fn success_rate(&self) -> f64 {
        if self.total_files() == 0 {
            0.0
        } else {
            self.files.len() as f64 / self.total_files() as f64
        }
    }

    /// Counters merged across all successful files
    pub fn metrics(&self) -> ExtractionMetrics {
        let mut total = ExtractionMetrics::default();
        for file in &self.files {
            total.merge(&file.metrics);
        }
        total
    }

    /// Record the outcome of extracting `path`
    pub fn record(&mut self, path: &Path, result: ExtractResult<FileExtraction>) {
        match result {
            Ok(file) => self.files.push(file),
            Err(e) => self.failed_files.push((path.to_path_buf(), e.to_string())),
        }
    }
}

/// Core trait implemented by class extractors
///
/// Extraction of a buffer is a pure function of its text: implementations
/// keep no state between calls and must be `Send + Sync` so independent
/// buffers can be processed in parallel.
pub trait ClassExtractor: Send + Sync {
    /// Returns the language identifier (lowercase, e.g., "cpp")
    fn language(&self) -> &str;

    /// Returns supported file extensions (e.g., [".hpp", ".cpp"])
    fn file_extensions(&self) -> &[&str];

    /// Get extractor configuration
    fn config(&self) -> &ExtractorConfig;

    /// Extract every class declared in `source`
    ///
    /// Malformed fragments are dropped and counted in the returned metrics;
    /// this never fails.
    fn extract_source(&self, source: &str) -> Extraction;

    /// Extract the class a caret on `current_line` (0-indexed) refers to
    ///
    /// # Errors
    /// Returns [`ExtractError::NoClassFound`] if `source` declares no class.
    fn extract_active_class(
        &self,
        source: &str,
        current_line: usize,
    ) -> ExtractResult<ClassDescriptor> {
        self.extract_source(source).into_active(current_line)
    }

    /// Read and extract a single file
    ///
    /// # Errors
    /// Returns `ExtractError` if:
    /// - File cannot be read
    /// - File exceeds `max_source_size`
    fn extract_file(&self, path: &Path) -> ExtractResult<FileExtraction> {
        let start = Instant::now();
        let metadata =
            fs::metadata(path).map_err(|e| ExtractError::IoError(path.to_path_buf(), e))?;

        if metadata.len() as usize > self.config().max_source_size {
            warn!("File too large: {} bytes", metadata.len());
            return Err(ExtractError::SourceTooLarge(
                path.to_path_buf(),
                metadata.len() as usize,
            ));
        }

        let source =
            fs::read_to_string(path).map_err(|e| ExtractError::IoError(path.to_path_buf(), e))?;
        let extraction = self.extract_source(&source);
        debug!(
            "Extracted {} classes from {}",
            extraction.classes.len(),
            path.display()
        );

        Ok(FileExtraction {
            file_path: path.to_path_buf(),
            classes: extraction.classes,
            metrics: extraction.metrics,
            extract_time: start.elapsed(),
            line_count: source.lines().count(),
            byte_count: source.len(),
        })
    }

    /// Extract multiple files (can be overridden for parallel extraction)
    ///
    /// Default implementation extracts files sequentially.
    fn extract_files(&self, paths: &[PathBuf]) -> ProjectExtraction {
        let mut project = ProjectExtraction::default();
        for path in paths {
            project.record(path, self.extract_file(path));
        }
        project
    }

    /// Check if this extractor can handle the given file
    ///
    /// Default implementation checks file extension.
    fn can_extract(&self, path: &Path) -> bool {
        if let Some(ext) = path.extension() {
            let ext_str = format!(".{}", ext.to_string_lossy().to_lowercase());
            self.file_extensions().contains(&ext_str.as_str())
        } else {
            false
        }
    }
}
