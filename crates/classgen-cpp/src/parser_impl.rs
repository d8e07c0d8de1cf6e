//! Implementation of the ClassExtractor trait for C++

use classgen_parser_api::{ClassExtractor, Extraction, ExtractorConfig, ProjectExtraction};
use log::warn;
use std::path::PathBuf;

use crate::extractor;

/// C++ class extractor implementing the ClassExtractor trait
#[derive(Debug, Clone, Default)]
pub struct CppClassParser {
    config: ExtractorConfig,
}

impl CppClassParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Extract files sequentially
    fn extract_files_sequential(&self, paths: &[PathBuf]) -> ProjectExtraction {
        let mut project = ProjectExtraction::default();
        for path in paths {
            project.record(path, self.extract_file(path));
        }
        project
    }

    /// Extract files in parallel using rayon
    fn extract_files_parallel(&self, paths: &[PathBuf]) -> ProjectExtraction {
        use rayon::prelude::*;

        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(num_threads) = self.config.parallel_workers {
            builder = builder.num_threads(num_threads);
        }
        let pool = match builder.build() {
            Ok(pool) => pool,
            Err(e) => {
                warn!("Failed to create thread pool, extracting sequentially: {e}");
                return self.extract_files_sequential(paths);
            }
        };

        let results: Vec<_> = pool.install(|| {
            paths
                .par_iter()
                .map(|path| (path, self.extract_file(path)))
                .collect()
        });

        let mut project = ProjectExtraction::default();
        for (path, result) in results {
            project.record(path, result);
        }
        project
    }
}

impl ClassExtractor for CppClassParser {
    fn language(&self) -> &str {
        "cpp"
    }

    fn file_extensions(&self) -> &[&str] {
        &[
            ".h", ".hh", ".hpp", ".hxx", ".h++", ".c", ".cc", ".cpp", ".cxx", ".c++", ".ipp",
            ".inl", ".tpp",
        ]
    }

    fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    fn extract_source(&self, source: &str) -> Extraction {
        extractor::extract(source, &self.config)
    }

    fn extract_files(&self, paths: &[PathBuf]) -> ProjectExtraction {
        if self.config.parallel {
            self.extract_files_parallel(paths)
        } else {
            self.extract_files_sequential(paths)
        }
    }
}
