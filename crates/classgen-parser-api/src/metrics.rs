use serde::{Deserialize, Serialize};

/// Counters collected while scanning one buffer
///
/// Returned by value with every extraction, so independent scans never share
/// state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionMetrics {
    /// Candidate blocks produced by the segmenter
    pub blocks_found: usize,

    /// Descriptors produced
    pub classes_extracted: usize,

    /// Candidates dropped for a malformed name
    pub classes_rejected: usize,

    /// Data members produced
    pub fields_extracted: usize,

    /// Member lines that looked like fields but could not be resolved
    pub lines_skipped: usize,
}

impl ExtractionMetrics {
    /// Candidates that reached the header parser
    pub fn total_candidates(&self) -> usize {
        self.classes_extracted + self.classes_rejected
    }

    /// Merge another metrics object into this one
    pub fn merge(&mut self, other: &ExtractionMetrics) {
        self.blocks_found += other.blocks_found;
        self.classes_extracted += other.classes_extracted;
        self.classes_rejected += other.classes_rejected;
        self.fields_extracted += other.fields_extracted;
        self.lines_skipped += other.lines_skipped;
    }
}
