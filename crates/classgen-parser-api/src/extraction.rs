use crate::{
    entities::ClassDescriptor,
    errors::{ExtractError, ExtractResult},
    metrics::ExtractionMetrics,
    selection,
};

/// Result of scanning one source buffer
///
/// Holds every class that survived the scan, in source order, together with
/// the counters gathered along the way.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Extraction {
    /// Extracted classes
    pub classes: Vec<ClassDescriptor>,

    /// Scan counters
    pub metrics: ExtractionMetrics,
}

impl Extraction {
    /// Create a new empty extraction
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class
    pub fn add_class(&mut self, class: ClassDescriptor) {
        self.metrics.classes_extracted += 1;
        self.metrics.fields_extracted += class.fields.len();
        self.classes.push(class);
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Find a class by name
    pub fn class(&self, name: &str) -> Option<&ClassDescriptor> {
        self.classes.iter().find(|c| c.name == name)
    }

    /// Borrow the class active at `current_line`
    pub fn select_active(&self, current_line: usize) -> ExtractResult<&ClassDescriptor> {
        selection::select_active(&self.classes, current_line)
    }

    /// Take ownership of the class active at `current_line`
    pub fn into_active(mut self, current_line: usize) -> ExtractResult<ClassDescriptor> {
        let idx = selection::active_index(&self.classes, current_line)
            .ok_or(ExtractError::NoClassFound)?;
        Ok(self.classes.swap_remove(idx))
    }
}
