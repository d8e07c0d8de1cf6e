//! classgen Parser API
//!
//! Shared trait and types for building classgen class extractors.
//!
//! This crate provides the foundation consumed by extractors and by the code
//! generators. It defines:
//!
//! - **ClassExtractor trait**: The interface extractors implement
//! - **Descriptor types**: Owned representations of a class, its bases and its data members
//! - **Selection**: Choosing the class a caret line refers to
//! - **Configuration**: Customizable extractor behavior
//! - **Metrics**: Counters for dropped and extracted fragments
//! - **Error handling**: Extraction error types
//!
//! # Example
//!
//! ```rust
//! use classgen_parser_api::{select_active, ClassDescriptor, Field};
//!
//! let classes = vec![
//!     ClassDescriptor::new("Point", 0, 4)
//!         .with_fields(vec![Field::new("x", "int").fundamental()]),
//!     ClassDescriptor::new("Line", 6, 10),
//! ];
//!
//! let active = select_active(&classes, 8).unwrap();
//! assert_eq!(active.name, "Line");
//! ```

pub mod config;
pub mod entities;
pub mod errors;
pub mod extraction;
pub mod metrics;
pub mod selection;
pub mod traits;

// Re-export commonly used types
pub use config::ExtractorConfig;
pub use entities::{AccessLevel, ClassDescriptor, Field, SuperClass};
pub use errors::{ExtractError, ExtractResult};
pub use extraction::Extraction;
pub use metrics::ExtractionMetrics;
pub use selection::select_active;
pub use traits::{ClassExtractor, FileExtraction, ProjectExtraction};
