//! C++ class extractor for classgen
//!
//! This crate recovers class and struct declarations from C++ source text
//! without a grammar: comments are blanked, the buffer is cut at `class` and
//! `struct` keywords, and each block yields a name, template preamble, base
//! classes and data members. The result feeds the accessor and operator
//! generators in `classgen-codegen`.
//!
//! # Example
//!
//! ```rust
//! use classgen_cpp::extract_active_class;
//!
//! let source = r#"
//! class Point {
//!     int x, y;
//!     std::string label;
//! };
//! "#;
//!
//! let class = extract_active_class(source, 2).unwrap();
//! assert_eq!(class.name, "Point");
//! assert_eq!(class.fields.len(), 3);
//! assert!(!class.fields[2].is_fundamental);
//! ```

mod extractor;
mod fields;
mod header;
mod keyword;
mod normalizer;
mod parser_impl;
mod segmenter;

pub use fields::{is_fundamental, DeclKind};
pub use normalizer::strip_comments;
pub use parser_impl::CppClassParser;

use classgen_parser_api::{ClassDescriptor, ExtractResult, Extraction, ExtractorConfig};

/// Extract every class and struct in `source` with the default configuration
pub fn extract_classes(source: &str) -> Extraction {
    extractor::extract(source, &ExtractorConfig::default())
}

/// Extract the class a caret on `current_line` (0-indexed) refers to
///
/// # Errors
/// Returns [`ExtractError::NoClassFound`](classgen_parser_api::ExtractError::NoClassFound)
/// when `source` declares no class or struct that survives parsing.
pub fn extract_active_class(source: &str, current_line: usize) -> ExtractResult<ClassDescriptor> {
    extract_classes(source).into_active(current_line)
}
