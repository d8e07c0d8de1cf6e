//! C++ boilerplate generation for classgen
//!
//! Turns a [`ClassDescriptor`](classgen_parser_api::ClassDescriptor) into
//! constructors, special members, accessors and operators. Each generator
//! returns a [`Snippet`]: one block for the class body, or a declaration and
//! a `Name::` qualified definition when generating out of line.
//!
//! # Example
//!
//! ```rust
//! use classgen_codegen::{FieldSelection, Generator, GeneratorConfig, Snippet};
//! use classgen_parser_api::{ClassDescriptor, Field};
//!
//! let class = ClassDescriptor::new("Point", 0, 3)
//!     .with_fields(vec![Field::new("x", "int").fundamental()]);
//!
//! let generator = Generator::new(&class, &GeneratorConfig::default());
//! let snippet = generator.getters(&FieldSelection::All);
//! assert_eq!(snippet, Snippet::Inline("\n\tint getX() const { return x; }\n".to_string()));
//! ```

pub mod config;
pub mod generator;
pub mod snippet;

pub use config::{GeneratorConfig, Placement};
pub use generator::{Action, Generator};
pub use snippet::{FieldSelection, Insertion, Snippet};
