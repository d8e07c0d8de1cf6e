//! Generated text and the members it is generated for

use classgen_parser_api::{ClassDescriptor, Field};
use serde::{Deserialize, Serialize};

/// Output of a generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Snippet {
    /// Text inserted into the class body
    Inline(String),

    /// Declarations for the class body and definitions placed after the class
    OutOfLine {
        declaration: String,
        definition: String,
    },
}

impl Snippet {
    /// Text that goes inside the class body
    pub fn declaration(&self) -> &str {
        match self {
            Snippet::Inline(text) => text,
            Snippet::OutOfLine { declaration, .. } => declaration,
        }
    }

    /// Text that goes after the class, if any
    pub fn definition(&self) -> Option<&str> {
        match self {
            Snippet::Inline(_) => None,
            Snippet::OutOfLine { definition, .. } => Some(definition),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.declaration().is_empty() && self.definition().map_or(true, str::is_empty)
    }

    /// Edits that place this snippet into the source `class` was read from
    ///
    /// Class-body text opens a `public:` section on the class's closing
    /// line; definitions go on the line after it.
    pub fn insertions(&self, class: &ClassDescriptor) -> Vec<Insertion> {
        match self {
            Snippet::Inline(text) => vec![Insertion {
                line: class.end_line,
                text: format!("\n public:{text}"),
            }],
            Snippet::OutOfLine {
                declaration,
                definition,
            } => vec![
                Insertion {
                    line: class.end_line + 1,
                    text: definition.clone(),
                },
                Insertion {
                    line: class.end_line,
                    text: format!("\n public:\n{declaration}"),
                },
            ],
        }
    }
}

/// Text to insert at the start of a 0-indexed line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insertion {
    pub line: usize,
    pub text: String,
}

/// Which data members a field-driven generator covers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldSelection {
    /// Every instance member
    #[default]
    All,

    /// The members with these names, in declaration order
    Named(Vec<String>),
}

impl FieldSelection {
    pub fn named<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldSelection::Named(names.into_iter().map(Into::into).collect())
    }

    /// Members of `class` this selection covers
    ///
    /// `All` yields the instance members; `Named` may also pick static ones
    /// when `allow_static` is set. Unknown names are ignored.
    pub fn resolve<'c>(&self, class: &'c ClassDescriptor, allow_static: bool) -> Vec<&'c Field> {
        match self {
            FieldSelection::All => class.instance_fields().collect(),
            FieldSelection::Named(names) => class
                .fields
                .iter()
                .filter(|f| allow_static || !f.is_static)
                .filter(|f| names.iter().any(|n| *n == f.name))
                .collect(),
        }
    }
}
