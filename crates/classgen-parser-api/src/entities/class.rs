use super::field::Field;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Access specifier of a base-class entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    #[default]
    Public,
    Protected,
    Private,
}

impl AccessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::Public => "public",
            AccessLevel::Protected => "protected",
            AccessLevel::Private => "private",
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a class's base-class list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SuperClass {
    /// Base class name, including template arguments
    pub name: String,

    /// Inheritance access; `public` when none is written
    pub access: AccessLevel,

    /// Virtual inheritance
    pub is_virtual: bool,
}

impl SuperClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            access: AccessLevel::Public,
            is_virtual: false,
        }
    }

    pub fn with_access(mut self, access: AccessLevel) -> Self {
        self.access = access;
        self
    }

    pub fn virtual_base(mut self) -> Self {
        self.is_virtual = true;
        self
    }
}

/// A parsed C++ class or struct declaration
///
/// Descriptors own all of their text; nothing borrows from the source buffer
/// they were extracted from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    /// Class name as written in the header (template arguments included for
    /// specializations)
    pub name: String,

    /// `template <...>` text preceding the declaration, empty when absent
    pub template_preamble: String,

    /// Base classes in declaration order
    pub bases: Vec<SuperClass>,

    /// Data members in declaration order
    pub fields: Vec<Field>,

    /// Line of the `class`/`struct` keyword (0-indexed)
    pub start_line: usize,

    /// Line of the closing brace (0-indexed)
    pub end_line: usize,
}

impl ClassDescriptor {
    pub fn new(name: impl Into<String>, start_line: usize, end_line: usize) -> Self {
        Self {
            name: name.into(),
            template_preamble: String::new(),
            bases: Vec::new(),
            fields: Vec::new(),
            start_line,
            end_line: end_line.max(start_line),
        }
    }

    pub fn with_template(mut self, preamble: impl Into<String>) -> Self {
        self.template_preamble = preamble.into();
        self
    }

    pub fn with_bases(mut self, bases: Vec<SuperClass>) -> Self {
        self.bases = bases;
        self
    }

    pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }

    /// Declared with a `template <...>` preamble
    pub fn is_template(&self) -> bool {
        !self.template_preamble.is_empty()
    }

    /// Whether `line` (0-indexed) falls inside this declaration
    pub fn contains_line(&self, line: usize) -> bool {
        self.start_line <= line && line <= self.end_line
    }

    /// Non-static data members, in declaration order
    pub fn instance_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|field| !field.is_static)
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }
}
