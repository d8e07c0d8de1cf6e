use serde::{Deserialize, Serialize};

/// Represents one data member of a class or struct
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    /// Member name, without pointer/reference/array decoration
    pub name: String,

    /// Reconstructed type text, including a trailing `*`, `&` or `&&`
    /// contributed by the declarator. Arrays are rewritten as pointers.
    pub declared_type: String,

    /// Declared `static`
    pub is_static: bool,

    /// Safe to pass by value in generated accessors
    pub is_fundamental: bool,

    /// Declared with an array extent (`name[N]`)
    pub is_array: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            is_static: false,
            is_fundamental: false,
            is_array: false,
        }
    }

    pub fn static_field(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn fundamental(mut self) -> Self {
        self.is_fundamental = true;
        self
    }

    pub fn with_fundamental(mut self, is_fundamental: bool) -> Self {
        self.is_fundamental = is_fundamental;
        self
    }

    pub fn array(mut self) -> Self {
        self.is_array = true;
        self
    }

    /// Accessor-friendly name: the member name with its first letter upper-cased
    pub fn capitalized_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}
