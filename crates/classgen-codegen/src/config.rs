use serde::{Deserialize, Serialize};

/// Where generated members go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Complete definitions inside the class body
    #[default]
    Inline,

    /// Declarations inside the class body, `Name::` qualified definitions
    /// after it
    OutOfLine,
}

/// Configuration for code generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Requested placement; template classes are always generated inline
    pub placement: Placement,

    /// One level of indentation
    pub indent: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            placement: Placement::Inline,
            indent: "\t".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Create config generating declarations and separate definitions
    pub fn out_of_line() -> Self {
        Self {
            placement: Placement::OutOfLine,
            ..Default::default()
        }
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Set the indentation unit (e.g. four spaces)
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }
}
