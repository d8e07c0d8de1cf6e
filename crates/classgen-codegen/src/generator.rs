//! C++ member generators

use classgen_parser_api::{ClassDescriptor, Field};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::{GeneratorConfig, Placement};
use crate::snippet::{FieldSelection, Snippet};

/// Every generator, in the order `All` runs them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    All,
    Constructor,
    Destructor,
    CopySemantics,
    MoveSemantics,
    Getters,
    Setters,
    GettersAndSetters,
    ToString,
    StreamOperator,
    EqualityOperator,
    BoolOperator,
}

impl Action {
    pub const ALL: [Action; 12] = [
        Action::All,
        Action::Constructor,
        Action::Destructor,
        Action::CopySemantics,
        Action::MoveSemantics,
        Action::Getters,
        Action::Setters,
        Action::GettersAndSetters,
        Action::ToString,
        Action::StreamOperator,
        Action::EqualityOperator,
        Action::BoolOperator,
    ];

    /// Menu title
    pub fn title(&self) -> &'static str {
        match self {
            Action::All => "Generate All",
            Action::Constructor => "Generate Constructors",
            Action::Destructor => "Generate Destructors",
            Action::CopySemantics => "Generate Copy Semantics",
            Action::MoveSemantics => "Generate Move Semantics",
            Action::Getters => "Generate Getters",
            Action::Setters => "Generate Setters",
            Action::GettersAndSetters => "Generate Getters And Setters",
            Action::ToString => "Generate ToString",
            Action::StreamOperator => "Generate operator<<",
            Action::EqualityOperator => "Generate operator==",
            Action::BoolOperator => "Generate operator bool()",
        }
    }

    /// Whether the action takes a [`FieldSelection`]
    pub fn uses_fields(&self) -> bool {
        matches!(
            self,
            Action::Constructor
                | Action::Getters
                | Action::Setters
                | Action::GettersAndSetters
                | Action::StreamOperator
        )
    }
}

/// Both renderings of a generated member, accumulated across fields
#[derive(Debug, Default)]
struct Parts {
    inline: String,
    declaration: String,
    definition: String,
}

impl Parts {
    fn new(inline: String, declaration: String, definition: String) -> Self {
        Self {
            inline,
            declaration,
            definition,
        }
    }

    fn push(&mut self, other: Parts) {
        self.inline.push_str(&other.inline);
        self.declaration.push_str(&other.declaration);
        self.definition.push_str(&other.definition);
    }
}

/// Renders C++ members for one class
///
/// Type references and out-of-line qualifiers use the full class name
/// (`ns::Box<int>`); constructor and destructor identifiers use the bare name
/// (`Box`).
pub struct Generator<'a> {
    class: &'a ClassDescriptor,
    placement: Placement,
    indent: String,
}

impl<'a> Generator<'a> {
    pub fn new(class: &'a ClassDescriptor, config: &GeneratorConfig) -> Self {
        let placement = if class.is_template() && config.placement != Placement::Inline {
            debug!("{} is a template, generating inline", class.name);
            Placement::Inline
        } else {
            config.placement
        };
        Self {
            class,
            placement,
            indent: config.indent.clone(),
        }
    }

    /// Placement actually used, after the template override
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Run a single action
    ///
    /// `selection` is ignored by actions that do not take fields.
    pub fn generate(&self, action: Action, selection: &FieldSelection) -> Snippet {
        let parts = match action {
            Action::All => self.all_parts(),
            Action::Constructor => self.constructor_parts(selection),
            Action::Destructor => self.destructor_parts(),
            Action::CopySemantics => self.copy_parts(),
            Action::MoveSemantics => self.move_parts(),
            Action::Getters => self.accessor_parts(selection, true, false),
            Action::Setters => self.accessor_parts(selection, false, true),
            Action::GettersAndSetters => self.accessor_parts(selection, true, true),
            Action::ToString => self.to_string_parts(),
            Action::StreamOperator => self.stream_parts(selection),
            Action::EqualityOperator => self.equality_parts(),
            Action::BoolOperator => self.bool_parts(),
        };
        debug!("{} for {}", action.title(), self.class.name);
        self.finish(parts)
    }

    pub fn constructor(&self, selection: &FieldSelection) -> Snippet {
        self.generate(Action::Constructor, selection)
    }

    pub fn destructor(&self) -> Snippet {
        self.generate(Action::Destructor, &FieldSelection::All)
    }

    /// Copy constructor and copy assignment
    pub fn copy_semantics(&self) -> Snippet {
        self.generate(Action::CopySemantics, &FieldSelection::All)
    }

    /// Move constructor and move assignment
    pub fn move_semantics(&self) -> Snippet {
        self.generate(Action::MoveSemantics, &FieldSelection::All)
    }

    pub fn getters(&self, selection: &FieldSelection) -> Snippet {
        self.generate(Action::Getters, selection)
    }

    pub fn setters(&self, selection: &FieldSelection) -> Snippet {
        self.generate(Action::Setters, selection)
    }

    /// All getters followed by all setters
    pub fn getters_and_setters(&self, selection: &FieldSelection) -> Snippet {
        self.generate(Action::GettersAndSetters, selection)
    }

    /// `std::string toString() const`, built on `operator<<`
    pub fn to_string_method(&self) -> Snippet {
        self.generate(Action::ToString, &FieldSelection::All)
    }

    pub fn stream_operator(&self, selection: &FieldSelection) -> Snippet {
        self.generate(Action::StreamOperator, selection)
    }

    pub fn equality_operator(&self) -> Snippet {
        self.generate(Action::EqualityOperator, &FieldSelection::All)
    }

    pub fn bool_operator(&self) -> Snippet {
        self.generate(Action::BoolOperator, &FieldSelection::All)
    }

    /// Every generator over all instance members
    ///
    /// Static members are left out; pass them by name to the individual
    /// generators that accept statics.
    pub fn all(&self) -> Snippet {
        self.generate(Action::All, &FieldSelection::All)
    }

    fn finish(&self, parts: Parts) -> Snippet {
        match self.placement {
            Placement::Inline => Snippet::Inline(parts.inline),
            Placement::OutOfLine => Snippet::OutOfLine {
                declaration: parts.declaration,
                definition: parts.definition,
            },
        }
    }

    fn name(&self) -> &str {
        &self.class.name
    }

    /// Class name without namespace qualification or template arguments
    fn bare_name(&self) -> &str {
        let name = self.name();
        let name = name.split('<').next().unwrap_or(name);
        name.rsplit("::").next().unwrap_or(name)
    }

    fn all_parts(&self) -> Parts {
        let mut parts = self.constructor_parts(&FieldSelection::All);
        parts.push(self.destructor_parts());
        parts.push(self.copy_parts());
        parts.push(self.move_parts());
        parts.push(self.accessor_parts(&FieldSelection::All, true, true));
        parts.push(self.to_string_parts());
        parts.push(self.stream_parts(&FieldSelection::All));
        parts.push(self.equality_parts());
        parts.push(self.bool_parts());
        parts
    }

    fn constructor_parts(&self, selection: &FieldSelection) -> Parts {
        let (name, ctor, i1) = (self.name(), self.bare_name(), &self.indent);
        let fields = selection.resolve(self.class, false);
        if fields.is_empty() {
            return Parts::new(
                format!("\n{i1}{ctor}(){{}};\n"),
                format!("{i1}{ctor}();\n"),
                format!("\n{name}::{ctor}(){{}}\n"),
            );
        }

        let params = fields
            .iter()
            .map(|f| parameter(f, &f.name))
            .collect::<Vec<_>>()
            .join(", ");
        let inits = initializer_list(fields.iter().map(|f| format!("{0}({0})", f.name)));
        Parts::new(
            format!("\n{i1}{ctor}({params}){inits}{{}};\n"),
            format!("{i1}{ctor}({params});\n"),
            format!("\n{name}::{ctor}({params}){inits}{{}};\n"),
        )
    }

    fn destructor_parts(&self) -> Parts {
        let (name, ctor, i1) = (self.name(), self.bare_name(), &self.indent);
        Parts::new(
            format!("\n{i1}~{ctor}(){{}};\n"),
            format!("{i1}~{ctor}();\n"),
            format!("\n{name}::~{ctor}(){{}};\n"),
        )
    }

    fn copy_parts(&self) -> Parts {
        let inits = initializer_list(
            self.class
                .instance_fields()
                .map(|f| format!("{0}(rhs.{0})", f.name)),
        );
        self.special_members(&format!("const {} &rhs", self.name()), &inits, "rhs")
    }

    fn move_parts(&self) -> Parts {
        let inits = initializer_list(
            self.class
                .instance_fields()
                .map(|f| format!("{0}(std::move(rhs.{0}))", f.name)),
        );
        self.special_members(&format!("{} &&rhs", self.name()), &inits, "std::move(rhs)")
    }

    /// Constructor plus an assignment operator that destroys `*this` and
    /// reconstructs it in place from `source`
    fn special_members(&self, param: &str, inits: &str, source: &str) -> Parts {
        let (name, ctor, i1) = (self.name(), self.bare_name(), &self.indent);
        let i2 = i1.repeat(2);
        let assign_body = |outer: &str, inner: &str| {
            format!(
                "{inner}if (this == &rhs) return *this;\n\
                 {inner}this->~{ctor}();\n\
                 {inner}new (this) {name}({source});\n\
                 {inner}return *this;\n\
                 {outer}}}\n"
            )
        };

        Parts::new(
            format!(
                "\n{i1}{ctor}({param}){inits}{{}};\n\n{i1}{name} &operator=({param}) {{\n{}",
                assign_body(i1, &i2)
            ),
            format!("{i1}{ctor}({param});\n{i1}{name} &operator=({param});\n"),
            format!(
                "\n{name}::{ctor}({param}){inits}{{}};\n\n{name} &{name}::operator=({param}) {{\n{}",
                assign_body("", i1)
            ),
        )
    }

    fn accessor_parts(&self, selection: &FieldSelection, getters: bool, setters: bool) -> Parts {
        let fields = selection.resolve(self.class, true);
        let mut parts = Parts::default();
        if getters {
            for field in &fields {
                parts.push(self.getter(field));
            }
        }
        if setters {
            for field in &fields {
                parts.push(self.setter(field));
            }
        }
        parts
    }

    fn getter(&self, field: &Field) -> Parts {
        let (name, i1) = (self.name(), &self.indent);
        let ret = if field.is_array {
            if field.declared_type.starts_with("const") {
                format!("{} ", field.declared_type)
            } else {
                format!("const {} ", field.declared_type)
            }
        } else if field.is_fundamental {
            format!("{} ", field.declared_type)
        } else {
            format!("const {} &", field.declared_type)
        };
        let accessor = format!("get{}() const", field.capitalized_name());
        let body = format!("{{ return {}; }}", field.name);

        Parts::new(
            format!("\n{i1}{ret}{accessor} {body}\n"),
            format!("{i1}{ret}{accessor};\n"),
            format!("\n{ret}{name}::{accessor} {body}\n"),
        )
    }

    fn setter(&self, field: &Field) -> Parts {
        let (name, i1) = (self.name(), &self.indent);
        let signature = format!("set{}({})", field.capitalized_name(), parameter(field, "val"));
        let target = if field.is_static {
            format!("{name}::{}", field.name)
        } else {
            format!("this->{}", field.name)
        };
        let body = format!("{{ {target} = val; }}");

        Parts::new(
            format!("\n{i1}void {signature} {body}\n"),
            format!("{i1}void {signature};\n"),
            format!("\nvoid {name}::{signature} {body}\n"),
        )
    }

    fn to_string_parts(&self) -> Parts {
        let (name, i1) = (self.name(), &self.indent);
        let i2 = i1.repeat(2);
        let body = |outer: &str, inner: &str| {
            format!(
                "{inner}std::ostringstream os;\n\
                 {inner}os << *this;\n\
                 {inner}return os.str();\n\
                 {outer}}}\n"
            )
        };

        Parts::new(
            format!("\n{i1}std::string toString() const {{\n{}", body(i1, &i2)),
            format!("{i1}std::string toString() const;\n"),
            format!("\nstd::string {name}::toString() const {{\n{}", body("", i1)),
        )
    }

    fn stream_parts(&self, selection: &FieldSelection) -> Parts {
        let (name, i1) = (self.name(), &self.indent);
        let i2 = i1.repeat(2);
        let members = selection
            .resolve(self.class, true)
            .iter()
            .map(|f| format!("{0}=\" << obj.{0} << \"", f.name))
            .collect::<Vec<_>>()
            .join(", ");
        let statement = format!("return os << \"{name} [{members}]\";");
        let signature = format!("std::ostream &operator<<(std::ostream &os, const {name} &obj)");

        Parts::new(
            format!("\n{i1}friend {signature} {{\n{i2}{statement}\n{i1}}}\n"),
            format!("{i1}friend {signature};\n"),
            format!("\n{signature} {{\n{i1}{statement}\n}}\n"),
        )
    }

    fn equality_parts(&self) -> Parts {
        let (name, i1) = (self.name(), &self.indent);
        Parts::new(
            format!("\n{i1}bool operator==(const {name} &rhs) const {{ return false; }}\n"),
            format!("{i1}bool operator==(const {name} &rhs) const;\n"),
            format!("\nbool {name}::operator==(const {name} &rhs) const {{ return false; }}\n"),
        )
    }

    fn bool_parts(&self) -> Parts {
        let (name, i1) = (self.name(), &self.indent);
        Parts::new(
            format!("\n{i1}explicit operator bool() const {{ return true; }}\n"),
            format!("{i1}explicit operator bool() const;\n"),
            format!("\n{name}::operator bool() const {{ return true; }}\n"),
        )
    }
}

/// Fundamental members are passed by value, everything else by const reference
fn parameter(field: &Field, param_name: &str) -> String {
    if field.is_fundamental {
        format!("{} {param_name}", field.declared_type)
    } else {
        format!("const {} &{param_name}", field.declared_type)
    }
}

/// ` : a(..), b(..)` or nothing
fn initializer_list(items: impl Iterator<Item = String>) -> String {
    let items: Vec<String> = items.collect();
    if items.is_empty() {
        String::new()
    } else {
        format!(" : {}", items.join(", "))
    }
}
