//! Data-member extraction from a class block
//!
//! Each line of the block is cut into declaration statements, filtered
//! (punctuation, keyword lines, methods, nested scopes) and the survivors are
//! tokenized into a base type and one or more declarators.

use crate::keyword::{first_keyword, is_boundary, is_keyword};
use classgen_parser_api::{ExtractError, ExtractResult, Field};
use log::trace;
use std::collections::BTreeSet;

/// Lines introducing anything other than a data member
const NON_FIELD_KEYWORDS: [&str; 10] = [
    "class",
    "struct",
    "public",
    "protected",
    "friend",
    "private",
    "template",
    "typename",
    "using",
    "typedef",
];

const PUNCTUATION_LINES: [&str; 6] = ["", "{", "}", "};", "(", ")"];

/// Base-type tokens that make a member cheap to pass by value
const FUNDAMENTAL_TOKENS: [&str; 21] = [
    "unsigned", "bool", "char", "short", "int", "long", "float", "double", "", "const",
    "volatile", "mutable", "static", "uint8_t", "uint16_t", "uint32_t", "uint64_t", "int8_t",
    "int16_t", "int32_t", "int64_t",
];

/// How a line containing `(` is treated
///
/// | first significant char after `(` | text before it      | kind               |
/// |----------------------------------|---------------------|--------------------|
/// | `&` or `*`                       | any                 | `FunctionPointer`  |
/// | other                            | has `function<`     | `CallableField`    |
/// | other                            | has `=`, no operator| `InitializedField` |
/// | other                            | otherwise           | `Method`           |
///
/// Lines without `(` are plain `Field`s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    /// Plain declarator line
    Field,
    /// `R (*name)(Args)` or `R (&name)(Args)`
    FunctionPointer,
    /// `std::function<...> name`
    CallableField,
    /// Field whose default value contains parentheses
    InitializedField,
    /// Member function declaration or definition
    Method,
}

impl DeclKind {
    pub fn is_field(self) -> bool {
        self != DeclKind::Method
    }
}

/// Fields found in one block plus the number of lines that looked like
/// declarations but could not be resolved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldScan {
    pub fields: Vec<Field>,
    pub skipped: usize,
}

/// Extract the data members declared directly in `block`
pub fn parse_fields(block: &str) -> FieldScan {
    let mut scan = FieldScan::default();
    let mut depth = DepthTracker::new(block);

    for (offset, statement) in statements(block) {
        let Some(kind) = classify_line(statement).filter(|k| k.is_field()) else {
            continue;
        };
        if !depth.is_member_level(offset) {
            continue;
        }

        let parsed = match kind {
            DeclKind::FunctionPointer => parse_function_pointer(statement).map(|f| vec![f]),
            _ => parse_declarators(statement),
        };
        match parsed {
            Ok(fields) => scan.fields.extend(fields),
            Err(e) => {
                trace!("Skipping member line: {e}");
                scan.skipped += 1;
            }
        }
    }
    scan
}

/// Classify a trimmed statement, or `None` for punctuation and lines
/// introduced by a non-member keyword
pub fn classify_line(line: &str) -> Option<DeclKind> {
    if PUNCTUATION_LINES.contains(&line)
        || NON_FIELD_KEYWORDS
            .iter()
            .any(|kw| first_keyword(line, kw).is_some())
    {
        return None;
    }
    Some(classify(line))
}

/// Classify a member line by the parenthesis rule
pub fn classify(line: &str) -> DeclKind {
    let Some(paren) = line.find('(') else {
        return DeclKind::Field;
    };
    let bytes = line.as_bytes();
    let mut idx = paren;
    while idx < bytes.len() && is_boundary(bytes[idx]) {
        idx += 1;
    }

    if matches!(bytes.get(idx), Some(b'&') | Some(b'*')) {
        return DeclKind::FunctionPointer;
    }
    if line.find("function<").is_some_and(|pos| pos < idx) {
        return DeclKind::CallableField;
    }
    if line.find('=').is_some_and(|pos| pos < idx) && !line.contains("operator") {
        return DeclKind::InitializedField;
    }
    DeclKind::Method
}

/// Brace and parenthesis counts over a block, advanced monotonically
struct DepthTracker<'a> {
    bytes: &'a [u8],
    pos: usize,
    braces: i64,
    parens: i64,
    quote: Option<u8>,
}

impl<'a> DepthTracker<'a> {
    fn new(block: &'a str) -> Self {
        Self {
            bytes: block.as_bytes(),
            pos: 0,
            braces: 0,
            parens: 0,
            quote: None,
        }
    }

    /// Whether `offset` sits directly in the class body and outside any
    /// unterminated parameter list
    fn is_member_level(&mut self, offset: usize) -> bool {
        let bytes = self.bytes;
        let end = offset.min(bytes.len());
        for &b in &bytes[self.pos.min(end)..end] {
            if b == b'\n' {
                self.quote = None;
            }
            if in_literal(&mut self.quote, b) {
                continue;
            }
            match b {
                b'{' => self.braces += 1,
                b'}' => self.braces -= 1,
                b'(' => self.parens += 1,
                b')' => self.parens -= 1,
                _ => {}
            }
        }
        self.pos = self.pos.max(end);
        self.braces == 1 && self.parens == 0
    }
}

/// Advance a `"`/`'` literal toggle over `b` and report whether `b` belongs
/// to a literal, delimiters included
///
/// Escapes are not recognized, matching the comment normalizer.
fn in_literal(quote: &mut Option<u8>, b: u8) -> bool {
    match *quote {
        Some(open) => {
            if b == open {
                *quote = None;
            }
            true
        }
        None if b == b'"' || b == b'\'' => {
            *quote = Some(b);
            true
        }
        None => false,
    }
}

/// Trimmed declaration statements of `block` with their byte offsets
///
/// Lines are cut after every `;` outside parentheses and literals, and after
/// the `{` of a nested `class`/`struct` head, so several declarations sharing
/// a line are seen separately.
fn statements(block: &str) -> Vec<(usize, &str)> {
    let mut out = Vec::new();
    let mut line_start = 0;
    for line in block.split_inclusive('\n') {
        let bytes = line.as_bytes();
        let mut start = 0;
        let mut parens = 0i32;
        let mut quote = None;
        for (i, &b) in bytes.iter().enumerate() {
            if in_literal(&mut quote, b) {
                continue;
            }
            let cut = match b {
                b'(' => {
                    parens += 1;
                    false
                }
                b')' => {
                    parens -= 1;
                    false
                }
                b';' => parens <= 0,
                b'{' => parens <= 0 && opens_nested_type(&line[start..i]),
                _ => false,
            };
            if cut {
                push_statement(&mut out, line_start + start, &line[start..=i]);
                start = i + 1;
            }
        }
        push_statement(&mut out, line_start + start, &line[start..]);
        line_start += line.len();
    }
    out
}

fn opens_nested_type(head: &str) -> bool {
    let head = head.trim_start();
    ["class", "struct"]
        .iter()
        .any(|kw| head.starts_with(kw) && is_keyword(head, 0, kw))
}

fn push_statement<'a>(out: &mut Vec<(usize, &'a str)>, offset: usize, raw: &'a str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        let lead = raw.len() - raw.trim_start().len();
        out.push((offset + lead, trimmed));
    }
}

fn count(text: &str, c: char) -> usize {
    text.matches(c).count()
}

fn is_balanced(text: &str) -> bool {
    count(text, '{') == count(text, '}')
        && count(text, '(') == count(text, ')')
        && count(text, '<') == count(text, '>')
}

/// Whether a whitespace-split token was cut in the middle of a construct
fn needs_continuation(token: &str) -> bool {
    !is_balanced(token)
        || count(token, '"') % 2 == 1
        || token == "_STD"
        || (token.len() > 1 && token.ends_with("::"))
}

/// Split on whitespace, then glue back fragments of bracketed constructs
fn merge_tokens(text: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    let mut continuation = false;
    for piece in text.split_whitespace() {
        if !continuation || tokens.is_empty() {
            tokens.push(piece.to_string());
        } else if let Some(last) = tokens.last_mut() {
            last.push_str(piece);
        }
        continuation = tokens.last().is_some_and(|t| needs_continuation(t));
    }
    tokens
}

/// Drop `= value` pairs, handing a comma carried by the value back to the
/// declarator it terminates
fn remove_initializers(mut tokens: Vec<String>) -> Vec<String> {
    let mut rhs: BTreeSet<usize> = BTreeSet::new();
    for i in 0..tokens.len() {
        if tokens[i] != "=" {
            continue;
        }
        rhs.insert(i);
        rhs.insert(i + 1);
        let carries_comma = tokens
            .get(i + 1)
            .is_some_and(|v| v.starts_with(',') || v.ends_with(','));
        if carries_comma && i > 0 && !tokens[i - 1].ends_with(',') {
            tokens[i - 1].push(',');
        }
    }
    tokens
        .into_iter()
        .enumerate()
        .filter(|(i, _)| !rhs.contains(i))
        .map(|(_, t)| t)
        .collect()
}

/// Cut a `{...}` default initializer off a declarator, keeping a list comma
fn strip_brace_initializer(token: &mut String) {
    if let Some(brace) = token.find('{') {
        let comma = token.ends_with(',');
        token.truncate(brace);
        if comma {
            token.push(',');
        }
    }
}

/// Tokenize a declarator line such as `static const int a = 1, *b, c[4];`
///
/// Lines not ending in `;` carry no complete declaration and yield nothing.
///
/// # Errors
/// Returns [`ExtractError::UnresolvedDeclarator`] when no type can be
/// separated from the names, or the type has unbalanced brackets.
pub fn parse_declarators(line: &str) -> ExtractResult<Vec<Field>> {
    let line = line.trim();
    let Some(body) = line.strip_suffix(';') else {
        return Ok(Vec::new());
    };

    let mut tokens = remove_initializers(merge_tokens(body));
    tokens.iter_mut().for_each(strip_brace_initializer);

    let mut names: BTreeSet<usize> = BTreeSet::new();
    for (i, token) in tokens.iter_mut().enumerate() {
        if token.find(',').is_some_and(|pos| pos + 1 == token.len()) {
            token.pop();
            names.insert(i);
            names.insert(i + 1);
        }
    }
    if names.is_empty() {
        if tokens.is_empty() {
            return Ok(Vec::new());
        }
        names.insert(tokens.len() - 1);
    }

    let first_name = names.iter().next().copied().unwrap_or(tokens.len());
    let mut is_static = false;
    let mut type_parts: Vec<&str> = Vec::new();
    for token in &tokens[..first_name.min(tokens.len())] {
        if token == "static" {
            is_static = true;
        } else {
            type_parts.push(token);
        }
    }
    let base_type = type_parts.join(" ");
    if base_type.is_empty() || !is_balanced(&base_type) {
        return Err(ExtractError::unresolved(line));
    }

    let fields = names
        .iter()
        .filter_map(|&i| tokens.get(i))
        .filter(|name| !name.is_empty())
        .map(|name| declarator_field(name, &base_type).with_static(is_static))
        .collect();
    Ok(fields)
}

fn declarator_field(declarator: &str, base_type: &str) -> Field {
    if let Some(name) = declarator.strip_prefix('*') {
        Field::new(name, format!("{base_type}*")).fundamental()
    } else if let Some(name) = declarator.strip_prefix("&&") {
        Field::new(name, format!("{base_type}&&")).fundamental()
    } else if let Some(name) = declarator.strip_prefix('&') {
        Field::new(name, format!("{base_type}&")).fundamental()
    } else if let Some(bracket) = declarator.find('[') {
        Field::new(&declarator[..bracket], format!("{base_type}*"))
            .with_fundamental(is_fundamental(base_type))
            .array()
    } else {
        Field::new(declarator, base_type).with_fundamental(is_fundamental(base_type))
    }
}

/// Parse `R (*name)(Args);` into a field named `name` of type `R (*)(Args)`
///
/// # Errors
/// Returns [`ExtractError::UnresolvedDeclarator`] when the parentheses do not
/// enclose a name.
pub fn parse_function_pointer(line: &str) -> ExtractResult<Field> {
    let line = line.trim();
    let line = line.strip_suffix(';').unwrap_or(line);
    let bytes = line.as_bytes();

    let (Some(open), Some(close)) = (line.find('('), line.find(')')) else {
        return Err(ExtractError::unresolved(line));
    };
    let mut marker = open;
    while marker < bytes.len() && is_boundary(bytes[marker]) {
        marker += 1;
    }
    if marker >= close {
        return Err(ExtractError::unresolved(line));
    }

    let name = line[marker + 1..close].trim();
    let tail = &line[close..];
    // A default value (`= nullptr`) after the parameter list is not part of
    // the type.
    let tail = match (tail.rfind(')'), tail.rfind('=')) {
        (Some(last_paren), Some(eq)) if eq > last_paren => &tail[..eq],
        _ => tail,
    };
    let signature = format!("{}{}", &line[..=marker], tail);

    let mut is_static = false;
    let mut parts: Vec<&str> = Vec::new();
    for token in signature.split_whitespace() {
        if token == "static" {
            is_static = true;
        } else {
            parts.push(token);
        }
    }
    if name.is_empty() {
        return Err(ExtractError::unresolved(line));
    }

    Ok(Field::new(name, parts.join(" "))
        .with_static(is_static)
        .fundamental())
}

/// Whether every token of `base_type` is a built-in arithmetic type or
/// qualifier
pub fn is_fundamental(base_type: &str) -> bool {
    base_type
        .split([' ', '*'])
        .all(|token| FUNDAMENTAL_TOKENS.contains(&token))
}
