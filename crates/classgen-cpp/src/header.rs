//! Class header parsing: line range, template preamble, name and bases

use crate::keyword::{is_boundary, is_keyword};
use crate::segmenter::Block;
use classgen_parser_api::{AccessLevel, ExtractError, ExtractResult, SuperClass};

/// Everything recovered from a block before its body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassHeader {
    pub name: String,
    pub template_preamble: String,
    pub bases: Vec<SuperClass>,
    pub start_line: usize,
    pub end_line: usize,
}

/// Parse the header of `block`, which was cut from `buffer`
///
/// # Errors
/// Returns [`ExtractError::MalformedClassName`] when the name has unbalanced
/// or misordered angle brackets.
pub fn parse_header(buffer: &str, block: &Block<'_>) -> ExtractResult<ClassHeader> {
    let above = &buffer[..block.offset];
    let start_line = count_newlines(above);
    let end_line = start_line + count_newlines(block.text);

    let (name, bases) = split_base_clause(header_text(block.text));
    if !is_legal_class_name(name) {
        return Err(ExtractError::MalformedClassName(name.to_string()));
    }

    Ok(ClassHeader {
        name: strip_final(name).to_string(),
        template_preamble: template_preamble(above),
        bases: bases.map(parse_bases).unwrap_or_default(),
        start_line,
        end_line,
    })
}

fn count_newlines(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}

/// Text between the declaration keyword and the opening brace
fn header_text(block: &str) -> &str {
    let brace = block.find('{').unwrap_or(block.len());
    let start = block
        .bytes()
        .position(is_boundary)
        .unwrap_or(block.len())
        .min(brace);
    block[start..brace].trim()
}

/// `template <...>` text directly preceding a declaration
fn template_preamble(above: &str) -> String {
    if !above.trim_end().ends_with('>') {
        return String::new();
    }
    let Some(idx) = above.rfind("template") else {
        return String::new();
    };
    let preamble = above[idx..].trim();
    // Anything ending a statement or scope in between means the `template`
    // found belongs to an earlier declaration.
    if !is_keyword(above, idx, "template") || preamble.contains([';', '{', '}', '#']) {
        return String::new();
    }
    preamble.to_string()
}

/// Split `Name : bases` at the first single colon outside angle brackets
fn split_base_clause(header: &str) -> (&str, Option<&str>) {
    let bytes = header.as_bytes();
    let mut depth = 0i32;
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'<' => depth += 1,
            b'>' => depth -= 1,
            b':' if depth == 0 => {
                let scoped = bytes.get(i + 1) == Some(&b':') || (i > 0 && bytes[i - 1] == b':');
                if !scoped {
                    return (header[..i].trim(), Some(&header[i + 1..]));
                }
            }
            _ => {}
        }
    }
    (header, None)
}

fn is_legal_class_name(name: &str) -> bool {
    let opens = name.matches('<').count();
    if opens != name.matches('>').count() {
        return false;
    }
    match (name.find('<'), name.find('>')) {
        (Some(open), Some(close)) => open < close,
        _ => true,
    }
}

fn strip_final(name: &str) -> &str {
    match name.strip_suffix("final") {
        Some(rest) if rest.ends_with(char::is_whitespace) => rest.trim_end(),
        _ => name,
    }
}

fn is_balanced(text: &str) -> bool {
    [('{', '}'), ('(', ')'), ('<', '>')]
        .iter()
        .all(|&(open, close)| text.matches(open).count() == text.matches(close).count())
}

/// Parse a comma-separated base-class list
///
/// Entries split inside template arguments (`Map<K, V>`) are joined back
/// together before the access specifier and `virtual` are read off.
fn parse_bases(clause: &str) -> Vec<SuperClass> {
    let mut entries: Vec<String> = Vec::new();
    let mut need_merge = false;
    for piece in clause.split(',').filter(|p| !p.trim().is_empty()) {
        if need_merge {
            if let Some(last) = entries.last_mut() {
                last.push(',');
                last.push_str(piece);
                need_merge = !is_balanced(last);
                continue;
            }
        }
        need_merge = !is_balanced(piece);
        entries.push(piece.to_string());
    }

    entries
        .iter()
        .filter_map(|entry| parse_base(entry))
        .collect()
}

fn parse_base(entry: &str) -> Option<SuperClass> {
    let tokens: Vec<&str> = entry.split_whitespace().collect();
    let access = if tokens.contains(&"protected") {
        AccessLevel::Protected
    } else if tokens.contains(&"private") {
        AccessLevel::Private
    } else {
        AccessLevel::Public
    };
    let is_virtual = tokens.contains(&"virtual");
    let name = tokens
        .iter()
        .filter(|t| !matches!(**t, "public" | "protected" | "private" | "virtual"))
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    if name.is_empty() {
        return None;
    }

    let mut base = SuperClass::new(name).with_access(access);
    if is_virtual {
        base = base.virtual_base();
    }
    Some(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_of(source: &str) -> ExtractResult<ClassHeader> {
        let offset = source.find("class").or_else(|| source.find("struct")).unwrap();
        let end = source.rfind('}').unwrap() + 1;
        let block = Block {
            text: &source[offset..end],
            offset,
        };
        parse_header(source, &block)
    }

    #[test]
    fn test_plain_class() {
        let header = header_of("class Foo {\n};").unwrap();
        assert_eq!(header.name, "Foo");
        assert!(header.bases.is_empty());
        assert!(header.template_preamble.is_empty());
        assert_eq!((header.start_line, header.end_line), (0, 1));
    }

    #[test]
    fn test_line_range_after_preceding_text() {
        let header = header_of("#include <vector>\n\nstruct Point {\n  int x;\n};").unwrap();
        assert_eq!(header.name, "Point");
        assert_eq!((header.start_line, header.end_line), (2, 4));
        assert!(header.template_preamble.is_empty());
    }

    #[test]
    fn test_no_space_before_brace() {
        assert_eq!(header_of("class Tight{};").unwrap().name, "Tight");
    }

    #[test]
    fn test_bases_with_access_and_virtual() {
        let header = header_of("class A : public B, protected virtual C { };").unwrap();
        assert_eq!(
            header.bases,
            vec![
                SuperClass::new("B"),
                SuperClass::new("C")
                    .with_access(AccessLevel::Protected)
                    .virtual_base(),
            ]
        );
    }

    #[test]
    fn test_default_access_is_public() {
        let header = header_of("struct D : Base, private Impl {};").unwrap();
        assert_eq!(header.bases[0].access, AccessLevel::Public);
        assert_eq!(header.bases[1].access, AccessLevel::Private);
        assert_eq!(header.bases[1].name, "Impl");
    }

    #[test]
    fn test_templated_base_is_rejoined() {
        let header = header_of("class Cache : public std::map<int, std::string> {};").unwrap();
        assert_eq!(header.bases.len(), 1);
        assert_eq!(header.bases[0].name, "std::map<int, std::string>");
    }

    #[test]
    fn test_template_preamble() {
        let source = "template <typename T, int N>\nclass Array {\n  T data[N];\n};";
        let header = header_of(source).unwrap();
        assert_eq!(header.template_preamble, "template <typename T, int N>");
        assert_eq!(header.start_line, 1);
    }

    #[test]
    fn test_specialization_name() {
        let source = "template <>\nclass Box<std::string> : public Base {\n};";
        let header = header_of(source).unwrap();
        assert_eq!(header.name, "Box<std::string>");
        assert_eq!(header.template_preamble, "template <>");
        assert_eq!(header.bases[0].name, "Base");
    }

    #[test]
    fn test_qualified_name() {
        let header = header_of("class ns::Widget : public ns::Base {};").unwrap();
        assert_eq!(header.name, "ns::Widget");
        assert_eq!(header.bases[0].name, "ns::Base");
    }

    #[test]
    fn test_final_dropped_from_name() {
        let header = header_of("class Leaf final : public Node {};").unwrap();
        assert_eq!(header.name, "Leaf");
        assert_eq!(header.bases[0].name, "Node");
    }

    #[test]
    fn test_malformed_name_rejected() {
        let result = header_of("class Bad<int {};");
        assert!(matches!(result, Err(ExtractError::MalformedClassName(_))));

        let result = header_of("class Worse>int< {};");
        assert!(matches!(result, Err(ExtractError::MalformedClassName(_))));
    }

    #[test]
    fn test_unrelated_template_not_used() {
        let source = "template <typename T> void f();\nstd::vector<int>\nclass Plain {\n};";
        let header = header_of(source).unwrap();
        assert!(header.template_preamble.is_empty());
    }
}
