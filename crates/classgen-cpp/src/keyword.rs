//! Keyword occurrence classification
//!
//! A substring match of `class`, `template`, `public` and friends only counts
//! when it stands alone: both neighbours must be boundary characters, and the
//! occurrence must not sit inside a template argument list or continue a
//! comma-separated list.

/// Characters that may delimit a keyword
pub const BOUNDARY_CHARS: &[u8] = b" \r\t\n,:<([{";

pub fn is_boundary(b: u8) -> bool {
    BOUNDARY_CHARS.contains(&b)
}

/// Whether `word` at byte offset `index` of `text` is a true keyword use
pub fn is_keyword(text: &str, index: usize, word: &str) -> bool {
    let bytes = text.as_bytes();
    if index > 0 && bytes.get(index - 1).is_some_and(|&b| !is_boundary(b)) {
        return false;
    }
    if bytes.get(index + word.len()).is_some_and(|&b| !is_boundary(b)) {
        return false;
    }
    // The nearest significant character before the word decides whether the
    // occurrence is an argument (`<class T`, `, class U`) or a declaration.
    match bytes[..index.min(bytes.len())]
        .iter()
        .rev()
        .find(|b| !b.is_ascii_whitespace())
    {
        Some(b'<') | Some(b',') => false,
        _ => true,
    }
}

/// Byte offset of the first occurrence of `word` in `text` if that occurrence
/// is a true keyword
pub fn first_keyword(text: &str, word: &str) -> Option<usize> {
    text.find(word).filter(|&idx| is_keyword(text, idx, word))
}
