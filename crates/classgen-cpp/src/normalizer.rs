//! Comment elimination that preserves buffer geometry
//!
//! Comments are blanked with spaces rather than removed, so byte offsets and
//! line numbers computed on the normalized text are valid for the original
//! buffer. Newlines are never blanked.
//!
//! String literals are tracked with a plain quote toggle: escaped quotes and
//! character literals containing `"` are not recognized.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockState {
    Normal,
    InString,
    InBlockComment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineState {
    Normal,
    InString,
    InLineComment,
}

/// Blank out `/* ... */` and `// ...` comments outside string literals
pub fn strip_comments(source: &str) -> String {
    let mut bytes = source.as_bytes().to_vec();
    blank_block_comments(&mut bytes);
    blank_line_comments(&mut bytes);
    // Only whole comment regions are blanked and they start and end on ASCII
    // delimiters, so multi-byte characters are either kept or fully replaced.
    String::from_utf8(bytes)
        .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

fn blank(b: &mut u8) {
    if *b != b'\n' {
        *b = b' ';
    }
}

fn blank_block_comments(bytes: &mut [u8]) {
    let mut state = BlockState::Normal;
    let mut i = 0;
    while i < bytes.len() {
        let next = bytes.get(i + 1).copied();
        match state {
            BlockState::Normal => match (bytes[i], next) {
                (b'/', Some(b'*')) => {
                    state = BlockState::InBlockComment;
                    blank(&mut bytes[i]);
                }
                // A stray terminator outside any comment is blanked as well.
                (b'*', Some(b'/')) => {
                    blank(&mut bytes[i]);
                    blank(&mut bytes[i + 1]);
                    i += 1;
                }
                (b'"', _) => state = BlockState::InString,
                _ => {}
            },
            BlockState::InString => {
                if bytes[i] == b'"' {
                    state = BlockState::Normal;
                }
            }
            BlockState::InBlockComment => {
                if bytes[i] == b'*' && next == Some(b'/') {
                    blank(&mut bytes[i]);
                    blank(&mut bytes[i + 1]);
                    state = BlockState::Normal;
                    i += 1;
                } else {
                    blank(&mut bytes[i]);
                }
            }
        }
        i += 1;
    }
}

fn blank_line_comments(bytes: &mut [u8]) {
    let mut state = LineState::Normal;
    for i in 0..bytes.len() {
        let next = bytes.get(i + 1).copied();
        match state {
            LineState::Normal => match (bytes[i], next) {
                (b'/', Some(b'/')) => {
                    state = LineState::InLineComment;
                    blank(&mut bytes[i]);
                }
                (b'"', _) => state = LineState::InString,
                _ => {}
            },
            LineState::InString => {
                if bytes[i] == b'"' {
                    state = LineState::Normal;
                }
            }
            LineState::InLineComment => {
                if bytes[i] == b'\n' {
                    state = LineState::Normal;
                } else {
                    blank(&mut bytes[i]);
                }
            }
        }
    }
}
