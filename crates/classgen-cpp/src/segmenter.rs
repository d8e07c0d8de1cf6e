//! Splitting a normalized buffer into per-declaration blocks
//!
//! Blocks are slices of the buffer they were cut from, so their byte offset
//! is always known and line numbers can be computed without searching.

use crate::keyword::is_keyword;
use log::trace;
use std::ops::Range;

const DECLARATION_KEYWORDS: [&str; 2] = ["class", "struct"];
const FRIEND_CLASS: &str = "friend class";

/// A candidate class/struct declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    /// Declaration text from the keyword through the closing brace
    pub text: &'a str,

    /// Byte offset of `text` in the segmented buffer
    pub offset: usize,
}

/// Blank every `friend class` declaration up to the end of its line
///
/// The line break itself is kept so line numbering does not shift.
pub fn strip_friend_classes(text: &str) -> String {
    let mut bytes = text.as_bytes().to_vec();
    let mut cursor = 0;
    while let Some(found) = text[cursor..].find(FRIEND_CLASS) {
        let start = cursor + found;
        let end = text[start..].find('\n').map_or(text.len(), |n| start + n);
        for b in &mut bytes[start..end] {
            *b = b' ';
        }
        cursor = end;
    }
    String::from_utf8(bytes).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

#[derive(Debug, Clone)]
struct Segment {
    range: Range<usize>,
    open: usize,
    close: usize,
}

impl Segment {
    fn new(text: &str, range: Range<usize>) -> Self {
        let (open, close) = brace_counts(&text[range.clone()]);
        Self { range, open, close }
    }

    fn extend(&mut self, other: &Segment) {
        self.range.end = other.range.end;
        self.open += other.open;
        self.close += other.close;
    }

    fn is_balanced(&self) -> bool {
        self.open == self.close
    }
}

fn brace_counts(text: &str) -> (usize, usize) {
    text.bytes().fold((0, 0), |(open, close), b| match b {
        b'{' => (open + 1, close),
        b'}' => (open, close + 1),
        _ => (open, close),
    })
}

/// Cut `text` into class/struct blocks
pub fn segment(text: &str) -> Vec<Block<'_>> {
    let segments = merge_unbalanced(text, split_at_keywords(text));
    segments
        .into_iter()
        .filter(|s| s.open > 0)
        .filter_map(|s| trim_tail(text, s.range))
        .collect()
}

/// Start a segment at every true `class`/`struct` keyword; any other
/// occurrence extends the previous segment
fn split_at_keywords(text: &str) -> Vec<Segment> {
    let mut marks: Vec<(usize, &str)> = DECLARATION_KEYWORDS
        .iter()
        .flat_map(|word| text.match_indices(word).map(move |(idx, _)| (idx, *word)))
        .collect();
    marks.sort_unstable_by_key(|&(idx, _)| idx);

    let mut segments: Vec<Segment> = Vec::new();
    for (i, &(idx, word)) in marks.iter().enumerate() {
        let end = marks.get(i + 1).map_or(text.len(), |&(next, _)| next);
        let segment = Segment::new(text, idx..end);
        if segments.is_empty() || is_keyword(text, idx, word) {
            segments.push(segment);
        } else if let Some(last) = segments.last_mut() {
            last.extend(&segment);
        }
    }
    segments
}

/// Re-attach segments that a nested declaration split off their parent
fn merge_unbalanced(text: &str, segments: Vec<Segment>) -> Vec<Segment> {
    let mut merged: Vec<Segment> = Vec::with_capacity(segments.len());
    let mut need_merge = false;
    for segment in segments {
        if need_merge {
            if let Some(last) = merged.last_mut() {
                trace!(
                    "Merging segment at {} into unbalanced block at {}",
                    segment.range.start,
                    last.range.start
                );
                last.extend(&segment);
                need_merge = !last.is_balanced();
                continue;
            }
        }
        need_merge = !segment.is_balanced();
        merged.push(segment);
    }
    if need_merge {
        if let Some(last) = merged.last() {
            trace!(
                "Block at {} never balances: {:?}",
                last.range.start,
                &text[last.range.clone()].lines().next()
            );
        }
    }
    merged
}

/// Trim whitespace and drop everything after the brace that closes the
/// block's first `{`
fn trim_tail(text: &str, range: Range<usize>) -> Option<Block<'_>> {
    let raw = &text[range.clone()];
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let offset = range.start + (raw.len() - raw.trim_start().len());
    let first_open = trimmed.find('{')?;

    let mut open = 0;
    let mut close = 0;
    let mut cut = trimmed.len();
    for (i, b) in trimmed.bytes().enumerate() {
        match b {
            b'{' => open += 1,
            b'}' => close += 1,
            _ => {}
        }
        if i >= first_open && open == close {
            cut = i + 1;
            break;
        }
    }

    Some(Block {
        text: &trimmed[..cut],
        offset,
    })
}
