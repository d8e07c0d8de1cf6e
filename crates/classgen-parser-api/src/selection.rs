//! Choosing the class a caret position refers to

use crate::entities::ClassDescriptor;
use crate::errors::{ExtractError, ExtractResult};
use log::debug;

/// Index of the active class for `current_line` (0-indexed)
///
/// The first class whose line range contains `current_line` wins. Otherwise
/// the last class starting before `current_line` is chosen, scanning in
/// source order and stopping at the first class that does not; when even the
/// first class starts at or after the line, the first class is chosen.
pub fn active_index(classes: &[ClassDescriptor], current_line: usize) -> Option<usize> {
    match classes.len() {
        0 => None,
        1 => Some(0),
        _ => {
            if let Some(idx) = classes.iter().position(|c| c.contains_line(current_line)) {
                return Some(idx);
            }
            let preceding = classes
                .iter()
                .take_while(|c| c.start_line < current_line)
                .count();
            Some(preceding.saturating_sub(1))
        }
    }
}

/// Pick the active class for `current_line`
///
/// # Errors
/// Returns [`ExtractError::NoClassFound`] when `classes` is empty.
pub fn select_active(
    classes: &[ClassDescriptor],
    current_line: usize,
) -> ExtractResult<&ClassDescriptor> {
    let idx = active_index(classes, current_line).ok_or(ExtractError::NoClassFound)?;
    let class = &classes[idx];
    debug!(
        "Selected class {} (lines {}-{}) for line {}",
        class.name, class.start_line, class.end_line, current_line
    );
    Ok(class)
}
