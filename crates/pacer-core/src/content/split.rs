//! Decides how raw input partitions or rejoins sections.
//!
//! Nothing here touches a rendering surface: boundary search takes a logical
//! char offset that the editor surface has already resolved from a pointer.

use alloc::{string::String, vec::Vec};

use super::EditError;

/// Two halves of a boundary split, whitespace at the join trimmed away.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SplitPlan {
    /// Char offset of the boundary the split happens at.
    pub boundary: usize,
    pub left: String,
    pub right: String,
}

impl SplitPlan {
    pub fn into_parts(self) -> Vec<String> {
        alloc::vec![self.left, self.right]
    }
}

/// What an incoming edit or paste turns into.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EditOutcome {
    /// Plain replacement of the section text.
    Replace(String),
    /// Replace the section with these non-empty parts, in order.
    Split(Vec<String>),
}

/// Nearest word boundary at or after char offset `offset`: the first space or
/// newline found scanning forward. `None` when the scan runs off the end.
pub fn find_boundary(text: &str, offset: usize) -> Option<usize> {
    text.chars()
        .enumerate()
        .skip(offset)
        .find(|(_, ch)| matches!(ch, ' ' | '\n'))
        .map(|(idx, _)| idx)
}

/// Plans a split at the boundary found from `offset`. Both halves must be
/// non-empty after trimming or the split is suppressed.
pub fn plan_split(text: &str, offset: usize) -> Result<SplitPlan, EditError> {
    let boundary = find_boundary(text, offset).ok_or(EditError::NoSplitBoundary(offset))?;
    let byte = char_to_byte(text, boundary);

    let left = text[..byte].trim_end();
    let right = text[byte..].trim_start();
    if left.is_empty() || right.is_empty() {
        return Err(EditError::NoSplitBoundary(offset));
    }

    Ok(SplitPlan {
        boundary,
        left: String::from(left),
        right: String::from(right),
    })
}

/// Newline-driven partition of a full section text.
///
/// Leading and trailing newline runs are dropped. Remaining newlines split the
/// text into trimmed, non-empty segments; with fewer than two segments the
/// input degrades to a plain replacement.
pub fn partition_lines(text: &str) -> EditOutcome {
    let stripped = text.trim_matches(|ch| matches!(ch, '\n' | '\r'));
    if !stripped.contains('\n') {
        return EditOutcome::Replace(String::from(stripped));
    }

    let segments: Vec<String> = stripped
        .split('\n')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(String::from)
        .collect();

    if segments.len() >= 2 {
        EditOutcome::Split(segments)
    } else {
        EditOutcome::Replace(segments.join(" "))
    }
}

/// Inserts `payload` into `text` at char offset `at` (clamped to the end).
pub fn insert_at(text: &str, at: usize, payload: &str) -> String {
    let byte = char_to_byte(text, at);
    let mut out = String::with_capacity(text.len() + payload.len());
    out.push_str(&text[..byte]);
    out.push_str(payload);
    out.push_str(&text[byte..]);
    out
}

/// Merge policy: the section must have an unfinished predecessor, must not be
/// finished itself, and must not be the trailing buffer.
pub fn check_merge(
    index: usize,
    len: usize,
    is_completed: impl Fn(usize) -> bool,
) -> Result<(), EditError> {
    if index >= len {
        return Err(EditError::IndexOutOfRange { index, len });
    }
    if index == 0 {
        return Err(EditError::NoPredecessor(index));
    }
    if index == len - 1 {
        return Err(EditError::BufferSection(index));
    }
    if is_completed(index) {
        return Err(EditError::SectionCompleted(index));
    }
    if is_completed(index - 1) {
        return Err(EditError::PredecessorCompleted(index));
    }
    Ok(())
}

fn char_to_byte(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map_or(text.len(), |(byte, _)| byte)
}
