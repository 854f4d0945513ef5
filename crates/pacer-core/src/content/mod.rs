//! Section content: tokenization, the ordered section store, and the
//! split/merge rules applied to it.

pub mod sections;
pub mod split;
pub mod token_cache;
pub mod tokenize;

use alloc::string::String;

use thiserror::Error;

pub use sections::SectionStore;
pub use split::{EditOutcome, SplitPlan};
pub use token_cache::TokenCache;
pub use tokenize::tokenize;

/// Opaque section identity. Stable across text edits, fresh for every piece
/// produced by a split.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct SectionId(u64);

impl SectionId {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// One user-delimited span of source text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Section {
    pub id: SectionId,
    pub text: String,
}

impl Section {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Reasons a section edit is refused. Every variant is a no-op for the
/// caller; nothing here is fatal.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum EditError {
    #[error("section index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("a split needs at least two parts, got {0}")]
    TooFewParts(usize),
    #[error("section {0} is already completed")]
    SectionCompleted(usize),
    #[error("section {0} is the trailing buffer")]
    BufferSection(usize),
    #[error("section {0} has no predecessor to merge into")]
    NoPredecessor(usize),
    #[error("predecessor of section {0} is already completed")]
    PredecessorCompleted(usize),
    #[error("no word boundary at or after offset {0}")]
    NoSplitBoundary(usize),
}
