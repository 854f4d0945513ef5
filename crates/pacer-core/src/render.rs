//! App-level view models consumed by the editor and reader surfaces.

use crate::text_policy::{PercentLabel, PreviewLabel};

/// What the main control should offer right now.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PrimaryAction {
    Play,
    Pause,
    /// Every section is finished; only a reset makes sense.
    Reset,
}

/// One section row for the editor surface.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SectionView<'a> {
    pub index: usize,
    pub text: &'a str,
    pub preview: PreviewLabel,
    /// Finished sections render greyed out and refuse edits.
    pub completed: bool,
    /// Section currently under playback.
    pub active: bool,
    /// Whether the merge-into-previous affordance is offered.
    pub mergeable: bool,
    pub is_buffer: bool,
}

/// Snapshot handed to a renderer for one frame.
#[derive(Debug)]
pub struct Screen<'a> {
    pub title: &'a str,
    pub wpm: f64,
    pub word: &'a str,
    /// 0..=100
    pub progress: f32,
    pub progress_label: PercentLabel,
    pub playing: bool,
    pub all_complete: bool,
    pub primary: PrimaryAction,
    pub active_section: usize,
    pub sections: &'a [SectionView<'a>],
    /// Changes whenever the section list changes.
    pub content_revision: u32,
    /// Changes when the editor must drop its own buffered state.
    pub editor_epoch: u32,
    pub status: Option<&'a str>,
}
