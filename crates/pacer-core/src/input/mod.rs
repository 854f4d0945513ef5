//! Input abstraction layer.

mod mock;

use alloc::string::String;

pub use mock::{MockInput, ScriptedInput};

/// Logical actions consumed by the reader app.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Play when idle, pause when running.
    TogglePlay,
    /// Raw WPM text from a numeric control; validated before use.
    SetWpm(String),
    WpmUp,
    WpmDown,
    Reset,
    /// Reset plus wipe all sections back to a single empty one.
    Clear,
    /// Full new text of a section. Embedded newlines split the section.
    Edit { section: usize, text: String },
    /// Clipboard payload inserted at char offset `at` of the section.
    Paste {
        section: usize,
        at: usize,
        payload: String,
    },
    /// Split at the word boundary at or after char offset `offset`.
    SplitAt { section: usize, offset: usize },
    /// Split at a pointer position, resolved through an [`OffsetMapper`].
    PointerSplit { section: usize, x: u16, y: u16 },
    MergeUp { section: usize },
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}

/// Maps a position over rendered section text to a logical char offset.
///
/// Implemented per surface; the core never needs to know how text is laid out.
pub trait OffsetMapper {
    fn offset_at(&self, section: usize, x: u16, y: u16) -> Option<usize>;
}

/// Mapper for surfaces without pointer input; never resolves an offset.
#[derive(Default, Debug, Clone, Copy)]
pub struct NoPointer;

impl OffsetMapper for NoPointer {
    fn offset_at(&self, _section: usize, _x: u16, _y: u16) -> Option<usize> {
        None
    }
}
