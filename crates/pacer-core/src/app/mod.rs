//! Playback state machine: walks the active section one token at a time on a
//! WPM-derived one-shot timer and records which sections are finished.

mod timer;

use alloc::{collections::BTreeSet, string::String, vec::Vec};

use log::{debug, info};
use thiserror::Error;

use crate::{
    content::{
        EditError, EditOutcome, SectionId, SectionStore, TokenCache,
        split::{check_merge, insert_at, partition_lines, plan_split},
    },
    input::{InputEvent, InputProvider, NoPointer, OffsetMapper},
    render::{PrimaryAction, Screen, SectionView},
    text_policy::{percent_label, preview_compact},
};

pub use timer::TickTimer;

pub const DEFAULT_WPM: f64 = 250.0;
const DEFAULT_WPM_STEP: f64 = 10.0;
const INITIAL_WORD: &str = " ";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReaderConfig {
    pub wpm: f64,
    pub wpm_step: f64,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            wpm: DEFAULT_WPM,
            wpm_step: DEFAULT_WPM_STEP,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum WpmError {
    #[error("wpm input is empty")]
    Empty,
    #[error("wpm input is not a number")]
    NotANumber,
    #[error("wpm must be finite")]
    NotFinite,
    #[error("wpm must be greater than zero")]
    NotPositive,
}

/// Accepts only positive finite numbers.
pub fn validate_wpm(value: f64) -> Result<f64, WpmError> {
    if !value.is_finite() {
        return Err(WpmError::NotFinite);
    }
    if value <= 0.0 {
        return Err(WpmError::NotPositive);
    }
    Ok(value)
}

/// Parses raw control-surface text into a valid WPM.
pub fn parse_wpm(raw: &str) -> Result<f64, WpmError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(WpmError::Empty);
    }
    let value = trimmed.parse::<f64>().map_err(|_| WpmError::NotANumber)?;
    validate_wpm(value)
}

/// Milliseconds each token stays on screen: `60000 / wpm`, at least 1.
pub fn wait_ms_for(wpm: f64) -> u64 {
    let ms = 60_000.0 / wpm;
    if ms.is_finite() && ms >= 1.0 {
        (ms + 0.5) as u64
    } else {
        1
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlaybackPhase {
    Idle,
    Running,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackState {
    pub current_section: usize,
    pub current_word_index: usize,
    pub playing: bool,
    pub wpm: f64,
    /// 0..=100
    pub progress: f32,
}

impl PlaybackState {
    fn new(wpm: f64) -> Self {
        Self {
            current_section: 0,
            current_word_index: 0,
            playing: false,
            wpm,
            progress: 0.0,
        }
    }
}

/// Emitted by the scheduler, drained with [`ReaderApp::drain_events`].
#[derive(Clone, Debug, PartialEq)]
pub enum PlaybackEvent {
    Word {
        section: usize,
        word_index: usize,
        word: String,
        progress: f32,
    },
    SectionComplete {
        section: usize,
    },
    AllComplete,
}

pub struct ReaderApp<IN, OM = NoPointer>
where
    IN: InputProvider,
    OM: OffsetMapper,
{
    input: IN,
    offset_mapper: OM,
    config: ReaderConfig,
    app_title: &'static str,
    store: SectionStore,
    tokens: TokenCache,
    state: PlaybackState,
    completed: BTreeSet<usize>,
    current_word: String,
    timer: TickTimer,
    events: Vec<PlaybackEvent>,
    pending_redraw: bool,
    editor_epoch: u32,
    status: Option<&'static str>,
    words_since_drain: u32,
}

include!("view.rs");
include!("input.rs");
include!("runtime.rs");
include!("editing.rs");
