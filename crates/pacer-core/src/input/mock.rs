use alloc::vec::Vec;

use super::{InputEvent, InputProvider};

/// Input source that never produces events.
#[derive(Default, Debug, Clone, Copy)]
pub struct MockInput;

impl MockInput {
    pub const fn new() -> Self {
        Self
    }
}

impl InputProvider for MockInput {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        Ok(None)
    }
}

/// Queue-backed input. Events pushed between ticks are drained on the next
/// tick in push order.
#[derive(Default, Debug, Clone)]
pub struct ScriptedInput {
    events: Vec<InputEvent>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(events: Vec<InputEvent>) -> Self {
        Self { events, cursor: 0 }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    pub fn pending(&self) -> usize {
        self.events.len() - self.cursor
    }
}

impl InputProvider for ScriptedInput {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        let Some(event) = self.events.get(self.cursor).cloned() else {
            return Ok(None);
        };
        self.cursor = self.cursor.saturating_add(1);
        Ok(Some(event))
    }
}
