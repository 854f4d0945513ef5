/// Cancellable one-shot tick deadline.
///
/// Armed relative to the moment the previous tick finished, so a late host
/// loop drifts the schedule instead of firing twice.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TickTimer {
    deadline_ms: Option<u64>,
}

impl TickTimer {
    pub const fn new() -> Self {
        Self { deadline_ms: None }
    }

    pub fn arm(&mut self, now_ms: u64, wait_ms: u64) {
        self.deadline_ms = Some(now_ms.saturating_add(wait_ms));
    }

    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }

    pub fn deadline_ms(&self) -> Option<u64> {
        self.deadline_ms
    }

    /// Fires at most once per `arm`: returns `true` and disarms when due.
    pub fn fire_if_due(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}
