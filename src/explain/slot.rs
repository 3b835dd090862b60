//! Holder for the explanation currently on screen.
//!
//! Requests are tagged with a [`Ticket`]. Starting a new run or asking for a
//! different step invalidates older tickets, so a slow reply for a step the
//! user has left never overwrites the current one.

use std::sync::Mutex;

/// Identifies one explanation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket {
    generation: u64,
    request: u64,
    /// Step the explanation was requested for.
    pub step_index: usize,
}

#[derive(Debug, Default)]
struct SlotState {
    generation: u64,
    request: u64,
    step_index: Option<usize>,
    text: Option<String>,
    loading: bool,
}

/// Thread-safe explanation slot.
#[derive(Debug, Default)]
pub struct ExplanationSlot {
    state: Mutex<SlotState>,
}

impl ExplanationSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SlotState> {
        // A poisoned slot only holds display text; keep using it.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Start a new run. Clears the slot and invalidates outstanding tickets.
    pub fn begin_run(&self) {
        let mut state = self.lock();
        state.generation += 1;
        state.request = 0;
        state.step_index = None;
        state.text = None;
        state.loading = false;
    }

    /// Register a request for `step_index`, superseding any earlier one.
    pub fn request(&self, step_index: usize) -> Ticket {
        let mut state = self.lock();
        state.request += 1;
        state.step_index = Some(step_index);
        state.text = None;
        state.loading = true;
        Ticket {
            generation: state.generation,
            request: state.request,
            step_index,
        }
    }

    /// Deliver the outcome for `ticket`.
    ///
    /// Returns `false` when the ticket is stale or already completed; the
    /// text is dropped in that case.
    pub fn complete(&self, ticket: Ticket, text: String) -> bool {
        let mut state = self.lock();
        let current = ticket.generation == state.generation && ticket.request == state.request;
        if !current || !state.loading {
            return false;
        }
        state.text = Some(text);
        state.loading = false;
        true
    }

    /// Whether a request is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    /// Step the slot currently refers to.
    #[must_use]
    pub fn step_index(&self) -> Option<usize> {
        self.lock().step_index
    }

    /// The accepted explanation, if any.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        self.lock().text.clone()
    }
}
