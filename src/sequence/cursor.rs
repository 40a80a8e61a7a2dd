//! Shared round-robin cursor over a status-code sequence.

use std::sync::{Mutex, PoisonError};

use crate::sequence::parse::parse_sequence;

/// Sequence plus the index of the next code to hand out.
#[derive(Debug, Default)]
struct CursorState {
    codes: Vec<u16>,
    next: usize,
}

/// Round-robin source of status codes shared by all requests.
///
/// The stored sequence is replaced when it is empty or when the caller forces
/// a reinit; otherwise the supplied text is ignored and the existing sequence
/// keeps cycling.
#[derive(Debug, Default)]
pub struct SequenceCursor {
    state: Mutex<CursorState>,
}

impl SequenceCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the next code of the sequence, advancing the cursor.
    ///
    /// Returns `None` if the (possibly just replaced) sequence is empty.
    pub fn resolve_next(&self, raw: &str, force_reinit: bool) -> Option<u16> {
        // The state is consistent between statements, so a poisoned lock is
        // still safe to use.
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        if state.codes.is_empty() || force_reinit {
            state.codes = parse_sequence(raw);
            state.next = 0;
        }

        if state.codes.is_empty() {
            return None;
        }

        let code = state.codes[state.next];
        state.next = (state.next + 1) % state.codes.len();
        Some(code)
    }

    /// Snapshot of the stored sequence.
    pub fn sequence(&self) -> Vec<u16> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .codes
            .clone()
    }

    /// Index of the code the next call will return.
    pub fn position(&self) -> usize {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).next
    }
}
