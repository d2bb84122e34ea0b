use std::io::Read;

use crate::error::Result;
use crate::op::Op;
use crate::source::Source;

/// Recording of every token fetched inside the outermost active loop.
///
/// The program source cannot be rewound, so the first pass through a loop
/// appends each token here and later iterations replay them by moving
/// `cursor` back. `tokens` is append-only while a loop is active and is
/// cleared when control returns to top level. `cursor` never exceeds
/// `tokens.len()`.
#[derive(Debug, Default)]
pub struct LoopCache {
    tokens: Vec<Op>,
    cursor: usize,
}

impl LoopCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a top-level loop is being recorded or replayed.
    pub fn is_active(&self) -> bool {
        !self.tokens.is_empty()
    }

    /// True when the next fetch is served from the recording.
    #[cfg(test)]
    pub fn is_replaying(&self) -> bool {
        self.cursor < self.tokens.len()
    }

    /// Start a fresh recording with the `[` that entered a top-level loop.
    /// Returns the position of that `[`.
    pub fn begin(&mut self, open: Op) -> usize {
        debug_assert!(!self.is_active());
        self.tokens.push(open);
        self.cursor = 1;
        0
    }

    /// Next token at the cursor, pulled from `source` and recorded if the
    /// cursor is past the end of the recording.
    pub fn fetch_next<R: Read>(&mut self, source: &mut Source<R>) -> Result<Option<Op>> {
        if let Some(&op) = self.tokens.get(self.cursor) {
            self.cursor += 1;
            return Ok(Some(op));
        }
        let Some(op) = source.next_token()? else {
            return Ok(None);
        };
        self.tokens.push(op);
        self.cursor = self.tokens.len();
        Ok(Some(op))
    }

    /// Position of the token most recently returned by `fetch_next`.
    pub fn last_position(&self) -> usize {
        self.cursor.saturating_sub(1)
    }

    /// Move the cursor back to a recorded position.
    pub fn rewind(&mut self, position: usize) {
        debug_assert!(position < self.tokens.len());
        self.cursor = position;
    }

    pub fn reset(&mut self) {
        self.tokens.clear();
        self.cursor = 0;
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Position of the next token to fetch; 0 outside a loop.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
