//! Command-pattern undo/redo stack.
//!
//! Every user edit arrives from the text buffer's modify callback as an
//! [`EditDelta`] and is pushed onto the `past` stack. Undo pops `past`,
//! applies the inverse and parks the delta on `future`; redo does the
//! reverse. Any fresh edit truncates `future`.

/// One buffer modification: at byte `pos`, `deleted` was removed and
/// `inserted` was written in its place. Either string may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDelta {
    pub pos: usize,
    pub inserted: String,
    pub deleted: String,
}

impl EditDelta {
    pub fn new(pos: usize, inserted: String, deleted: String) -> Self {
        Self { pos, inserted, deleted }
    }

    /// Apply this delta to a string (forward direction).
    pub fn apply(&self, text: &mut String) {
        text.replace_range(self.pos..self.pos + self.deleted.len(), &self.inserted);
    }

    /// Apply the inverse of this delta: remove what was inserted,
    /// restore what was deleted.
    pub fn apply_inverse(&self, text: &mut String) {
        text.replace_range(self.pos..self.pos + self.inserted.len(), &self.deleted);
    }
}

#[derive(Debug, Default)]
pub struct EditHistory {
    past: Vec<EditDelta>,
    future: Vec<EditDelta>,
}

impl EditHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fresh user edit. Invalidates the redo stack.
    pub fn record(&mut self, delta: EditDelta) {
        self.past.push(delta);
        self.future.clear();
    }

    /// Pop the most recent edit and move it to the redo stack.
    /// The caller applies [`EditDelta::apply_inverse`] to the buffer.
    pub fn undo(&mut self) -> Option<EditDelta> {
        let delta = self.past.pop()?;
        self.future.push(delta.clone());
        Some(delta)
    }

    /// Pop the most recently undone edit and move it back to the undo stack.
    /// The caller applies [`EditDelta::apply`] to the buffer.
    pub fn redo(&mut self) -> Option<EditDelta> {
        let delta = self.future.pop()?;
        self.past.push(delta.clone());
        Some(delta)
    }

    /// Drop both stacks. Used when the buffer is replaced wholesale,
    /// e.g. after opening a file.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }
}
