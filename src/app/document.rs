use std::cell::{Cell, RefCell};
use std::rc::Rc;

use fltk::text::TextBuffer;

use super::history::{EditDelta, EditHistory};
use super::search::{PLAIN_STYLE, SearchHighlight, style_run};

/// The single in-memory document: the text buffer owned by the UI, the
/// companion style buffer, the associated file path (None until the buffer
/// has been tied to a file by open or save-as), and the edit history.
pub struct Document {
    pub buffer: TextBuffer,
    pub style_buffer: TextBuffer,
    pub file_path: Option<String>,
    pub has_unsaved_changes: Rc<Cell<bool>>,
    /// The active search highlight; shared with the modify callback, which
    /// invalidates it on every edit so the span never drifts from the text.
    pub search: Rc<RefCell<SearchHighlight>>,
    history: Rc<RefCell<EditHistory>>,
    /// Set while undo/redo mutates the buffer, so the modify callback
    /// does not record the replay as a fresh edit.
    replaying: Rc<Cell<bool>>,
}

impl Document {
    pub fn new() -> Self {
        let mut buffer = TextBuffer::default();
        let style_buffer = TextBuffer::default();
        let has_unsaved_changes = Rc::new(Cell::new(false));
        let search = Rc::new(RefCell::new(SearchHighlight::new()));
        let history = Rc::new(RefCell::new(EditHistory::new()));
        let replaying = Rc::new(Cell::new(false));

        let changes = has_unsaved_changes.clone();
        let search_ref = search.clone();
        let hist = history.clone();
        let replay = replaying.clone();
        let text_buf = buffer.clone();
        let mut style_buf = style_buffer.clone();
        buffer.add_modify_callback(move |pos, inserted, deleted, _restyled, deleted_text| {
            if inserted > 0 || deleted > 0 {
                changes.set(true);
                // Keep the style buffer length-synced; fresh edits are plain.
                if inserted > 0 {
                    let filler: String =
                        std::iter::repeat(PLAIN_STYLE).take(inserted as usize).collect();
                    style_buf.insert(pos, &filler);
                }
                if deleted > 0 {
                    style_buf.remove(pos, pos + deleted);
                }
                // The edit moved text out from under any active span.
                search_ref.borrow_mut().invalidate(&mut style_buf);
                if !replay.get() {
                    let inserted_text = if inserted > 0 {
                        text_buf.text_range(pos, pos + inserted).unwrap_or_default()
                    } else {
                        String::new()
                    };
                    hist.borrow_mut().record(EditDelta::new(
                        pos as usize,
                        inserted_text,
                        deleted_text.to_string(),
                    ));
                }
            }
        });

        Self {
            buffer,
            style_buffer,
            file_path: None,
            has_unsaved_changes,
            search,
            history,
            replaying,
        }
    }

    /// Whole-buffer text. Trivial wrapper, but keeps callers off the
    /// widget API.
    pub fn text(&self) -> String {
        self.buffer.text()
    }

    pub fn is_dirty(&self) -> bool {
        self.has_unsaved_changes.get()
    }

    pub fn mark_clean(&self) {
        self.has_unsaved_changes.set(false);
    }

    /// Replace the buffer wholesale with file content. Resets the edit
    /// history and the dirty flag; the caller sets `file_path`.
    pub fn replace_contents(&mut self, content: &str) {
        self.replaying.set(true);
        self.buffer.set_text(content);
        self.replaying.set(false);
        self.style_buffer.set_text(&style_run(content.len(), None));
        self.history.borrow_mut().clear();
        self.has_unsaved_changes.set(false);
    }

    /// Apply the inverse of the most recent edit. Returns the byte
    /// position to place the cursor at, or None if there was nothing
    /// to undo.
    pub fn undo(&mut self) -> Option<usize> {
        let delta = self.history.borrow_mut().undo()?;
        self.replaying.set(true);
        let pos = delta.pos as i32;
        if !delta.inserted.is_empty() {
            self.buffer.remove(pos, pos + delta.inserted.len() as i32);
        }
        if !delta.deleted.is_empty() {
            self.buffer.insert(pos, &delta.deleted);
        }
        self.replaying.set(false);
        Some(delta.pos + delta.deleted.len())
    }

    /// Reapply the most recently undone edit. Returns the byte position
    /// to place the cursor at, or None if there was nothing to redo.
    pub fn redo(&mut self) -> Option<usize> {
        let delta = self.history.borrow_mut().redo()?;
        self.replaying.set(true);
        let pos = delta.pos as i32;
        if !delta.deleted.is_empty() {
            self.buffer.remove(pos, pos + delta.deleted.len() as i32);
        }
        if !delta.inserted.is_empty() {
            self.buffer.insert(pos, &delta.inserted);
        }
        self.replaying.set(false);
        Some(delta.pos + delta.inserted.len())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
