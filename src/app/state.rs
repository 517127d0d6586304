use fltk::{app, dialog, prelude::*, text::TextEditor, window::Window};
use log::info;

use super::document::Document;
use super::file_io::{read_document, write_document};
use super::search::style_table;
use super::text_ops::{ensure_default_extension, find_first};
use crate::ui::file_dialogs::{native_open_dialog, native_save_dialog};

pub const WINDOW_TITLE: &str = "Editor de Texto";

/// Application coordinator: owns the single [`Document`] explicitly and
/// passes it to each handler, plus the widgets the handlers touch.
pub struct AppState {
    pub document: Document,
    pub editor: TextEditor,
    pub window: Window,
    /// Last directory used in a file open/save dialog.
    pub last_open_directory: Option<String>,
}

impl AppState {
    pub fn new(mut editor: TextEditor, window: Window) -> Self {
        let document = Document::new();
        editor.set_buffer(document.buffer.clone());
        editor.set_highlight_data_ext(document.style_buffer.clone(), style_table());

        Self {
            document,
            editor,
            window,
            last_open_directory: None,
        }
    }

    pub fn update_window_title(&mut self) {
        match self.document.file_path {
            Some(ref path) => self.window.set_label(&format!("{} - {}", WINDOW_TITLE, path)),
            None => self.window.set_label(WINDOW_TITLE),
        }
    }

    fn remember_directory(&mut self, path: &str) {
        if let Some(parent) = std::path::Path::new(path).parent() {
            self.last_open_directory = Some(parent.to_string_lossy().to_string());
        }
    }

    // --- File operations ---

    pub fn file_open(&mut self) {
        let dir = self.last_open_directory.clone();
        if let Some(path) = native_open_dialog(dir.as_deref()) {
            self.open_file(path);
        }
    }

    pub fn open_file(&mut self, path: String) {
        self.remember_directory(&path);
        match read_document(&path) {
            Ok(content) => {
                self.document.replace_contents(&content);
                self.document.file_path = Some(path);
                self.editor.set_insert_position(0);
                self.update_window_title();
            }
            // Prior buffer and path stay untouched on failure.
            Err(e) => dialog::alert_default(&format!("Error opening file: {}", e)),
        }
    }

    pub fn file_save(&mut self) {
        let Some(path) = self.document.file_path.clone() else {
            self.file_save_as();
            return;
        };
        match write_document(&path, &self.document.text()) {
            Ok(()) => {
                self.document.mark_clean();
                dialog::message_default("File saved successfully.");
            }
            Err(e) => dialog::alert_default(&format!("Error saving file: {}", e)),
        }
    }

    pub fn file_save_as(&mut self) {
        let Some(chosen) = native_save_dialog(self.last_open_directory.as_deref()) else {
            return;
        };
        let path = ensure_default_extension(&chosen);
        self.remember_directory(&path);
        match write_document(&path, &self.document.text()) {
            Ok(()) => {
                self.document.file_path = Some(path);
                self.document.mark_clean();
                self.update_window_title();
                dialog::message_default("File saved successfully.");
            }
            // A failed save leaves the previous path association alone.
            Err(e) => dialog::alert_default(&format!("Error saving file: {}", e)),
        }
    }

    /// Quit, prompting to save first when the document is dirty.
    pub fn request_quit(&mut self) {
        if !self.document.is_dirty() {
            app::quit();
            return;
        }
        let choice = dialog::choice2_default(
            "The document has unsaved changes.",
            "Save",
            "Discard",
            "Cancel",
        );
        match choice {
            Some(0) => {
                self.file_save();
                // Save may have been canceled or failed; only quit clean.
                if !self.document.is_dirty() {
                    app::quit();
                }
            }
            Some(1) => app::quit(),
            _ => {}
        }
    }

    // --- Edit operations ---

    pub fn edit_undo(&mut self) {
        if let Some(pos) = self.document.undo() {
            self.editor.set_insert_position(pos as i32);
            self.editor.show_insert_position();
        }
    }

    pub fn edit_redo(&mut self) {
        if let Some(pos) = self.document.redo() {
            self.editor.set_insert_position(pos as i32);
            self.editor.show_insert_position();
        }
    }

    // --- Search ---

    pub fn search_for(&mut self, term: &str) {
        let text = self.document.text();
        match find_first(&text, term) {
            Some(start) => {
                let end = start + term.len();
                info!("search term found at byte offset {}", start);
                let styles = self.document.search.borrow_mut().apply(text.len(), start, end);
                self.document.style_buffer.set_text(&styles);
                self.editor.set_insert_position(start as i32);
                self.editor.show_insert_position();
            }
            None => {
                // A stale highlight from an earlier search would be
                // misleading next to a "not found" message, so drop it.
                let styles = self.document.search.borrow_mut().clear(text.len());
                self.document.style_buffer.set_text(&styles);
                dialog::message_default("Text not found.");
            }
        }
    }
}
