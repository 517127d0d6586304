//! Escriba: a minimal desktop text editor built on FLTK.
//!
//! Thin event-driven glue over the toolkit's widgets: a text editor
//! widget, native file dialogs, a first-occurrence substring search
//! with a single highlight span, and an explicit undo/redo stack.

pub mod app;
pub mod ui;
