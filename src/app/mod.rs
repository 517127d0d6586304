//! Application layer.
//!
//! - `document.rs` - the in-memory document (buffer, path, dirty flag)
//! - `history.rs` - command-pattern undo/redo stack
//! - `state.rs` - application coordinator: owns the document and widgets,
//!   implements every menu handler
//! - `search.rs` - search-highlight bookkeeping
//! - `file_io.rs` / `file_filters.rs` / `text_ops.rs` - pure helpers
//! - `messages.rs` - menu-to-handler message enum

pub mod document;
pub mod error;
pub mod file_filters;
pub mod file_io;
pub mod history;
pub mod messages;
pub mod search;
pub mod state;
pub mod text_ops;

// Re-exports for convenient external access
pub use document::Document;
pub use error::{AppError, Result};
pub use history::{EditDelta, EditHistory};
pub use messages::Message;
pub use state::AppState;
