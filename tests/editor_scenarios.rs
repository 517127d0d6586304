//! End-to-end scenarios over the headless layers: file round-trips,
//! search offsets, and undo/redo applied to plain strings.

use escriba::app::file_io::{read_document, write_document};
use escriba::app::history::{EditDelta, EditHistory};
use escriba::app::search::{SearchHighlight, style_run};
use escriba::app::text_ops::{ensure_default_extension, find_first};
use tempfile::tempdir;

#[test]
fn hello_world_scenario() {
    let buffer = "hello world".to_string();

    // search "world" -> highlight span [6, 11)
    let start = find_first(&buffer, "world").unwrap();
    assert_eq!(start, 6);
    let end = start + "world".len();
    assert_eq!((start, end), (6, 11));
    assert_eq!(style_run(buffer.len(), Some((start, end))), "AAAAAABBBBB");

    // search "xyz" -> not found, buffer unmodified
    assert_eq!(find_first(&buffer, "xyz"), None);
    assert_eq!(buffer, "hello world");

    // save-as to a fresh path, reopen, contents identical
    let dir = tempdir().unwrap();
    let path = dir.path().join("a.txt");
    let path = path.to_str().unwrap();
    write_document(path, &buffer).unwrap();
    assert_eq!(read_document(path).unwrap(), "hello world");
}

#[test]
fn round_trip_identity_for_arbitrary_utf8_text() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("doc.txt");
    let path = path.to_str().unwrap();

    for text in ["", "plain ascii", "línea acentuada\n", "tabs\tand\nnewlines\n\n", "🦀"] {
        write_document(path, text).unwrap();
        assert_eq!(read_document(path).unwrap(), text, "round trip of {:?}", text);
    }
}

#[test]
fn open_nonexistent_path_fails_without_side_effects() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.txt");
    assert!(read_document(missing.to_str().unwrap()).is_err());
    // Nothing was created by the failed read.
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn save_as_defaults_to_txt_extension() {
    let dir = tempdir().unwrap();
    let chosen = dir.path().join("notes");
    let path = ensure_default_extension(chosen.to_str().unwrap());
    assert!(path.ends_with("notes.txt"));

    write_document(&path, "content").unwrap();
    assert!(dir.path().join("notes.txt").exists());
}

#[test]
fn edit_after_search_drops_the_highlight_span() {
    // Highlight "world" in "hello world", then edit the buffer. The
    // recorded span no longer matches the text, so it must be dropped
    // rather than left pointing at shifted bytes.
    let mut text = "hello world".to_string();
    let mut search = SearchHighlight::new();

    let start = find_first(&text, "world").unwrap();
    let styles = search.apply(text.len(), start, start + "world".len());
    assert_eq!(styles, "AAAAAABBBBB");

    let delta = EditDelta::new(0, "well, ".to_string(), String::new());
    delta.apply(&mut text);
    assert_eq!(text, "well, hello world");

    // Every buffer modification invalidates the span; the style buffer
    // goes back to all-plain at the new length.
    assert_eq!(search.clear(text.len()), "A".repeat(text.len()));
    assert_eq!(search.active_span(), None);
}

#[test]
fn undo_then_redo_restores_each_state() {
    // Simulates typing " world" into "hello", undoing, then redoing.
    let mut text = "hello".to_string();
    let mut history = EditHistory::new();

    let delta = EditDelta::new(5, " world".to_string(), String::new());
    delta.apply(&mut text);
    history.record(delta);
    assert_eq!(text, "hello world");

    history.undo().unwrap().apply_inverse(&mut text);
    assert_eq!(text, "hello");

    history.redo().unwrap().apply(&mut text);
    assert_eq!(text, "hello world");
}
