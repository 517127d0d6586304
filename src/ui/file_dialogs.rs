use std::path::Path;

use fltk::dialog::{FileDialogType, NativeFileChooser};

use crate::app::file_filters::{open_files_filter, save_files_filter};

/// Native open dialog. Returns None if the user cancels.
pub fn native_open_dialog(directory: Option<&str>) -> Option<String> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseFile);
    nfc.set_title("Open File");
    nfc.set_filter(&open_files_filter());
    if let Some(dir) = directory {
        let _ = nfc.set_directory(&Path::new(dir));
    }
    nfc.show(); // blocks until close
    let chosen = nfc.filename().to_string_lossy().to_string();
    if chosen.is_empty() { None } else { Some(chosen) }
}

/// Native save dialog. Returns None if the user cancels. The caller is
/// responsible for appending the default ".txt" extension.
pub fn native_save_dialog(directory: Option<&str>) -> Option<String> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseSaveFile);
    nfc.set_title("Save As");
    nfc.set_filter(&save_files_filter());
    if let Some(dir) = directory {
        let _ = nfc.set_directory(&Path::new(dir));
    }
    nfc.show(); // blocks until close
    let chosen = nfc.filename().to_string_lossy().to_string();
    if chosen.is_empty() { None } else { Some(chosen) }
}
