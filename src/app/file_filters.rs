/// Filter string for the Open dialog.
///
/// FLTK format: "Description\tPattern\nDescription2\tPattern2".
/// FLTK automatically adds an "All Files (*)" option, so we don't include it.
pub fn open_files_filter() -> String {
    ["Text Files\t*.txt", "Source Files\t*.{py,cpp,cs}"].join("\n")
}

/// Filter string for the Save As dialog. Saving defaults to plain text;
/// the ".txt" extension is appended elsewhere when the user omits one.
pub fn save_files_filter() -> String {
    "Text Files\t*.txt".to_string()
}
