use std::path::Path;

/// Find the first occurrence of `term` in `text`.
///
/// Exact, case-sensitive substring match; returns the byte offset of the
/// lowest-offset occurrence, or None. An empty term never matches.
pub fn find_first(text: &str, term: &str) -> Option<usize> {
    if term.is_empty() {
        return None;
    }
    text.find(term)
}

/// Append ".txt" to a save path that has no extension.
///
/// Paths that already carry any extension are returned unchanged, so saving
/// as "notes.py" stays "notes.py" while "notes" becomes "notes.txt".
pub fn ensure_default_extension(path: &str) -> String {
    let has_extension = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| !e.is_empty());
    if has_extension {
        path.to_string()
    } else {
        format!("{}.txt", path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_first_at_start() {
        assert_eq!(find_first("hello world", "hello"), Some(0));
    }

    #[test]
    fn test_find_first_mid_text() {
        assert_eq!(find_first("hello world", "world"), Some(6));
    }

    #[test]
    fn test_find_first_returns_lowest_offset() {
        assert_eq!(find_first("cat dog cat mouse cat", "cat"), Some(0));
    }

    #[test]
    fn test_find_first_is_case_sensitive() {
        assert_eq!(find_first("Hello world", "hello"), None);
        assert_eq!(find_first("Hello world", "Hello"), Some(0));
    }

    #[test]
    fn test_find_first_no_match() {
        assert_eq!(find_first("hello world", "xyz"), None);
    }

    #[test]
    fn test_find_first_empty_term() {
        assert_eq!(find_first("hello world", ""), None);
    }

    #[test]
    fn test_find_first_multibyte_text() {
        // Offsets are byte offsets, matching the text buffer's positions.
        assert_eq!(find_first("año nuevo", "nuevo"), Some(5));
    }

    #[test]
    fn test_ensure_default_extension_appends_txt() {
        assert_eq!(ensure_default_extension("/tmp/notes"), "/tmp/notes.txt");
    }

    #[test]
    fn test_ensure_default_extension_keeps_existing() {
        assert_eq!(ensure_default_extension("/tmp/a.txt"), "/tmp/a.txt");
        assert_eq!(ensure_default_extension("/tmp/script.py"), "/tmp/script.py");
    }

    #[test]
    fn test_ensure_default_extension_trailing_dot() {
        assert_eq!(ensure_default_extension("/tmp/notes."), "/tmp/notes..txt");
    }
}
