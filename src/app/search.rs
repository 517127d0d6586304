//! Search-highlight bookkeeping.
//!
//! At most one highlight span is active at a time. The span is realized as
//! a run of [`HIGHLIGHT_STYLE`] in the document's style buffer; the editor's
//! style table maps that character to a yellow background. Any buffer edit
//! invalidates the span, since the recorded offsets no longer match the
//! text.

use fltk::enums::{Color, Font};
use fltk::text::{StyleTableEntryExt, TextAttr, TextBuffer};

/// Style character for unhighlighted text.
pub const PLAIN_STYLE: char = 'A';
/// Style character for the active search match.
pub const HIGHLIGHT_STYLE: char = 'B';

/// Style table for `TextDisplay::set_highlight_data_ext`, indexed by style
/// character ('A' first).
pub fn style_table() -> Vec<StyleTableEntryExt> {
    vec![
        StyleTableEntryExt {
            color: Color::Foreground,
            font: Font::Helvetica,
            size: 14,
            attr: TextAttr::None,
            bgcolor: Color::Background2,
        },
        StyleTableEntryExt {
            color: Color::Black,
            font: Font::Helvetica,
            size: 14,
            attr: TextAttr::BgColor,
            bgcolor: Color::Yellow,
        },
    ]
}

/// Build the full style-buffer contents for a text of `len` bytes with an
/// optional highlight span. Out-of-range spans are clamped.
pub fn style_run(len: usize, span: Option<(usize, usize)>) -> String {
    let mut styles = vec![PLAIN_STYLE as u8; len];
    if let Some((start, end)) = span {
        let start = start.min(len);
        let end = end.min(len);
        styles[start..end].fill(HIGHLIGHT_STYLE as u8);
    }
    // Style bytes are ASCII by construction.
    String::from_utf8(styles).unwrap_or_default()
}

/// The single active highlight span, if any. Pure bookkeeping: the methods
/// return the full style-buffer contents for the caller to install.
#[derive(Debug, Default)]
pub struct SearchHighlight {
    active: Option<(usize, usize)>,
}

impl SearchHighlight {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_span(&self) -> Option<(usize, usize)> {
        self.active
    }

    /// Replace any previous highlight with `[start, end)`.
    pub fn apply(&mut self, text_len: usize, start: usize, end: usize) -> String {
        self.active = Some((start, end));
        style_run(text_len, self.active)
    }

    /// Remove the active highlight, leaving the whole buffer plain.
    pub fn clear(&mut self, text_len: usize) -> String {
        self.active = None;
        style_run(text_len, None)
    }

    /// Drop a stale span after a buffer edit, rewriting `style_buffer` to
    /// plain. No-op while no span is active.
    pub fn invalidate(&mut self, style_buffer: &mut TextBuffer) {
        if self.active.is_some() {
            let len = style_buffer.length() as usize;
            style_buffer.set_text(&self.clear(len));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_run_plain() {
        assert_eq!(style_run(5, None), "AAAAA");
    }

    #[test]
    fn test_style_run_with_span() {
        // "hello world" with "world" highlighted: span [6, 11)
        assert_eq!(style_run(11, Some((6, 11))), "AAAAAABBBBB");
    }

    #[test]
    fn test_style_run_span_mid_buffer() {
        assert_eq!(style_run(7, Some((2, 4))), "AABBAAA");
    }

    #[test]
    fn test_style_run_clamps_out_of_range_span() {
        assert_eq!(style_run(3, Some((1, 10))), "ABB");
        assert_eq!(style_run(3, Some((5, 10))), "AAA");
    }

    #[test]
    fn test_style_run_empty_text() {
        assert_eq!(style_run(0, Some((0, 3))), "");
    }

    #[test]
    fn test_apply_records_span_and_styles_it() {
        let mut search = SearchHighlight::new();
        assert_eq!(search.apply(11, 6, 11), "AAAAAABBBBB");
        assert_eq!(search.active_span(), Some((6, 11)));
    }

    #[test]
    fn test_apply_replaces_previous_span() {
        let mut search = SearchHighlight::new();
        search.apply(11, 0, 5);
        assert_eq!(search.apply(11, 6, 11), "AAAAAABBBBB");
        assert_eq!(search.active_span(), Some((6, 11)));
    }

    #[test]
    fn test_clear_drops_span_and_styles_plain() {
        let mut search = SearchHighlight::new();
        search.apply(11, 6, 11);
        assert_eq!(search.clear(11), "AAAAAAAAAAA");
        assert_eq!(search.active_span(), None);
    }

    #[test]
    fn test_style_table_order_matches_style_chars() {
        let table = style_table();
        assert_eq!(table.len(), 2);
        // 'B' maps to the second entry, the yellow-background one.
        assert_eq!(table[1].bgcolor, Color::Yellow);
    }
}
