//! Splits page text into display rows.
//!
//! Rows are separated by `'\n'`. The fragment after the last break is a row
//! too, so `n` breaks always give `n + 1` rows. Every row sits one
//! `line_height` below the previous one, empty rows included, so blank
//! lines in the source keep their vertical space on the panel.

use core::str::Split;

/// One row of text and where its top-left corner goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LaidOutLine<'a> {
    pub text: &'a str,
    pub x: i32,
    pub y: i32,
}

impl LaidOutLine<'_> {
    /// Empty rows only take up space; nothing is drawn for them.
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}

/// Lazy iterator over the rows of a page.
pub struct Lines<'a> {
    rows: Split<'a, char>,
    x: i32,
    y: i32,
    line_height: i32,
    max_chars: usize,
}

impl<'a> Iterator for Lines<'a> {
    type Item = LaidOutLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.rows.next()?;
        let line = LaidOutLine {
            text: truncate_chars(row, self.max_chars),
            x: self.x,
            y: self.y,
        };
        self.y += self.line_height;
        Some(line)
    }
}

/// Lay `content` out from `(origin_x, origin_y)` downwards.
///
/// Each row is cut to at most `max_chars` characters.
pub fn layout(
    content: &str,
    origin_x: i32,
    origin_y: i32,
    line_height: i32,
    max_chars: usize,
) -> Lines<'_> {
    Lines {
        rows: content.split('\n'),
        x: origin_x,
        y: origin_y,
        line_height,
        max_chars,
    }
}

/// Keep the first `max_chars` characters of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
