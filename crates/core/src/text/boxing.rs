//! Boxed text formatting utilities
//!
//! Draws a frame around a block of lines using a [`BorderGlyphSet`]. Widths
//! are character counts; every character is assumed to occupy one column.

use serde::Serialize;

/// The eight glyph strings that make up a box style
///
/// Each field may hold zero or more characters. Corners may be wider than
/// the sides (see the `simple` style), in which case content rows are padded
/// so the vertical sides stay flush with the corners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BorderGlyphSet {
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
    pub left: String,
    pub right: String,
    pub top: String,
    pub bottom: String,
}

impl BorderGlyphSet {
    /// Build a glyph set from its parts in the order
    /// top-left, top-right, bottom-left, bottom-right, left, right, top, bottom
    ///
    /// # Examples
    /// ```
    /// use boxit_core::text::boxing::BorderGlyphSet;
    ///
    /// let single = BorderGlyphSet::from_parts(["┌", "┐", "└", "┘", "│", "│", "─", "─"]);
    /// assert_eq!(single.top_left, "┌");
    /// assert_eq!(single.bottom, "─");
    /// ```
    pub fn from_parts(parts: [&str; 8]) -> Self {
        let [top_left, top_right, bottom_left, bottom_right, left, right, top, bottom] = parts;
        Self {
            top_left: top_left.to_string(),
            top_right: top_right.to_string(),
            bottom_left: bottom_left.to_string(),
            bottom_right: bottom_right.to_string(),
            left: left.to_string(),
            right: right.to_string(),
            top: top.to_string(),
            bottom: bottom.to_string(),
        }
    }

    /// Number of fill glyphs needed for a content width of `max_len`
    fn fill_count(&self, max_len: usize) -> usize {
        max_len + char_width(&self.left) + char_width(&self.right)
    }

    fn top_border(&self, max_len: usize) -> String {
        format!(
            "{}{}{}",
            self.top_left,
            self.top.repeat(self.fill_count(max_len)),
            self.top_right
        )
    }

    fn bottom_border(&self, max_len: usize) -> String {
        format!(
            "{}{}{}",
            self.bottom_left,
            self.bottom.repeat(self.fill_count(max_len)),
            self.bottom_right
        )
    }

    fn content_row(&self, line: &str, max_len: usize) -> String {
        let left_pad = char_width(&self.top_left);
        let right_pad = max_len.saturating_sub(char_width(line)) + char_width(&self.top_right);
        format!(
            "{}{}{}{}{}",
            self.left,
            " ".repeat(left_pad),
            line,
            " ".repeat(right_pad),
            self.right
        )
    }
}

fn char_width(text: &str) -> usize {
    text.chars().count()
}

/// Draw `lines` inside a box built from `glyphs`
///
/// Lines must already be free of tabs. The result always has
/// `lines.len() + 2` rows; an empty slice yields just the two borders.
///
/// # Examples
/// ```
/// use boxit_core::text::boxing::{render_box, BorderGlyphSet};
///
/// let single = BorderGlyphSet::from_parts(["┌", "┐", "└", "┘", "│", "│", "─", "─"]);
/// let rows = render_box(&["hi"], &single);
/// assert_eq!(rows, vec!["┌────┐", "│ hi │", "└────┘"]);
/// ```
pub fn render_box<S: AsRef<str>>(lines: &[S], glyphs: &BorderGlyphSet) -> Vec<String> {
    let max_len = lines
        .iter()
        .map(|line| char_width(line.as_ref()))
        .max()
        .unwrap_or(0);

    tracing::trace!(rows = lines.len(), max_len, "Rendering box");

    let mut boxed = Vec::with_capacity(lines.len() + 2);
    boxed.push(glyphs.top_border(max_len));
    boxed.extend(
        lines
            .iter()
            .map(|line| glyphs.content_row(line.as_ref(), max_len)),
    );
    boxed.push(glyphs.bottom_border(max_len));
    boxed
}
