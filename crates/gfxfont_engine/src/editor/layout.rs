//! Character grid layout
//!
//! Glyphs are shown side by side in a grid that fills the terminal. Each pixel
//! is drawn two cells wide so the pixels come out roughly square.

/// Empty columns between two glyphs
pub const H_SPACING: i32 = 4;

/// Lines between two glyph rows (label line + blank line)
pub const V_SPACING: i32 = 2;

/// Terminal cells per glyph pixel (horizontal)
pub const CELLS_PER_PIXEL: i32 = 2;

/// How many glyphs fit on one page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridLayout {
    pub chars_per_row: i32,
    pub chars_per_col: i32,
}

impl GridLayout {
    /// Fit `glyph_width × glyph_height` glyphs into a terminal of the given size.
    ///
    /// At least one glyph is always shown, even if it doesn't fit.
    pub fn calculate(term_width: i32, term_height: i32, glyph_width: i32, glyph_height: i32) -> Self {
        let cell_width = glyph_width * CELLS_PER_PIXEL + H_SPACING;
        let cell_height = glyph_height + V_SPACING;
        Self {
            chars_per_row: ((term_width + H_SPACING) / cell_width.max(1)).max(1),
            chars_per_col: ((term_height + V_SPACING) / cell_height.max(1)).max(1),
        }
    }

    pub fn chars_per_page(&self) -> i32 {
        self.chars_per_row * self.chars_per_col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_font_on_80x25() {
        let layout = GridLayout::calculate(80, 25, 5, 7);
        // (80 + 4) / 14 = 6, (25 + 2) / 9 = 3
        assert_eq!(layout.chars_per_row, 6);
        assert_eq!(layout.chars_per_col, 3);
        assert_eq!(layout.chars_per_page(), 18);
    }

    #[test]
    fn test_tiny_terminal_shows_one_glyph() {
        let layout = GridLayout::calculate(4, 3, 16, 16);
        assert_eq!(layout.chars_per_page(), 1);
    }
}
