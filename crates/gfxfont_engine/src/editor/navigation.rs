//! Cursor movement, glyph selection and paging
//!
//! The pixel cursor stops at the glyph border (no wrapping). Glyph selection
//! moves within the visible page and rolls over to the neighbouring page at
//! the page border, but never past the first or last glyph of the font.

use crate::Result;

use super::EditorSession;

impl EditorSession {
    // ═══════════════════════════════════════════════════════════════════════
    // Pixel Cursor
    // ═══════════════════════════════════════════════════════════════════════

    /// Move the cursor by delta, clamped to the glyph
    pub fn move_cursor(&mut self, dx: i32, dy: i32) {
        let (x, y) = self.cursor;
        self.cursor = (
            (x + dx).clamp(0, self.model.width() - 1),
            (y + dy).clamp(0, self.model.height() - 1),
        );
    }

    /// Toggle the pixel under the cursor in the selected glyph
    pub fn toggle_at_cursor(&mut self) -> Result<()> {
        let (x, y) = self.cursor;
        let ch = self.selected_char();
        self.model.toggle_pixel(ch, x, y)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Glyph Selection
    // ═══════════════════════════════════════════════════════════════════════

    /// Select (page, index) if it addresses an existing glyph
    fn try_select(&mut self, page: i32, page_index: i32) -> bool {
        let absolute = page * self.layout.chars_per_page() + page_index;
        if page < 0 || page_index < 0 || absolute >= self.model.glyph_count() as i32 {
            return false;
        }
        self.page = page;
        self.page_index = page_index;
        true
    }

    /// Select the glyph to the left, or the last glyph of the previous page
    pub fn select_left(&mut self) -> bool {
        let per_row = self.layout.chars_per_row;
        if self.page_index % per_row > 0 {
            self.try_select(self.page, self.page_index - 1)
        } else {
            self.try_select(self.page - 1, self.layout.chars_per_page() - 1)
        }
    }

    /// Select the glyph to the right, or the first glyph of the next page
    pub fn select_right(&mut self) -> bool {
        let per_row = self.layout.chars_per_row;
        if (self.page_index + 1) % per_row != 0 {
            self.try_select(self.page, self.page_index + 1)
        } else {
            self.try_select(self.page + 1, 0)
        }
    }

    /// Select the glyph above, or the same column in the last row of the previous page
    pub fn select_up(&mut self) -> bool {
        let per_row = self.layout.chars_per_row;
        if self.page_index >= per_row {
            self.try_select(self.page, self.page_index - per_row)
        } else {
            let per_page = self.layout.chars_per_page();
            self.try_select(self.page - 1, self.page_index + per_page - per_row)
        }
    }

    /// Select the glyph below, or the same column in the first row of the next page
    pub fn select_down(&mut self) -> bool {
        let per_row = self.layout.chars_per_row;
        let per_page = self.layout.chars_per_page();
        if self.page_index + per_row < per_page {
            self.try_select(self.page, self.page_index + per_row)
        } else {
            self.try_select(self.page + 1, self.page_index - (per_page - per_row))
        }
    }

    /// Select a character directly. Returns false if it is not in the font.
    pub fn select_char(&mut self, ch: char) -> bool {
        let Some(idx) = self.model.index_of(ch) else {
            return false;
        };
        let per_page = self.layout.chars_per_page();
        self.try_select(idx as i32 / per_page, idx as i32 % per_page)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Paging
    // ═══════════════════════════════════════════════════════════════════════

    /// Next page, wrapping to the first page after the last
    pub fn page_down(&mut self) {
        self.page += 1;
        if self.page >= self.page_count() {
            self.page = 0;
        }
        self.page_index = 0;
    }

    /// Previous page, wrapping to the last page before the first
    pub fn page_up(&mut self) {
        self.page -= 1;
        if self.page < 0 {
            self.page = self.page_count() - 1;
        }
        self.page_index = 0;
    }
}
