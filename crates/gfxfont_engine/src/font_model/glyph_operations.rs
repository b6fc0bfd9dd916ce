//! Glyph-level operations
//!
//! Pixel editing on a single glyph. Indices are a caller contract: the UI
//! clamps its cursor before calling, so an out-of-range pixel or code is
//! reported as `OutOfRange` and the model is left untouched.

use crate::{FontError, GlyphGrid, Result};

use super::FontModel;

impl FontModel {
    fn glyph_mut(&mut self, ch: char, x: i32, y: i32) -> Result<&mut GlyphGrid> {
        if x < 0 || x >= self.font_width || y < 0 || y >= self.font_height {
            return Err(FontError::OutOfRange { ch, x, y });
        }
        match self.index_of(ch) {
            Some(idx) => Ok(&mut self.glyph_data[idx]),
            None => Err(FontError::OutOfRange { ch, x, y }),
        }
    }

    /// Toggle a single pixel (flip its value)
    pub fn toggle_pixel(&mut self, ch: char, x: i32, y: i32) -> Result<()> {
        self.glyph_mut(ch, x, y)?.toggle(x, y);
        self.is_dirty = true;
        Ok(())
    }

    /// Set a single pixel value
    pub fn set_pixel(&mut self, ch: char, x: i32, y: i32, value: bool) -> Result<()> {
        self.glyph_mut(ch, x, y)?.set_pixel(x, y, value);
        self.is_dirty = true;
        Ok(())
    }

    /// Replace a whole glyph. The grid must match the font dimensions.
    pub fn set_glyph(&mut self, ch: char, glyph: GlyphGrid) -> Result<()> {
        if glyph.width() != self.font_width || glyph.height() != self.font_height {
            return Err(FontError::DimensionMismatch {
                expected_width: self.font_width,
                expected_height: self.font_height,
                actual_width: glyph.width(),
                actual_height: glyph.height(),
            });
        }
        let Some(idx) = self.index_of(ch) else {
            return Err(FontError::NotFound { code: ch as u32 });
        };
        self.glyph_data[idx] = glyph;
        self.is_dirty = true;
        Ok(())
    }

    /// Clear glyph (set all pixels to off)
    pub fn clear_glyph(&mut self, ch: char) -> Result<()> {
        let glyph = GlyphGrid::new(self.font_width, self.font_height);
        self.set_glyph(ch, glyph)
    }
}
