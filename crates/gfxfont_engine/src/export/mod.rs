//! Adafruit GFX font export
//!
//! Export runs in one pass over the font in ascending code order. Entry `i` of
//! the glyph table and the `i`-th packed span of the bitmap stream both belong
//! to `code_start + i`. The result depends only on the model passed in.

mod gfx_header;

pub use gfx_header::{render_header, sanitize_font_name};

use std::ops::Range;

use crate::bit_packer::pack;
use crate::{FontError, FontModel, Result};

/// One entry of the `GFXglyph` table
///
/// Field order is the order of the C struct and of the generated initializer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExportedGlyphMeta {
    /// Byte offset of the glyph in the bitmap stream
    pub bitmap_offset: u16,
    pub width: u8,
    pub height: u8,
    /// Distance to the next glyph's origin, `width + 1`
    pub x_advance: u8,
    pub x_offset: i8,
    /// Top of the glyph relative to the baseline, `-height`
    pub y_offset: i8,
}

/// Everything needed to write a `GFXfont`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportResult {
    /// All packed glyphs, concatenated
    pub bitmap_bytes: Vec<u8>,
    /// One entry per code, ascending
    pub glyph_metas: Vec<ExportedGlyphMeta>,
    /// Line height, `height + 1`
    pub y_advance: u8,
    pub code_start: u8,
    pub code_end: u8,
}

impl ExportResult {
    /// Character belonging to glyph index `idx`
    pub fn char_at(&self, idx: usize) -> Option<char> {
        if idx < self.glyph_metas.len() {
            Some(char::from(self.code_start + idx as u8))
        } else {
            None
        }
    }

    /// Byte span of glyph `idx` in `bitmap_bytes`
    pub fn glyph_span(&self, idx: usize) -> Option<Range<usize>> {
        let start = self.glyph_metas.get(idx)?.bitmap_offset as usize;
        let end = match self.glyph_metas.get(idx + 1) {
            Some(next) => next.bitmap_offset as usize,
            None => self.bitmap_bytes.len(),
        };
        Some(start..end)
    }

    /// Packed bytes of glyph `idx`, `None` if its span is outside `bitmap_bytes`
    pub fn glyph_bytes(&self, idx: usize) -> Option<&[u8]> {
        self.glyph_span(idx).and_then(|span| self.bitmap_bytes.get(span))
    }
}

/// Pack all glyphs of `model` and build the glyph table.
///
/// Fails with `ExceedsFormatLimits` if a value does not fit its field in the
/// GFX structs (16 bit bitmap offsets, 8 bit sizes).
pub fn export(model: &FontModel) -> Result<ExportResult> {
    let (width, height) = model.font_size();
    let width_u8 = u8::try_from(width).map_err(|_| FontError::exceeds_limits(format!("glyph width {} does not fit uint8_t", width)))?;
    let height_u8 = u8::try_from(height).map_err(|_| FontError::exceeds_limits(format!("glyph height {} does not fit uint8_t", height)))?;
    let x_advance = width_u8
        .checked_add(1)
        .ok_or_else(|| FontError::exceeds_limits(format!("xAdvance {} does not fit uint8_t", width + 1)))?;
    let y_advance = height_u8
        .checked_add(1)
        .ok_or_else(|| FontError::exceeds_limits(format!("yAdvance {} does not fit uint8_t", height + 1)))?;
    let y_offset = i8::try_from(-height).map_err(|_| FontError::exceeds_limits(format!("yOffset {} does not fit int8_t", -height)))?;

    let mut bitmap_bytes = Vec::new();
    let mut glyph_metas = Vec::with_capacity(model.glyph_count());

    for (ch, glyph) in model.glyphs() {
        let packed = pack(glyph);
        let bitmap_offset = u16::try_from(bitmap_bytes.len()).map_err(|_| {
            FontError::exceeds_limits(format!("bitmap offset {} of {:?} does not fit uint16_t", bitmap_bytes.len(), ch))
        })?;
        bitmap_bytes.extend_from_slice(&packed);

        glyph_metas.push(ExportedGlyphMeta {
            bitmap_offset,
            width: width_u8,
            height: height_u8,
            x_advance,
            x_offset: 0,
            y_offset,
        });
    }

    log::debug!("Exported {} glyphs, {} bitmap bytes", glyph_metas.len(), bitmap_bytes.len());

    Ok(ExportResult {
        bitmap_bytes,
        glyph_metas,
        y_advance,
        code_start: model.code_start(),
        code_end: model.code_end(),
    })
}
