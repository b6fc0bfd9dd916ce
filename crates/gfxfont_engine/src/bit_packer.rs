//! Glyph bit packing
//!
//! Adafruit GFX stores each glyph as one continuous bit stream: the pixels are
//! read row by row, left to right, and packed MSB first. Only the last byte of a
//! glyph is padded (low bits zero); bits are never carried over into the next
//! glyph, so every glyph starts on a byte boundary.

use crate::GlyphGrid;

/// Number of bytes a packed `width × height` glyph occupies (`ceil(w*h / 8)`)
pub fn packed_len(width: i32, height: i32) -> usize {
    let bits = width.max(0) as usize * height.max(0) as usize;
    bits.div_ceil(8)
}

/// Pack a glyph into bytes, first pixel in the most significant bit
pub fn pack(glyph: &GlyphGrid) -> Vec<u8> {
    let mut result = Vec::with_capacity(packed_len(glyph.width(), glyph.height()));
    let mut bit_buffer = 0u8;
    let mut bit_count = 0;

    for pixel in glyph.pixels() {
        bit_buffer = (bit_buffer << 1) | pixel as u8;
        bit_count += 1;

        if bit_count == 8 {
            result.push(bit_buffer);
            bit_buffer = 0;
            bit_count = 0;
        }
    }

    if bit_count > 0 {
        result.push(bit_buffer << (8 - bit_count));
    }

    result
}
