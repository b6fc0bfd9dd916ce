//! Export tests
//!
//! Glyph table geometry, cumulative bitmap offsets, determinism and the
//! generated C header.

mod helpers;

use gfxfont_engine::bit_packer::pack;
use gfxfont_engine::{export, render_header, FontModel, GlyphGrid};
use helpers::{create_test_model, fill_with_code_patterns};

#[test]
fn test_metas_follow_code_order() {
    let model = FontModel::with_layout(5, 7, 65, 90).unwrap();
    let result = export(&model).unwrap();

    assert_eq!(result.glyph_metas.len(), 26);
    assert_eq!(result.code_start, 65);
    assert_eq!(result.code_end, 90);
    for (idx, _) in result.glyph_metas.iter().enumerate() {
        assert_eq!(result.char_at(idx), char::from_u32(65 + idx as u32));
    }
}

#[test]
fn test_geometry_fields() {
    let model = FontModel::with_layout(6, 10, 32, 126).unwrap();
    let result = export(&model).unwrap();

    assert_eq!(result.y_advance, 11);
    for meta in &result.glyph_metas {
        assert_eq!(meta.width, 6);
        assert_eq!(meta.height, 10);
        assert_eq!(meta.x_advance, 7);
        assert_eq!(meta.x_offset, 0);
        assert_eq!(meta.y_offset, -10);
    }
}

#[test]
fn test_offsets_are_cumulative() {
    let mut model = FontModel::with_layout(3, 5, 40, 60).unwrap();
    fill_with_code_patterns(&mut model);
    let result = export(&model).unwrap();

    let mut expected_offset = 0;
    for (idx, (_, glyph)) in model.glyphs().enumerate() {
        let packed = pack(glyph);
        assert_eq!(result.glyph_metas[idx].bitmap_offset as usize, expected_offset);
        assert_eq!(result.glyph_bytes(idx).unwrap(), packed.as_slice());
        expected_offset += packed.len();
    }

    let last = result.glyph_metas.last().unwrap();
    assert_eq!(last.bitmap_offset as usize + 2, result.bitmap_bytes.len());
    assert_eq!(expected_offset, result.bitmap_bytes.len());
}

#[test]
fn test_first_offset_is_zero() {
    let result = export(&create_test_model()).unwrap();
    assert_eq!(result.glyph_metas[0].bitmap_offset, 0);
}

#[test]
fn test_pixels_land_in_right_glyph() {
    let mut model = FontModel::with_layout(8, 1, 65, 67).unwrap();
    model.set_glyph('B', GlyphGrid::parse_pattern(&["#.#.#.#."]).unwrap()).unwrap();

    let result = export(&model).unwrap();

    assert_eq!(result.bitmap_bytes, vec![0x00, 0xAA, 0x00]);
}

#[test]
fn test_export_is_deterministic() {
    let mut model = create_test_model();
    fill_with_code_patterns(&mut model);

    let first = export(&model).unwrap();
    let second = export(&model).unwrap();

    assert_eq!(first.bitmap_bytes, second.bitmap_bytes);
    assert_eq!(first.glyph_metas, second.glyph_metas);
    assert_eq!(render_header(&first, "det"), render_header(&second, "det"));
}

#[test]
fn test_export_does_not_modify_model() {
    let model = create_test_model();
    let before = model.clone();

    let _ = export(&model).unwrap();

    assert_eq!(model, before);
}

#[test]
fn test_header_small_font() {
    let mut model = FontModel::with_layout(3, 3, 65, 66).unwrap();
    model.set_glyph('A', GlyphGrid::parse_pattern(&[".#.", "#.#", "###"]).unwrap()).unwrap();
    let result = export(&model).unwrap();

    let header = render_header(&result, "tiny");

    let expected = "\
#ifndef TINY_H_
#define TINY_H_

#include <Adafruit_GFX.h>

// Automatically generated font header for Adafruit GFX

const uint8_t tinyBitmaps[] = {
  // 'A', 3x3
  0x57, 0x80,
  // 'B', 3x3
  0x00, 0x00,
};

const GFXglyph tinyGlyphs[] = {
  { 0, 3, 3, 4, 0, -3 },
  { 2, 3, 3, 4, 0, -3 },
};

const GFXfont tiny = {
  (uint8_t *)tinyBitmaps,
  (GFXglyph *)tinyGlyphs,
  65, 66, 4
};

#endif // TINY_H_
";
    assert_eq!(header, expected);
}

#[test]
fn test_header_default_name() {
    let result = export(&FontModel::with_layout(5, 7, 48, 48).unwrap()).unwrap();

    let header = render_header(&result, "");

    assert!(header.starts_with("#ifndef CUSTOMFONT_H_\n"));
    assert!(header.contains("const GFXfont customFont = {"));
    assert!(header.contains("  // '0', 5x7\n  0x00, 0x00, 0x00, 0x00, 0x00,\n"));
    assert!(header.ends_with("#endif // CUSTOMFONT_H_\n"));
}

#[test]
fn test_header_full_range_descriptor() {
    let result = export(&FontModel::new()).unwrap();

    let header = render_header(&result, "font5x7");

    assert!(header.contains("  // ' ', 5x7\n"));
    assert!(header.contains("  // '~', 5x7\n"));
    assert!(header.contains("  { 470, 5, 7, 6, 0, -7 },\n};"));
    assert!(header.contains("  32, 126, 8\n};"));
}
