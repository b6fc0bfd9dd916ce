//! Shared test helpers for font tests

#![allow(dead_code)]

use std::path::PathBuf;

use gfxfont_engine::{FontModel, GlyphGrid};

/// Create a default 5x7 font with a few pixels set in 'A' and 'B'
pub fn create_test_model() -> FontModel {
    let mut model = FontModel::new();
    model.toggle_pixel('A', 0, 0).unwrap();
    model.toggle_pixel('A', 4, 6).unwrap();
    model.toggle_pixel('B', 2, 3).unwrap();
    model
}

/// Create a diagonal line pattern of the given size
pub fn create_diagonal_pattern(width: usize, height: usize) -> GlyphGrid {
    let mut rows = vec![vec![false; width]; height];
    for i in 0..width.min(height) {
        rows[i][i] = true;
    }
    GlyphGrid::from_rows(rows).unwrap()
}

/// Fill every glyph of the model with a pattern derived from its code
pub fn fill_with_code_patterns(model: &mut FontModel) {
    let (width, height) = model.font_size();
    let chars: Vec<char> = model.code_range().collect();
    for ch in chars {
        for y in 0..height {
            for x in 0..width {
                if (ch as i32 + x * 3 + y * 7) % 5 == 0 {
                    model.set_pixel(ch, x, y, true).unwrap();
                }
            }
        }
    }
}

/// A unique path in the system temp directory
pub fn temp_file(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("gfxfont_tests_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

/// Print a glyph for debugging (useful in test failures)
pub fn print_glyph(glyph: &GlyphGrid) {
    for row in glyph.rows() {
        let line: String = row.iter().map(|&p| if p { '#' } else { '.' }).collect();
        println!("{}", line);
    }
}
