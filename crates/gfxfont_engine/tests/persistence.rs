//! Save/load and header writing tests

mod helpers;

use std::collections::BTreeMap;

use gfxfont_engine::persistence::{from_blob, load_font, save_font, to_blob, write_header};
use gfxfont_engine::{export, FontError, FontModel};
use helpers::{create_test_model, fill_with_code_patterns, temp_file};

#[test]
fn test_save_load_roundtrip() {
    let mut model = create_test_model();
    fill_with_code_patterns(&mut model);
    let path = temp_file("roundtrip.gfx");

    save_font(&mut model, &path).unwrap();
    let loaded = load_font(&path).unwrap();

    assert_eq!(loaded.font_size(), model.font_size());
    assert_eq!(loaded.code_start(), model.code_start());
    assert_eq!(loaded.code_end(), model.code_end());
    for ((ch_a, a), (ch_b, b)) in loaded.glyphs().zip(model.glyphs()) {
        assert_eq!(ch_a, ch_b);
        assert_eq!(a, b, "glyph {:?}", ch_a);
    }
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_save_marks_clean() {
    let mut model = create_test_model();
    let path = temp_file("clean.gfx");
    assert!(model.is_dirty());

    save_font(&mut model, &path).unwrap();

    assert!(!model.is_dirty());
    assert!(!path.with_file_name("clean.gfx.tmp").exists());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_load_infers_layout_from_glyphs() {
    let mut model = FontModel::with_layout(8, 12, 48, 57).unwrap();
    model.toggle_pixel('7', 7, 11).unwrap();

    let loaded = from_blob(&to_blob(&model).unwrap()).unwrap();

    assert_eq!(loaded.font_size(), (8, 12));
    assert_eq!(loaded.code_range(), '0'..='9');
    assert_eq!(loaded.glyph_at('7').unwrap().pixel(7, 11), Some(true));
    assert!(!loaded.is_dirty());
}

#[test]
fn test_load_takes_name_from_file() {
    let mut model = create_test_model();
    let path = temp_file("retroFont.gfx");

    save_font(&mut model, &path).unwrap();
    let loaded = load_font(&path).unwrap();

    assert_eq!(loaded.font_name(), "retroFont");
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let path = temp_file("does_not_exist.gfx");

    assert!(matches!(load_font(&path), Err(FontError::Io(_))));
}

#[derive(serde::Serialize)]
struct RawBlob {
    version: u32,
    glyphs: BTreeMap<u8, Vec<Vec<bool>>>,
}

fn raw_blob(version: u32, glyphs: &[(u8, Vec<Vec<bool>>)]) -> Vec<u8> {
    let glyphs = glyphs.iter().cloned().collect();
    bincode::serialize(&RawBlob { version, glyphs }).unwrap()
}

fn assert_malformed(bytes: &[u8]) {
    let result = from_blob(bytes);
    assert!(matches!(result, Err(FontError::MalformedBlob { .. })), "{:?}", result.map(|m| m.font_size()));
}

#[test]
fn test_load_rejects_inconsistent_shapes() {
    assert_malformed(&raw_blob(1, &[(65, vec![vec![false; 5]; 7]), (66, vec![vec![false; 5]; 6])]));
}

#[test]
fn test_load_rejects_codes_outside_printable_range() {
    assert_malformed(&raw_blob(1, &[(20, vec![vec![false; 5]; 7])]));
    assert_malformed(&raw_blob(1, &[(126, vec![vec![false; 5]; 7]), (127, vec![vec![false; 5]; 7])]));
}

#[test]
fn test_load_rejects_newer_version() {
    assert_malformed(&raw_blob(2, &[(65, vec![vec![false; 5]; 7])]));
}

#[test]
fn test_load_rejects_empty_first_glyph() {
    assert_malformed(&raw_blob(1, &[(65, vec![]), (66, vec![vec![false; 5]; 7])]));
    assert_malformed(&raw_blob(1, &[(65, vec![vec![]]), (66, vec![vec![false; 5]; 7])]));
}

#[test]
fn test_load_rejects_glyphs_beyond_size_limits() {
    assert_malformed(&raw_blob(1, &[(65, vec![vec![false; 300]; 2])]));
    assert_malformed(&raw_blob(1, &[(65, vec![vec![false; 5]; 129])]));
}

#[test]
fn test_load_accepts_largest_glyph() {
    let model = from_blob(&raw_blob(1, &[(65, vec![vec![false; 254]; 128])])).unwrap();

    assert_eq!(model.font_size(), (254, 128));
    assert_eq!(model.code_range(), 'A'..='A');
}

#[test]
fn test_load_rejects_truncated_blob() {
    let bytes = to_blob(&create_test_model()).unwrap();

    let result = from_blob(&bytes[..bytes.len() / 2]);

    assert!(matches!(result, Err(FontError::MalformedBlob { .. })));
}

#[test]
fn test_write_header_file() {
    let model = create_test_model();
    let path = temp_file("font.h");

    write_header(&export(&model).unwrap(), "testFont", &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("#ifndef TESTFONT_H_"));
    assert!(text.contains("const GFXfont testFont = {"));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_write_into_missing_directory_fails() {
    let model = create_test_model();
    let path = temp_file("no_such_dir").join("font.h");

    let result = write_header(&export(&model).unwrap(), "testFont", &path);

    assert!(matches!(result, Err(FontError::Io(_))));
    assert!(!path.exists());
}
