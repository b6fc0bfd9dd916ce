//! Font persistence
//!
//! A saved font is a bincode snapshot of the glyph mapping (code → pixel rows).
//! The layout is not stored separately: on load the glyph size is taken from
//! the lowest code and the range from the lowest and highest key. Everything
//! else in the blob has to agree with that, otherwise it is rejected as
//! malformed instead of producing a model with mixed glyph sizes.
//!
//! Writes are atomic (temp file + rename) so a failed save or export never
//! leaves a truncated file behind.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::export::{render_header, ExportResult};
use crate::font_model::{FIRST_PRINTABLE, LAST_PRINTABLE, MAX_GLYPH_HEIGHT, MAX_GLYPH_WIDTH, MIN_GLYPH_HEIGHT, MIN_GLYPH_WIDTH};
use crate::{FontError, FontModel, GlyphGrid, Result};

/// Current blob version, version 0 was never written
pub const BLOB_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct FontBlob {
    version: u32,
    glyphs: BTreeMap<u8, Vec<Vec<bool>>>,
}

/// Serialize the glyph mapping of `model`
pub fn to_blob(model: &FontModel) -> Result<Vec<u8>> {
    let glyphs = model.glyphs().map(|(ch, glyph)| (ch as u8, glyph.rows().to_vec())).collect();
    let blob = FontBlob { version: BLOB_VERSION, glyphs };
    bincode::serialize(&blob).map_err(|e| FontError::Serialize { message: e.to_string() })
}

/// Rebuild a model from a blob written by [`to_blob`]
pub fn from_blob(bytes: &[u8]) -> Result<FontModel> {
    let blob: FontBlob = bincode::deserialize(bytes).map_err(|e| FontError::malformed(format!("can't decode font data: {}", e)))?;
    if blob.version == 0 || blob.version > BLOB_VERSION {
        return Err(FontError::malformed(format!("unsupported version {}", blob.version)));
    }

    let (Some(&code_start), Some(&code_end)) = (blob.glyphs.keys().next(), blob.glyphs.keys().next_back()) else {
        return Err(FontError::malformed("font contains no glyphs"));
    };
    if code_start < FIRST_PRINTABLE || code_end > LAST_PRINTABLE {
        return Err(FontError::malformed(format!(
            "codes {}..={} are outside {}..={}",
            code_start, code_end, FIRST_PRINTABLE, LAST_PRINTABLE
        )));
    }
    let expected_count = (code_end - code_start) as usize + 1;
    if blob.glyphs.len() != expected_count {
        return Err(FontError::malformed(format!(
            "codes {}..={} are not contiguous ({} of {} present)",
            code_start,
            code_end,
            blob.glyphs.len(),
            expected_count
        )));
    }

    let mut glyph_data: Vec<GlyphGrid> = Vec::with_capacity(expected_count);
    for (code, rows) in blob.glyphs {
        let glyph = GlyphGrid::from_rows(rows).map_err(|e| FontError::malformed(format!("glyph {}: {}", code, e)))?;
        if let Some(first) = glyph_data.first() {
            if glyph.width() != first.width() || glyph.height() != first.height() {
                return Err(FontError::malformed(format!(
                    "glyph {} is {}x{}, expected {}x{}",
                    code,
                    glyph.width(),
                    glyph.height(),
                    first.width(),
                    first.height()
                )));
            }
        }
        glyph_data.push(glyph);
    }

    let (width, height) = (glyph_data[0].width(), glyph_data[0].height());
    if !(MIN_GLYPH_WIDTH..=MAX_GLYPH_WIDTH).contains(&width) || !(MIN_GLYPH_HEIGHT..=MAX_GLYPH_HEIGHT).contains(&height) {
        return Err(FontError::malformed(format!(
            "glyph size {}x{} is outside {}x{}..={}x{}",
            width, height, MIN_GLYPH_WIDTH, MIN_GLYPH_HEIGHT, MAX_GLYPH_WIDTH, MAX_GLYPH_HEIGHT
        )));
    }
    Ok(FontModel::from_parts(width, height, code_start, glyph_data))
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write `bytes` to `path` through a temp file in the same directory
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let temp = temp_path(path);
    if let Err(err) = fs::write(&temp, bytes).and_then(|_| fs::rename(&temp, path)) {
        let _ = fs::remove_file(&temp);
        return Err(err.into());
    }
    Ok(())
}

/// Save font data to a file. Marks the model clean on success.
pub fn save_font(model: &mut FontModel, path: &Path) -> Result<()> {
    let bytes = to_blob(model)?;
    write_atomic(path, &bytes)?;
    model.mark_clean();
    log::info!("Font data saved to {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

/// Load font data from a file.
///
/// The font name is taken from the file stem when it is a valid identifier.
pub fn load_font(path: &Path) -> Result<FontModel> {
    let bytes = fs::read(path)?;
    let mut model = from_blob(&bytes)?;
    if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
        let name = crate::export::sanitize_font_name(stem);
        if name == stem {
            model.set_font_name(name);
        }
    }
    log::info!(
        "Font data loaded from {} with width {} and height {}",
        path.display(),
        model.width(),
        model.height()
    );
    Ok(model)
}

/// Render and write the C header for an export result
pub fn write_header(result: &ExportResult, font_name: &str, path: &Path) -> Result<()> {
    let text = render_header(result, font_name);
    write_atomic(path, text.as_bytes())?;
    log::info!("Font successfully exported to {} as {}", path.display(), font_name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blob_of(glyphs: BTreeMap<u8, Vec<Vec<bool>>>) -> Vec<u8> {
        bincode::serialize(&FontBlob { version: BLOB_VERSION, glyphs }).unwrap()
    }

    #[test]
    fn test_blob_roundtrip() {
        let mut model = FontModel::with_layout(4, 6, 48, 57).unwrap();
        model.toggle_pixel('0', 1, 2).unwrap();
        model.toggle_pixel('9', 3, 5).unwrap();

        let loaded = from_blob(&to_blob(&model).unwrap()).unwrap();
        assert_eq!(loaded.font_size(), (4, 6));
        assert_eq!(loaded.code_start(), 48);
        assert_eq!(loaded.code_end(), 57);
        assert_eq!(loaded.glyph_at('0').unwrap(), model.glyph_at('0').unwrap());
        assert_eq!(loaded.glyph_at('9').unwrap(), model.glyph_at('9').unwrap());
    }

    #[test]
    fn test_empty_blob_is_malformed() {
        let result = from_blob(&blob_of(BTreeMap::new()));
        assert!(matches!(result, Err(FontError::MalformedBlob { .. })));
    }

    #[test]
    fn test_inconsistent_shapes_are_malformed() {
        let mut glyphs = BTreeMap::new();
        glyphs.insert(65, vec![vec![false; 5]; 7]);
        glyphs.insert(66, vec![vec![false; 4]; 7]);
        assert!(matches!(from_blob(&blob_of(glyphs)), Err(FontError::MalformedBlob { .. })));
    }

    #[test]
    fn test_gap_in_codes_is_malformed() {
        let mut glyphs = BTreeMap::new();
        glyphs.insert(65, vec![vec![false; 5]; 7]);
        glyphs.insert(67, vec![vec![false; 5]; 7]);
        assert!(matches!(from_blob(&blob_of(glyphs)), Err(FontError::MalformedBlob { .. })));
    }

    #[test]
    fn test_unknown_versions_are_malformed() {
        let mut glyphs = BTreeMap::new();
        glyphs.insert(65, vec![vec![false; 5]; 7]);

        for version in [0, BLOB_VERSION + 1] {
            let bytes = bincode::serialize(&FontBlob { version, glyphs: glyphs.clone() }).unwrap();
            assert!(matches!(from_blob(&bytes), Err(FontError::MalformedBlob { .. })), "version {}", version);
        }
    }

    #[test]
    fn test_garbage_is_malformed() {
        assert!(matches!(from_blob(&[0xFF, 0x01]), Err(FontError::MalformedBlob { .. })));
    }

    #[test]
    fn test_temp_path_is_sibling() {
        assert_eq!(temp_path(Path::new("/tmp/font.gfx")), PathBuf::from("/tmp/font.gfx.tmp"));
    }
}
