//! C header rendering for Adafruit GFX
//!
//! Writes the bitmap array (one glyph per line, with a comment naming the
//! character), the `GFXglyph` table and the `GFXfont` descriptor.

use std::fmt::Write;

use crate::font_model::DEFAULT_FONT_NAME;

use super::ExportResult;

/// Turn user input into a valid C identifier.
///
/// Empty input falls back to `customFont`, invalid characters become `_` and a
/// leading digit gets a `_` prefix.
pub fn sanitize_font_name(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return DEFAULT_FONT_NAME.to_string();
    }

    let mut name: String = trimmed.chars().map(|ch| if ch.is_ascii_alphanumeric() || ch == '_' { ch } else { '_' }).collect();
    if name.starts_with(|ch: char| ch.is_ascii_digit()) {
        name.insert(0, '_');
    }
    name
}

/// Render the export result as a C header
pub fn render_header(result: &ExportResult, font_name: &str) -> String {
    let name = sanitize_font_name(font_name);
    let guard = name.to_uppercase();
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "#ifndef {}_H_", guard);
    let _ = writeln!(out, "#define {}_H_", guard);
    out.push('\n');
    out.push_str("#include <Adafruit_GFX.h>\n\n");
    out.push_str("// Automatically generated font header for Adafruit GFX\n\n");

    let _ = writeln!(out, "const uint8_t {}Bitmaps[] = {{", name);
    let lines: Vec<String> = result
        .glyph_metas
        .iter()
        .enumerate()
        .flat_map(|(idx, meta)| {
            let ch = result.char_at(idx).unwrap_or(' ');
            let bytes = result.glyph_bytes(idx).unwrap_or_default();
            let hex: Vec<String> = bytes.iter().map(|byte| format!("0x{:02X}", byte)).collect();
            [format!("  // '{}', {}x{}", ch, meta.width, meta.height), format!("  {},", hex.join(", "))]
        })
        .collect();
    out.push_str(&lines.join("\n"));
    out.push_str("\n};\n\n");

    let _ = writeln!(out, "const GFXglyph {}Glyphs[] = {{", name);
    for meta in &result.glyph_metas {
        let _ = writeln!(
            out,
            "  {{ {}, {}, {}, {}, {}, {} }},",
            meta.bitmap_offset, meta.width, meta.height, meta.x_advance, meta.x_offset, meta.y_offset
        );
    }
    out.push_str("};\n\n");

    let _ = writeln!(out, "const GFXfont {} = {{", name);
    let _ = writeln!(out, "  (uint8_t *){}Bitmaps,", name);
    let _ = writeln!(out, "  (GFXglyph *){}Glyphs,", name);
    let _ = writeln!(out, "  {}, {}, {}", result.code_start, result.code_end, result.y_advance);
    out.push_str("};\n\n");

    let _ = writeln!(out, "#endif // {}_H_", guard);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_font_name() {
        assert_eq!(sanitize_font_name(""), "customFont");
        assert_eq!(sanitize_font_name("   "), "customFont");
        assert_eq!(sanitize_font_name("myFont"), "myFont");
        assert_eq!(sanitize_font_name("my font-5x7"), "my_font_5x7");
        assert_eq!(sanitize_font_name("5x7"), "_5x7");
    }
}
