//! Text rendering of glyphs
//!
//! The selected glyph is drawn with solid blocks, all others with shaded
//! blocks. The cursor pixel of the selected glyph is drawn as `[]`.

use crate::GlyphGrid;

use super::{EditorSession, CELLS_PER_PIXEL, H_SPACING, V_SPACING};

const SELECTED_ON: &str = "██";
const UNSELECTED_ON: &str = "▓▓";
const PIXEL_OFF: &str = "░░";
const CURSOR: &str = "[]";

/// Render one glyph, one string per pixel row
pub fn render_glyph(glyph: &GlyphGrid, highlight: bool, cursor: Option<(i32, i32)>) -> Vec<String> {
    let on = if highlight { SELECTED_ON } else { UNSELECTED_ON };
    glyph
        .rows()
        .iter()
        .enumerate()
        .map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(|(x, &pixel)| {
                    if cursor == Some((x as i32, y as i32)) {
                        CURSOR
                    } else if pixel {
                        on
                    } else {
                        PIXEL_OFF
                    }
                })
                .collect()
        })
        .collect()
}

/// Label shown above a glyph, e.g. `A (65)`
pub fn glyph_label(ch: char) -> String {
    format!("{} ({})", ch, ch as u32)
}

fn fit(text: &str, width: usize) -> String {
    let truncated: String = text.chars().take(width).collect();
    format!("{:<width$}", truncated, width = width)
}

impl EditorSession {
    /// Render the current page: a label line above each glyph row, glyphs
    /// separated by `H_SPACING` columns and glyph rows by a blank line.
    pub fn render_page(&self) -> Vec<String> {
        let cell_width = (self.model.width() * CELLS_PER_PIXEL) as usize;
        let gap = " ".repeat(H_SPACING as usize);
        let selected = self.selected_char();
        let mut lines = Vec::new();

        for row_chars in self.page_chars().chunks(self.layout.chars_per_row as usize) {
            let labels: Vec<String> = row_chars.iter().map(|&ch| fit(&glyph_label(ch), cell_width)).collect();
            lines.push(labels.join(&gap).trim_end().to_string());

            let rendered: Vec<Vec<String>> = row_chars
                .iter()
                .filter_map(|&ch| {
                    let glyph = self.model.glyph_at(ch).ok()?;
                    let highlight = ch == selected;
                    Some(render_glyph(glyph, highlight, highlight.then_some(self.cursor)))
                })
                .collect();
            for y in 0..self.model.height() as usize {
                let parts: Vec<&str> = rendered.iter().map(|glyph| glyph[y].as_str()).collect();
                lines.push(parts.join(&gap));
            }

            for _ in 1..V_SPACING {
                lines.push(String::new());
            }
        }

        lines
    }
}
