//! Glyph pixel grid
//!
//! A glyph is stored the same way the editor works on it: a `height × width`
//! matrix of booleans, rows outer and columns inner (`rows[y][x]`).

use crate::{FontError, Result};

/// Characters accepted as a set pixel by [`GlyphGrid::parse_pattern`]
const SET_PIXELS: &[char] = &['#', 'X', 'x', '1', '█', '▓'];

/// Characters accepted as an unset pixel by [`GlyphGrid::parse_pattern`]
const UNSET_PIXELS: &[char] = &['.', '0', ' ', '░', '_'];

/// The pixel matrix of a single character
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GlyphGrid {
    width: i32,
    height: i32,
    rows: Vec<Vec<bool>>,
}

impl GlyphGrid {
    /// Create an empty (all pixels off) glyph
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            rows: vec![vec![false; width as usize]; height as usize],
        }
    }

    /// Adopt an existing pixel matrix.
    ///
    /// The matrix must have at least one row and column and every row must have
    /// the same length.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(FontError::InvalidPattern {
                message: "glyph has no rows".to_string(),
            });
        };
        let width = first.len();
        if width == 0 {
            return Err(FontError::InvalidPattern {
                message: "glyph has no columns".to_string(),
            });
        }
        if let Some(y) = rows.iter().position(|row| row.len() != width) {
            return Err(FontError::InvalidPattern {
                message: format!("row {} has {} pixels, expected {}", y, rows[y].len(), width),
            });
        }

        Ok(Self {
            width: width as i32,
            height: rows.len() as i32,
            rows,
        })
    }

    /// Build a glyph from text rows, one string per pixel row.
    ///
    /// `#`, `X`, `x`, `1`, `█` and `▓` are set pixels; `.`, `0`, `_`, space and `░`
    /// are unset pixels.
    pub fn parse_pattern<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        let mut rows = Vec::with_capacity(lines.len());
        for (y, line) in lines.iter().enumerate() {
            let mut row = Vec::new();
            for ch in line.as_ref().chars() {
                if SET_PIXELS.contains(&ch) {
                    row.push(true);
                } else if UNSET_PIXELS.contains(&ch) {
                    row.push(false);
                } else {
                    return Err(FontError::InvalidPattern {
                        message: format!("unknown pixel character {:?} in row {}", ch, y),
                    });
                }
            }
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Get the raw pixel rows (read-only)
    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    /// Consume the glyph and return its pixel rows
    pub fn into_rows(self) -> Vec<Vec<bool>> {
        self.rows
    }

    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Get a pixel, `None` if (x, y) is outside the glyph
    pub fn pixel(&self, x: i32, y: i32) -> Option<bool> {
        if !self.contains(x, y) {
            return None;
        }
        Some(self.rows[y as usize][x as usize])
    }

    /// Set a pixel. Returns false if (x, y) is outside the glyph.
    pub fn set_pixel(&mut self, x: i32, y: i32, value: bool) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        self.rows[y as usize][x as usize] = value;
        true
    }

    /// Flip a pixel. Returns false if (x, y) is outside the glyph.
    pub fn toggle(&mut self, x: i32, y: i32) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        let pixel = &mut self.rows[y as usize][x as usize];
        *pixel = !*pixel;
        true
    }

    /// Iterate all pixels in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = bool> + '_ {
        self.rows.iter().flat_map(|row| row.iter().copied())
    }

    pub fn count_set_pixels(&self) -> usize {
        self.pixels().filter(|&p| p).count()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels().all(|p| !p)
    }
}
