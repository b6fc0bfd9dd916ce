//! Font Model State
//!
//! The font being edited: one glyph per character code of a contiguous
//! printable-ASCII range, all sharing the same cell dimensions.
//!
//! Changing the dimensions or the code range is a full reset. Every glyph is
//! rebuilt empty for the new parameters; old pixels are never migrated, even
//! for codes present in both the old and the new range.

use std::ops::RangeInclusive;

use crate::{FontError, GlyphGrid, Result};

use super::{DEFAULT_FONT_NAME, DEFAULT_HEIGHT, DEFAULT_WIDTH, FIRST_PRINTABLE, LAST_PRINTABLE};

// ═══════════════════════════════════════════════════════════════════════════
// Font Model
// ═══════════════════════════════════════════════════════════════════════════

/// Glyph data and layout parameters of one font
///
/// The UI layer reads from the model and calls methods to modify it. There is
/// exactly one model per editing session; it is owned by the session (or the
/// CLI command) and passed by reference, never shared globally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontModel {
    /// One glyph per code, `glyph_data[i]` belongs to `code_start + i`
    pub(crate) glyph_data: Vec<GlyphGrid>,

    /// Glyph width in pixels
    pub(crate) font_width: i32,

    /// Glyph height in pixels
    pub(crate) font_height: i32,

    /// First character code (inclusive)
    pub(crate) code_start: u8,

    /// Last character code (inclusive)
    pub(crate) code_end: u8,

    /// Font name, used as C identifier on export
    pub(crate) font_name: String,

    /// Whether the font has been modified since last save
    pub(crate) is_dirty: bool,
}

impl Default for FontModel {
    fn default() -> Self {
        Self::new()
    }
}

impl FontModel {
    // ═══════════════════════════════════════════════════════════════════════
    // Constructors
    // ═══════════════════════════════════════════════════════════════════════

    /// Create an empty 5x7 font covering codes 32..=126
    pub fn new() -> Self {
        Self::blank(DEFAULT_WIDTH, DEFAULT_HEIGHT, FIRST_PRINTABLE, LAST_PRINTABLE)
    }

    /// Create an empty font with the given layout.
    ///
    /// The parameters go through the same validation and clamping as
    /// [`FontModel::reconfigure`].
    pub fn with_layout(width: i32, height: i32, code_start: u32, code_end: u32) -> Result<Self> {
        let mut model = Self::new();
        model.reconfigure(width, height, code_start, code_end)?;
        model.is_dirty = false;
        Ok(model)
    }

    /// Unchecked constructor, parameters must already be valid
    pub(crate) fn blank(width: i32, height: i32, code_start: u8, code_end: u8) -> Self {
        Self {
            glyph_data: Self::empty_glyphs(width, height, code_start, code_end),
            font_width: width,
            font_height: height,
            code_start,
            code_end,
            font_name: DEFAULT_FONT_NAME.to_string(),
            is_dirty: false,
        }
    }

    /// Build glyphs from already validated parts (used by blob loading)
    pub(crate) fn from_parts(width: i32, height: i32, code_start: u8, glyph_data: Vec<GlyphGrid>) -> Self {
        let code_end = code_start + (glyph_data.len() as u8).saturating_sub(1);
        Self {
            glyph_data,
            font_width: width,
            font_height: height,
            code_start,
            code_end,
            font_name: DEFAULT_FONT_NAME.to_string(),
            is_dirty: false,
        }
    }

    pub(crate) fn empty_glyphs(width: i32, height: i32, code_start: u8, code_end: u8) -> Vec<GlyphGrid> {
        (code_start..=code_end).map(|_| GlyphGrid::new(width, height)).collect()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Getters
    // ═══════════════════════════════════════════════════════════════════════

    /// Get glyph dimensions (width, height)
    pub fn font_size(&self) -> (i32, i32) {
        (self.font_width, self.font_height)
    }

    pub fn width(&self) -> i32 {
        self.font_width
    }

    pub fn height(&self) -> i32 {
        self.font_height
    }

    pub fn code_start(&self) -> u8 {
        self.code_start
    }

    pub fn code_end(&self) -> u8 {
        self.code_end
    }

    /// All characters covered by the font, ascending
    pub fn code_range(&self) -> RangeInclusive<char> {
        char::from(self.code_start)..=char::from(self.code_end)
    }

    /// Number of glyphs (`code_end - code_start + 1`)
    pub fn glyph_count(&self) -> usize {
        self.glyph_data.len()
    }

    pub fn font_name(&self) -> &str {
        &self.font_name
    }

    /// Check if font is dirty (modified)
    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    /// Check whether `ch` is inside the code range
    pub fn contains(&self, ch: char) -> bool {
        self.code_range().contains(&ch)
    }

    pub(crate) fn index_of(&self, ch: char) -> Option<usize> {
        if self.contains(ch) {
            Some(ch as usize - self.code_start as usize)
        } else {
            None
        }
    }

    /// Get the glyph for a character
    pub fn glyph_at(&self, ch: char) -> Result<&GlyphGrid> {
        match self.index_of(ch) {
            Some(idx) => Ok(&self.glyph_data[idx]),
            None => Err(FontError::NotFound { code: ch as u32 }),
        }
    }

    /// Iterate (character, glyph) pairs in ascending code order
    pub fn glyphs(&self) -> impl Iterator<Item = (char, &GlyphGrid)> + '_ {
        self.code_range().zip(self.glyph_data.iter())
    }

    /// Total number of set pixels in the whole font
    pub fn count_set_pixels(&self) -> usize {
        self.glyph_data.iter().map(GlyphGrid::count_set_pixels).sum()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Basic Setters
    // ═══════════════════════════════════════════════════════════════════════

    /// Set font name
    pub fn set_font_name(&mut self, name: impl Into<String>) {
        self.font_name = name.into();
    }

    /// Mark as clean (after save)
    pub fn mark_clean(&mut self) {
        self.is_dirty = false;
    }
}
