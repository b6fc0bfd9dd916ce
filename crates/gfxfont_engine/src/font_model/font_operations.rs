//! Font-level operations
//!
//! Operations that change the layout of the whole font:
//! - Reconfigure dimensions and code range (full reset)
//! - Settings menu edits of a single layout parameter

use std::fmt;

use crate::{FontError, Result};

use super::{FontModel, FIRST_PRINTABLE, LAST_PRINTABLE, MAX_GLYPH_HEIGHT, MAX_GLYPH_WIDTH, MIN_GLYPH_HEIGHT, MIN_GLYPH_WIDTH};

/// A single layout parameter editable from the settings menu
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontSetting {
    Width,
    Height,
    CodeStart,
    CodeEnd,
}

impl FontSetting {
    /// All settings in menu order
    pub const ALL: [FontSetting; 4] = [FontSetting::Width, FontSetting::Height, FontSetting::CodeStart, FontSetting::CodeEnd];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Width => "Character Width",
            Self::Height => "Character Height",
            Self::CodeStart => "ASCII Start",
            Self::CodeEnd => "ASCII End",
        }
    }
}

impl fmt::Display for FontSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn clamp_code(code: u32) -> u8 {
    code.clamp(FIRST_PRINTABLE as u32, LAST_PRINTABLE as u32) as u8
}

impl FontModel {
    // ═══════════════════════════════════════════════════════════════════════
    // Reconfigure
    // ═══════════════════════════════════════════════════════════════════════

    /// Change dimensions and code range.
    ///
    /// Codes are clamped into 32..=126. Non-positive or oversized dimensions and a
    /// range that is still inverted after clamping are rejected and leave the model
    /// unchanged. On success every glyph of the new range is empty, regardless of
    /// what was drawn before.
    pub fn reconfigure(&mut self, width: i32, height: i32, code_start: u32, code_end: u32) -> Result<()> {
        if !(MIN_GLYPH_WIDTH..=MAX_GLYPH_WIDTH).contains(&width) {
            return Err(FontError::invalid_configuration(format!(
                "width {} is outside {}..={}",
                width, MIN_GLYPH_WIDTH, MAX_GLYPH_WIDTH
            )));
        }
        if !(MIN_GLYPH_HEIGHT..=MAX_GLYPH_HEIGHT).contains(&height) {
            return Err(FontError::invalid_configuration(format!(
                "height {} is outside {}..={}",
                height, MIN_GLYPH_HEIGHT, MAX_GLYPH_HEIGHT
            )));
        }

        let start = clamp_code(code_start);
        let end = clamp_code(code_end);
        if start > end {
            return Err(FontError::invalid_configuration(format!("code range {}..={} is inverted", start, end)));
        }

        self.font_width = width;
        self.font_height = height;
        self.code_start = start;
        self.code_end = end;
        self.glyph_data = Self::empty_glyphs(width, height, start, end);
        self.is_dirty = true;

        log::debug!("Font reconfigured to {}x{}, codes {}..={}", width, height, start, end);
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Settings
    // ═══════════════════════════════════════════════════════════════════════

    /// Get the current value of a layout parameter
    pub fn setting_value(&self, setting: FontSetting) -> u32 {
        match setting {
            FontSetting::Width => self.font_width as u32,
            FontSetting::Height => self.font_height as u32,
            FontSetting::CodeStart => self.code_start as u32,
            FontSetting::CodeEnd => self.code_end as u32,
        }
    }

    /// Change one layout parameter, keeping the others.
    ///
    /// The start code is clamped between 32 and the current end, the end code
    /// between the current start and 126, so a single edit can never invert the
    /// range. Any accepted change resets all glyphs.
    pub fn apply_setting(&mut self, setting: FontSetting, value: u32) -> Result<()> {
        let (mut width, mut height, mut start, mut end) = (self.font_width, self.font_height, self.code_start as u32, self.code_end as u32);
        let as_dimension = |value: u32| i32::try_from(value).unwrap_or(i32::MAX);

        match setting {
            FontSetting::Width => width = as_dimension(value),
            FontSetting::Height => height = as_dimension(value),
            FontSetting::CodeStart => start = value.clamp(FIRST_PRINTABLE as u32, end),
            FontSetting::CodeEnd => end = value.clamp(start, LAST_PRINTABLE as u32),
        }

        self.reconfigure(width, height, start, end)
    }
}
