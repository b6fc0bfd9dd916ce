//! Editor session
//!
//! The controller between a user interface and the font model. It owns the one
//! `FontModel` of the session and keeps the UI state a terminal
//! editor needs: the pixel cursor inside the selected glyph, the selected
//! glyph, and the page of glyphs currently visible.
//!
//! Nothing here draws to a terminal or reads keys. A front end maps its input
//! events to the methods below and displays `render_page()`.
//!
//! - `layout.rs` - How many glyphs fit on a page
//! - `navigation.rs` - Cursor movement, glyph selection and paging
//! - `commands.rs` - Settings, save, load and export through prompt services
//! - `render.rs` - Text rendering of glyphs and pages

mod commands;
mod layout;
mod navigation;
mod render;

pub use commands::SessionMessage;
pub use layout::{GridLayout, CELLS_PER_PIXEL, H_SPACING, V_SPACING};
pub use render::{glyph_label, render_glyph};

use crate::{FontModel, Result};

/// Terminal size assumed until the front end reports one
pub const DEFAULT_TERMINAL_SIZE: (i32, i32) = (80, 25);

/// Editing state of one font
pub struct EditorSession {
    pub(crate) model: FontModel,

    /// Cursor in the selected glyph (x, y)
    pub(crate) cursor: (i32, i32),

    /// Current page
    pub(crate) page: i32,

    /// Selected glyph, index within the current page
    pub(crate) page_index: i32,

    pub(crate) terminal_size: (i32, i32),
    pub(crate) layout: GridLayout,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(FontModel::new())
    }
}

impl EditorSession {
    pub fn new(model: FontModel) -> Self {
        let (term_width, term_height) = DEFAULT_TERMINAL_SIZE;
        let layout = GridLayout::calculate(term_width, term_height, model.width(), model.height());
        Self {
            model,
            cursor: (0, 0),
            page: 0,
            page_index: 0,
            terminal_size: DEFAULT_TERMINAL_SIZE,
            layout,
        }
    }

    pub fn model(&self) -> &FontModel {
        &self.model
    }

    /// Give up the session and keep the font
    pub fn into_model(self) -> FontModel {
        self.model
    }

    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    pub fn cursor(&self) -> (i32, i32) {
        self.cursor
    }

    pub fn page(&self) -> i32 {
        self.page
    }

    pub fn page_index(&self) -> i32 {
        self.page_index
    }

    /// Index of the selected glyph within the whole font
    pub fn selected_index(&self) -> i32 {
        self.page * self.layout.chars_per_page() + self.page_index
    }

    /// The selected character
    pub fn selected_char(&self) -> char {
        char::from(self.model.code_start() + self.selected_index() as u8)
    }

    /// Number of pages needed for the whole font
    pub fn page_count(&self) -> i32 {
        let per_page = self.layout.chars_per_page();
        (self.model.glyph_count() as i32 + per_page - 1) / per_page
    }

    /// Characters shown on the current page, ascending
    pub fn page_chars(&self) -> Vec<char> {
        let per_page = self.layout.chars_per_page();
        let first = self.page * per_page;
        let last = (first + per_page).min(self.model.glyph_count() as i32);
        (first..last).map(|idx| char::from(self.model.code_start() + idx as u8)).collect()
    }

    /// React to a terminal size change
    pub fn resize_terminal(&mut self, term_width: i32, term_height: i32) {
        self.terminal_size = (term_width, term_height);
        self.update_layout();
    }

    /// Recalculate the layout and keep the selected glyph selected
    pub(crate) fn update_layout(&mut self) {
        let selected = self.selected_index().clamp(0, self.model.glyph_count() as i32 - 1);
        let (term_width, term_height) = self.terminal_size;
        self.layout = GridLayout::calculate(term_width, term_height, self.model.width(), self.model.height());

        let per_page = self.layout.chars_per_page();
        self.page = selected / per_page;
        self.page_index = selected % per_page;
        log::debug!(
            "Layout {}x{} glyphs per page, selection at page {} index {}",
            self.layout.chars_per_row,
            self.layout.chars_per_col,
            self.page,
            self.page_index
        );
    }

    /// Go back to the first glyph and the top-left pixel
    pub(crate) fn reset_selection(&mut self) {
        self.cursor = (0, 0);
        self.page = 0;
        self.page_index = 0;
        self.update_layout();
    }

    /// Change size and code range of the font, clearing all glyphs
    pub fn reconfigure(&mut self, width: i32, height: i32, code_start: u32, code_end: u32) -> Result<()> {
        self.model.reconfigure(width, height, code_start, code_end)?;
        self.reset_selection();
        Ok(())
    }

    /// Replace the font, e.g. after loading
    pub fn replace_model(&mut self, model: FontModel) {
        self.model = model;
        self.reset_selection();
    }
}
