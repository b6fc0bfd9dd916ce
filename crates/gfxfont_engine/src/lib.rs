//! Bitmap font editing engine for Adafruit GFX fonts
//!
//! - [`FontModel`] holds one glyph per printable ASCII code, all of the same size
//! - [`bit_packer`] packs a glyph into MSB-first bytes
//! - [`export`] builds the bitmap stream and glyph table and renders the C header
//! - [`persistence`] saves and loads fonts
//! - [`EditorSession`] is the controller a user interface drives

pub mod bit_packer;
pub mod editor;
mod error;
pub mod export;
pub mod font_model;
mod glyph;
pub mod persistence;
pub mod services;

pub use editor::{EditorSession, SessionMessage};
pub use error::{FontError, Result};
pub use export::{export, render_header, ExportResult, ExportedGlyphMeta};
pub use font_model::{FontModel, FontSetting};
pub use glyph::GlyphGrid;
pub use services::{KDialogPrompt, PromptService, ScriptedPrompt};
