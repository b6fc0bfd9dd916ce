//! Font model module structure
//!
//! - `state.rs` - Struct definition, constructors, getters, basic setters
//! - `glyph_operations.rs` - Single glyph operations (toggle, set, clear)
//! - `font_operations.rs` - Font-level operations (reconfigure, settings)

mod font_operations;
mod glyph_operations;
mod state;

pub use font_operations::FontSetting;
pub use state::FontModel;

/// First printable ASCII code a font may start at
pub const FIRST_PRINTABLE: u8 = 32;

/// Last printable ASCII code a font may end at
pub const LAST_PRINTABLE: u8 = 126;

/// Minimum allowed glyph width (columns per glyph)
pub const MIN_GLYPH_WIDTH: i32 = 1;

/// Maximum allowed glyph width, `xAdvance = width + 1` has to fit a `uint8_t`
pub const MAX_GLYPH_WIDTH: i32 = 254;

/// Minimum allowed glyph height (rows per glyph)
pub const MIN_GLYPH_HEIGHT: i32 = 1;

/// Maximum allowed glyph height, `yOffset = -height` has to fit an `int8_t`
pub const MAX_GLYPH_HEIGHT: i32 = 128;

/// Default glyph width of a new font
pub const DEFAULT_WIDTH: i32 = 5;

/// Default glyph height of a new font
pub const DEFAULT_HEIGHT: i32 = 7;

/// Font name used when none is given
pub const DEFAULT_FONT_NAME: &str = "customFont";
