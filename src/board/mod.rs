//! Letter display board and its glyph catalog

pub mod glyphs;
pub mod letter_board;

pub use glyphs::{Glyph, GlyphCatalog};
pub use letter_board::LetterBoard;
