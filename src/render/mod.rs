pub mod frame;
pub mod glyph;
pub mod scale;

pub use frame::{Chunk, Renderer, RowKind};
pub use glyph::Palette;
pub use scale::Scale;
