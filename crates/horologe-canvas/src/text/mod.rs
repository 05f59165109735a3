//! Font loading.
//!
//! Fonts are immutable after loading; draw commands reference them by
//! [`FontId`]. Glyph rasterization happens in `raster::shapes::text`.

mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem};
