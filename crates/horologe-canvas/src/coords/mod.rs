//! Coordinate and color types shared between the scene and the rasterizer.
//!
//! Canonical CPU space ("dial space"):
//! - Logical pixels
//! - Origin at the viewport center
//! - +X right, +Y up (mathematical convention)
//!
//! The rasterizer converts to top-left, +Y-down pixel space via
//! [`Viewport::to_pixel`]; no other code performs that flip.

mod color;
mod vec2;
mod viewport;

pub use color::{ColorParseError, Rgba};
pub use vec2::Vec2;
pub use viewport::Viewport;
