//! Draw-surface boundary.
//!
//! The clock core mutates the scene and calls `present` once per frame;
//! everything backend-specific (window, pixel buffer, platform events) stays
//! behind [`Surface`]. The core never assumes a specific backend.

mod window;

pub use window::{WindowConfig, WindowSurface};

use anyhow::Result;

use crate::coords::Viewport;
use crate::scene::Scene;

/// One flushable frame target.
pub trait Surface {
    /// Logical viewport the scene is rendered into.
    fn viewport(&self) -> Viewport;

    /// Rasterizes the scene and presents one frame.
    ///
    /// Errors are fatal: no render can succeed once the backend is gone, so
    /// callers propagate rather than retry.
    fn present(&mut self, scene: &mut Scene) -> Result<()>;
}
