//! Scene (layered draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands grouped into named layers
//! - keep each layer independently clearable, so redrawing one layer never
//!   disturbs the static face or any other layer
//! - provide deterministic paint ordering (z-index + creation order)

mod cmd;
mod layer;
mod list;
mod z_index;

pub mod shapes;

pub use cmd::DrawCmd;
pub use layer::{Layer, LayerId};
pub use list::Scene;
pub use z_index::ZIndex;
