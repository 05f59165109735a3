//! Horologe canvas crate.
//!
//! This crate owns the drawing pieces the clock layer builds on: coordinate
//! types, the layered scene, the software rasterizer, the windowed surface,
//! and loop timing.

pub mod coords;
pub mod scene;
pub mod text;
pub mod raster;
pub mod surface;
pub mod time;

pub mod logging;
