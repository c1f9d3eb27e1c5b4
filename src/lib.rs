//! Windowed vector-shape viewer.
//!
//! An ordered scene of shape variants is drawn onto a per-paint canvas,
//! rasterized into a pixmap, and blitted to a fixed-size window:
//!
//! scene (shapes) → canvas (`DrawCmd`s) → renderer (`Pixmap`) → viewer (window)
//!
//! The first three stages are pure and platform-free; every toolkit and GPU
//! concern lives in the viewer.

pub mod canvas;
pub mod renderer;
pub mod scene;
pub mod types;
pub mod viewer;
