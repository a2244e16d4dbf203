#![forbid(unsafe_code)]

//! Host-agnostic rendering-and-interaction loop for a two-dimensional
//! cellular automaton.
//!
//! Design goals (mirroring the web host it was built for):
//! - **Host-driven I/O**: the embedding environment pushes pointer clicks,
//!   control toggles, and frame timestamps.
//! - **Deterministic time**: the host supplies every timestamp; nothing in
//!   this crate reads a clock.
//! - **No blocking / no threads**: suitable for `wasm32-unknown-unknown`.
//!
//! The simulation engine is an external collaborator consumed through
//! [`engine::CellAutomaton`]. This crate schedules it, decodes its packed
//! cell export, and paints through the [`render::CellSurface`] seam; the
//! `frankenlife-web` crate binds both seams to the DOM.

pub mod bitgrid;
pub mod controller;
pub mod engine;
pub mod fps;
pub mod geometry;
pub mod input;
pub mod render;
pub mod view;

pub use bitgrid::PackedCells;
pub use controller::{AnimationController, FrameScheduler};
pub use engine::CellAutomaton;
pub use fps::{FPS_WINDOW, FpsMeter, FpsStats};
pub use geometry::GridGeometry;
pub use input::{Modifiers, PointerClick, SurfaceRect, map_pointer_to_cell};
pub use render::{ALIVE_COLOR, CellSurface, DEAD_COLOR, GRID_COLOR, GridRenderer, PackedRgba, Segment};
pub use view::GridView;
