#![forbid(unsafe_code)]

//! WASM frontend for frankenlife.
//!
//! Host-specific (web/WASM) glue around `frankenlife-view`:
//! - binds the core's drawing seam to `CanvasRenderingContext2d`,
//! - binds frame scheduling to `requestAnimationFrame`,
//! - imports the simulation engine as a duck-typed JS handle,
//! - exposes a stable `wasm-bindgen` control surface: play/pause, step
//!   rate, reset/randomize, pointer clicks, and FPS readback.
//!
//! The host page owns all element lookup and event wiring; it pushes
//! pointer clicks and control changes into the exported methods.

pub mod options;
pub mod style;

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::{Engine, LifeCanvas};

/// Native builds compile this crate as a stub so `cargo check --workspace`
/// stays green on non-wasm targets.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct LifeCanvas;

#[cfg(not(target_arch = "wasm32"))]
impl LifeCanvas {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self
    }
}
