//! The owned view aggregate: one engine handle, one renderer, one
//! animation controller, one FPS meter.
//!
//! Constructed once at startup; there are no module globals. The drawing
//! surface is passed per call because the host owns it.

use crate::bitgrid::PackedCells;
use crate::controller::{AnimationController, FrameScheduler};
use crate::engine::CellAutomaton;
use crate::fps::{FpsMeter, FpsStats};
use crate::geometry::GridGeometry;
use crate::input::{PointerClick, SurfaceRect, map_pointer_to_cell};
use crate::render::{CellSurface, GridRenderer};

/// Rendering-and-interaction loop over one engine handle.
pub struct GridView<E, S>
where
    E: CellAutomaton,
    S: FrameScheduler,
{
    engine: E,
    renderer: GridRenderer,
    controller: AnimationController<S>,
    fps: FpsMeter,
}

impl<E, S> GridView<E, S>
where
    E: CellAutomaton,
    S: FrameScheduler,
{
    /// Build the view around an engine. Geometry is read from the engine
    /// here, once; it is assumed immutable afterwards. The view starts
    /// paused; the host paints once and then calls [`GridView::play`].
    #[must_use]
    pub fn new(engine: E, scheduler: S, cell_size: u32, now_ms: f64) -> Self {
        let geometry = GridGeometry::new(engine.height(), engine.width(), cell_size);
        Self {
            engine,
            renderer: GridRenderer::new(geometry),
            controller: AnimationController::new(scheduler),
            fps: FpsMeter::new(now_ms),
        }
    }

    /// The geometry this view paints.
    #[must_use]
    pub fn geometry(&self) -> GridGeometry {
        self.renderer.geometry()
    }

    /// True iff the animation loop holds no scheduled frame.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.controller.is_paused()
    }

    /// Start (or restart) the animation loop.
    pub fn play(&mut self) {
        self.controller.play();
    }

    /// Stop the animation loop; safe when already paused.
    pub fn pause(&mut self) {
        self.controller.pause();
    }

    /// Engine generations advanced per frame.
    #[must_use]
    pub fn steps_per_frame(&self) -> u32 {
        self.controller.steps_per_frame()
    }

    /// Update steps-per-frame; zero clamps to 1.
    pub fn set_steps_per_frame(&mut self, steps: u32) {
        self.controller.set_steps_per_frame(steps);
    }

    /// Forward the reset command to the engine. The change becomes visible
    /// on the next frame or toggle-triggered repaint.
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    /// Forward the randomize command to the engine.
    pub fn randomize(&mut self) {
        self.engine.randomize();
    }

    /// Paint gridlines and every cell from a fresh engine export.
    pub fn redraw(&mut self, surface: &mut impl CellSurface) {
        self.renderer.draw_grid_lines(surface);
        let cells = self.engine.cells();
        let packed = PackedCells::new(&cells, self.renderer.geometry().cell_count());
        self.renderer.draw_cells(&packed, surface);
    }

    /// One scheduled frame: sample the meter, advance the engine by the
    /// current steps-per-frame, repaint, reschedule. Steps always advance
    /// before the repaint, so the drawn state reflects the just-computed
    /// generation, never a stale one.
    pub fn frame(&mut self, now_ms: f64, surface: &mut impl CellSurface) -> FpsStats {
        let stats = self.fps.sample(now_ms);
        let steps = self.controller.steps_per_frame();
        self.engine.tick_n(steps);
        self.redraw(surface);
        self.controller.reschedule();
        stats
    }

    /// Host entry for a pointer click: map to a cell, toggle it on the
    /// engine, and, when paused, repaint immediately so the toggle is
    /// visible without waiting for a scheduled frame. Returns the toggled
    /// cell.
    pub fn pointer_click(
        &mut self,
        click: PointerClick,
        rect: SurfaceRect,
        surface: &mut impl CellSurface,
    ) -> (u32, u32) {
        #[cfg(feature = "tracing")]
        if click.mods.contains(crate::input::Modifiers::CTRL) {
            tracing::debug!(x = click.client_x, y = click.client_y, "ctrl-click");
        }

        let (row, col) = map_pointer_to_cell(&self.renderer.geometry(), rect, click);
        self.engine.toggle_cell(row, col);
        #[cfg(feature = "tracing")]
        tracing::debug!(row, col, "cell toggled");

        if self.controller.is_paused() {
            self.redraw(surface);
        }
        (row, col)
    }
}
