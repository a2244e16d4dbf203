#![forbid(unsafe_code)]

//! Browser bindings: the Canvas2D surface, `requestAnimationFrame`
//! scheduling, and the exported `LifeCanvas` control surface.

use std::borrow::Cow;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use frankenlife_view::{
    CellAutomaton, CellSurface, FpsStats, FrameScheduler, GridView, Modifiers, PackedRgba,
    PointerClick, Segment, SurfaceRect,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::options::ViewOptions;
use crate::style::CssColorCache;

#[wasm_bindgen]
extern "C" {
    /// Duck-typed simulation engine handle supplied by the host.
    ///
    /// Mirrors the engine's exported surface: geometry reads, batched
    /// ticking, the packed cell export, and the explicit mutation
    /// commands. The engine stays external; this crate never constructs
    /// one.
    pub type Engine;

    #[wasm_bindgen(method)]
    fn width(this: &Engine) -> u32;

    #[wasm_bindgen(method)]
    fn height(this: &Engine) -> u32;

    #[wasm_bindgen(method)]
    fn tick_n(this: &Engine, steps: u32);

    #[wasm_bindgen(method)]
    fn cells(this: &Engine) -> js_sys::Uint8Array;

    #[wasm_bindgen(method)]
    fn toggle_cell(this: &Engine, row: u32, col: u32);

    #[wasm_bindgen(method)]
    fn reset(this: &Engine);

    #[wasm_bindgen(method)]
    fn randomize(this: &Engine);
}

/// `CellAutomaton` over the imported JS engine handle.
///
/// `cells()` crosses the JS boundary with one copy per call; the export is
/// re-fetched every frame by contract and never cached here.
struct JsEngine {
    handle: Engine,
}

impl CellAutomaton for JsEngine {
    fn width(&self) -> u32 {
        self.handle.width()
    }

    fn height(&self) -> u32 {
        self.handle.height()
    }

    fn tick_n(&mut self, steps: u32) {
        self.handle.tick_n(steps);
    }

    fn cells(&self) -> Cow<'_, [u8]> {
        Cow::Owned(self.handle.cells().to_vec())
    }

    fn toggle_cell(&mut self, row: u32, col: u32) {
        self.handle.toggle_cell(row, col);
    }

    fn reset(&mut self) {
        self.handle.reset();
    }

    fn randomize(&mut self) {
        self.handle.randomize();
    }
}

/// Canvas2D binding of the drawing seam.
struct Canvas2dSurface {
    ctx: CanvasRenderingContext2d,
    css: CssColorCache,
}

impl CellSurface for Canvas2dSurface {
    fn stroke_segments(&mut self, color: PackedRgba, segments: &[Segment]) {
        self.ctx.begin_path();
        for segment in segments {
            self.ctx
                .move_to(f64::from(segment.x0), f64::from(segment.y0));
            self.ctx
                .line_to(f64::from(segment.x1), f64::from(segment.y1));
        }
        self.ctx.set_stroke_style_str(self.css.get(color));
        self.ctx.stroke();
    }

    fn fill_rect(&mut self, color: PackedRgba, x: u32, y: u32, w: u32, h: u32) {
        self.ctx.set_fill_style_str(self.css.get(color));
        self.ctx
            .fill_rect(f64::from(x), f64::from(y), f64::from(w), f64::from(h));
    }
}

type TickClosure = Closure<dyn FnMut(f64)>;

/// `requestAnimationFrame` binding of the frame-scheduling seam.
///
/// The tick closure is created once, right after view construction, and
/// reused for every scheduled frame; the handle is the DOM request id.
struct RafScheduler {
    window: Window,
    tick: Rc<RefCell<Option<TickClosure>>>,
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn schedule(&mut self) -> i32 {
        let tick = self.tick.borrow();
        let callback = tick.as_ref().expect_throw("frame callback not installed");
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .expect_throw("requestAnimationFrame rejected the frame callback")
    }

    fn cancel(&mut self, handle: i32) {
        self.window
            .cancel_animation_frame(handle)
            .expect_throw("cancelAnimationFrame rejected a live handle");
    }
}

struct Inner {
    view: GridView<JsEngine, RafScheduler>,
    surface: Canvas2dSurface,
    canvas: HtmlCanvasElement,
    last_fps: Option<FpsStats>,
}

/// Web view over an external engine: sizes the canvas from the engine's
/// geometry, paints once, and starts the animation loop.
#[wasm_bindgen]
pub struct LifeCanvas {
    inner: Rc<RefCell<Inner>>,
}

#[wasm_bindgen]
impl LifeCanvas {
    /// Construct over an existing `<canvas>` and engine handle.
    ///
    /// `options` is an optional JSON string, e.g.
    /// `{"cellSize":2,"stepsPerFrame":1}`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        engine: Engine,
        options: Option<String>,
    ) -> Result<LifeCanvas, JsValue> {
        let options = ViewOptions::from_json(options.as_deref()).map_err(js_error)?;

        let window = web_sys::window().ok_or_else(|| js_error("no window available"))?;
        let now_ms = window
            .performance()
            .ok_or_else(|| js_error("no performance clock available"))?
            .now();
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| js_error("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| js_error("2d context has an unexpected type"))?;

        let tick = Rc::new(RefCell::new(None));
        let scheduler = RafScheduler {
            window,
            tick: Rc::clone(&tick),
        };
        let mut view = GridView::new(
            JsEngine { handle: engine },
            scheduler,
            options.cell_size,
            now_ms,
        );
        view.set_steps_per_frame(options.steps_per_frame);

        let geometry = view.geometry();
        canvas.set_width(geometry.pixel_width());
        canvas.set_height(geometry.pixel_height());

        let mut surface = Canvas2dSurface {
            ctx,
            css: CssColorCache::new(),
        };
        view.redraw(&mut surface);

        let inner = Rc::new(RefCell::new(Inner {
            view,
            surface,
            canvas,
            last_fps: None,
        }));

        let weak = Rc::downgrade(&inner);
        *tick.borrow_mut() = Some(Closure::new(move |now_ms: f64| tick_frame(&weak, now_ms)));

        inner.borrow_mut().view.play();
        Ok(LifeCanvas { inner })
    }

    /// Start the animation loop. Restarting while playing replaces the
    /// pending frame.
    pub fn play(&self) {
        self.inner.borrow_mut().view.play();
    }

    /// Stop the animation loop; safe when already paused.
    pub fn pause(&self) {
        self.inner.borrow_mut().view.pause();
    }

    /// True iff no frame is scheduled.
    #[wasm_bindgen(js_name = isPaused)]
    pub fn is_paused(&self) -> bool {
        self.inner.borrow().view.is_paused()
    }

    /// Set generations computed per frame; zero clamps to 1.
    #[wasm_bindgen(js_name = setStepsPerFrame)]
    pub fn set_steps_per_frame(&self, steps: u32) {
        self.inner.borrow_mut().view.set_steps_per_frame(steps);
    }

    /// Reset the engine to its initial configuration.
    pub fn reset(&self) {
        self.inner.borrow_mut().view.reset();
    }

    /// Randomize the engine state.
    pub fn randomize(&self) {
        self.inner.borrow_mut().view.randomize();
    }

    /// Handle a pointer click at client coordinates. `mods` is the
    /// modifier bitset (shift = 1, alt = 2, ctrl = 4, super = 8).
    /// Returns `[row, col]` of the toggled cell.
    #[wasm_bindgen(js_name = pointerClick)]
    pub fn pointer_click(&self, client_x: f64, client_y: f64, mods: u8) -> Box<[u32]> {
        let mut inner = self.inner.borrow_mut();
        let inner = &mut *inner;

        let rect = inner.canvas.get_bounding_client_rect();
        let rect = SurfaceRect {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        };
        let click = PointerClick {
            client_x,
            client_y,
            mods: Modifiers::from_bits_truncate(mods),
        };
        let (row, col) = inner.view.pointer_click(click, rect, &mut inner.surface);
        Box::new([row, col])
    }

    /// Four-line FPS HUD text; empty until the first frame.
    #[wasm_bindgen(js_name = fpsText)]
    pub fn fps_text(&self) -> String {
        self.inner
            .borrow()
            .last_fps
            .map(|stats| stats.to_string())
            .unwrap_or_default()
    }

    /// FPS statistics as JSON; `{}` until the first frame.
    #[wasm_bindgen(js_name = fpsJson)]
    pub fn fps_json(&self) -> String {
        self.inner
            .borrow()
            .last_fps
            .map(|stats| stats.to_json())
            .unwrap_or_else(|| "{}".to_string())
    }

    /// Explicit teardown: stops the loop. Dropping the last JS reference
    /// also stops it on the next tick.
    pub fn destroy(&self) {
        self.inner.borrow_mut().view.pause();
    }
}

/// One scheduled tick. A dead weak reference means the view was dropped;
/// the loop simply stops rescheduling.
fn tick_frame(weak: &Weak<RefCell<Inner>>, now_ms: f64) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    let mut inner = inner.borrow_mut();
    let inner = &mut *inner;
    let stats = inner.view.frame(now_ms, &mut inner.surface);
    inner.last_fps = Some(stats);
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsError::new(&err.to_string()).into()
}
