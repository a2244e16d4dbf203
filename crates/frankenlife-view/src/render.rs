//! Grid painting: gridlines plus per-cell fills over a narrow surface seam.
//!
//! The renderer never talks to a real canvas. It emits line segments and
//! rectangle fills through [`CellSurface`], which the web frontend binds to
//! `CanvasRenderingContext2d` and tests bind to a recording fake.

use crate::bitgrid::PackedCells;
use crate::geometry::GridGeometry;

/// RGBA color packed R-high / A-low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackedRgba(pub u32);

impl PackedRgba {
    /// Create an opaque RGB color (alpha = 255).
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | 0xFF)
    }

    /// Red channel.
    #[inline]
    #[must_use]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Green channel.
    #[inline]
    #[must_use]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Blue channel.
    #[inline]
    #[must_use]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }
}

/// Gridline stroke color.
pub const GRID_COLOR: PackedRgba = PackedRgba::rgb(0xCC, 0xCC, 0xCC);
/// Fill for dead cells.
pub const DEAD_COLOR: PackedRgba = PackedRgba::rgb(0xFF, 0xFF, 0xFF);
/// Fill for alive cells.
pub const ALIVE_COLOR: PackedRgba = PackedRgba::rgb(0x00, 0x00, 0x00);

/// One 1 px line segment in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

/// Minimal drawing surface the renderer paints through.
pub trait CellSurface {
    /// Stroke a batch of 1 px line segments as a single path.
    fn stroke_segments(&mut self, color: PackedRgba, segments: &[Segment]);

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, color: PackedRgba, x: u32, y: u32, w: u32, h: u32);
}

/// Paints one grid geometry.
///
/// Holds a reusable segment buffer so gridline redraws do not reallocate.
#[derive(Debug)]
pub struct GridRenderer {
    geometry: GridGeometry,
    segment_scratch: Vec<Segment>,
}

impl GridRenderer {
    /// Create a renderer for `geometry`.
    #[must_use]
    pub fn new(geometry: GridGeometry) -> Self {
        let segments = (geometry.rows() + geometry.cols() + 2) as usize;
        Self {
            geometry,
            segment_scratch: Vec::with_capacity(segments),
        }
    }

    /// The geometry this renderer paints.
    #[must_use]
    pub const fn geometry(&self) -> GridGeometry {
        self.geometry
    }

    /// Stroke the full set of gridlines: `cols + 1` vertical and `rows + 1`
    /// horizontal, spaced by the pitch and offset by 1 px, in one path of a
    /// single fixed color.
    pub fn draw_grid_lines(&mut self, surface: &mut impl CellSurface) {
        let pitch = self.geometry.pitch();
        let width = self.geometry.pixel_width();
        let height = self.geometry.pixel_height();

        self.segment_scratch.clear();
        for i in 0..=self.geometry.cols() {
            let x = i * pitch + 1;
            self.segment_scratch.push(Segment {
                x0: x,
                y0: 0,
                x1: x,
                y1: height,
            });
        }
        for j in 0..=self.geometry.rows() {
            let y = j * pitch + 1;
            self.segment_scratch.push(Segment {
                x0: 0,
                y0: y,
                x1: width,
                y1: y,
            });
        }
        surface.stroke_segments(GRID_COLOR, &self.segment_scratch);
    }

    /// Fill every cell from the packed buffer, row-major, alive or dead
    /// color. One scan of the buffer, no allocation.
    ///
    /// # Panics
    ///
    /// Panics when the buffer's cell count does not match the geometry.
    pub fn draw_cells(&self, cells: &PackedCells<'_>, surface: &mut impl CellSurface) {
        assert_eq!(
            cells.bit_len(),
            self.geometry.cell_count(),
            "packed buffer does not match grid geometry"
        );
        let size = self.geometry.cell_size();
        let mut idx = 0usize;
        for row in 0..self.geometry.rows() {
            for col in 0..self.geometry.cols() {
                let color = if cells.is_alive(idx) {
                    ALIVE_COLOR
                } else {
                    DEAD_COLOR
                };
                let (x, y) = self.geometry.cell_origin(row, col);
                surface.fill_rect(color, x, y, size, size);
                idx += 1;
            }
        }
    }
}
