//! Pointer input: modifier bits and pointer-to-cell mapping.
//!
//! The host provides client (CSS pixel) coordinates plus the canvas
//! bounding box. Mapping corrects for CSS-driven canvas scaling before
//! integer-dividing into grid coordinates; results are always clamped into
//! the grid, since any point inside the canvas box is a legitimate click.

use bitflags::bitflags;

use crate::geometry::GridGeometry;

bitflags! {
    /// Modifier keys held during a pointer event.
    ///
    /// Encoded as a compact `u8` bitset at the wasm boundary.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const ALT   = 0b0010;
        const CTRL  = 0b0100;
        const SUPER = 0b1000;
    }
}

/// One pointer click in client (CSS pixel) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerClick {
    pub client_x: f64,
    pub client_y: f64,
    pub mods: Modifiers,
}

/// The canvas element's CSS-pixel bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Map a client-coordinate click to the `(row, col)` underneath it.
///
/// Scale factors `pixel_width / css_width` and `pixel_height / css_height`
/// undo any CSS scaling of the canvas. The result is clamped into the
/// grid, so a click exactly on the trailing gridline lands in the final
/// row/column.
#[must_use]
pub fn map_pointer_to_cell(
    geometry: &GridGeometry,
    rect: SurfaceRect,
    click: PointerClick,
) -> (u32, u32) {
    let scale_x = f64::from(geometry.pixel_width()) / rect.width;
    let scale_y = f64::from(geometry.pixel_height()) / rect.height;
    let canvas_x = (click.client_x - rect.left) * scale_x;
    let canvas_y = (click.client_y - rect.top) * scale_y;
    geometry.cell_at_pixel(canvas_x, canvas_y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unscaled_rect(geometry: &GridGeometry) -> SurfaceRect {
        SurfaceRect {
            left: 0.0,
            top: 0.0,
            width: f64::from(geometry.pixel_width()),
            height: f64::from(geometry.pixel_height()),
        }
    }

    fn click(x: f64, y: f64) -> PointerClick {
        PointerClick {
            client_x: x,
            client_y: y,
            mods: Modifiers::empty(),
        }
    }

    #[test]
    fn top_left_corner_maps_to_origin_cell() {
        let g = GridGeometry::new(4, 4, 2);
        assert_eq!(map_pointer_to_cell(&g, unscaled_rect(&g), click(0.0, 0.0)), (0, 0));
    }

    #[test]
    fn last_gridline_maps_to_last_cell() {
        let g = GridGeometry::new(4, 4, 2);
        let edge = f64::from(g.pixel_width() - 1);
        assert_eq!(
            map_pointer_to_cell(&g, unscaled_rect(&g), click(edge, edge)),
            (3, 3)
        );
    }

    #[test]
    fn css_downscaling_is_undone() {
        let g = GridGeometry::new(4, 4, 2);
        // Canvas displayed at half size: client coordinates are halved.
        let rect = SurfaceRect {
            left: 0.0,
            top: 0.0,
            width: f64::from(g.pixel_width()) / 2.0,
            height: f64::from(g.pixel_height()) / 2.0,
        };
        // Cell (2, 1) interior starts at canvas pixel (4, 7); halve it.
        assert_eq!(map_pointer_to_cell(&g, rect, click(2.0, 3.5)), (2, 1));
    }

    #[test]
    fn offset_bounding_box_is_subtracted() {
        let g = GridGeometry::new(4, 4, 2);
        let rect = SurfaceRect {
            left: 100.0,
            top: 50.0,
            width: f64::from(g.pixel_width()),
            height: f64::from(g.pixel_height()),
        };
        assert_eq!(map_pointer_to_cell(&g, rect, click(100.0, 50.0)), (0, 0));
        assert_eq!(map_pointer_to_cell(&g, rect, click(104.5, 57.5)), (2, 1));
    }

    #[test]
    fn modifier_bits_stay_in_the_low_nibble() {
        let all = Modifiers::all();
        assert_eq!(all.bits(), 0b1111);
        assert!(Modifiers::from_bits_truncate(0xF4).contains(Modifiers::CTRL));
    }
}
