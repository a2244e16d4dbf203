//! CSS color formatting for the Canvas2D binding.

use frankenlife_view::PackedRgba;

/// Format a color as a `#rrggbb` CSS hex string.
#[must_use]
pub fn css_hex(color: PackedRgba) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// Tiny per-color memo of CSS strings.
///
/// The palette holds three colors, so a linear scan beats a map and the
/// per-cell fill path stops allocating after the first frame.
#[derive(Debug, Default)]
pub struct CssColorCache {
    entries: Vec<(PackedRgba, String)>,
}

impl CssColorCache {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(3),
        }
    }

    /// The CSS string for `color`, formatted on first use.
    pub fn get(&mut self, color: PackedRgba) -> &str {
        if let Some(pos) = self.entries.iter().position(|(c, _)| *c == color) {
            return &self.entries[pos].1;
        }
        self.entries.push((color, css_hex(color)));
        &self.entries[self.entries.len() - 1].1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frankenlife_view::{ALIVE_COLOR, DEAD_COLOR, GRID_COLOR};
    use pretty_assertions::assert_eq;

    #[test]
    fn palette_formats_as_css_hex() {
        assert_eq!(css_hex(GRID_COLOR), "#cccccc");
        assert_eq!(css_hex(DEAD_COLOR), "#ffffff");
        assert_eq!(css_hex(ALIVE_COLOR), "#000000");
    }

    #[test]
    fn cache_reuses_entries() {
        let mut cache = CssColorCache::new();
        assert_eq!(cache.get(ALIVE_COLOR), "#000000");
        assert_eq!(cache.get(DEAD_COLOR), "#ffffff");
        assert_eq!(cache.get(ALIVE_COLOR), "#000000");
        assert_eq!(cache.entries.len(), 2);
    }
}
