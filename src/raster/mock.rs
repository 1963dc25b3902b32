//! Deterministic in-memory glyph source for tests.

use std::collections::HashMap;

use super::{GlyphRaster, GlyphSource};

/// A `GlyphSource` over hand-built rasters; every codepoint not added is
/// a miss.
pub struct MockSource {
    descent: u8,
    glyphs: HashMap<u32, GlyphRaster>,
}

impl MockSource {
    pub fn new(descent: u8) -> Self {
        Self {
            descent,
            glyphs: HashMap::new(),
        }
    }

    /// Add a glyph whose raster is a fully-covered `width x height`
    /// block with its top row `top` pixels above the baseline.
    pub fn solid(self, codepoint: u32, width: usize, height: usize, top: i32, advance: u8) -> Self {
        self.with_raster(
            codepoint,
            GlyphRaster {
                width,
                height,
                top,
                advance,
                coverage: vec![0xFF; width * height],
            },
        )
    }

    /// Add a glyph with explicit coverage samples.
    pub fn with_raster(mut self, codepoint: u32, raster: GlyphRaster) -> Self {
        self.glyphs.insert(codepoint, raster);
        self
    }
}

impl GlyphSource for MockSource {
    fn descent(&self) -> u8 {
        self.descent
    }

    fn raster(&self, codepoint: u32) -> Option<GlyphRaster> {
        self.glyphs.get(&codepoint).cloned()
    }
}
