//! The glyph rasterizer seam and its fontdue-backed implementation.
//!
//! Record building talks to a `GlyphSource`, never to fontdue directly,
//! so the packing and placement logic is testable against synthetic
//! rasters and the rasterizer can be swapped without touching the store
//! format.

use std::path::Path;

use crate::error::BuildError;

use fontpack_core::CellGeometry;

/// One rasterized glyph: 8-bit row-major coverage plus the metrics
/// placement needs.
#[derive(Debug, Clone)]
pub struct GlyphRaster {
    /// Raster width in pixels.
    pub width: usize,
    /// Raster height in pixels.
    pub height: usize,
    /// Distance from the baseline up to the raster's top row.
    pub top: i32,
    /// Natural advance width in pixels.
    pub advance: u8,
    /// Row-major 8-bit coverage, `width * height` samples.
    pub coverage: Vec<u8>,
}

impl GlyphRaster {
    /// Coverage sample at `(x, y)`; 0 outside the raster.
    pub fn sample(&self, x: usize, y: usize) -> u8 {
        if x >= self.width || y >= self.height {
            0
        } else {
            self.coverage[y * self.width + x]
        }
    }
}

/// Source of glyph rasters for record building.
///
/// `raster` returning `None` is the sole representation of "no such
/// glyph"; there is no error channel. A face either renders a codepoint
/// or the codepoint stays out of the store, and empty rasters (spaces,
/// zero-size glyphs) count as misses too.
pub trait GlyphSource {
    /// Face descent below the baseline, in pixels (positive).
    fn descent(&self) -> u8;

    /// Rasterize one codepoint, or `None` when the face has no glyph
    /// for it.
    fn raster(&self, codepoint: u32) -> Option<GlyphRaster>;
}

/// `GlyphSource` backed by a fontdue face.
pub struct FaceRasterizer {
    font: fontdue::Font,
    size_px: f32,
}

impl FaceRasterizer {
    /// Load a TTF/OTF face from disk. Failure here aborts the build.
    pub fn load(path: &Path, size_px: f32) -> Result<Self, BuildError> {
        let data = std::fs::read(path).map_err(|err| BuildError::FontLoad {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
        let font = fontdue::Font::from_bytes(data, fontdue::FontSettings::default()).map_err(
            |err| BuildError::FontLoad {
                path: path.to_path_buf(),
                reason: err.to_owned(),
            },
        )?;
        Ok(Self { font, size_px })
    }

    /// Derive cell dimensions from face metrics.
    ///
    /// Height is the ascent-to-descent span plus a pixel of headroom top
    /// and bottom. Width is probed from representative full-width glyphs
    /// so ideographs fit unclipped; faces without any of them (pure Latin
    /// faces) fall back to a square cell.
    pub fn auto_cell(&self) -> CellGeometry {
        let span = self
            .font
            .horizontal_line_metrics(self.size_px)
            .map_or(f32::from(u8::MAX), |lm| (lm.ascent - lm.descent).ceil());
        let height = span as usize + 2;

        let mut probe = 0usize;
        for ch in ['中', '文', '日'] {
            if self.font.lookup_glyph_index(ch) != 0 {
                let (metrics, _) = self.font.rasterize(ch, self.size_px);
                probe = probe.max(metrics.width);
            }
        }
        let width = if probe > 0 { probe + 2 } else { height };

        CellGeometry::new(clamp_dimension(width), clamp_dimension(height))
    }
}

impl GlyphSource for FaceRasterizer {
    fn descent(&self) -> u8 {
        self.font
            .horizontal_line_metrics(self.size_px)
            .map_or(0, |lm| (-lm.descent).ceil().clamp(0.0, 255.0) as u8)
    }

    fn raster(&self, codepoint: u32) -> Option<GlyphRaster> {
        let ch = char::from_u32(codepoint)?;
        if self.font.lookup_glyph_index(ch) == 0 {
            return None;
        }

        let (metrics, coverage) = self.font.rasterize(ch, self.size_px);
        if metrics.width == 0 || metrics.height == 0 {
            return None;
        }

        // fontdue bearings are y-up from the baseline; placement wants
        // the distance from the baseline to the raster's top row.
        let top = metrics.height as i32 + metrics.ymin;
        let advance = metrics.advance_width.ceil().clamp(0.0, 255.0) as u8;

        Some(GlyphRaster {
            width: metrics.width,
            height: metrics.height,
            top,
            advance,
            coverage,
        })
    }
}

/// Clamp a derived cell dimension into the u8 descriptor range.
fn clamp_dimension(px: usize) -> u8 {
    px.clamp(1, 255) as u8
}

#[cfg(test)]
pub(crate) mod mock;

#[cfg(test)]
mod tests {
    use super::{GlyphRaster, clamp_dimension};

    #[test]
    fn sample_is_zero_outside_the_raster() {
        let raster = GlyphRaster {
            width: 2,
            height: 2,
            top: 2,
            advance: 3,
            coverage: vec![10, 20, 30, 40],
        };
        assert_eq!(raster.sample(0, 0), 10);
        assert_eq!(raster.sample(1, 1), 40);
        assert_eq!(raster.sample(2, 0), 0);
        assert_eq!(raster.sample(0, 2), 0);
    }

    #[test]
    fn derived_dimensions_stay_in_descriptor_range() {
        assert_eq!(clamp_dimension(0), 1);
        assert_eq!(clamp_dimension(14), 14);
        assert_eq!(clamp_dimension(300), 255);
    }
}
