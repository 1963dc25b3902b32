//! Glyph record building: rasterize, place, threshold, pack.

use log::debug;

use fontpack_core::CellGeometry;

use crate::packer::pack_cell;
use crate::raster::GlyphSource;

/// A coverage sample at or above 25% of full scale counts as inked.
/// Low enough to keep thin strokes visible without halo growth.
pub const COVERAGE_THRESHOLD: u8 = 64;

/// Codepoints at or above this are full-width scripts: they render on a
/// fixed grid and always advance one whole cell.
pub const FULL_WIDTH_BOUNDARY: u32 = 0x3000;

/// Padding added to a proportional glyph's natural advance.
const ADVANCE_PAD: u8 = 2;

/// One packed glyph ready for store assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRecord {
    pub codepoint: u32,
    /// `bytes_per_char` packed bytes.
    pub bitmap: Vec<u8>,
    /// Advance width in pixels, never beyond the cell width.
    pub advance: u8,
}

/// Build the record for one codepoint, or `None` when the source has no
/// glyph for it.
///
/// Every glyph sits on the one baseline at `cell_height - descent`, so
/// ascenders and descenders of different scripts share a line.
/// Horizontally the glyph gets a 1-pixel left pad when the cell has at
/// least 2 pixels of slack, otherwise it sits flush left so wide glyphs
/// are not clipped at the right edge.
pub fn build_record<S: GlyphSource>(
    source: &S,
    codepoint: u32,
    geometry: CellGeometry,
) -> Option<GlyphRecord> {
    let raster = source.raster(codepoint)?;
    let cell_width = usize::from(geometry.width);

    let x0 = usize::from(raster.width + 2 <= cell_width);
    let baseline = i32::from(geometry.height) - i32::from(source.descent());
    let y0 = (baseline - raster.top).max(0) as usize;

    let bitmap = pack_cell(geometry, |x, y| {
        if x < x0 || y < y0 {
            return false;
        }
        raster.sample(x - x0, y - y0) >= COVERAGE_THRESHOLD
    });

    let advance = if codepoint >= FULL_WIDTH_BOUNDARY {
        geometry.width
    } else {
        raster
            .advance
            .saturating_add(ADVANCE_PAD)
            .min(geometry.width)
    };

    Some(GlyphRecord {
        codepoint,
        bitmap,
        advance,
    })
}

/// Build records for every coverage codepoint the source can render.
///
/// Misses are counted and skipped, never fatal to the batch. Records
/// come out in coverage order, one per renderable codepoint.
pub fn build_records<S: GlyphSource>(
    source: &S,
    coverage: &[u32],
    geometry: CellGeometry,
) -> (Vec<GlyphRecord>, usize) {
    let mut records = Vec::with_capacity(coverage.len());
    let mut missed = 0usize;
    for &codepoint in coverage {
        match build_record(source, codepoint, geometry) {
            Some(record) => records.push(record),
            None => {
                debug!("no glyph for U+{codepoint:04X}");
                missed += 1;
            }
        }
    }
    (records, missed)
}

#[cfg(test)]
mod tests;
