//! Font store assembly and serialization.
//!
//! Two layouts, chosen per build and never mixed. Assembly is the last
//! point where glyph data is mutable: after serialization the store is
//! an immutable blob the runtime engine only reads.

use log::warn;

use fontpack_core::{BMP_MAX, CellGeometry};

use crate::error::BuildError;
use crate::record::GlyphRecord;

/// Codepoint-indexed store: every codepoint in `[0, max_codepoint]`
/// owns a fixed slot, rendered or not.
#[derive(Debug, Clone)]
pub struct DenseStore {
    pub geometry: CellGeometry,
    pub max_codepoint: u32,
    /// `(max_codepoint + 1) * bytes_per_char` bytes; unrendered slots
    /// stay all zero. This is already the serialized form; dense blobs
    /// have no header, geometry travels out-of-band.
    pub data: Vec<u8>,
    /// Records above `max_codepoint` that were dropped.
    pub dropped: usize,
}

/// Build a dense store.
///
/// `max_codepoint` is the address space the caller intends to support,
/// not the highest rendered codepoint. Records beyond it are dropped and
/// counted so the operator can size the range to the coverage set.
pub fn build_dense(
    records: &[GlyphRecord],
    geometry: CellGeometry,
    max_codepoint: u32,
) -> DenseStore {
    let bytes_per_char = geometry.bytes_per_char();
    let mut data = vec![0u8; (max_codepoint as usize + 1) * bytes_per_char];
    let mut dropped = 0usize;

    for record in records {
        if record.codepoint > max_codepoint {
            dropped += 1;
            continue;
        }
        let offset = record.codepoint as usize * bytes_per_char;
        data[offset..offset + bytes_per_char].copy_from_slice(&record.bitmap);
    }

    if dropped > 0 {
        warn!("dropped {dropped} glyphs above U+{max_codepoint:04X} from dense store");
    }

    DenseStore {
        geometry,
        max_codepoint,
        data,
        dropped,
    }
}

/// Sorted-table store: parallel codepoint/width/bitmap tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseStore {
    pub geometry: CellGeometry,
    /// Strictly ascending, unique.
    pub codepoints: Vec<u16>,
    /// Index-aligned with `codepoints`.
    pub widths: Vec<u8>,
    /// `bytes_per_char` bytes per glyph, index-aligned with `codepoints`.
    pub bitmaps: Vec<u8>,
}

/// Build a sparse store.
///
/// Any codepoint beyond the BMP fails the build: the 16-bit codepoint
/// table cannot represent it, and truncating would corrupt the sorted
/// index. Records are sorted here; they are unique per codepoint by
/// construction.
pub fn build_sparse(
    records: &[GlyphRecord],
    geometry: CellGeometry,
) -> Result<SparseStore, BuildError> {
    if let Some(record) = records.iter().find(|r| r.codepoint > BMP_MAX) {
        return Err(BuildError::CoverageOverflow {
            codepoint: record.codepoint,
        });
    }

    let mut sorted: Vec<&GlyphRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.codepoint);

    let mut codepoints = Vec::with_capacity(sorted.len());
    let mut widths = Vec::with_capacity(sorted.len());
    let mut bitmaps = Vec::with_capacity(sorted.len() * geometry.bytes_per_char());
    for record in sorted {
        codepoints.push(record.codepoint as u16);
        widths.push(record.advance);
        bitmaps.extend_from_slice(&record.bitmap);
    }

    Ok(SparseStore {
        geometry,
        codepoints,
        widths,
        bitmaps,
    })
}

impl SparseStore {
    /// Number of glyphs in the store.
    pub fn len(&self) -> usize {
        self.codepoints.len()
    }

    /// Whether the store holds no glyphs at all.
    pub fn is_empty(&self) -> bool {
        self.codepoints.is_empty()
    }

    /// Serialize as the three contiguous tables the runtime engine
    /// reads: little-endian codepoints, widths, then bitmaps.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.codepoints.len() * 3 + self.bitmaps.len());
        for codepoint in &self.codepoints {
            out.extend_from_slice(&codepoint.to_le_bytes());
        }
        out.extend_from_slice(&self.widths);
        out.extend_from_slice(&self.bitmaps);
        out
    }
}
