use fontpack_core::CellGeometry;

use super::{build_record, build_records};
use crate::raster::GlyphRaster;
use crate::raster::mock::MockSource;

#[test]
fn unknown_codepoint_is_a_miss() {
    let source = MockSource::new(2);
    assert!(build_record(&source, 0x41, CellGeometry::new(8, 8)).is_none());
}

#[test]
fn ascii_advance_is_natural_plus_padding_capped_at_cell_width() {
    let geom = CellGeometry::new(14, 14);
    let source = MockSource::new(2)
        .solid(0x41, 6, 8, 10, 6)
        .solid(0x57, 13, 8, 10, 13);

    let narrow = build_record(&source, 0x41, geom).expect("glyph");
    assert_eq!(narrow.advance, 8);

    let wide = build_record(&source, 0x57, geom).expect("glyph");
    assert_eq!(wide.advance, 14, "advance is capped at the cell width");
}

#[test]
fn full_width_codepoints_always_advance_one_cell() {
    let geom = CellGeometry::new(14, 14);
    let source = MockSource::new(2)
        .solid(0x4E2D, 9, 11, 11, 9)
        .solid(0x3000, 4, 4, 8, 4)
        .solid(0x2FFF, 9, 11, 11, 9);

    assert_eq!(build_record(&source, 0x4E2D, geom).expect("glyph").advance, 14);
    assert_eq!(
        build_record(&source, 0x3000, geom).expect("glyph").advance,
        14,
        "the boundary itself is full-width"
    );
    assert_eq!(
        build_record(&source, 0x2FFF, geom).expect("glyph").advance,
        11,
        "below the boundary the natural advance applies"
    );
}

#[test]
fn glyphs_share_one_baseline() {
    // Cell 8x8, descent 2: the baseline is row 6. A 4x4 block whose top
    // is 4 px above the baseline fills rows 2..6.
    let geom = CellGeometry::new(8, 8);
    let source = MockSource::new(2).solid(0x41, 4, 4, 4, 4);

    let record = build_record(&source, 0x41, geom).expect("glyph");
    assert_eq!(
        record.bitmap,
        vec![0x00, 0x00, 0x78, 0x78, 0x78, 0x78, 0x00, 0x00]
    );
}

#[test]
fn narrow_glyphs_get_a_one_pixel_left_pad() {
    let geom = CellGeometry::new(8, 8);
    let source = MockSource::new(2).solid(0x41, 4, 1, 6, 4);

    let record = build_record(&source, 0x41, geom).expect("glyph");
    // Top row, columns 1..5: 0b0111_1000.
    assert_eq!(record.bitmap[0], 0x78);
}

#[test]
fn wide_glyphs_sit_flush_left() {
    let geom = CellGeometry::new(8, 8);
    let source = MockSource::new(2).solid(0x41, 7, 1, 6, 7);

    let record = build_record(&source, 0x41, geom).expect("glyph");
    // Columns 0..7: no pad, nothing clipped on the right.
    assert_eq!(record.bitmap[0], 0xFE);
}

#[test]
fn glyphs_taller_than_the_cell_are_pinned_to_the_top() {
    let geom = CellGeometry::new(8, 8);
    let source = MockSource::new(2).solid(0x41, 4, 12, 10, 4);

    let record = build_record(&source, 0x41, geom).expect("glyph");
    // Rows overflow the cell bottom but the top rows survive.
    assert!(record.bitmap.iter().all(|&row| row == 0x78));
}

#[test]
fn coverage_below_the_threshold_is_not_inked() {
    let geom = CellGeometry::new(8, 8);
    let source = MockSource::new(2).with_raster(
        0x41,
        GlyphRaster {
            width: 2,
            height: 1,
            top: 6,
            advance: 2,
            coverage: vec![63, 64],
        },
    );

    let record = build_record(&source, 0x41, geom).expect("glyph");
    // Only the second sample reaches 25% of full scale: column 2 after
    // the left pad.
    assert_eq!(record.bitmap[0], 0x20);
}

#[test]
fn batch_skips_misses_and_keeps_going() {
    let geom = CellGeometry::new(8, 8);
    let source = MockSource::new(2)
        .solid(0x41, 4, 4, 4, 4)
        .solid(0x43, 4, 4, 4, 4);

    let (records, missed) = build_records(&source, &[0x41, 0x42, 0x43], geom);
    assert_eq!(missed, 1);
    let codepoints: Vec<u32> = records.iter().map(|r| r.codepoint).collect();
    assert_eq!(codepoints, [0x41, 0x43]);
}
