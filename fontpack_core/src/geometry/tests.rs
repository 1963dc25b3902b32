use super::CellGeometry;

#[test]
fn bytes_per_row_rounds_up_to_whole_bytes() {
    assert_eq!(CellGeometry::new(1, 1).bytes_per_row(), 1);
    assert_eq!(CellGeometry::new(8, 8).bytes_per_row(), 1);
    assert_eq!(CellGeometry::new(9, 8).bytes_per_row(), 2);
    assert_eq!(CellGeometry::new(14, 14).bytes_per_row(), 2);
    assert_eq!(CellGeometry::new(16, 18).bytes_per_row(), 2);
    assert_eq!(CellGeometry::new(17, 18).bytes_per_row(), 3);
    assert_eq!(CellGeometry::new(255, 255).bytes_per_row(), 32);
}

#[test]
fn bytes_per_char_is_rows_times_height() {
    assert_eq!(CellGeometry::new(8, 8).bytes_per_char(), 8);
    assert_eq!(CellGeometry::new(14, 14).bytes_per_char(), 28);
    assert_eq!(CellGeometry::new(16, 18).bytes_per_char(), 36);
}

#[test]
fn byte_index_walks_rows_then_columns() {
    let geom = CellGeometry::new(14, 14);
    assert_eq!(geom.byte_index(0, 0), 0);
    assert_eq!(geom.byte_index(7, 0), 0);
    assert_eq!(geom.byte_index(8, 0), 1);
    assert_eq!(geom.byte_index(13, 0), 1);
    assert_eq!(geom.byte_index(0, 1), 2);
    assert_eq!(geom.byte_index(9, 13), 27);
}

#[test]
fn bit_mask_is_msb_first() {
    assert_eq!(CellGeometry::bit_mask(0), 0x80);
    assert_eq!(CellGeometry::bit_mask(1), 0x40);
    assert_eq!(CellGeometry::bit_mask(7), 0x01);
    assert_eq!(CellGeometry::bit_mask(8), 0x80);
    assert_eq!(CellGeometry::bit_mask(15), 0x01);
}

#[test]
#[should_panic(expected = "at least 1x1")]
fn zero_width_is_rejected() {
    let _ = CellGeometry::new(0, 8);
}

#[test]
#[should_panic(expected = "at least 1x1")]
fn zero_height_is_rejected() {
    let _ = CellGeometry::new(8, 0);
}
