//! Core bitmap font store types and the runtime glyph lookup engine.
//!
//! This crate is the firmware-facing half of fontpack: `CellGeometry`
//! (the byte-packing law every component shares) and read-only lookup
//! over serialized font stores. It performs no allocation, no I/O, and
//! no mutation: a store is built offline, loaded into read-only memory,
//! and borrowed by the view types here for lookup. The crate builds
//! without `std` so embedded consumers can link it directly.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod geometry;
pub mod lookup;

pub use geometry::CellGeometry;
pub use lookup::{BMP_MAX, DenseFont, FontStore, SparseFont};
