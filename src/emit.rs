//! Artifact emission: raw `.bin` blobs and generated Rust source.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use fontpack_core::CellGeometry;

use crate::error::BuildError;
use crate::store::SparseStore;

/// Hex values per line in generated tables.
const VALUES_PER_LINE: usize = 16;

/// File name a store blob ships under:
/// `<name>_<size>_<width>x<height>.bin`.
///
/// Geometry travels out-of-band, so the consumer reads it back from the
/// name.
pub fn artifact_file_name(name: &str, size_px: f32, geometry: CellGeometry) -> String {
    format!(
        "{name}_{}_{}x{}.bin",
        size_px as u32, geometry.width, geometry.height
    )
}

/// File name for a generated Rust module.
pub fn rust_file_name(name: &str) -> String {
    format!("{name}.rs")
}

/// Write an artifact, creating the output directory if needed.
pub fn write_artifact(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf, BuildError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    std::fs::write(&path, bytes)?;
    Ok(path)
}

/// Generate a Rust module embedding a sparse store.
///
/// The module carries the serialized store as one static table plus the
/// out-of-band constants, and a `font()` accessor that wraps them in a
/// `fontpack_core::SparseFont`, so firmware includes the file and looks
/// glyphs up directly from flash.
pub fn sparse_rust_module(store: &SparseStore, name: &str) -> String {
    let geom = store.geometry;
    let blob = store.serialize();

    let mut out = String::new();
    let _ = writeln!(
        out,
        "// Generated by fontpack: {name}, {} glyphs, {}x{} cell. Do not edit.",
        store.len(),
        geom.width,
        geom.height
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "use fontpack_core::{{CellGeometry, SparseFont}};");
    let _ = writeln!(out);
    let _ = writeln!(out, "pub const WIDTH: u8 = {};", geom.width);
    let _ = writeln!(out, "pub const HEIGHT: u8 = {};", geom.height);
    let _ = writeln!(out, "pub const BYTES_PER_CHAR: usize = {};", geom.bytes_per_char());
    let _ = writeln!(out, "pub const GLYPH_COUNT: usize = {};", store.len());
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "/// Serialized store: `GLYPH_COUNT` little-endian codepoints, then"
    );
    let _ = writeln!(out, "/// advance widths, then packed bitmaps.");
    let _ = writeln!(out, "static STORE: [u8; {}] = [", blob.len());

    let widths_at = store.len() * 2;
    let bitmaps_at = widths_at + store.len();

    let _ = writeln!(out, "    // codepoints");
    push_hex_rows(&mut out, &blob[..widths_at]);
    let _ = writeln!(out, "    // advance widths");
    push_hex_rows(&mut out, &blob[widths_at..bitmaps_at]);
    let _ = writeln!(out, "    // bitmaps");
    let bytes_per_char = geom.bytes_per_char();
    for (i, codepoint) in store.codepoints.iter().enumerate() {
        match printable(*codepoint) {
            Some(ch) => {
                let _ = writeln!(out, "    // U+{codepoint:04X} ({ch})");
            }
            None => {
                let _ = writeln!(out, "    // U+{codepoint:04X}");
            }
        }
        let at = bitmaps_at + i * bytes_per_char;
        push_hex_rows(&mut out, &blob[at..at + bytes_per_char]);
    }
    let _ = writeln!(out, "];");
    let _ = writeln!(out);
    let _ = writeln!(out, "/// The embedded font, ready for lookup.");
    let _ = writeln!(out, "pub fn font() -> SparseFont<'static> {{");
    let _ = writeln!(
        out,
        "    SparseFont::new(CellGeometry::new(WIDTH, HEIGHT), GLYPH_COUNT, &STORE)"
    );
    let _ = writeln!(out, "        .expect(\"generated store is well-formed\")");
    let _ = writeln!(out, "}}");
    out
}

fn push_hex_rows(out: &mut String, bytes: &[u8]) {
    for chunk in bytes.chunks(VALUES_PER_LINE) {
        out.push_str("    ");
        for (i, byte) in chunk.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{byte:#04X},");
        }
        out.push('\n');
    }
}

/// The character for a codepoint when it is safe to put in a comment.
fn printable(codepoint: u16) -> Option<char> {
    char::from_u32(u32::from(codepoint)).filter(|ch| !ch.is_control() && !ch.is_whitespace())
}
