//! End-to-end build: config, rasterizer, records, store, artifact.

use std::path::PathBuf;

use log::info;

use fontpack_core::CellGeometry;

use crate::config::{Config, Format, Layout};
use crate::coverage;
use crate::emit;
use crate::error::BuildError;
use crate::raster::FaceRasterizer;
use crate::record;
use crate::store;

/// What a build produced, for operator reporting.
#[derive(Debug)]
pub struct BuildReport {
    /// Glyphs rendered into the store.
    pub rendered: usize,
    /// Coverage codepoints the face could not render.
    pub missed: usize,
    /// Records dropped above a dense store's address space.
    pub dropped: usize,
    /// Where the artifact was written.
    pub artifact: PathBuf,
}

/// Run a complete build.
pub fn run(config: &Config) -> Result<BuildReport, BuildError> {
    config.validate()?;

    let face = FaceRasterizer::load(&config.font.path, config.font.size_px)?;
    let geometry = resolve_cell(config, &face);
    info!(
        "cell {}x{}, {} bytes per glyph",
        geometry.width,
        geometry.height,
        geometry.bytes_per_char()
    );

    let covered = coverage::resolve(&config.coverage)?;
    info!("coverage: {} codepoints", covered.len());

    let (records, missed) = record::build_records(&face, &covered, geometry);
    let rendered = records.len();

    let out = &config.output;
    let (bytes, dropped, file_name) = match out.layout {
        Layout::Dense => {
            let built = store::build_dense(&records, geometry, out.max_codepoint);
            info!(
                "dense store: {} slots, {} bytes",
                out.max_codepoint + 1,
                built.data.len()
            );
            let file_name = emit::artifact_file_name(&out.name, config.font.size_px, geometry);
            (built.data, built.dropped, file_name)
        }
        Layout::Sparse => {
            let built = store::build_sparse(&records, geometry)?;
            let blob = built.serialize();
            info!("sparse store: {} glyphs, {} bytes", built.len(), blob.len());
            match out.format {
                Format::Bin => {
                    let file_name =
                        emit::artifact_file_name(&out.name, config.font.size_px, geometry);
                    (blob, 0, file_name)
                }
                Format::Rust => {
                    let module = emit::sparse_rust_module(&built, &out.name);
                    (module.into_bytes(), 0, emit::rust_file_name(&out.name))
                }
            }
        }
    };

    let artifact = emit::write_artifact(&out.dir, &file_name, &bytes)?;
    Ok(BuildReport {
        rendered,
        missed,
        dropped,
        artifact,
    })
}

/// Cell geometry from the config, with face metrics filling any gap.
fn resolve_cell(config: &Config, face: &FaceRasterizer) -> CellGeometry {
    match (config.cell.width, config.cell.height) {
        (Some(width), Some(height)) => CellGeometry::new(width, height),
        _ => {
            let auto = face.auto_cell();
            CellGeometry::new(
                config.cell.width.unwrap_or(auto.width),
                config.cell.height.unwrap_or(auto.height),
            )
        }
    }
}
