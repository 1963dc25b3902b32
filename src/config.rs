//! Build configuration structures and loading.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use fontpack_core::BMP_MAX;

use crate::coverage::COVERAGE_VERSION;
use crate::error::BuildError;

/// Top-level build configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub font: FontConfig,
    pub cell: CellConfig,
    pub coverage: CoverageConfig,
    pub output: OutputConfig,
}

/// Source font face and raster size.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Path to the TTF/OTF file to rasterize.
    pub path: PathBuf,
    /// Raster size in pixels.
    pub size_px: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::new(),
            size_px: 16.0,
        }
    }
}

/// Fixed cell dimensions.
///
/// A dimension left unset is derived from face metrics: height from the
/// ascent-to-descent span, width probed from representative full-width
/// glyphs so ideographs fit unclipped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CellConfig {
    pub width: Option<u8>,
    pub height: Option<u8>,
}

/// Which codepoints the store must cover.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverageConfig {
    /// Coverage spec format version (see `coverage::COVERAGE_VERSION`).
    pub version: u32,
    /// String literals whose characters are covered.
    pub strings: Vec<String>,
    /// Named Unicode blocks (see `coverage::block_range`).
    pub blocks: Vec<String>,
    /// Explicit inclusive `[first, last]` codepoint ranges.
    pub ranges: Vec<[u32; 2]>,
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            version: COVERAGE_VERSION,
            strings: Vec::new(),
            blocks: Vec::new(),
            ranges: Vec::new(),
        }
    }
}

/// Store layout to build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Codepoint-indexed slots: O(1) lookup, space proportional to the
    /// supported range. For dense, low-valued coverage (one CJK block).
    Dense,
    /// Sorted table: O(log n) lookup, space proportional to the glyph
    /// count. For scattered coverage (UI strings across scripts).
    #[default]
    Sparse,
}

/// Emitted artifact format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    /// Raw store bytes, geometry supplied out-of-band.
    #[default]
    Bin,
    /// A generated Rust module embedding the store (sparse only).
    Rust,
}

/// Artifact layout, naming, and destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub layout: Layout,
    /// Highest codepoint a dense store reserves a slot for.
    pub max_codepoint: u32,
    /// Base name for emitted artifacts.
    pub name: String,
    /// Directory artifacts are written into.
    pub dir: PathBuf,
    pub format: Format,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            max_codepoint: 0x9FFF,
            name: "font".to_owned(),
            dir: PathBuf::from("."),
            format: Format::default(),
        }
    }
}

impl Config {
    /// Load a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, BuildError> {
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|err| BuildError::Config(err.to_string()))
    }

    /// Validate the constraints serde cannot express.
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.font.path.as_os_str().is_empty() {
            return Err(BuildError::Config("font.path is required".to_owned()));
        }
        if self.font.size_px <= 0.0 {
            return Err(BuildError::Config(format!(
                "font.size_px must be positive, got {}",
                self.font.size_px
            )));
        }
        if self.output.name.is_empty() {
            return Err(BuildError::Config("output.name must not be empty".to_owned()));
        }
        if self.output.layout == Layout::Dense && self.output.format == Format::Rust {
            return Err(BuildError::Config(
                "dense stores emit bin artifacts only".to_owned(),
            ));
        }
        if self.output.layout == Layout::Dense && self.output.max_codepoint > BMP_MAX {
            return Err(BuildError::Config(format!(
                "output.max_codepoint {:#X} is beyond the BMP lookup range",
                self.output.max_codepoint
            )));
        }
        Ok(())
    }
}
