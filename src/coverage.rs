//! Coverage resolution: which codepoints a build must render.
//!
//! A coverage spec is explicit and versioned (UI string literals, named
//! Unicode blocks, raw ranges) and resolves to one sorted, deduplicated
//! codepoint set through a pure function, so the set a build covers is
//! reproducible from the config alone.

use std::collections::BTreeSet;

use crate::config::CoverageConfig;
use crate::error::BuildError;

/// Coverage spec format understood by this build of the tool.
pub const COVERAGE_VERSION: u32 = 1;

/// Lowest codepoint a store may cover; controls never get glyphs.
const MIN_CODEPOINT: u32 = 0x20;

/// Highest codepoint Unicode assigns.
const MAX_CODEPOINT: u32 = 0x10_FFFF;

/// Named blocks accepted in `coverage.blocks`.
///
/// The CJK entries are the ranges UI font stores are typically built
/// for; `basic-latin` starts at U+0020 because controls are never
/// covered.
const BLOCKS: &[(&str, u32, u32)] = &[
    ("basic-latin", 0x0020, 0x007E),
    ("latin-1", 0x00A0, 0x00FF),
    ("cjk-symbols", 0x3000, 0x303F),
    ("hiragana", 0x3040, 0x309F),
    ("katakana", 0x30A0, 0x30FF),
    ("cjk-unified", 0x4E00, 0x9FFF),
    ("halfwidth-fullwidth", 0xFF00, 0xFFEF),
];

/// Inclusive codepoint range for a named block.
pub fn block_range(name: &str) -> Option<(u32, u32)> {
    BLOCKS
        .iter()
        .find(|(block, _, _)| *block == name)
        .map(|&(_, first, last)| (first, last))
}

/// Unique codepoints of every character in `strings`, ascending.
pub fn codepoints_in_strings(strings: &[String]) -> BTreeSet<u32> {
    strings
        .iter()
        .flat_map(|s| s.chars())
        .map(u32::from)
        .collect()
}

/// Resolve a coverage spec to its sorted, deduplicated codepoint set.
///
/// Codepoints below U+0020 are dropped. An unknown block name or an
/// out-of-order range fails the build rather than silently shrinking
/// coverage.
pub fn resolve(spec: &CoverageConfig) -> Result<Vec<u32>, BuildError> {
    if spec.version != COVERAGE_VERSION {
        return Err(BuildError::Config(format!(
            "unsupported coverage version {} (expected {COVERAGE_VERSION})",
            spec.version
        )));
    }

    let mut set = codepoints_in_strings(&spec.strings);
    for name in &spec.blocks {
        let (first, last) = block_range(name)
            .ok_or_else(|| BuildError::Config(format!("unknown coverage block {name:?}")))?;
        set.extend(first..=last);
    }
    for &[first, last] in &spec.ranges {
        if first > last {
            return Err(BuildError::Config(format!(
                "coverage range {first:#X}..={last:#X} is out of order"
            )));
        }
        if last > MAX_CODEPOINT {
            return Err(BuildError::Config(format!(
                "coverage range end {last:#X} is beyond Unicode"
            )));
        }
        set.extend(first..=last);
    }

    Ok(set.into_iter().filter(|&cp| cp >= MIN_CODEPOINT).collect())
}
