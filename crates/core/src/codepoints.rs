//! Codepoint policy: which characters survive subsetting.
//!
//! The bundled fonts cover Latin text plus the symbol blocks the renderer's
//! sample documents actually use. Keeping this a flat range list makes the
//! "what glyphs we ship" decision auditable without touching the subsetting
//! mechanism.

use std::collections::BTreeSet;

/// Unicode ranges retained in every bundled font, inclusive on both ends.
pub const BUNDLED_RANGES: &[(u32, u32)] = &[
    (0x0020, 0x024F), // Basic Latin through Latin Extended-B
    (0x2000, 0x206F), // General Punctuation
    (0x20A0, 0x20CF), // Currency Symbols
    (0x2100, 0x214F), // Letterlike Symbols
    (0x2190, 0x21FF), // Arrows
    (0x2200, 0x22FF), // Mathematical Operators
    (0x2300, 0x23FF), // Miscellaneous Technical
    (0x25A0, 0x25FF), // Geometric Shapes
    (0x2600, 0x26FF), // Miscellaneous Symbols
    (0xFB00, 0xFB06), // Alphabetic Presentation Forms (ligatures)
    (0xFEFF, 0xFEFF), // BOM / ZWNBSP
    (0xFFFC, 0xFFFD), // Replacement characters
];

/// An immutable set of Unicode scalar values, built once at startup.
#[derive(Debug, Clone)]
pub struct CodepointSet {
    codepoints: BTreeSet<u32>,
}

impl CodepointSet {
    /// Builds the union of a list of inclusive ranges.
    ///
    /// Overlapping ranges are harmless since the result is a set. Values
    /// that are not valid Unicode scalars (surrogates) are excluded.
    pub fn from_ranges(ranges: &[(u32, u32)]) -> Self {
        let codepoints = ranges
            .iter()
            .flat_map(|&(start, end)| start..=end)
            .filter(|&cp| char::from_u32(cp).is_some())
            .collect();
        Self { codepoints }
    }

    /// The standard policy set covering [`BUNDLED_RANGES`].
    pub fn bundled() -> Self {
        Self::from_ranges(BUNDLED_RANGES)
    }

    pub fn contains(&self, codepoint: u32) -> bool {
        self.codepoints.contains(&codepoint)
    }

    pub fn len(&self) -> usize {
        self.codepoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codepoints.is_empty()
    }

    /// Iterates codepoints in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.codepoints.iter().copied()
    }
}
