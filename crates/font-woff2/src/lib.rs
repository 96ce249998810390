//! WOFF2 conversion with subset sanity checks.
//!
//! This crate re-encodes a subset TTF/OTF into the WOFF2 container after
//! verifying the subset still contains usable glyphs. An over-aggressive
//! subset that keeps only `.notdef` would otherwise compress and ship fine
//! while rendering nothing.
//!
//! # Example
//!
//! ```no_run
//! use fontpack_font_woff2::convert_to_woff2;
//!
//! let ttf_data: &[u8] = &[];
//! let woff2_data = convert_to_woff2(ttf_data).unwrap();
//! ```

use anyhow::{Context, Result, bail};
use read_fonts::{FontRef, TableProvider};

/// Brotli quality for WOFF2 compression. This is an offline batch tool,
/// so always pay for maximum compression.
const BROTLI_QUALITY: usize = 11;

/// Converts subset font data to the WOFF2 container format.
///
/// Validates that the data parses as a font and that subsetting left at
/// least one glyph beyond `.notdef` before compressing.
///
/// # Arguments
///
/// * `data` - Raw TTF/OTF font data (typically a subset)
///
/// # Returns
///
/// WOFF2-encoded font data, or an error if the input is not a parseable
/// font, contains no usable glyphs, or compression fails.
pub fn convert_to_woff2(data: &[u8]) -> Result<Vec<u8>> {
    let num_glyphs = usable_glyph_count(data)?;
    if num_glyphs <= 1 {
        bail!("subset font has no usable glyphs ({num_glyphs} total)");
    }

    woff::version2::compress(data, String::new(), BROTLI_QUALITY, true)
        .context("WOFF2 compression failed")
}

/// Returns the total glyph count of the font, `.notdef` included.
pub fn usable_glyph_count(data: &[u8]) -> Result<u16> {
    let font = FontRef::new(data).context("Failed to parse font")?;
    let maxp = font.maxp().context("Failed to read maxp table")?;
    Ok(maxp.num_glyphs())
}

#[cfg(test)]
mod tests {
    use fontpack_font_subsetter::Subsetter;

    use super::*;

    /// Codepoints the fixture itself maps, read from its cmap.
    fn mapped_codepoints(data: &[u8]) -> Vec<u32> {
        let font = FontRef::new(data).unwrap();
        let cmap = font.cmap().unwrap();
        for record in cmap.encoding_records() {
            if let Ok(subtable) = record.subtable(cmap.offset_data()) {
                return subtable.iter().map(|(codepoint, _)| codepoint).collect();
            }
        }
        Vec::new()
    }

    #[test]
    fn test_rejects_non_font_data() {
        let result = convert_to_woff2(b"not a font");
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_empty_data() {
        let result = convert_to_woff2(&[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_usable_glyph_count_real_font() {
        let data = font_test_data::VAZIRMATN_VAR;
        assert!(usable_glyph_count(data).unwrap() > 1);
    }

    #[test]
    fn test_convert_real_font() {
        let data = font_test_data::VAZIRMATN_VAR;
        let woff2 = convert_to_woff2(data).unwrap();
        assert_eq!(&woff2[..4], b"wOF2");
    }

    #[test]
    fn test_subset_then_convert() {
        let data = font_test_data::VAZIRMATN_VAR;
        let codepoints = mapped_codepoints(data);
        assert!(!codepoints.is_empty());

        let subset = Subsetter::web().with_codepoints(codepoints).subset(data).unwrap();
        assert!(usable_glyph_count(&subset).unwrap() > 1);

        let woff2 = convert_to_woff2(&subset).unwrap();
        assert_eq!(&woff2[..4], b"wOF2");
    }

    #[test]
    fn test_notdef_only_subset_rejected() {
        let data = font_test_data::VAZIRMATN_VAR;
        // No hiragana in the fixture: only .notdef survives the subset.
        let subset = Subsetter::web().with_codepoints([0x3042]).subset(data).unwrap();
        assert_eq!(usable_glyph_count(&subset).unwrap(), 1);

        let err = convert_to_woff2(&subset).unwrap_err();
        assert!(err.to_string().contains("no usable glyphs"), "unexpected error: {err}");
    }
}
