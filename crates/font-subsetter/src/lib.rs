//! Font subsetting wrapper around hb-subset with builder pattern.
//!
//! This crate provides a high-level interface for subsetting fonts using HarfBuzz's
//! hb-subset library. It operates purely on byte slices with no file I/O dependencies.
//!
//! # Example
//!
//! ```no_run
//! use fontpack_font_subsetter::Subsetter;
//!
//! let font_data: &[u8] = &[];
//! let subset = Subsetter::web()
//!     .with_codepoints(0x0020..=0x024F)
//!     .subset(font_data);
//! ```

use anyhow::Result;
use hb_subset::{Blob, FontFace, SubsetInput, Tag};

/// Tables dropped when preparing a font for embedded rendering.
///
/// The downstream renderer does its own simplified text layout, so the
/// digital signature, OpenType layout tables, and legacy kerning only add
/// size without changing output.
pub const DROP_TABLES: &[&[u8; 4]] = &[b"DSIG", b"GPOS", b"GSUB", b"GDEF", b"kern"];

/// Tables carried over whole rather than re-subset.
///
/// OS/2 must stay complete: downstream metric lookups read it even for
/// glyphs outside the subset.
pub const NO_SUBSET_TABLES: &[&[u8; 4]] = &[b"OS/2"];

/// Font subsetter with builder pattern.
///
/// Configure the codepoints to keep and table handling, then call
/// [`Subsetter::subset`] on raw font bytes. Required composite glyphs and
/// `.notdef` are retained by HarfBuzz automatically.
#[derive(Default)]
pub struct Subsetter {
    codepoints: Vec<u32>,
    drop_render_tables: bool,
    desubroutinize: bool,
}

impl Subsetter {
    /// Creates a new subsetter with default settings.
    ///
    /// Default settings keep all tables and do not desubroutinize.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a subsetter pre-configured for web/embedded delivery.
    ///
    /// This preset:
    /// - Drops [`DROP_TABLES`] (signature, layout, legacy kerning)
    /// - Keeps [`NO_SUBSET_TABLES`] whole (OS/2 metrics)
    /// - Desubroutinizes CFF outlines for robustness
    pub fn web() -> Self {
        Self { codepoints: Vec::new(), drop_render_tables: true, desubroutinize: true }
    }

    /// Adds Unicode codepoints to include in the subset.
    pub fn with_codepoints(mut self, codepoints: impl IntoIterator<Item = u32>) -> Self {
        self.codepoints.extend(codepoints);
        self
    }

    /// Sets whether to drop the rendering-irrelevant tables.
    ///
    /// When `true`, [`DROP_TABLES`] are removed from the output.
    pub fn drop_render_tables(mut self, drop: bool) -> Self {
        self.drop_render_tables = drop;
        self
    }

    /// Sets whether to flatten CFF subroutines.
    ///
    /// Subroutine-compressed outlines trip up some WOFF2 consumers, so
    /// the web preset enables this.
    pub fn desubroutinize(mut self, flag: bool) -> Self {
        self.desubroutinize = flag;
        self
    }

    /// Subsets the font data and returns the result.
    ///
    /// # Arguments
    ///
    /// * `data` - The raw font file data
    ///
    /// # Returns
    ///
    /// The subset font data as a byte vector, or an error if the input is
    /// not a parseable font or subsetting fails.
    pub fn subset(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut input = SubsetInput::new()?;

        if self.desubroutinize {
            input.flags().remove_subroutines();
        }

        {
            let mut unicode_set = input.unicode_set();
            for cp in &self.codepoints {
                if let Some(c) = char::from_u32(*cp) {
                    unicode_set.insert(c);
                }
            }
        }

        if self.drop_render_tables {
            let mut drop_tables = input.drop_table_tag_set();
            for table in DROP_TABLES {
                drop_tables.insert(Tag::new(*table));
            }
        }

        {
            let mut no_subset_tables = input.no_subset_table_tag_set();
            for table in NO_SUBSET_TABLES {
                no_subset_tables.insert(Tag::new(*table));
            }
        }

        let font = FontFace::new(Blob::from_bytes(data)?)?;
        let subset_font = input.subset_font(&font)?;
        Ok(subset_font.underlying_blob().to_vec())
    }
}
