//! Fontpack core - the offline font bundling pipeline.
//!
//! Converts a fixed catalog of font families into base64-embedded WOFF2
//! modules plus a name-lookup manifest for the document renderer.

pub mod catalog;
pub mod codepoints;
pub mod emitter;
pub mod io;
pub mod manifest;
pub mod pipeline;

pub use catalog::{FAMILIES, FamilyDefinition, Variant, sorted_families};
pub use codepoints::{BUNDLED_RANGES, CodepointSet};
pub use emitter::{BundledVariant, FamilyModule, bundle_family, render_module};
pub use manifest::{FamilyAvailability, ManifestEntry, build_manifest, render_manifest};
pub use pipeline::{BundleSummary, MANIFEST_FILE_NAME, bundle_all, clean};
pub use fontpack_font_subsetter::Subsetter;
pub use fontpack_font_woff2::convert_to_woff2;
