//! Module emitter: one generated module per family.
//!
//! For each catalog entry this subsets every available variant, compresses
//! it to WOFF2, and renders a TypeScript module with one base64 export per
//! variant. Module identifiers derive only from the family's module key so
//! manifest references stay valid across reruns.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use fontpack_font_subsetter::Subsetter;
use fontpack_font_woff2::convert_to_woff2;
use log::{info, warn};

use crate::{
    catalog::{FamilyDefinition, Variant},
    codepoints::CodepointSet,
    io::read_font,
};

/// The emitted artifact for one (family, variant) pair.
#[derive(Debug, Clone)]
pub struct BundledVariant {
    pub variant: Variant,
    /// Base64 text of the WOFF2 payload.
    pub encoded: String,
    /// WOFF2 payload size before encoding, for reporting only.
    pub payload_len: usize,
}

/// All bundled variants of one family, ready to render.
#[derive(Debug, Clone)]
pub struct FamilyModule {
    pub module_key: &'static str,
    pub register_as: &'static str,
    pub variants: Vec<BundledVariant>,
    /// Declared variants whose source file was absent, with the missing
    /// filename, so the operator can see exactly what the checkout lacks.
    pub skipped: Vec<(Variant, &'static str)>,
}

impl FamilyModule {
    /// Filename of the module this family emits.
    pub fn file_name(&self) -> String {
        format!("{}.ts", self.module_key)
    }
}

/// Resolve the source path of one variant.
fn source_path(fonts_dir: &Path, file_name: &str) -> PathBuf {
    fonts_dir.join(file_name)
}

/// Declared variants whose source file exists on disk, in declared order.
pub fn available_variants(family: &FamilyDefinition, fonts_dir: &Path) -> Vec<Variant> {
    family
        .variants
        .iter()
        .filter(|(_, file_name)| source_path(fonts_dir, file_name).exists())
        .map(|(variant, _)| *variant)
        .collect()
}

/// Subsets and bundles every available variant of a family.
///
/// Missing source files are skipped with a warning. A corrupt or
/// unsubsettable source file is an error; the caller decides whether that
/// aborts the run (the pipeline does).
pub fn bundle_family(
    family: &FamilyDefinition,
    fonts_dir: &Path,
    codepoints: &CodepointSet,
) -> Result<FamilyModule> {
    let mut variants = Vec::new();
    let mut skipped = Vec::new();

    for (variant, file_name) in family.variants {
        let path = source_path(fonts_dir, file_name);
        if !path.exists() {
            warn!("{}: {} not found, skipping {}", family.module_key, path.display(), variant.tag());
            skipped.push((*variant, *file_name));
            continue;
        }

        let data = read_font(&path)?;
        let subset = Subsetter::web()
            .with_codepoints(codepoints.iter())
            .subset(&data)
            .with_context(|| format!("Failed to subset {}", path.display()))?;
        let woff2 = convert_to_woff2(&subset)
            .with_context(|| format!("Failed to convert {} to WOFF2", path.display()))?;
        let encoded = STANDARD.encode(&woff2);

        info!(
            "{}/{}: {} -> {:.1} KB WOFF2, {} chars base64",
            family.module_key,
            variant.tag(),
            file_name,
            woff2.len() as f64 / 1024.0,
            encoded.len()
        );

        variants.push(BundledVariant { variant: *variant, payload_len: woff2.len(), encoded });
    }

    Ok(FamilyModule {
        module_key: family.module_key,
        register_as: family.register_as,
        variants,
        skipped,
    })
}

/// Renders the TypeScript module text for one family.
pub fn render_module(module: &FamilyModule) -> String {
    let mut lines = vec![
        format!("// Auto-generated by fontpack: {}. Do not edit.", module.register_as),
        "// prettier-ignore".to_string(),
    ];

    for bundled in &module.variants {
        lines.push(format!("export const {} = '{}';", bundled.variant.tag(), bundled.encoded));
    }

    lines.join("\n") + "\n"
}
