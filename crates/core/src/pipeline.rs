//! Offline bundling pipeline: catalog in, modules plus manifest out.
//!
//! Every run regenerates all outputs from the source fonts and catalog
//! data. Determinism comes from always iterating the catalog in sorted
//! order, not from any incremental state.

use std::{fs::remove_dir_all, path::Path, time::Instant};

use anyhow::Result;
use rayon::prelude::*;

use crate::{
    catalog::sorted_families,
    codepoints::CodepointSet,
    emitter::{FamilyModule, available_variants, bundle_family, render_module},
    io::{ensure_dir, write_output},
    manifest::{FamilyAvailability, build_manifest, render_manifest},
};

/// Filename of the emitted manifest module.
pub const MANIFEST_FILE_NAME: &str = "manifest.ts";

/// What a bundling run produced, threaded back to the caller instead of
/// accumulated in ambient state.
#[derive(Debug, Default, Clone, Copy)]
pub struct BundleSummary {
    /// Family modules written.
    pub modules: usize,
    /// Total bytes of generated module and manifest text.
    pub total_bytes: u64,
    /// Declared variants skipped because their source file was absent.
    pub skipped_variants: usize,
}

/// Bundles every catalog family and writes the manifest.
///
/// Missing source files skip their variant; families with nothing left
/// emit no module and no manifest entries. A font that fails to subset or
/// an output that fails to write aborts the whole run.
pub fn bundle_all(fonts_dir: &Path, output_dir: &Path) -> Result<BundleSummary> {
    ensure_dir(output_dir)?;

    let codepoints = CodepointSet::bundled();
    let families = sorted_families();
    let start = Instant::now();

    println!("Bundling {} families from {}", families.len(), fonts_dir.display());

    // Families are independent, so subsetting runs in parallel. Everything
    // order-sensitive (module writes, the manifest passes) stays sequential
    // over the sorted catalog below.
    let modules: Vec<FamilyModule> = families
        .par_iter()
        .map(|&family| bundle_family(family, fonts_dir, &codepoints))
        .collect::<Result<Vec<_>>>()?;

    let mut summary = BundleSummary::default();

    for module in &modules {
        for (variant, file_name) in &module.skipped {
            println!(
                "  {}: {} not found, skipped {}",
                module.module_key,
                file_name,
                variant.tag()
            );
        }
        summary.skipped_variants += module.skipped.len();

        if module.variants.is_empty() {
            println!("  {}: no source fonts found, skipping module", module.module_key);
            continue;
        }

        let text = render_module(module);
        write_output(output_dir.join(module.file_name()), &text)?;
        summary.total_bytes += text.len() as u64;
        summary.modules += 1;
        println!(
            "  {} -> {} ({:.1} KB)",
            module.register_as,
            module.file_name(),
            text.len() as f64 / 1024.0
        );
    }

    let availability: Vec<FamilyAvailability> = families
        .iter()
        .map(|&family| FamilyAvailability {
            family,
            variants: available_variants(family, fonts_dir),
        })
        .collect();
    let manifest_text = render_manifest(&build_manifest(&availability));
    write_output(output_dir.join(MANIFEST_FILE_NAME), &manifest_text)?;
    summary.total_bytes += manifest_text.len() as u64;

    println!("\nBundling complete in {:.2}s", start.elapsed().as_secs_f64());
    println!("  Modules: {}", summary.modules);
    println!("  Total size: {:.1} MB", summary.total_bytes as f64 / 1024.0 / 1024.0);
    if summary.skipped_variants > 0 {
        println!("  Skipped variants: {}", summary.skipped_variants);
    }
    println!("  Output: {}", output_dir.display());

    Ok(summary)
}

/// Removes the generated output directory.
pub fn clean(output_dir: &Path) -> Result<()> {
    if output_dir.exists() {
        remove_dir_all(output_dir)?;
        println!("Removed {}", output_dir.display());
    } else {
        println!("Skipped {} (not found)", output_dir.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs::read_to_string;

    use super::*;
    use crate::catalog::FAMILIES;

    fn temp_output(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("fontpack-{name}-{}", std::process::id()))
    }

    #[test]
    fn test_bundle_all_without_sources() {
        let output_dir = temp_output("empty");
        let summary = bundle_all(Path::new("/nonexistent"), &output_dir).unwrap();

        // Every declared variant is absent: no modules, empty manifest.
        let declared: usize = FAMILIES.iter().map(|f| f.variants.len()).sum();
        assert_eq!(summary.modules, 0);
        assert_eq!(summary.skipped_variants, declared);

        let manifest = read_to_string(output_dir.join(MANIFEST_FILE_NAME)).unwrap();
        assert!(manifest.contains("export const BUNDLED_FONTS"));
        assert!(!manifest.contains("'carlito'"));

        remove_dir_all(&output_dir).ok();
    }

    #[test]
    fn test_bundle_all_is_idempotent() {
        let output_dir = temp_output("idempotent");
        bundle_all(Path::new("/nonexistent"), &output_dir).unwrap();
        let first = read_to_string(output_dir.join(MANIFEST_FILE_NAME)).unwrap();
        bundle_all(Path::new("/nonexistent"), &output_dir).unwrap();
        let second = read_to_string(output_dir.join(MANIFEST_FILE_NAME)).unwrap();

        assert_eq!(first, second);
        remove_dir_all(&output_dir).ok();
    }

    #[test]
    fn test_clean_missing_dir_is_ok() {
        clean(Path::new("/nonexistent/fontpack-output")).unwrap();
    }
}
