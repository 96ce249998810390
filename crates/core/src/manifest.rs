//! Manifest builder: the lookup table from font names to bundled modules.
//!
//! The manifest is the single source of truth the renderer consults when a
//! document asks for a family by name, including legacy Office names that
//! resolve to their open substitutes. Keys are lowercased so the renderer
//! can do case-insensitive resolution with a plain map lookup.

use indexmap::IndexMap;

use crate::catalog::{FamilyDefinition, Variant};

/// A catalog entry together with its on-disk variant availability.
#[derive(Debug, Clone)]
pub struct FamilyAvailability<'a> {
    pub family: &'a FamilyDefinition,
    /// Variants whose source file exists, in declared order.
    pub variants: Vec<Variant>,
}

/// One persisted manifest record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Relative module reference, without extension.
    pub module: String,
    pub register_as: String,
    pub substitute_for: Option<String>,
    /// Variant tags exported by the module, in declared order.
    pub variants: Vec<Variant>,
}

fn module_reference(family: &FamilyDefinition) -> String {
    format!("./{}", family.module_key)
}

/// Builds the manifest mapping in two ordered passes.
///
/// `families` must already be in catalog-sorted order (see
/// [`crate::catalog::sorted_families`]); if two families claim the same
/// key, the later one in that order wins. Families with no available
/// variants contribute nothing.
///
/// Pass 1 emits primary entries keyed by lowercase `register_as`. Pass 2
/// emits alias entries keyed by lowercase `substitute_for`, presenting the
/// legacy name as the registered identity so the renderer treats a lookup
/// of "calibri" exactly like a lookup of "carlito". A family whose
/// substitute name equals its registered name (case-insensitively) is
/// already covered by pass 1 and gets no alias entry.
pub fn build_manifest(families: &[FamilyAvailability]) -> IndexMap<String, ManifestEntry> {
    let mut manifest = IndexMap::new();

    for entry in families {
        if entry.variants.is_empty() {
            continue;
        }
        manifest.insert(
            entry.family.register_as.to_lowercase(),
            ManifestEntry {
                module: module_reference(entry.family),
                register_as: entry.family.register_as.to_string(),
                substitute_for: entry.family.substitute_for.map(str::to_string),
                variants: entry.variants.clone(),
            },
        );
    }

    for entry in families {
        let Some(substitute_for) = entry.family.substitute_for else {
            continue;
        };
        if entry.variants.is_empty() {
            continue;
        }
        if substitute_for.to_lowercase() == entry.family.register_as.to_lowercase() {
            continue;
        }
        manifest.insert(
            substitute_for.to_lowercase(),
            ManifestEntry {
                module: module_reference(entry.family),
                register_as: substitute_for.to_string(),
                substitute_for: Some(substitute_for.to_string()),
                variants: entry.variants.clone(),
            },
        );
    }

    manifest
}

/// Renders the manifest mapping as a TypeScript module.
pub fn render_manifest(manifest: &IndexMap<String, ManifestEntry>) -> String {
    let mut lines = vec![
        "// Auto-generated by fontpack. Do not edit.".to_string(),
        String::new(),
        "export interface BundledFontEntry {".to_string(),
        "  /** Module path relative to this directory (without extension). */".to_string(),
        "  module: string;".to_string(),
        "  /** Font family name to register under. */".to_string(),
        "  registerAs: string;".to_string(),
        "  /** If this is a substitute for an Office font, the original name. */".to_string(),
        "  substituteFor?: string;".to_string(),
        "  /** Available variant names (keys exported from the module). */".to_string(),
        "  variants: string[];".to_string(),
        "}".to_string(),
        String::new(),
        "/** All bundled font families, keyed by lowercase family name. */".to_string(),
        "export const BUNDLED_FONTS: Record<string, BundledFontEntry> = {".to_string(),
    ];

    for (key, entry) in manifest {
        let variants = entry
            .variants
            .iter()
            .map(|v| format!("\"{}\"", v.tag()))
            .collect::<Vec<_>>()
            .join(", ");

        lines.push(format!("  '{key}': {{"));
        lines.push(format!("    module: '{}',", entry.module));
        lines.push(format!("    registerAs: '{}',", entry.register_as));
        if let Some(substitute_for) = &entry.substitute_for {
            lines.push(format!("    substituteFor: '{substitute_for}',"));
        }
        lines.push(format!("    variants: [{variants}],"));
        lines.push("  },".to_string());
    }

    lines.push("};".to_string());
    lines.push(String::new());

    lines.join("\n") + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Variant::{Bold, BoldItalic, Italic, Regular};

    const CARLITO: FamilyDefinition = FamilyDefinition {
        module_key: "carlito",
        register_as: "Carlito",
        substitute_for: Some("Calibri"),
        variants: &[(Regular, "Carlito-Regular.ttf"), (Bold, "Carlito-Bold.ttf")],
    };

    #[test]
    fn test_primary_and_alias_entries() {
        let families =
            vec![FamilyAvailability { family: &CARLITO, variants: vec![Regular, Bold] }];

        let manifest = build_manifest(&families);
        assert_eq!(manifest.len(), 2);

        let primary = &manifest["carlito"];
        assert_eq!(primary.module, "./carlito");
        assert_eq!(primary.register_as, "Carlito");
        assert_eq!(primary.substitute_for.as_deref(), Some("Calibri"));
        assert_eq!(primary.variants, vec![Regular, Bold]);

        let alias = &manifest["calibri"];
        assert_eq!(alias.module, "./carlito");
        assert_eq!(alias.register_as, "Calibri");
        assert_eq!(alias.substitute_for.as_deref(), Some("Calibri"));
        assert_eq!(alias.variants, vec![Regular, Bold]);
    }

    #[test]
    fn test_self_substitute_emits_single_entry() {
        let family = FamilyDefinition {
            module_key: "calibri-light",
            register_as: "Calibri Light",
            substitute_for: Some("Calibri Light"),
            variants: &[(Regular, "Carlito-Regular.ttf")],
        };
        let families = vec![FamilyAvailability { family: &family, variants: vec![Regular] }];

        let manifest = build_manifest(&families);
        assert_eq!(manifest.len(), 1);
        assert!(manifest.contains_key("calibri light"));
    }

    #[test]
    fn test_zero_variant_family_excluded() {
        let families = vec![FamilyAvailability { family: &CARLITO, variants: Vec::new() }];

        let manifest = build_manifest(&families);
        assert!(manifest.is_empty());
    }

    #[test]
    fn test_partial_availability_keeps_declared_order() {
        let family = FamilyDefinition {
            module_key: "sample",
            register_as: "Sample",
            substitute_for: None,
            variants: &[
                (Regular, "a.ttf"),
                (Bold, "b.ttf"),
                (Italic, "c.ttf"),
                (BoldItalic, "d.ttf"),
            ],
        };
        // Bold source absent: variants list holds the remaining three tags.
        let families = vec![FamilyAvailability {
            family: &family,
            variants: vec![Regular, Italic, BoldItalic],
        }];

        let manifest = build_manifest(&families);
        assert_eq!(manifest["sample"].variants, vec![Regular, Italic, BoldItalic]);
    }

    #[test]
    fn test_colliding_substitute_last_wins() {
        let first = FamilyDefinition {
            module_key: "aaa-sample",
            register_as: "Aaa Sample",
            substitute_for: Some("Legacy Name"),
            variants: &[(Regular, "a.ttf")],
        };
        let second = FamilyDefinition {
            module_key: "zzz-sample",
            register_as: "Zzz Sample",
            substitute_for: Some("Legacy Name"),
            variants: &[(Regular, "z.ttf")],
        };
        // Catalog-sorted order: aaa-sample first, zzz-sample last.
        let families = vec![
            FamilyAvailability { family: &first, variants: vec![Regular] },
            FamilyAvailability { family: &second, variants: vec![Regular] },
        ];

        let manifest = build_manifest(&families);
        assert_eq!(manifest["legacy name"].module, "./zzz-sample");
    }

    #[test]
    fn test_alias_skipped_when_family_empty() {
        let present = FamilyAvailability { family: &CARLITO, variants: vec![Regular] };
        let absent = FamilyAvailability { family: &CARLITO, variants: Vec::new() };

        assert_eq!(build_manifest(&[present]).len(), 2);
        assert!(build_manifest(&[absent]).is_empty());
    }

    #[test]
    fn test_render_manifest_shape() {
        let families =
            vec![FamilyAvailability { family: &CARLITO, variants: vec![Regular, Bold] }];
        let manifest = build_manifest(&families);
        let text = render_manifest(&manifest);

        assert!(text.contains("export interface BundledFontEntry {"));
        assert!(text.contains("export const BUNDLED_FONTS: Record<string, BundledFontEntry> = {"));
        assert!(text.contains("  'carlito': {"));
        assert!(text.contains("    module: './carlito',"));
        assert!(text.contains("    substituteFor: 'Calibri',"));
        assert!(text.contains("    variants: [\"regular\", \"bold\"],"));
        assert!(text.contains("  'calibri': {"));
        assert!(text.contains("    registerAs: 'Calibri',"));
        assert!(text.ends_with("};\n\n"));
    }

    #[test]
    fn test_render_manifest_omits_substitute_when_absent() {
        let family = FamilyDefinition {
            module_key: "roboto",
            register_as: "Roboto",
            substitute_for: None,
            variants: &[(Regular, "Roboto-Regular.ttf")],
        };
        let families = vec![FamilyAvailability { family: &family, variants: vec![Regular] }];
        let text = render_manifest(&build_manifest(&families));

        // The interface still declares the field; no entry sets it.
        assert!(!text.contains("substituteFor: '"));
    }
}
