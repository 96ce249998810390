//! Static registry of font families to bundle.
//!
//! Each entry names the family as the renderer should register it, the
//! legacy Office font it substitutes for (if any), and the source font
//! file per style variant. The catalog is hand-maintained; files referenced
//! here may legitimately be absent from a checkout, in which case the
//! pipeline skips them per variant.

/// One style face of a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

impl Variant {
    /// The tag used for module exports and manifest variant lists.
    pub fn tag(&self) -> &'static str {
        match self {
            Variant::Regular => "regular",
            Variant::Bold => "bold",
            Variant::Italic => "italic",
            Variant::BoldItalic => "boldItalic",
        }
    }
}

/// One font family to bundle.
#[derive(Debug, Clone, Copy)]
pub struct FamilyDefinition {
    /// Unique lowercase identifier; doubles as the module filename stem.
    pub module_key: &'static str,
    /// Family name the renderer registers this font under.
    pub register_as: &'static str,
    /// Legacy/proprietary font this family is a metric-compatible
    /// substitute for, when it is one.
    pub substitute_for: Option<&'static str>,
    /// Source font file per variant, in declared order.
    pub variants: &'static [(Variant, &'static str)],
}

use Variant::{Bold, BoldItalic, Italic, Regular};

/// All bundled font families.
pub const FAMILIES: &[FamilyDefinition] = &[
    // Office core font substitutes
    FamilyDefinition {
        module_key: "carlito",
        register_as: "Carlito",
        substitute_for: Some("Calibri"),
        variants: &[
            (Regular, "Carlito-Regular.ttf"),
            (Bold, "Carlito-Bold.ttf"),
            (Italic, "Carlito-Italic.ttf"),
            (BoldItalic, "Carlito-BoldItalic.ttf"),
        ],
    },
    FamilyDefinition {
        module_key: "calibri-light",
        register_as: "Calibri Light",
        substitute_for: Some("Calibri Light"),
        variants: &[(Regular, "Carlito-Regular.ttf")],
    },
    FamilyDefinition {
        module_key: "caladea",
        register_as: "Caladea",
        substitute_for: Some("Cambria"),
        variants: &[
            (Regular, "Caladea-Regular.ttf"),
            (Bold, "Caladea-Bold.ttf"),
            (Italic, "Caladea-Italic.ttf"),
            (BoldItalic, "Caladea-BoldItalic.ttf"),
        ],
    },
    FamilyDefinition {
        module_key: "liberation-sans",
        register_as: "Liberation Sans",
        substitute_for: Some("Arial"),
        variants: &[
            (Regular, "LiberationSans-Regular.ttf"),
            (Bold, "LiberationSans-Bold.ttf"),
            (Italic, "LiberationSans-Italic.ttf"),
            (BoldItalic, "LiberationSans-BoldItalic.ttf"),
        ],
    },
    FamilyDefinition {
        module_key: "liberation-serif",
        register_as: "Liberation Serif",
        substitute_for: Some("Times New Roman"),
        variants: &[
            (Regular, "LiberationSerif-Regular.ttf"),
            (Bold, "LiberationSerif-Bold.ttf"),
            (Italic, "LiberationSerif-Italic.ttf"),
            (BoldItalic, "LiberationSerif-BoldItalic.ttf"),
        ],
    },
    FamilyDefinition {
        module_key: "liberation-mono",
        register_as: "Liberation Mono",
        substitute_for: Some("Courier New"),
        variants: &[
            (Regular, "LiberationMono-Regular.ttf"),
            (Bold, "LiberationMono-Bold.ttf"),
            (Italic, "LiberationMono-Italic.ttf"),
            (BoldItalic, "LiberationMono-BoldItalic.ttf"),
        ],
    },
    FamilyDefinition {
        module_key: "selawik",
        register_as: "Selawik",
        substitute_for: Some("Segoe UI"),
        variants: &[(Regular, "Selawik-Regular.ttf"), (Bold, "Selawik-Bold.ttf")],
    },
    FamilyDefinition {
        module_key: "selawik-light",
        register_as: "Selawik Light",
        substitute_for: Some("Segoe UI Light"),
        variants: &[(Regular, "Selawik-Light.ttf")],
    },
    FamilyDefinition {
        module_key: "selawik-semibold",
        register_as: "Selawik Semibold",
        substitute_for: Some("Segoe UI Semibold"),
        variants: &[(Regular, "Selawik-Semibold.ttf")],
    },
    FamilyDefinition {
        module_key: "selawik-semilight",
        register_as: "Selawik Semilight",
        substitute_for: Some("Segoe UI Semilight"),
        variants: &[(Regular, "Selawik-Semilight.ttf")],
    },
    FamilyDefinition {
        module_key: "gelasio",
        register_as: "Gelasio",
        substitute_for: Some("Georgia"),
        variants: &[
            (Regular, "Gelasio-Regular.ttf"),
            (Bold, "Gelasio-Bold.ttf"),
            (Italic, "Gelasio-Italic.ttf"),
            (BoldItalic, "Gelasio-BoldItalic.ttf"),
        ],
    },
    // Office serif font substitutes
    FamilyDefinition {
        module_key: "liberation-sans-narrow",
        register_as: "Liberation Sans Narrow",
        substitute_for: Some("Arial Narrow"),
        variants: &[
            (Regular, "LiberationSansNarrow-Regular.ttf"),
            (Bold, "LiberationSansNarrow-Bold.ttf"),
            (Italic, "LiberationSansNarrow-Italic.ttf"),
            (BoldItalic, "LiberationSansNarrow-BoldItalic.ttf"),
        ],
    },
    FamilyDefinition {
        module_key: "tex-gyre-pagella",
        register_as: "TeX Gyre Pagella",
        substitute_for: Some("Palatino Linotype"),
        variants: &[
            (Regular, "texgyrepagella-regular.otf"),
            (Bold, "texgyrepagella-bold.otf"),
            (Italic, "texgyrepagella-italic.otf"),
            (BoldItalic, "texgyrepagella-bolditalic.otf"),
        ],
    },
    FamilyDefinition {
        module_key: "tex-gyre-bonum",
        register_as: "TeX Gyre Bonum",
        substitute_for: Some("Bookman Old Style"),
        variants: &[
            (Regular, "texgyrebonum-regular.otf"),
            (Bold, "texgyrebonum-bold.otf"),
            (Italic, "texgyrebonum-italic.otf"),
            (BoldItalic, "texgyrebonum-bolditalic.otf"),
        ],
    },
    FamilyDefinition {
        module_key: "tex-gyre-schola",
        register_as: "TeX Gyre Schola",
        substitute_for: Some("Century Schoolbook"),
        variants: &[
            (Regular, "texgyreschola-regular.otf"),
            (Bold, "texgyreschola-bold.otf"),
            (Italic, "texgyreschola-italic.otf"),
            (BoldItalic, "texgyreschola-bolditalic.otf"),
        ],
    },
    // Google Fonts families
    FamilyDefinition {
        module_key: "arimo",
        register_as: "Arimo",
        substitute_for: None,
        variants: &[
            (Regular, "Arimo-Regular.ttf"),
            (Bold, "Arimo-Bold.ttf"),
            (Italic, "Arimo-Italic.ttf"),
            (BoldItalic, "Arimo-BoldItalic.ttf"),
        ],
    },
    FamilyDefinition {
        module_key: "barlow",
        register_as: "Barlow",
        substitute_for: None,
        variants: &[
            (Regular, "Barlow-Regular.ttf"),
            (Bold, "Barlow-Bold.ttf"),
            (Italic, "Barlow-Italic.ttf"),
            (BoldItalic, "Barlow-BoldItalic.ttf"),
        ],
    },
    FamilyDefinition {
        module_key: "barlow-light",
        register_as: "Barlow Light",
        substitute_for: None,
        variants: &[(Regular, "Barlow-Light.ttf"), (Italic, "Barlow-LightItalic.ttf")],
    },
    FamilyDefinition {
        module_key: "comfortaa",
        register_as: "Comfortaa",
        substitute_for: None,
        variants: &[(Regular, "Comfortaa-Regular.ttf"), (Bold, "Comfortaa-Bold.ttf")],
    },
    FamilyDefinition {
        module_key: "courier-prime",
        register_as: "Courier Prime",
        substitute_for: None,
        variants: &[
            (Regular, "CourierPrime-Regular.ttf"),
            (Bold, "CourierPrime-Bold.ttf"),
            (Italic, "CourierPrime-Italic.ttf"),
            (BoldItalic, "CourierPrime-BoldItalic.ttf"),
        ],
    },
    FamilyDefinition {
        module_key: "fira-code",
        register_as: "Fira Code",
        substitute_for: None,
        variants: &[(Regular, "FiraCode-Regular.ttf"), (Bold, "FiraCode-Bold.ttf")],
    },
    FamilyDefinition {
        module_key: "lato",
        register_as: "Lato",
        substitute_for: None,
        variants: &[
            (Regular, "Lato-Regular.ttf"),
            (Bold, "Lato-Bold.ttf"),
            (Italic, "Lato-Italic.ttf"),
            (BoldItalic, "Lato-BoldItalic.ttf"),
        ],
    },
    FamilyDefinition {
        module_key: "lato-light",
        register_as: "Lato Light",
        substitute_for: None,
        variants: &[(Regular, "Lato-Light.ttf"), (Italic, "Lato-LightItalic.ttf")],
    },
    FamilyDefinition {
        module_key: "montserrat",
        register_as: "Montserrat",
        substitute_for: None,
        variants: &[
            (Regular, "Montserrat-Regular.ttf"),
            (Bold, "Montserrat-Bold.ttf"),
            (Italic, "Montserrat-Italic.ttf"),
            (BoldItalic, "Montserrat-BoldItalic.ttf"),
        ],
    },
    FamilyDefinition {
        module_key: "noto-sans",
        register_as: "Noto Sans",
        substitute_for: None,
        variants: &[
            (Regular, "NotoSans-Regular.ttf"),
            (Bold, "NotoSans-Bold.ttf"),
            (Italic, "NotoSans-Italic.ttf"),
            (BoldItalic, "NotoSans-BoldItalic.ttf"),
        ],
    },
    FamilyDefinition {
        module_key: "noto-sans-symbols",
        register_as: "Noto Sans Symbols",
        substitute_for: None,
        variants: &[
            (Regular, "NotoSansSymbols-Regular.ttf"),
            (Bold, "NotoSansSymbols-Bold.ttf"),
        ],
    },
    FamilyDefinition {
        module_key: "noto-serif",
        register_as: "Noto Serif",
        substitute_for: None,
        variants: &[
            (Regular, "NotoSerif-Regular.ttf"),
            (Bold, "NotoSerif-Bold.ttf"),
            (Italic, "NotoSerif-Italic.ttf"),
            (BoldItalic, "NotoSerif-BoldItalic.ttf"),
        ],
    },
    FamilyDefinition {
        module_key: "open-sans",
        register_as: "Open Sans",
        substitute_for: None,
        variants: &[(Regular, "OpenSans-Regular.ttf"), (Bold, "OpenSans-Bold.ttf")],
    },
    FamilyDefinition {
        module_key: "oswald",
        register_as: "Oswald",
        substitute_for: None,
        variants: &[(Regular, "Oswald-Regular.ttf"), (Bold, "Oswald-Bold.ttf")],
    },
    FamilyDefinition {
        module_key: "play",
        register_as: "Play",
        substitute_for: None,
        variants: &[(Regular, "Play-Regular.ttf"), (Bold, "Play-Bold.ttf")],
    },
    FamilyDefinition {
        module_key: "playfair-display",
        register_as: "Playfair Display",
        substitute_for: None,
        variants: &[
            (Regular, "PlayfairDisplay-Regular.ttf"),
            (Bold, "PlayfairDisplay-Bold.ttf"),
            (Italic, "PlayfairDisplay-Italic.ttf"),
            (BoldItalic, "PlayfairDisplay-BoldItalic.ttf"),
        ],
    },
    FamilyDefinition {
        module_key: "poppins",
        register_as: "Poppins",
        substitute_for: None,
        variants: &[
            (Regular, "Poppins-Regular.ttf"),
            (Bold, "Poppins-Bold.ttf"),
            (Italic, "Poppins-Italic.ttf"),
            (BoldItalic, "Poppins-BoldItalic.ttf"),
        ],
    },
    FamilyDefinition {
        module_key: "raleway",
        register_as: "Raleway",
        substitute_for: None,
        variants: &[
            (Regular, "Raleway-Regular.ttf"),
            (Bold, "Raleway-Bold.ttf"),
            (Italic, "Raleway-Italic.ttf"),
            (BoldItalic, "Raleway-BoldItalic.ttf"),
        ],
    },
    FamilyDefinition {
        module_key: "roboto",
        register_as: "Roboto",
        substitute_for: None,
        variants: &[
            (Regular, "Roboto-Regular.ttf"),
            (Bold, "Roboto-Bold.ttf"),
            (Italic, "Roboto-Italic.ttf"),
            (BoldItalic, "Roboto-BoldItalic.ttf"),
        ],
    },
    FamilyDefinition {
        module_key: "roboto-mono",
        register_as: "Roboto Mono",
        substitute_for: None,
        variants: &[
            (Regular, "RobotoMono-Regular.ttf"),
            (Bold, "RobotoMono-Bold.ttf"),
            (Italic, "RobotoMono-Italic.ttf"),
            (BoldItalic, "RobotoMono-BoldItalic.ttf"),
        ],
    },
    FamilyDefinition {
        module_key: "roboto-slab",
        register_as: "Roboto Slab",
        substitute_for: None,
        variants: &[(Regular, "RobotoSlab-Regular.ttf"), (Bold, "RobotoSlab-Bold.ttf")],
    },
    FamilyDefinition {
        module_key: "roboto-slab-light",
        register_as: "Roboto Slab Light",
        substitute_for: None,
        variants: &[(Regular, "RobotoSlab-Light.ttf")],
    },
    FamilyDefinition {
        module_key: "roboto-slab-semibold",
        register_as: "Roboto Slab SemiBold",
        substitute_for: None,
        variants: &[(Regular, "RobotoSlab-SemiBold.ttf")],
    },
    FamilyDefinition {
        module_key: "source-code-pro",
        register_as: "Source Code Pro",
        substitute_for: None,
        variants: &[
            (Regular, "SourceCodePro-Regular.ttf"),
            (Bold, "SourceCodePro-Bold.ttf"),
            (Italic, "SourceCodePro-Italic.ttf"),
            (BoldItalic, "SourceCodePro-BoldItalic.ttf"),
        ],
    },
    FamilyDefinition {
        module_key: "source-sans-pro",
        register_as: "Source Sans Pro",
        substitute_for: None,
        variants: &[
            (Regular, "SourceSans3-Regular.ttf"),
            (Bold, "SourceSans3-Bold.ttf"),
            (Italic, "SourceSans3-Italic.ttf"),
            (BoldItalic, "SourceSans3-BoldItalic.ttf"),
        ],
    },
    FamilyDefinition {
        module_key: "tinos",
        register_as: "Tinos",
        substitute_for: None,
        variants: &[
            (Regular, "Tinos-Regular.ttf"),
            (Bold, "Tinos-Bold.ttf"),
            (Italic, "Tinos-Italic.ttf"),
            (BoldItalic, "Tinos-BoldItalic.ttf"),
        ],
    },
    FamilyDefinition {
        module_key: "ubuntu",
        register_as: "Ubuntu",
        substitute_for: None,
        variants: &[
            (Regular, "Ubuntu-Regular.ttf"),
            (Bold, "Ubuntu-Bold.ttf"),
            (Italic, "Ubuntu-Italic.ttf"),
            (BoldItalic, "Ubuntu-BoldItalic.ttf"),
        ],
    },
];

/// The catalog in the fixed iteration order every pipeline pass uses.
///
/// Sorting by module key keeps output deterministic and makes manifest key
/// collisions resolve positionally rather than by declaration accident.
pub fn sorted_families() -> Vec<&'static FamilyDefinition> {
    let mut families: Vec<_> = FAMILIES.iter().collect();
    families.sort_by_key(|f| f.module_key);
    families
}
