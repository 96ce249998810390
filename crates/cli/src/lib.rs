//! Fontpack CLI library.

pub mod cli;

// Re-export from core for convenience
pub use fontpack_core::{BundleSummary, bundle_all, clean};
