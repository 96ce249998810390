//! CLI definitions and command dispatch.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use fontpack_core::{bundle_all, clean};

#[derive(Parser)]
#[command(name = "fontpack")]
#[command(about = "Subset and bundle fonts for the embedded document renderer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Subset every catalog family to WOFF2 and regenerate the manifest
    Bundle {
        /// Directory holding the source font files
        #[arg(long, default_value = "fonts")]
        fonts_dir: PathBuf,
        /// Directory the modules and manifest are written to
        #[arg(long, default_value = "dist")]
        output_dir: PathBuf,
    },
    /// Remove the generated output directory
    Clean {
        #[arg(long, default_value = "dist")]
        output_dir: PathBuf,
    },
}

impl Commands {
    pub fn run(self) -> Result<()> {
        match self {
            Commands::Bundle { fonts_dir, output_dir } => {
                bundle_all(&fonts_dir, &output_dir)?;
            }
            Commands::Clean { output_dir } => {
                clean(&output_dir)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_bundle_defaults() {
        let cli = Cli::parse_from(["fontpack", "bundle"]);
        match cli.command {
            Commands::Bundle { fonts_dir, output_dir } => {
                assert_eq!(fonts_dir, PathBuf::from("fonts"));
                assert_eq!(output_dir, PathBuf::from("dist"));
            }
            _ => panic!("expected bundle command"),
        }
    }

    #[test]
    fn test_bundle_custom_dirs() {
        let cli = Cli::parse_from([
            "fontpack",
            "bundle",
            "--fonts-dir",
            "assets/fonts",
            "--output-dir",
            "out",
        ]);
        match cli.command {
            Commands::Bundle { fonts_dir, output_dir } => {
                assert_eq!(fonts_dir, PathBuf::from("assets/fonts"));
                assert_eq!(output_dir, PathBuf::from("out"));
            }
            _ => panic!("expected bundle command"),
        }
    }
}
