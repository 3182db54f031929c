//! Command-line argument definitions for the Vellum CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the output directory, configuration
//! file selection, logging verbosity and whether files are written at all.

use clap::Parser;

/// Command-line arguments for the Vellum deck tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory that receives one SVG file per slide
    #[arg(short, long, default_value = "out")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Compose and check the deck without writing any files
    #[arg(long)]
    pub validate_only: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["vellum"]);
        assert_eq!(args.output, "out");
        assert!(args.config.is_none());
        assert_eq!(args.log_level, "info");
        assert!(!args.validate_only);
    }

    #[test]
    fn test_all_flags() {
        let args = Args::parse_from([
            "vellum",
            "--output",
            "slides",
            "-c",
            "deck.toml",
            "--log-level",
            "debug",
            "--validate-only",
        ]);
        assert_eq!(args.output, "slides");
        assert_eq!(args.config.as_deref(), Some("deck.toml"));
        assert_eq!(args.log_level, "debug");
        assert!(args.validate_only);
    }
}
