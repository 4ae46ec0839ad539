//! Command-line interface for strictly_grid.

use clap::Parser;
use std::path::PathBuf;
use strictly_grid::DiagonalRule;

/// Strictly Grid - tic-tac-toe on any odd-sized board
#[derive(Parser, Debug)]
#[command(name = "strictly_grid")]
#[command(about = "Two-player line game on an odd-sized square board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board size (odd, positive). Overrides the config file and environment.
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Path to the TOML config file
    #[arg(short, long, default_value = "strictly_grid.toml")]
    pub config: PathBuf,

    /// Winning diagonals: "both" or "main-only"
    #[arg(long)]
    pub diagonals: Option<DiagonalRule>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["strictly_grid"]).expect("no args needed");
        assert_eq!(cli.size, None);
        assert_eq!(cli.config, PathBuf::from("strictly_grid.toml"));
        assert_eq!(cli.diagonals, None);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "strictly_grid",
            "--size",
            "5",
            "--diagonals",
            "main-only",
            "-c",
            "custom.toml",
        ])
        .expect("valid flags");
        assert_eq!(cli.size, Some(5));
        assert_eq!(cli.diagonals, Some(DiagonalRule::MainOnly));
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
    }

    #[test]
    fn test_unknown_rule_rejected() {
        assert!(Cli::try_parse_from(["strictly_grid", "--diagonals", "anti"]).is_err());
    }
}
