//! CLI argument parsing with clap.

use clap::Parser;

/// Random bordered grid generator for grid simulation test inputs.
#[derive(Parser, Debug)]
#[command(name = "gridgen", version, about)]
pub struct Cli {
    /// Grid width, border included.
    #[arg(short = 'W', long)]
    pub width: Option<usize>,

    /// Grid height, border included.
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Probability in [0, 1] that an interior cell is open.
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Named preset from the config file.
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Output directory (must already exist).
    #[arg(short, long)]
    pub dir: Option<String>,

    /// Output file name (defaults to `<width>x<height>`).
    #[arg(short = 'o', long)]
    pub name: Option<String>,

    /// Seed for reproducible grids.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the grid to stdout instead of a file.
    #[arg(long, conflicts_with_all = ["dir", "name"])]
    pub stdout: bool,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let cli = Cli::parse_from(["gridgen"]);
        assert!(cli.width.is_none());
        assert!(cli.height.is_none());
        assert!(cli.threshold.is_none());
        assert!(cli.preset.is_none());
        assert!(cli.dir.is_none());
        assert!(cli.name.is_none());
        assert!(cli.seed.is_none());
        assert!(!cli.stdout);
        assert!(!cli.verbose);
    }

    #[test]
    fn all_options() {
        let cli = Cli::parse_from([
            "gridgen", "-W", "40", "-H", "20", "-t", "0.6", "-p", "small", "-d", "out", "-o",
            "g.txt", "--seed", "9", "--config", "c.toml", "-v",
        ]);
        assert_eq!(cli.width, Some(40));
        assert_eq!(cli.height, Some(20));
        assert_eq!(cli.threshold, Some(0.6));
        assert_eq!(cli.preset.as_deref(), Some("small"));
        assert_eq!(cli.dir.as_deref(), Some("out"));
        assert_eq!(cli.name.as_deref(), Some("g.txt"));
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.config.as_deref(), Some("c.toml"));
        assert!(cli.verbose);
    }

    #[test]
    fn stdout_conflicts_with_name() {
        assert!(Cli::try_parse_from(["gridgen", "--stdout", "-o", "x"]).is_err());
        assert!(Cli::try_parse_from(["gridgen", "--stdout"]).is_ok());
    }

    #[test]
    fn non_numeric_width_rejected() {
        assert!(Cli::try_parse_from(["gridgen", "-W", "wide"]).is_err());
    }
}
