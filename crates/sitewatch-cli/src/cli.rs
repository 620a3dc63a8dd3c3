use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use sitewatch_diff::DiffAlgorithm;

#[derive(Parser)]
#[command(
    name = "sitewatch",
    about = "SiteWatch: measure how much a page snapshot changed",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare two snapshot files
    Compare(CompareArgs),
    /// List the available diff algorithms
    Algorithms,
}

#[derive(Args)]
pub struct CompareArgs {
    /// The previous snapshot
    pub old: PathBuf,
    /// The current snapshot
    pub new: PathBuf,
    /// Diff granularity: line, word or character
    #[arg(short, long)]
    pub algorithm: Option<DiffAlgorithm>,
    /// Alert threshold in percent
    #[arg(short, long)]
    pub threshold: Option<f32>,
    /// TOML file with comparison settings; flags override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_compare() {
        let cli = Cli::try_parse_from(["sitewatch", "compare", "old.txt", "new.txt"]).unwrap();
        if let Command::Compare(args) = cli.command {
            assert_eq!(args.old, PathBuf::from("old.txt"));
            assert_eq!(args.new, PathBuf::from("new.txt"));
            assert!(args.algorithm.is_none());
            assert!(args.threshold.is_none());
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_compare_with_options() {
        let cli = Cli::try_parse_from([
            "sitewatch", "compare", "a", "b", "--algorithm", "word", "-t", "5", "-c", "watch.toml",
        ])
        .unwrap();
        if let Command::Compare(args) = cli.command {
            assert_eq!(args.algorithm, Some(DiffAlgorithm::Word));
            assert_eq!(args.threshold, Some(5.0));
            assert_eq!(args.config, Some(PathBuf::from("watch.toml")));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_unknown_algorithm_fails() {
        let result = Cli::try_parse_from(["sitewatch", "compare", "a", "b", "-a", "myers"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_algorithms() {
        let cli = Cli::try_parse_from(["sitewatch", "algorithms"]).unwrap();
        assert!(matches!(cli.command, Command::Algorithms));
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["sitewatch", "--verbose", "algorithms"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::try_parse_from(["sitewatch", "--format", "json", "algorithms"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
    }
}
