use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use serde::Serialize;
use sitewatch_compare::{CompareConfig, ComparisonResult, ContentComparator};
use sitewatch_diff::DiffAlgorithm;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Compare(args) => cmd_compare(args, &cli.format),
        Command::Algorithms => cmd_algorithms(&cli.format),
    }
}

/// Everything `compare` reports, in both output formats.
#[derive(Debug, Serialize)]
struct CompareReport {
    algorithm: DiffAlgorithm,
    threshold_percent: f32,
    significant: bool,
    comparison: ComparisonResult,
}

#[derive(Debug, Serialize)]
struct AlgorithmInfo {
    id: &'static str,
    name: &'static str,
    display_name: &'static str,
    unit_cap: usize,
    description: &'static str,
}

fn cmd_compare(args: CompareArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let report = build_report(&args)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print_report(&report),
    }
    Ok(())
}

fn build_report(args: &CompareArgs) -> anyhow::Result<CompareReport> {
    let mut config = match &args.config {
        Some(path) => CompareConfig::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => CompareConfig::default(),
    };
    if let Some(algorithm) = args.algorithm {
        config.algorithm = algorithm;
    }
    if let Some(threshold) = args.threshold {
        config.threshold_percent = threshold;
    }
    config.validate()?;

    let old = read_snapshot(&args.old)?;
    let new = read_snapshot(&args.new)?;

    let comparator = ContentComparator::new(config);
    let comparison = comparator.compare(Some(&old), Some(&new));

    Ok(CompareReport {
        algorithm: comparator.algorithm(),
        threshold_percent: comparator.config().threshold_percent,
        significant: comparator.should_alert(&comparison),
        comparison,
    })
}

fn read_snapshot(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading snapshot {}", path.display()))
}

fn print_report(report: &CompareReport) {
    let c = &report.comparison;
    let headline = if report.significant {
        format!("{} Significant change", "!".red().bold())
    } else if c.has_changed {
        format!("{} Minor change", "~".yellow().bold())
    } else {
        format!("{} No change", "✓".green().bold())
    };
    println!("{headline}");
    println!("  Algorithm: {}", report.algorithm.display_name().cyan());
    println!(
        "  Change: {} (threshold {:.1}%)",
        format!("{:.1}%", c.change_percent).bold(),
        report.threshold_percent
    );
    println!("  Size: {} → {} chars", c.old_size, c.new_size);
    println!("  {}", c.description.dimmed());
}

fn algorithm_catalogue() -> Vec<AlgorithmInfo> {
    DiffAlgorithm::ALL
        .into_iter()
        .map(|a| AlgorithmInfo {
            id: a.as_str(),
            name: a.name(),
            display_name: a.display_name(),
            unit_cap: a.unit_cap(),
            description: a.description(),
        })
        .collect()
}

fn cmd_algorithms(format: &OutputFormat) -> anyhow::Result<()> {
    let catalogue = algorithm_catalogue();
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&catalogue)?),
        OutputFormat::Text => {
            for (info, algorithm) in catalogue.iter().zip(DiffAlgorithm::ALL) {
                println!("{}  {}", info.id.yellow().bold(), info.display_name.bold());
                println!("    {}", algorithm.summary());
                println!("    samples above {} units", info.unit_cap);
            }
        }
    }
    Ok(())
}
