//! Command-line interface.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::config::Config;
use crate::data::{CleaningPipeline, TitleKind};
use crate::viewer::{Catalog, RankKey, Summary, TitleRecord};

#[derive(Parser)]
#[command(name = "netflix-insights")]
#[command(about = "Netflix titles cleaning pipeline and insights dashboard", version)]
pub struct Cli {
    /// Path to TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean a raw titles CSV and write the cleaned CSV plus a report
    Clean {
        /// Raw titles CSV
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Cleaned CSV output
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Text report output
        #[arg(short, long)]
        report: Option<PathBuf>,
        /// Reference year for content_age (defaults to the current year)
        #[arg(long)]
        current_year: Option<i32>,
        /// Also write the report as JSON
        #[arg(long)]
        json_report: Option<PathBuf>,
    },

    /// Print metrics, rankings and recommendations for one title type
    Query {
        /// Cleaned titles CSV
        #[arg(short, long)]
        data: Option<PathBuf>,
        /// Title type to select (MOVIE or SHOW)
        #[arg(short = 't', long = "type", value_parser = TitleKind::parse_loose)]
        kind: TitleKind,
        /// Number of titles in the ranking
        #[arg(long)]
        top: Option<usize>,
        /// Column to rank by
        #[arg(long, default_value = "imdb_score")]
        rank_by: RankKey,
        /// Rank ascending instead of descending
        #[arg(long)]
        ascending: bool,
        /// Title to base recommendations on
        #[arg(long)]
        recommend: Option<String>,
        /// Maximum IMDb score distance for recommendations
        #[arg(long)]
        tolerance: Option<f64>,
        /// Write the selected titles to this CSV
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Launch the interactive dashboard
    Dashboard {
        /// Cleaned titles CSV
        #[arg(short, long)]
        data: Option<PathBuf>,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    crate::logging::init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => {
            let cfg = Config::from_toml(path)
                .with_context(|| format!("loading config {}", path.display()))?;
            info!("Loaded config from: {}", path.display());
            cfg
        }
        None => Config::default(),
    };

    match cli.command {
        Commands::Clean {
            input,
            output,
            report,
            current_year,
            json_report,
        } => {
            let mut cfg = config.cleaner;
            cfg.input = input.unwrap_or(cfg.input);
            cfg.output = output.unwrap_or(cfg.output);
            cfg.report = report.unwrap_or(cfg.report);
            cfg.current_year = current_year.or(cfg.current_year);
            cmd_clean(&cfg, json_report)
        }
        Commands::Query {
            data,
            kind,
            top,
            rank_by,
            ascending,
            recommend,
            tolerance,
            export,
        } => {
            let mut cfg = config.viewer;
            cfg.data = data.unwrap_or(cfg.data);
            cfg.top_n = top.unwrap_or(cfg.top_n);
            cfg.tolerance = tolerance.unwrap_or(cfg.tolerance);
            let options = QueryOptions {
                kind,
                rank_by,
                descending: !ascending,
                recommend,
                export,
            };
            cmd_query(&cfg, &options)
        }
        Commands::Dashboard { data } => {
            let mut cfg = config.viewer;
            cfg.data = data.unwrap_or(cfg.data);
            crate::gui::launch(cfg).map_err(|e| anyhow::anyhow!("dashboard failed: {}", e))
        }
    }
}

fn cmd_clean(cfg: &crate::config::CleanerConfig, json_report: Option<PathBuf>) -> Result<()> {
    let pipeline = match cfg.current_year {
        Some(year) => CleaningPipeline::new(year),
        None => CleaningPipeline::default(),
    };
    info!(input = %cfg.input.display(), year = pipeline.current_year(), "cleaning");

    let report = pipeline
        .run_files(&cfg.input, &cfg.output, &cfg.report)
        .with_context(|| format!("cleaning {}", cfg.input.display()))?;

    if let Some(path) = json_report {
        report
            .write_json(&path)
            .with_context(|| format!("writing {}", path.display()))?;
    }

    if report.remaining_nulls() > 0 {
        warn!(nulls = report.remaining_nulls(), "cleaned data still has missing values");
    }

    print_box(
        "Cleaning Completed",
        &[
            (
                "Original shape",
                format!("({}, {})", report.original_shape.0, report.original_shape.1),
            ),
            (
                "Cleaned shape",
                format!("({}, {})", report.cleaned_shape.0, report.cleaned_shape.1),
            ),
            ("Dropped (no title)", report.dropped_untitled.to_string()),
            ("Duplicates removed", report.duplicates_removed.to_string()),
            ("Cleaned CSV", cfg.output.display().to_string()),
            ("Report", cfg.report.display().to_string()),
        ],
    );
    Ok(())
}

struct QueryOptions {
    kind: TitleKind,
    rank_by: RankKey,
    descending: bool,
    recommend: Option<String>,
    export: Option<PathBuf>,
}

fn cmd_query(cfg: &crate::config::ViewerConfig, options: &QueryOptions) -> Result<()> {
    let catalog =
        Catalog::load(&cfg.data).with_context(|| format!("loading {}", cfg.data.display()))?;
    let subset = catalog.filter(options.kind)?;

    println!("{}", format_summary(options.kind, &subset.summary()));

    let direction = if options.descending { "highest" } else { "lowest" };
    println!("\nTop {} by {} ({})", cfg.top_n, options.rank_by, direction);
    let ranked = subset.top_n(cfg.top_n, options.rank_by, options.descending);
    print_records(&ranked, options.rank_by);

    if let Some(title) = &options.recommend {
        if !subset.titles().contains(&title.as_str()) {
            bail!("'{}' is not a {} title", title, options.kind);
        }
        println!("\nRecommended for '{}'", title);
        let recs = subset.recommend(title, cfg.tolerance, cfg.recommend_limit)?;
        if recs.is_empty() {
            println!("  No close matches found. Try another title.");
        } else {
            print_records(&recs, RankKey::ImdbScore);
        }
    }

    println!("\nTitles per release year");
    for (year, count) in subset.year_histogram() {
        println!("  {:>4}  {}", year, count);
    }

    if let Some(path) = &options.export {
        subset
            .export_csv(path)
            .with_context(|| format!("exporting {}", path.display()))?;
        println!("\nExported {} titles to {}", subset.records().len(), path.display());
    }
    Ok(())
}

/// Metric lines shown for a selection; "No data" for an empty one.
pub fn format_summary(kind: TitleKind, summary: &Summary) -> String {
    let metric = |value: Option<f64>, places: usize| {
        value
            .map(|v| format!("{:.*}", places, v))
            .unwrap_or_else(|| "No data".to_string())
    };
    format!(
        "{}\n  Total Titles: {}\n  Avg IMDb:     {}\n  Top IMDb:     {}",
        kind,
        summary.count,
        metric(summary.mean_imdb, 2),
        metric(summary.max_imdb, 1)
    )
}

fn print_records(records: &[&TitleRecord], key: RankKey) {
    if records.is_empty() {
        println!("  No data");
        return;
    }
    for (i, record) in records.iter().enumerate() {
        println!(
            "  {:>2}. {:<40} {:>10}  {}",
            i + 1,
            record.title,
            key.value(record),
            record.genres.as_deref().unwrap_or("-")
        );
    }
}

/// Print a summary box
fn print_box(title: &str, items: &[(&str, String)]) {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║ {:<60} ║", title);
    println!("╠══════════════════════════════════════════════════════════════╣");
    for (key, value) in items {
        let display_value = if value.chars().count() > 39 {
            format!("{}...", value.chars().take(36).collect::<String>())
        } else {
            value.clone()
        };
        println!("║ {:<18}: {:<39} ║", key, display_value);
    }
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();
}
