//! Solidname CLI - heuristic naming for CAD solid bodies.
//!
//! Reads a JSON batch of body measurements, runs the analysis pipeline and
//! prints descriptor tables, name suggestions, or an exported rules
//! document.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use console::style;
use tabled::settings::Style as TableStyle;
use tabled::{Table, Tabled};

use solidname_rs::{
    export_naming_rules, BodyMeasurement, NamingConfig, NamingEngine, NamingResults, VERSION,
};

/// Heuristic naming engine for solid bodies in CAD designs
#[derive(Parser)]
#[command(name = "solidname")]
#[command(version = VERSION)]
#[command(about = "Analyze solid-body measurements and suggest descriptive names")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a JSON configuration file overriding the default rule tables
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive descriptors and classify the design context
    Analyze(BatchArgs),

    /// Full naming pass: analyze and suggest a name per body
    Suggest(SuggestArgs),

    /// Export the derived naming rules as a JSON document
    ExportRules(ExportArgs),
}

#[derive(Args)]
struct BatchArgs {
    /// JSON file containing an array of body measurements
    input: PathBuf,
}

#[derive(Args)]
struct SuggestArgs {
    /// JSON file containing an array of body measurements
    input: PathBuf,

    /// Free-text design description steering the vocabulary choice
    #[arg(long)]
    hint: Option<String>,
}

#[derive(Args)]
struct ExportArgs {
    /// JSON file containing an array of body measurements
    input: PathBuf,

    /// Output path for the rules document
    #[arg(long, default_value = "naming_rules.json")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    let engine = build_engine(cli.config.as_deref())?;

    match cli.command {
        Commands::Analyze(args) => {
            let batch = load_batch(&args.input)?;
            let results = engine.analyze(&batch);
            display_analysis(&results);
        }
        Commands::Suggest(args) => {
            let batch = load_batch(&args.input)?;
            let results = engine.suggest(&batch, args.hint.as_deref());
            display_analysis(&results);
            display_suggestions(&results);
        }
        Commands::ExportRules(args) => {
            let batch = load_batch(&args.input)?;
            let results = engine.analyze(&batch);
            export_naming_rules(&args.out, &results.descriptors)
                .with_context(|| format!("failed to export rules to {}", args.out.display()))?;
            println!(
                "{} wrote {} rules to {}",
                style("✅").green(),
                results.descriptors.len(),
                args.out.display()
            );
        }
    }

    Ok(())
}

fn build_engine(config_path: Option<&std::path::Path>) -> anyhow::Result<NamingEngine> {
    let config = match config_path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            serde_json::from_str::<NamingConfig>(&content)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => NamingConfig::default(),
    };
    Ok(NamingEngine::new(config)?)
}

fn load_batch(path: &std::path::Path) -> anyhow::Result<Vec<BodyMeasurement>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read measurements {}", path.display()))?;
    let batch: Vec<BodyMeasurement> = serde_json::from_str(&content)
        .with_context(|| format!("invalid measurement batch {}", path.display()))?;
    Ok(batch)
}

fn display_analysis(results: &NamingResults) {
    println!(
        "{} {}",
        style("Design context:").bold(),
        style(results.context).cyan()
    );
    println!();

    #[derive(Tabled)]
    struct DescriptorRow {
        #[tabled(rename = "Body")]
        name: String,
        #[tabled(rename = "Max dim")]
        max_dimension: String,
        #[tabled(rename = "Shape")]
        shape: String,
        #[tabled(rename = "Faces")]
        faces: String,
        #[tabled(rename = "Complexity")]
        complexity: String,
    }

    let rows: Vec<DescriptorRow> = results
        .descriptors
        .iter()
        .map(|d| {
            if let Some(error) = &d.error {
                return DescriptorRow {
                    name: d.name.clone(),
                    max_dimension: "-".to_string(),
                    shape: format!("error: {error}"),
                    faces: "-".to_string(),
                    complexity: "-".to_string(),
                };
            }
            let mut shapes = Vec::new();
            if d.is_long_thin {
                shapes.push("long/thin");
            }
            if d.is_cubic {
                shapes.push("cubic");
            }
            if d.is_flat {
                shapes.push("flat");
            }
            DescriptorRow {
                name: d.name.clone(),
                max_dimension: format!("{:.1}", d.max_dimension),
                shape: if shapes.is_empty() {
                    "-".to_string()
                } else {
                    shapes.join(", ")
                },
                faces: d.face_count.to_string(),
                complexity: d.complexity.to_string(),
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(TableStyle::rounded());
    println!("{table}");
    println!();

    let summary = &results.summary;
    println!(
        "{} bodies, {} failures, total volume {:.1}",
        summary.bodies_analyzed, summary.extraction_failures, summary.total_volume
    );
    println!();
}

fn display_suggestions(results: &NamingResults) {
    if results.suggestions.is_empty() {
        println!("{}", style("No suggestions generated").yellow());
        return;
    }

    #[derive(Tabled)]
    struct SuggestionRow {
        #[tabled(rename = "Current")]
        current: String,
        #[tabled(rename = "Suggested")]
        suggested: String,
    }

    let rows: Vec<SuggestionRow> = results
        .suggestions
        .iter()
        .map(|s| SuggestionRow {
            current: results
                .descriptors
                .get(s.index)
                .map(|d| d.name.clone())
                .unwrap_or_default(),
            suggested: s.display_name.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(TableStyle::rounded());
    println!("{table}");
}
