use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use crs_catalog::Catalog;
use crs_graph::{BoundingBox, LocationHint, SearchBounds, SearchConfig, TransformationAdvisor};
use serde::Serialize;
use std::path::{Path, PathBuf};

mod flags;

#[derive(Parser)]
#[command(name = "crs-advisor")]
#[command(about = "Transformation path advice between coordinate reference systems", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for JSON)
    #[arg(long, global = true)]
    quiet: bool,

    /// Transformation catalog (JSON); the bundled catalog is used when omitted
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Search configuration (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend a transformation route between two CRS codes
    Suggest(SuggestArgs),

    /// List ranked candidate routes with explicit search bounds
    Paths(PathsArgs),

    /// Summarize the loaded catalog
    Catalog,
}

#[derive(Args)]
struct SuggestArgs {
    /// Source CRS (e.g. 4301 or EPSG:4301)
    source: String,

    /// Target CRS (e.g. 6668 or EPSG:6668)
    target: String,

    /// Area of interest as south,west,north,east in degrees
    #[arg(long, value_parser = flags::parse_bbox, allow_hyphen_values = true)]
    bbox: Option<BoundingBox>,
}

#[derive(Args)]
struct PathsArgs {
    /// Source CRS
    source: String,

    /// Target CRS
    target: String,

    /// Longest chain to consider (defaults to the configured value)
    #[arg(long)]
    max_steps: Option<usize>,

    /// Number of candidate chains to collect (defaults to the configured value)
    #[arg(long)]
    max_paths: Option<usize>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CatalogSummary {
    version: String,
    records: usize,
    nodes: usize,
    edges: usize,
    deprecated: Vec<DeprecatedEntry>,
}

#[derive(Serialize)]
struct DeprecatedEntry {
    code: String,
    replacement: String,
    note: String,
}

pub fn main_entry() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let catalog = load_catalog(cli.catalog.as_deref())?;
    let config = match cli.config.as_deref() {
        Some(path) => SearchConfig::load(path)
            .with_context(|| format!("Failed to load search config {}", path.display()))?,
        None => SearchConfig::default(),
    };
    let advisor = TransformationAdvisor::new(config);

    match cli.command {
        Commands::Suggest(args) => run_suggest(&advisor, &catalog, args)?,
        Commands::Paths(args) => run_paths(&advisor, &catalog, args)?,
        Commands::Catalog => run_catalog(&advisor, &catalog)?,
    }

    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let catalog = match path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => Catalog::builtin().context("Bundled catalog is invalid")?,
    };
    log::debug!(
        "Using catalog {} ({} records)",
        catalog.version(),
        catalog.records().len()
    );
    Ok(catalog)
}

fn run_suggest(advisor: &TransformationAdvisor, catalog: &Catalog, args: SuggestArgs) -> Result<()> {
    let location = args.bbox.map(|bbox| LocationHint {
        bounding_box: Some(bbox),
    });
    let result = advisor.suggest(catalog, &args.source, &args.target, location.as_ref())?;
    print_json(&result)
}

fn run_paths(advisor: &TransformationAdvisor, catalog: &Catalog, args: PathsArgs) -> Result<()> {
    let config = advisor.config();
    let bounds = SearchBounds::new(
        args.max_steps.unwrap_or(config.max_steps),
        args.max_paths.unwrap_or(config.max_paths),
    );
    let paths = advisor.find_paths(catalog, &args.source, &args.target, bounds);
    if paths.is_empty() {
        log::warn!(
            "No route from {} to {} within {} steps",
            args.source,
            args.target,
            bounds.max_steps
        );
    }
    print_json(&paths)
}

fn run_catalog(advisor: &TransformationAdvisor, catalog: &Catalog) -> Result<()> {
    let stats = advisor.graph_stats(catalog);
    let summary = CatalogSummary {
        version: stats.version,
        records: catalog.records().len(),
        nodes: stats.nodes,
        edges: stats.edges,
        deprecated: catalog
            .deprecated()
            .map(|(code, dep)| DeprecatedEntry {
                code: code.to_string(),
                replacement: dep.replacement.clone(),
                note: dep.note.clone(),
            })
            .collect(),
    };
    print_json(&summary)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
