use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use strokematch::{Gesture, Match, MatchConfig, Matcher, NormalizeConfig, TemplateLibrary};
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "StrokeMatch CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct MatchConfigJson {
    parallel: bool,
    max_distance: Option<f64>,
    size: f64,
    degenerate_threshold: f64,
}

impl Default for MatchConfigJson {
    fn default() -> Self {
        let cfg = MatchConfig::default();
        Self {
            parallel: cfg.parallel,
            max_distance: cfg.max_distance,
            size: cfg.normalize.size,
            degenerate_threshold: cfg.normalize.degenerate_threshold,
        }
    }
}

impl From<MatchConfigJson> for MatchConfig {
    fn from(value: MatchConfigJson) -> Self {
        Self {
            normalize: NormalizeConfig {
                size: value.size,
                degenerate_threshold: value.degenerate_threshold,
            },
            parallel: value.parallel,
            max_distance: value.max_distance,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Config {
    library_path: String,
    candidate_path: String,
    output_path: Option<String>,
    topk: usize,
    #[serde(rename = "match")]
    match_cfg: MatchConfigJson,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            library_path: String::new(),
            candidate_path: String::new(),
            output_path: None,
            topk: 1,
            match_cfg: MatchConfigJson::default(),
        }
    }
}

#[derive(Debug, Serialize)]
struct MatchRecord {
    label: String,
    distance: f64,
}

impl From<Match> for MatchRecord {
    fn from(value: Match) -> Self {
        Self {
            label: value.label,
            distance: value.distance,
        }
    }
}

#[derive(Debug, Serialize)]
struct Output {
    label: Option<String>,
    distance: Option<f64>,
    topk: Vec<MatchRecord>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive("strokematch=info".parse()?),
            )
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.library_path.is_empty() || config.candidate_path.is_empty() {
        return Err("library_path and candidate_path must be set in the config".into());
    }
    if config.topk == 0 {
        return Err("topk must be at least 1".into());
    }

    let library: TemplateLibrary = serde_json::from_str(&fs::read_to_string(&config.library_path)?)?;
    let candidate: Gesture = serde_json::from_str(&fs::read_to_string(&config.candidate_path)?)?;
    tracing::info!(
        templates = library.len(),
        points = candidate.len(),
        "loaded inputs"
    );

    let matcher = Matcher::new(library)?.with_config(config.match_cfg.into())?;
    let matches = matcher.rank(candidate.points(), config.topk)?;
    let best = matches.first();
    let output = Output {
        label: best.map(|m| m.label.clone()),
        distance: best.map(|m| m.distance),
        topk: matches.into_iter().map(MatchRecord::from).collect(),
    };
    let json = serde_json::to_string_pretty(&output)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
