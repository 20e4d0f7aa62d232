mod catalog;

use catalog::DirCorpus;
use clap::Parser;
use serde::{Deserialize, Serialize};
use sigmatch::io::load_signature;
use sigmatch::{GameRecord, MatchConfig, MatchResult, Matcher};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "SigMatch CLI (JSON config driven)")]
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
    /// Catalogue the query signature under this game name instead of matching.
    #[arg(long, value_name = "NAME")]
    add: Option<String>,
    /// Editor of the game being catalogued.
    #[arg(long, requires = "add")]
    editor: Option<String>,
    /// Description of the game being catalogued.
    #[arg(long, requires = "add")]
    description: Option<String>,
    /// Release year of the game being catalogued.
    #[arg(long, requires = "add")]
    year: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MatchConfigJson {
    parallel: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Config {
    query_path: String,
    corpus_path: String,
    output_path: Option<String>,
    #[serde(rename = "match")]
    match_cfg: MatchConfigJson,
}

#[derive(Debug, Serialize)]
struct GameOutput {
    name: String,
    editor: Option<String>,
    description: Option<String>,
    year: Option<i32>,
}

impl From<GameRecord> for GameOutput {
    fn from(value: GameRecord) -> Self {
        Self {
            name: value.name,
            editor: value.editor,
            description: value.description,
            year: value.year,
        }
    }
}

#[derive(Debug, Serialize)]
struct Output {
    best: Option<GameOutput>,
    distance: Option<f32>,
}

impl From<MatchResult> for Output {
    fn from(value: MatchResult) -> Self {
        let distance = value.best.as_ref().map(|_| value.distance);
        Self {
            best: value.best.map(GameOutput::from),
            distance,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("sigmatch=info".parse()?))
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
    if config.query_path.is_empty() || config.corpus_path.is_empty() {
        return Err("query_path and corpus_path must be set in the config".into());
    }

    let query = load_signature(&config.query_path)?;
    let mut corpus = DirCorpus::open(&config.corpus_path)?;
    tracing::info!(
        games = corpus.len(),
        width = query.width(),
        height = query.height(),
        "corpus loaded"
    );

    if let Some(name) = cli.add {
        let mut record = GameRecord::new(name, query);
        record.editor = cli.editor;
        record.description = cli.description;
        record.year = cli.year;
        corpus.add(&record)?;
        tracing::info!(name = %record.name, "game catalogued");
        return Ok(());
    }

    let matcher = Matcher::new(corpus).with_config(MatchConfig {
        parallel: config.match_cfg.parallel,
    });
    let result = matcher.find(query.view())?;
    let output = Output::from(result);
    let json = serde_json::to_string_pretty(&output)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
