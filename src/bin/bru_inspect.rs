//! Inspection tool for `.bru` files.
//!
//! Prints the parse result of a file as JSON, or with `--at` the variable
//! reference found at a position. Logging goes to stderr and is controlled
//! with `RUST_LOG`.

use std::path::PathBuf;
use std::process;

use bru_syntax::config::{load_config_file, ParserConfig};
use bru_syntax::models::Position;
use bru_syntax::variables::{find_inbuilt_call_at, find_reference_at};
use bru_syntax::{parse_document, Document};
use clap::Parser;
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "bru-inspect", version, about = "Inspect the structure of .bru files")]
struct Cli {
    /// The .bru file to parse
    file: PathBuf,

    /// Settings JSON file with a "bru-parser" section
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,

    /// Show the variable reference at LINE:CHARACTER (zero-based)
    #[arg(long, value_name = "LINE:CHARACTER", value_parser = parse_position)]
    at: Option<Position>,
}

fn parse_position(value: &str) -> Result<Position, String> {
    let (line, character) = value
        .split_once(':')
        .ok_or_else(|| format!("expected LINE:CHARACTER, got '{}'", value))?;

    let line = line
        .trim()
        .parse()
        .map_err(|e| format!("invalid line '{}': {}", line, e))?;
    let character = character
        .trim()
        .parse()
        .map_err(|e| format!("invalid character '{}': {}", character, e))?;

    Ok(Position::new(line, character))
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match load_config_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("error: {}", e);
                process::exit(2);
            }
        },
        None => ParserConfig::default(),
    };

    let text = match std::fs::read_to_string(&cli.file) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error: cannot read '{}': {}", cli.file.display(), e);
            process::exit(2);
        }
    };

    let document = Document::new(text);
    let parsed = parse_document(&document, &config);
    log::info!(
        "{}: {} blocks, {} spans of text outside of blocks",
        cli.file.display(),
        parsed.blocks.len(),
        parsed.text_outside_of_blocks.len()
    );

    let output = match cli.at {
        Some(position) => match reference_at(&parsed, &config, position) {
            Some(value) => value,
            None => {
                eprintln!("no variable reference at {}", position);
                process::exit(1);
            }
        },
        None => match serde_json::to_value(&parsed) {
            Ok(value) => value,
            Err(e) => {
                eprintln!("error: cannot serialize parse result: {}", e);
                process::exit(2);
            }
        },
    };

    let rendered = if cli.compact {
        serde_json::to_string(&output)
    } else {
        serde_json::to_string_pretty(&output)
    };
    match rendered {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: cannot render JSON: {}", e);
            process::exit(2);
        }
    }
}

fn reference_at(
    parsed: &bru_syntax::models::ParsedBruFile,
    config: &ParserConfig,
    position: Position,
) -> Option<Value> {
    let block = parsed.block_at(position)?;

    if config.is_code_block(&block.name) {
        let code = block.text()?;
        let found = find_inbuilt_call_at(code, block.content_range.start, position)?;
        return Some(json!({
            "block": block.name,
            "function": found.call.function.name(),
            "positionInArgument": found.position_in_argument,
            "reference": found.call.reference,
        }));
    }

    let reference = find_reference_at(&block.variable_references, position)?;
    Some(json!({
        "block": block.name,
        "reference": reference,
    }))
}
