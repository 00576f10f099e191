//! # butterfly-classify CLI
//!
//! Diagnostic front-end for the road classification used by guidance.

use std::collections::HashMap;

use butterfly_guidance::highway::{is_known_highway_type, priority_table, suggest_highway_type};
use butterfly_guidance::tags::{parse_tag_list, parse_tag_pair, HIGHWAY_KEY};
use butterfly_guidance::{can_be_seen_as_fork, Error, Result, RoadClassification, TagSource};
use clap::{Parser, Subcommand};
use log::{debug, error, warn};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "butterfly-classify")]
#[command(version, about = "Classify OpenStreetMap roads for turn guidance")]
#[command(long_about = "Derives the guidance road classification from way tags:
  butterfly-classify classify highway=motorway_link
  butterfly-classify fork --first highway=primary --second highway=trunk
  butterfly-classify table --json")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a single way
    Classify {
        /// Way tags as key=value
        #[arg(value_name = "TAG")]
        tags: Vec<String>,
        /// Print JSON instead of the debug string
        #[arg(long)]
        json: bool,
    },
    /// Check whether two ways can be seen as a fork
    Fork {
        /// Tags of the first way, comma separated key=value
        #[arg(long)]
        first: String,
        /// Tags of the second way, comma separated key=value
        #[arg(long)]
        second: String,
        #[arg(long)]
        json: bool,
    },
    /// Print the highway priority table
    Table {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct ClassificationReport<'a> {
    highway: Option<&'a str>,
    classification: RoadClassification,
    is_motorway_class: bool,
    is_ramp_class: bool,
    is_link_class: bool,
    is_low_priority_road_class: bool,
    display: String,
}

impl<'a> ClassificationReport<'a> {
    fn new(tags: &'a HashMap<String, String>) -> Self {
        let classification = RoadClassification::from_tags(tags);
        Self {
            highway: tags.tag(HIGHWAY_KEY),
            classification,
            is_motorway_class: classification.is_motorway_class(),
            is_ramp_class: classification.is_ramp_class(),
            is_link_class: classification.is_link_class(),
            is_low_priority_road_class: classification.is_low_priority_road_class(),
            display: classification.to_string(),
        }
    }
}

#[derive(Serialize)]
struct ForkReport<'a> {
    first: ClassificationReport<'a>,
    second: ClassificationReport<'a>,
    can_be_seen_as_fork: bool,
}

#[derive(Serialize)]
struct TableEntry {
    highway: &'static str,
    priority: u8,
}

fn main() {
    if let Err(e) = run() {
        error!("❌ Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Classify { tags, json } => {
            let tags = tags
                .iter()
                .map(String::as_str)
                .map(parse_tag_pair)
                .collect::<Result<HashMap<_, _>>>()?;
            classify(&tags, json)
        }
        Commands::Fork {
            first,
            second,
            json,
        } => fork(&parse_tag_list(&first)?, &parse_tag_list(&second)?, json),
        Commands::Table { json } => table(json),
    }
}

fn classify(tags: &HashMap<String, String>, json: bool) -> Result<()> {
    warn_unknown_highway(tags);
    let report = ClassificationReport::new(tags);
    debug!("Classified {:?} as {:?}", report.highway, report.classification);

    if json {
        println!("{}", to_json(&report)?);
    } else {
        println!("{}", report.display);
    }
    Ok(())
}

fn fork(
    first: &HashMap<String, String>,
    second: &HashMap<String, String>,
    json: bool,
) -> Result<()> {
    warn_unknown_highway(first);
    warn_unknown_highway(second);

    let first = ClassificationReport::new(first);
    let second = ClassificationReport::new(second);
    let is_fork = can_be_seen_as_fork(first.classification, second.classification);
    debug!(
        "Priorities {} and {} -> fork: {is_fork}",
        first.classification.priority(),
        second.classification.priority()
    );

    if json {
        let report = ForkReport {
            first,
            second,
            can_be_seen_as_fork: is_fork,
        };
        println!("{}", to_json(&report)?);
    } else {
        println!("{}", first.display);
        println!("{}", second.display);
        println!("{}", if is_fork { "fork" } else { "no fork" });
    }
    Ok(())
}

fn table(json: bool) -> Result<()> {
    if json {
        let entries: Vec<TableEntry> = priority_table()
            .iter()
            .map(|&(highway, priority)| TableEntry { highway, priority })
            .collect();
        println!("{}", to_json(&entries)?);
    } else {
        for (highway, priority) in priority_table() {
            println!("{highway:<16}{priority}");
        }
    }
    Ok(())
}

/// Warn about highway values that fall back to the default classification
fn warn_unknown_highway(tags: &HashMap<String, String>) {
    match tags.tag(HIGHWAY_KEY) {
        None => warn!("No highway tag, using fallback classification"),
        Some(value) => {
            if let Some(suggestion) = suggest_highway_type(value) {
                warn!("Unknown highway type '{value}', did you mean '{suggestion}'?");
            } else if !is_known_highway_type(value) {
                warn!("Unknown highway type '{value}', using fallback classification");
            }
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| Error::Serialization(e.to_string()))
}
