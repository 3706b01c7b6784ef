//! ym-search: CLI for ranking and explaining catalog search candidates.
//!
//! Candidate sets come from JSON files (the catalog lookup service exports
//! the same shape), so ranking behavior can be inspected offline.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use yaadmart_catalog::{PersonalizationContext, SearchResultCandidate, SortMode};
use yaadmart_ranking::{explain, normalize, rank, tokenize};

#[derive(Parser)]
#[command(name = "ym-search")]
#[command(about = "Rank and explain catalog search candidates")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct QueryArgs {
    /// Path to a JSON array of search candidates
    #[arg(long)]
    input: PathBuf,
    /// Free-text search query
    #[arg(long)]
    query: String,
    /// Preferred category ids (repeatable)
    #[arg(long = "preferred-category")]
    preferred_categories: Vec<String>,
    /// Dietary preference tags (repeatable)
    #[arg(long = "dietary")]
    dietary_preferences: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank candidates for a query
    Rank {
        #[command(flatten)]
        args: QueryArgs,
        /// Sort mode: relevance, price_asc or price_desc
        #[arg(long, default_value = "relevance")]
        sort: String,
        /// Keep only the top N results
        #[arg(long)]
        limit: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show per-candidate match facts and scores
    Explain {
        #[command(flatten)]
        args: QueryArgs,
    },
    /// Print the normalized form of free text
    Normalize {
        /// Text to normalize
        text: String,
    },
    /// Print the search tokens of free text
    Tokenize {
        /// Text to tokenize
        text: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Rank {
            args,
            sort,
            limit,
            json,
        } => {
            let sort: SortMode = sort
                .parse()
                .with_context(|| format!("invalid --sort value: {sort}"))?;
            let candidates = load_candidates(&args.input)?;
            let personalization = args.personalization();
            debug!(count = candidates.len(), %sort, "ranking candidates");

            match rank(candidates, &args.query, personalization.as_ref(), sort) {
                Ok(mut ranked) => {
                    if let Some(limit) = limit {
                        ranked.truncate(limit);
                    }
                    if json {
                        println!("{}", serde_json::to_string_pretty(&ranked)?);
                    } else {
                        print_ranked(&ranked);
                    }
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Explain { args } => {
            let candidates = load_candidates(&args.input)?;
            let personalization = args.personalization();
            debug!(count = candidates.len(), "explaining candidates");

            let explained = explain(&candidates, &args.query, personalization.as_ref());
            println!("{}", serde_json::to_string_pretty(&explained)?);
        }

        Commands::Normalize { text } => {
            println!("{}", normalize(&text));
        }

        Commands::Tokenize { text } => {
            for token in tokenize(&text) {
                println!("{token}");
            }
        }
    }

    Ok(())
}

impl QueryArgs {
    /// Builds the personalization context, or None when no signal was given.
    fn personalization(&self) -> Option<PersonalizationContext> {
        if self.preferred_categories.is_empty() && self.dietary_preferences.is_empty() {
            return None;
        }
        Some(PersonalizationContext {
            preferred_categories: self.preferred_categories.iter().cloned().collect::<HashSet<_>>(),
            dietary_preferences: self.dietary_preferences.iter().cloned().collect::<HashSet<_>>(),
        })
    }
}

fn load_candidates(path: &Path) -> anyhow::Result<Vec<SearchResultCandidate>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("reading candidates from {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("parsing candidates in {}", path.display()))
}

fn print_ranked(ranked: &[SearchResultCandidate]) {
    for (i, c) in ranked.iter().enumerate() {
        let stock = if c.in_stock { "in stock" } else { "out of stock" };
        println!(
            "{:>3}. {} - J${:.2} ({}, {})",
            i + 1,
            c.product.title,
            c.price_jmd_cents as f64 / 100.0,
            c.store_id,
            stock,
        );
    }
}
