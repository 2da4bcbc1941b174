use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use super::logging::{LogTarget, init_logging};
use crate::catalog::{resolve_catalog, with_initial_file};
use crate::models::format_transcript;
use crate::store::{ConversationStore, StoreCache, search};
use crate::tui::run_interactive;
use crate::utils::format_path_with_tilde;

#[derive(Parser)]
#[command(name = "transcript-viewer")]
#[command(version = "0.1.0")]
#[command(about = "Browse and search chat transcripts stored as JSONL", long_about = None)]
pub struct Cli {
    /// Transcript file to open first in the viewer
    pub path: Option<PathBuf>,

    /// JSON file listing the selectable transcripts
    #[arg(long, env = "TRANSCRIPT_VIEWER_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Log filter (e.g. "info", "transcript_viewer=debug")
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,

    /// Write logs to this file (the interactive viewer logs nowhere otherwise)
    #[arg(long, env = "TRANSCRIPT_VIEWER_LOG_FILE", global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show statistics about a transcript file
    Stats {
        path: PathBuf,
        /// Also count conversations whose assistant turns contain this text
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Print one conversation from a transcript file
    Show {
        path: PathBuf,
        /// 1-based position in the (filtered) sequence
        #[arg(short, long, default_value_t = 1)]
        index: usize,
        /// Only consider conversations whose assistant turns contain this text
        #[arg(short, long)]
        query: Option<String>,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(command) => {
            let target = match &cli.log_file {
                Some(path) => LogTarget::File(path),
                None => LogTarget::Stderr,
            };
            init_logging(&cli.log_level, target)?;

            let mut out = io::stdout().lock();
            match command {
                Commands::Stats { path, query } => show_stats(&mut out, path, query.as_deref()),
                Commands::Show { path, index, query } => {
                    show_conversation(&mut out, path, *index, query.as_deref())
                }
            }
        }
        None => {
            let target = match &cli.log_file {
                Some(path) => LogTarget::File(path),
                None => LogTarget::Disabled,
            };
            init_logging(&cli.log_level, target)?;
            launch_viewer(cli.path.as_deref(), cli.catalog.as_deref())
        }
    }
}

fn launch_viewer(initial: Option<&Path>, catalog_path: Option<&Path>) -> Result<()> {
    let mut catalog = resolve_catalog(catalog_path)?;
    let initial_idx = match initial {
        Some(path) => with_initial_file(&mut catalog, path),
        None => 0,
    };
    run_interactive(catalog, initial_idx, StoreCache::default())
}

fn load_store(path: &Path) -> Result<ConversationStore> {
    ConversationStore::load(path).with_context(|| format!("Failed to load {}", path.display()))
}

fn show_stats(out: &mut impl Write, path: &Path, query: Option<&str>) -> Result<()> {
    let store = load_store(path)?;

    let mut role_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for message in store.iter().flat_map(|c| &c.messages) {
        *role_counts.entry(message.role.as_str()).or_default() += 1;
    }
    let message_count: usize = role_counts.values().sum();
    let prefilled: usize = store.iter().map(|c| c.prefilled_count()).sum();

    writeln!(out, "Transcript Statistics")?;
    writeln!(out, "=====================")?;
    writeln!(out, "File: {}", format_path_with_tilde(path))?;
    writeln!(out, "Record shape: {}", store.shape().as_str())?;
    writeln!(out, "Conversations: {}", store.len())?;
    writeln!(out, "Messages: {}", message_count)?;
    for (role, count) in &role_counts {
        writeln!(out, "  {}: {}", role, count)?;
    }
    writeln!(out, "Prefilled assistant turns: {}", prefilled)?;

    if let Some(query) = query {
        writeln!(out, "Matching \"{}\": {}", query, search(&store, query).len())?;
    }

    Ok(())
}

fn show_conversation(out: &mut impl Write, path: &Path, index: usize, query: Option<&str>) -> Result<()> {
    let store = load_store(path)?;
    let active = search(&store, query.unwrap_or(""));

    if active.is_empty() {
        match query {
            Some(query) => bail!("No conversations match \"{}\"", query),
            None => bail!("No conversations in {}", path.display()),
        }
    }
    if index == 0 || index > active.len() {
        bail!("Conversation {} out of range (1-{})", index, active.len());
    }

    writeln!(out, "Viewing {} of {}", index, active.len())?;
    writeln!(out)?;
    writeln!(out, "{}", format_transcript(active[index - 1]))?;
    Ok(())
}
