//! cirrus - inspect a cloud-storage node snapshot from the command line.
//!
//! Usage:
//!   cirrus ls <SNAPSHOT>               List what a view would show
//!   cirrus stats <SNAPSHOT>            Summarize the snapshot
//!   cirrus copy <SNAPSHOT> <DEST> ...  Preview the clones a copy creates
//!   cirrus --help                      Show help

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use cirrus_core::{DisplayedNode, Node, NodeId, NodeStore, StoreStats, Tab, ViewContext, project};
use cirrus_ops::plan_copy;

#[derive(Parser)]
#[command(
    name = "cirrus",
    version,
    about = "Inspect a cloud-storage node snapshot",
    long_about = "cirrus reads a JSON snapshot of a user's node tree (as returned by \
                  the `update` route) and shows what the client would display.\n\n\
                  Set RUST_LOG to see the library's diagnostics."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the nodes a view would show
    Ls {
        /// Snapshot file
        snapshot: PathBuf,

        /// Folder being browsed (defaults to the top level)
        #[arg(short, long)]
        location: Option<String>,

        /// Active tab
        #[arg(short, long, default_value = "home")]
        tab: Tab,

        /// Show nodes whose name contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Aggregate folder sizes
        #[arg(long)]
        sizes: bool,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Show snapshot statistics
    Stats {
        /// Snapshot file
        snapshot: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Preview the nodes a copy would create
    Copy {
        /// Snapshot file
        snapshot: PathBuf,

        /// Destination folder id
        destination: String,

        /// Ids of the nodes to copy
        #[arg(required = true)]
        nodes: Vec<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Accepted snapshot shapes: a bare node array or an `update` result.
#[derive(Deserialize)]
#[serde(untagged)]
enum Snapshot {
    Nodes(Vec<Node>),
    Update { nodes: Vec<Node> },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Ls {
            snapshot,
            location,
            tab,
            search,
            sizes,
            format,
        } => {
            let store = load_snapshot(&snapshot)?;
            let mut ctx = ViewContext::new().with_tab(tab);
            ctx.location = location.map(NodeId::from);
            if let Some(text) = search {
                ctx.search.activate(search_nodes(&store, &text));
            }
            run_ls(&store, &ctx, sizes, format)?;
        }
        Command::Stats { snapshot, format } => {
            let store = load_snapshot(&snapshot)?;
            run_stats(&store, format)?;
        }
        Command::Copy {
            snapshot,
            destination,
            nodes,
            format,
        } => {
            let store = load_snapshot(&snapshot)?;
            let nodes: Vec<NodeId> = nodes.into_iter().map(NodeId::from).collect();
            run_copy(&store, &NodeId::from(destination), &nodes, format)?;
        }
    }

    Ok(())
}

/// Read a snapshot file into a store.
fn load_snapshot(path: &Path) -> Result<NodeStore> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let snapshot: Snapshot = serde_json::from_str(&text)
        .with_context(|| format!("Invalid snapshot {}", path.display()))?;

    let nodes = match snapshot {
        Snapshot::Nodes(nodes) | Snapshot::Update { nodes } => nodes,
    };
    tracing::debug!(path = %path.display(), nodes = nodes.len(), "snapshot loaded");
    Ok(NodeStore::from_nodes(nodes))
}

/// Ids of nodes whose name contains `text`, ignoring case.
fn search_nodes(store: &NodeStore, text: &str) -> Vec<NodeId> {
    let needle = text.to_lowercase();
    store
        .iter()
        .filter(|n| n.name.to_lowercase().contains(&needle))
        .map(|n| n.id.clone())
        .collect()
}

/// Print the projected view.
fn run_ls(store: &NodeStore, ctx: &ViewContext, sizes: bool, format: OutputFormat) -> Result<()> {
    let view = project(store, ctx, sizes);

    match format {
        OutputFormat::Text => {
            if view.is_empty() {
                println!(" Nothing to show.");
                return Ok(());
            }
            for shown in view.iter() {
                println!("{}", format_entry(shown));
            }
            println!();
            println!(" {} folders, {} files", view.dirs.len(), view.files.len());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
    }

    Ok(())
}

/// Print store statistics.
fn run_stats(store: &NodeStore, format: OutputFormat) -> Result<()> {
    let stats = StoreStats::collect(store);

    match format {
        OutputFormat::Text => {
            println!("{}", "─".repeat(60));
            println!(" {} nodes - {}", store.len(), format_size(stats.total_size));
            println!(
                " {} files, {} folders, {} marked",
                stats.total_files, stats.total_dirs, stats.marked
            );
            println!("{}", "─".repeat(60));

            if let Some((id, size)) = &stats.largest_file {
                println!(" Largest file: {} ({})", display_name(store, id), format_size(*size));
            }
            if let Some((id, modified)) = &stats.newest {
                println!(
                    " Newest: {} ({})",
                    display_name(store, id),
                    modified.format("%Y-%m-%d %H:%M")
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }

    Ok(())
}

/// Print the clones a copy would create.
fn run_copy(
    store: &NodeStore,
    destination: &NodeId,
    nodes: &[NodeId],
    format: OutputFormat,
) -> Result<()> {
    let clones = plan_copy(store, nodes, destination, false).context("Copy not possible")?;

    match format {
        OutputFormat::Text => {
            for (i, clone) in clones.iter().enumerate() {
                // Top-level clones come first; the rest are their contents.
                let indent = if i < nodes.len() { "" } else { "  " };
                println!(
                    "{}{}{}  {}  (in {})",
                    indent,
                    clone.name,
                    if clone.is_dir() { "/" } else { "" },
                    clone.id,
                    display_name(store, &clone.parent)
                );
            }
            println!();
            println!(" {} node(s) would be created", clones.len());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&clones)?);
        }
    }

    Ok(())
}

/// One line of `ls` text output.
fn format_entry(shown: &DisplayedNode) -> String {
    let node = &shown.node;
    let flags = format!(
        "{}{}{}",
        if node.marked { "*" } else { " " },
        if shown.selected { "s" } else { " " },
        if shown.cut { "x" } else { " " },
    );
    let name = if node.is_dir() {
        format!("{}/", node.name)
    } else {
        node.name.to_string()
    };

    format!(
        " {} {:<40} {:>10} {}",
        flags,
        truncate(&name, 40),
        format_size(node.size),
        shown.extension.as_deref().unwrap_or("")
    )
}

/// Name of a node for display, falling back to its id.
fn display_name(store: &NodeStore, id: &NodeId) -> String {
    store
        .get(id)
        .map(|n| n.name.to_string())
        .unwrap_or_else(|| id.to_string())
}

/// Format size in human-readable form.
fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}

/// Truncate a string to max length.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 1).collect();
        format!("{kept}…")
    }
}
