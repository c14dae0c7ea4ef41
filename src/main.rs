//! lattice CLI - composable batch queries over a filesystem task graph.

use clap::Parser;
use clap::error::ErrorKind;
use colored::*;
use eyre::{Context, Result};
use lattice::{
    CLUSTER_BUCKETS, CONTEXTS, Classification, DEPENDENCIES, EdgeSet, GraphRenderer, NodeStore,
    Roots, bucket_members, expand, reachable, read_ids, union,
};
use log::info;
use std::collections::BTreeSet;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

mod cli;

use cli::{Cli, Command};

fn setup_logging() -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lattice")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("lattice.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

/// Stream stdin ids through one classification predicate.
fn classify_filter(roots: &Roots, classification: Classification) -> Result<()> {
    let edges = EdgeSet::load(roots.edge_dir()?, classification.edge_set())?;
    let stdin = io::stdin().lock();
    let mut out = io::stdout().lock();

    for id in read_ids(stdin) {
        let id = id.context("Failed to read node ids from stdin")?;
        if classification.matches(&id, &edges) {
            writeln!(out, "{id}")?;
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let roots = Roots::resolve(cli.edge_dir, cli.node_dir, cli.bucket_dir);

    match cli.command {
        Command::ListBucketMembers { bucket } => {
            let members = bucket_members(roots.bucket_dir()?, &bucket)?;
            let mut out = io::stdout().lock();
            for id in members {
                writeln!(out, "{id}")?;
            }
        }

        Command::Adjacent { edge_set, direction } => {
            let edges = EdgeSet::load(roots.edge_dir()?, &edge_set)?;
            let stdin = io::stdin().lock();
            let mut out = io::stdout().lock();

            // Input ids are always echoed; neighbors are deduped batch-wide
            let mut seen: BTreeSet<String> = BTreeSet::new();
            for id in read_ids(stdin) {
                let id = id.context("Failed to read node ids from stdin")?;
                writeln!(out, "{id}")?;
                for adjacent in edges.neighbors(&id, direction) {
                    if seen.insert(adjacent.to_string()) {
                        writeln!(out, "{adjacent}")?;
                    }
                }
            }
        }

        Command::Reachable { edge_set, direction } => {
            let edges = EdgeSet::load(roots.edge_dir()?, &edge_set)?;
            let stdin = io::stdin().lock();
            let mut out = io::stdout().lock();

            let mut seen: BTreeSet<String> = BTreeSet::new();
            for id in read_ids(stdin) {
                let id = id.context("Failed to read node ids from stdin")?;
                for node in reachable(&id, &edges, direction, &mut seen)? {
                    writeln!(out, "{node}")?;
                }
            }
        }

        Command::Expand { edge_set, direction } => {
            let edges = EdgeSet::load(roots.edge_dir()?, &edge_set)?;
            let stdin = io::stdin().lock();
            let mut out = io::stdout().lock();

            for id in read_ids(stdin) {
                let id = id.context("Failed to read node ids from stdin")?;
                for (node, depth) in expand(&id, &edges, direction)? {
                    writeln!(out, "{node} {depth}")?;
                }
            }
        }

        Command::SetUnion { left, right } => {
            let ids = union(&left, &right)?;
            let mut out = io::stdout().lock();
            for id in ids {
                writeln!(out, "{id}")?;
            }
        }

        Command::FilterByState { states } => {
            let mut store = NodeStore::new(roots.node_dir()?);
            let keep: BTreeSet<String> = states.into_iter().collect();
            let stdin = io::stdin().lock();
            let mut out = io::stdout().lock();

            for id in read_ids(stdin) {
                let id = id.context("Failed to read node ids from stdin")?;
                if keep.contains(store.state_name(&id)) {
                    writeln!(out, "{id}")?;
                }
            }
        }

        Command::IsRoot => classify_filter(&roots, Classification::Root)?,
        Command::IsLeaf => classify_filter(&roots, Classification::Leaf)?,
        Command::IsProject => classify_filter(&roots, Classification::Project)?,
        Command::IsUnassigned => classify_filter(&roots, Classification::Unassigned)?,
        Command::IsContext => classify_filter(&roots, Classification::Context)?,

        Command::RenderGraph => {
            let edge_dir = roots.edge_dir()?;
            let dependencies = EdgeSet::load(edge_dir, DEPENDENCIES)?;
            let contexts = EdgeSet::load(edge_dir, CONTEXTS)?;

            let bucket_dir = roots.bucket_dir()?;
            let buckets = CLUSTER_BUCKETS
                .iter()
                .map(|name| Ok((name.to_string(), bucket_members(bucket_dir, name)?)))
                .collect::<Result<Vec<_>>>()?;

            let mut store = NodeStore::new(roots.node_dir()?);
            let mut renderer = GraphRenderer::new(&mut store, dependencies, contexts, buckets);

            let stdin = io::stdin().lock();
            let ids = read_ids(stdin)
                .collect::<io::Result<Vec<String>>>()
                .context("Failed to read node ids from stdin")?;

            let mut out = io::stdout().lock();
            renderer.render(&mut out, ids).context("Failed to render graph")?;
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    // Unrecognized commands and bad arguments exit 1, not clap's default 2
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            std::process::exit(code);
        }
    };
    info!("Command: {:?}", std::env::args().collect::<Vec<_>>());

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
