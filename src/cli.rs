//! CLI argument parsing for lattice.

use clap::{Parser, Subcommand};
use lattice::Direction;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "lat",
    about = "Batch graph queries over a filesystem-backed task tracker",
    version = env!("GIT_DESCRIBE"),
    after_help = "Logs are written to: ~/.local/share/lattice/logs/lattice.log"
)]
pub struct Cli {
    /// Edge-set storage root (default: $LATTICE_EDGE_DIR)
    #[arg(long, global = true)]
    pub edge_dir: Option<PathBuf>,

    /// Node-attribute storage root (default: $LATTICE_NODE_DIR)
    #[arg(long, global = true)]
    pub node_dir: Option<PathBuf>,

    /// Bucket storage root (default: $LATTICE_BUCKET_DIR)
    #[arg(long, global = true)]
    pub bucket_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the member ids of a bucket
    ListBucketMembers {
        /// Bucket name
        bucket: String,
    },

    /// Echo each input id followed by its not-yet-printed neighbors
    Adjacent {
        /// Edge set to consult
        edge_set: String,

        /// Direction to follow (outgoing or incoming)
        direction: Direction,
    },

    /// Emit every node reachable from the input ids, each exactly once
    Reachable {
        /// Edge set to consult
        edge_set: String,

        /// Direction to follow (outgoing or incoming)
        direction: Direction,
    },

    /// Emit id and depth pairs for every path from each input id
    Expand {
        /// Edge set to consult
        edge_set: String,

        /// Direction to follow (outgoing or incoming)
        direction: Direction,
    },

    /// Print the set union of two id-list files
    SetUnion {
        /// First id-list file
        left: PathBuf,

        /// Second id-list file
        right: PathBuf,
    },

    /// Pass through input ids whose state matches one of the given names
    FilterByState {
        /// State names to keep
        #[arg(required = true)]
        states: Vec<String>,
    },

    /// Pass through input ids with no incoming dependency edge
    IsRoot,

    /// Pass through input ids with no outgoing dependency edge
    IsLeaf,

    /// Pass through input ids with both incoming and outgoing dependency edges
    IsProject,

    /// Pass through input ids with no incoming context edge
    IsUnassigned,

    /// Pass through input ids with an outgoing context edge
    IsContext,

    /// Render the input node stream as a Graphviz graph
    RenderGraph,
}
