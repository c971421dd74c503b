use clap::{Parser, Subcommand};
use std::path::PathBuf;
use crate::config::OutputFormat;

#[derive(Parser)]
#[command(name = "arbor", version, about = "Minimum spanning trees by merging partial trees")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Log merge decisions (overridden by `ARBOR_LOG`)
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// Read settings from FILE instead of ./arbor.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the minimum spanning tree of a graph file
    Run {
        #[arg(value_name = "GRAPH")]
        graph: PathBuf,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Compress parent chains during membership walks
        #[arg(long)]
        path_compression: bool,
        /// Cross-check the result against a reference Kruskal
        #[arg(long)]
        verify: bool,
    },
    /// Compute the MST and report whether it is a valid minimum tree
    Verify {
        #[arg(value_name = "GRAPH")]
        graph: PathBuf,
    },
    /// Show the initial partial tree list
    Trees {
        #[arg(value_name = "GRAPH")]
        graph: PathBuf,
    },
}

/// Arguments for the Run command (used by handlers)
#[derive(Debug, Clone)]
pub struct RunArgs {
    pub graph: PathBuf,
    pub format: Option<OutputFormat>,
    pub path_compression: bool,
    pub verify: bool,
}
