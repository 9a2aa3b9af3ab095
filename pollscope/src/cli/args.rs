//! CLI argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pollscope",
    about = "Trace future polls in a running async program via a host debugger",
    after_help = "\
EXAMPLES:
    pollscope check --target ./my-app        Verify the target is traceable
    pollscope inspect                        Show the instrumentation plan
    pollscope graph async_deps.json          Render the dependency graph"
)]
pub struct Args {
    /// Future map artifact produced by the symbol discovery step
    #[arg(long, value_name = "FILE", default_value = "future_map.json", global = true)]
    pub map: PathBuf,

    /// Runtime plugin supplying scheduler-internal instrumentation
    #[arg(long, value_name = "NAME", default_value = "tokio", global = true)]
    pub plugin: String,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Verify that a debugger can attach and symbols will resolve
    Check {
        /// Path to the target executable
        #[arg(short, long)]
        target: String,
    },
    /// Summarize the breakpoints a session would register
    Inspect,
    /// Convert a dependency document to Graphviz DOT
    Graph {
        /// Dependency document (JSON with a dependency_tree mapping)
        input: PathBuf,

        /// Output path (defaults to the input with a .dot extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
