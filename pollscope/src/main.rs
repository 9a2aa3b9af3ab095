//! # pollscope - Main Entry Point
//!
//! Offline commands around the tracing engine:
//! - **check**: attach-readiness preflight for a target binary
//! - **inspect**: instrumentation plan from the future map and plugin
//! - **graph**: dependency-tree to Graphviz DOT conversion
//!
//! The tracing engine itself runs embedded in a debugger host; see the
//! crate-level docs for the embedding contract.

use anyhow::Result;
use clap::Parser;

use pollscope::cli::{Args, Command};
use pollscope::graph;
use pollscope::plugins;
use pollscope::preflight::{count_instrumentable_symbols, run_preflight_checks};
use pollscope::symbol_map::SymbolMap;

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;
const EXIT_NOPERM: i32 = 77;

fn main() {
    env_logger::init();
    std::process::exit(match run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            exit_code_for(&e)
        }
    });
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    if err.to_string().to_lowercase().contains("permission denied") {
        EXIT_NOPERM
    } else {
        EXIT_ERROR
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    match &args.command {
        Command::Check { target } => check(&args, target),
        Command::Inspect => inspect(&args),
        Command::Graph { input, output } => {
            let written = graph::convert_file(input, output.as_deref())?;
            if !args.quiet {
                println!("DOT file generated: {}", written.display());
            }
            Ok(())
        }
    }
}

fn check(args: &Args, target: &str) -> Result<()> {
    run_preflight_checks(target, args.quiet)?;
    let map = SymbolMap::load(&args.map)?;
    let present = count_instrumentable_symbols(target, &map)?;

    if !args.quiet {
        println!("pollscope v{}", env!("CARGO_PKG_VERSION"));
        println!("target: {target}");
        println!("instrumentable futures: {present} of {}", map.len());
    }
    Ok(())
}

fn inspect(args: &Args) -> Result<()> {
    let map = SymbolMap::load(&args.map)?;
    let plugin = plugins::resolve(&args.plugin);
    let extra = plugin.extra_symbols();

    println!("future map: {} ({} instrumentable futures)", args.map.display(), map.len());
    println!("plugin: {}", plugin.name());
    for symbol in &extra {
        println!("  runtime event: {symbol}");
    }
    if extra.is_empty() {
        println!("  (no runtime events)");
    }
    Ok(())
}
